use std::panic;

use paperden_core::{render_markdown, split_front_matter};

const CASES: usize = 200;
const MAX_LEN: usize = 512;
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 \
\n\t#>*-_`[]()!.:\"&<'/\\=";

#[test]
fn renderer_never_panics_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x5ed3_91a7_04c2_b6e9);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let result = panic::catch_unwind(|| render_markdown(&source));
        if result.is_err() {
            return Err(format!("render panicked for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

#[test]
fn injected_markup_never_survives_rendering() {
    let mut rng = Lcg::new(0x2b44_8c01_77de_a913);
    for _ in 0..CASES {
        let prefix_len = rng.gen_range(0, 64);
        let prefix = random_string(&mut rng, prefix_len);
        let suffix_len = rng.gen_range(0, 64);
        let suffix = random_string(&mut rng, suffix_len);
        let source = format!("{}<script>alert(1)</script>{}", prefix, suffix);
        let html = render_markdown(&source);
        assert!(
            !html.contains("<script"),
            "raw script tag leaked for source {:?}",
            source
        );
    }
}

#[test]
fn rendering_twice_keeps_entities_escaped() {
    let first = render_markdown("evil <script>alert(1)</script> text");
    assert!(first.contains("&lt;script&gt;"));
    let second = render_markdown(&first);
    assert!(!second.contains("<script"));
    // The entity itself stays inert: its ampersand re-escapes.
    assert!(second.contains("&amp;lt;script&amp;gt;"));
}

#[test]
fn unmarked_documents_split_into_empty_meta_and_full_body() {
    let mut rng = Lcg::new(0x91d4_2f8e_c1a3_044f);
    for _ in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        if source.starts_with("---") {
            continue;
        }
        let split = split_front_matter(&source);
        assert!(split.meta.is_empty());
        assert_eq!(split.body, source);
    }
}

fn random_string(rng: &mut Lcg, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0, CHARSET.len());
        let byte = CHARSET.get(idx).copied().unwrap_or(b' ');
        out.push(byte as char);
    }
    out
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = max - min;
        let value = (self.next() >> 1) as usize;
        min + (value % span)
    }
}

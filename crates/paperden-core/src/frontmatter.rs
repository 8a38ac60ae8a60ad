use std::collections::HashMap;

/// A paper split into its metadata header and body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrontMatter {
    pub meta: HashMap<String, String>,
    pub body: String,
}

const MARKER: &str = "---";

/// Splits a leading `---`-delimited `key: value` header from a document.
///
/// The header must open at offset zero and close at the next line made
/// solely of three-or-more hyphens. Lines between the markers that do not
/// contain a colon are silently ignored. Without an opening or closing
/// marker the whole input is body and the mapping stays empty.
pub fn split_front_matter(source: &str) -> FrontMatter {
    if !source.starts_with(MARKER) {
        return FrontMatter {
            meta: HashMap::new(),
            body: source.to_string(),
        };
    }

    let mut meta = HashMap::new();
    let mut cursor = 0;
    let mut seen_open = false;
    for line in source.split_inclusive('\n') {
        let text = line.trim_end_matches('\n').trim_end_matches('\r');
        if !seen_open {
            // The opening marker line itself carries no metadata.
            seen_open = true;
        } else if is_marker_line(text) {
            return FrontMatter {
                meta,
                body: source[cursor + line.len()..].to_string(),
            };
        } else if let Some((key, value)) = parse_meta_line(text) {
            meta.insert(key, value);
        }
        cursor += line.len();
    }

    FrontMatter {
        meta: HashMap::new(),
        body: source.to_string(),
    }
}

fn is_marker_line(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|byte| byte == b'-')
}

fn parse_meta_line(line: &str) -> Option<(String, String)> {
    let colon = line.find(':')?;
    if colon == 0 {
        return None;
    }
    let key = line[..colon].trim().to_lowercase();
    let value = line[colon + 1..].trim().to_string();
    Some((key, value))
}

#[cfg(test)]
mod header_tests {
    use super::split_front_matter;

    #[test]
    fn keys_are_lowercased_and_values_trimmed() {
        let split = split_front_matter("---\nTitle:   Shadows \n---\nbody");
        assert_eq!(split.meta.get("title").map(String::as_str), Some("Shadows"));
        assert_eq!(split.body, "body");
    }

    #[test]
    fn unclosed_header_is_all_body() {
        let split = split_front_matter("---\ntitle: X\nno closing line");
        assert!(split.meta.is_empty());
        assert_eq!(split.body, "---\ntitle: X\nno closing line");
    }

    #[test]
    fn colonless_lines_are_skipped() {
        let split = split_front_matter("---\njust words\ndate: 2024\n---\n");
        assert_eq!(split.meta.len(), 1);
        assert_eq!(split.meta.get("date").map(String::as_str), Some("2024"));
    }
}

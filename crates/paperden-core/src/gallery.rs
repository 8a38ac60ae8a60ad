use crate::emit::HtmlWriter;
use crate::error::SiteError;
use crate::inline::escape_html;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Lists the image files in a gallery directory, sorted by name.
pub fn collect_images(dir: &Path) -> Result<Vec<String>, SiteError> {
    let read_err = |source| SiteError::Io {
        path: dir.display().to_string(),
        source,
    };
    let mut images = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            continue;
        };
        if IMAGE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext))
            && let Some(name) = path.file_name().and_then(|name| name.to_str())
        {
            images.push(name.to_string());
        }
    }
    images.sort();
    Ok(images)
}

/// Picks up to `count` images at random for one page render.
pub fn sample_images(images: &[String], count: usize) -> Vec<&str> {
    sample_images_with(images, count, &mut rand::thread_rng())
}

/// Deterministic variant for callers that bring their own RNG.
pub fn sample_images_with<'a, R: Rng>(
    images: &'a [String],
    count: usize,
    rng: &mut R,
) -> Vec<&'a str> {
    let mut shuffled: Vec<&str> = images.iter().map(String::as_str).collect();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Renders the image grid for a gallery selection.
pub fn render_gallery(dir: &str, images: &[&str]) -> String {
    if images.is_empty() {
        return gallery_empty().to_string();
    }
    let mut writer = HtmlWriter::new();
    for image in images {
        writer.line(&format!(
            "<img src=\"{}/{}\" alt=\"Loading failed :(\" loading=\"lazy\">",
            escape_html(dir),
            escape_html(image)
        ));
    }
    writer.finish()
}

/// Empty-state line for a gallery with nothing to show.
pub fn gallery_empty() -> &'static str {
    "<p style=\"opacity: 0.6; grid-column: 1 / -1;\">No bunnies in the burrow yet... 🥺</p>"
}

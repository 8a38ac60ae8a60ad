use crate::emit::HtmlWriter;
use crate::error::SiteError;
use crate::inline::escape_html;
use serde::Deserialize;
use std::cmp::Ordering;

/// One released version in the site changelog.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Release {
    pub number: String,
    pub description: String,
}

/// The static changelog backing the updates page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateFeed {
    pub versions: Vec<Release>,
}

pub fn parse_feed(json: &str) -> Result<UpdateFeed, SiteError> {
    Ok(serde_json::from_str(json)?)
}

/// Renders the update boxes, newest version first. Versions order by the
/// leading decimal prefix of their number (so "1.10" sorts below "1.2");
/// unparseable numbers compare equal and keep their relative order.
pub fn render_updates(feed: &UpdateFeed) -> String {
    if feed.versions.is_empty() {
        return updates_empty().to_string();
    }

    let mut versions: Vec<&Release> = feed.versions.iter().collect();
    versions.sort_by(|a, b| {
        version_key(&b.number)
            .partial_cmp(&version_key(&a.number))
            .unwrap_or(Ordering::Equal)
    });

    let mut writer = HtmlWriter::new();
    for release in versions {
        writer.line("<div class=\"update-box\">");
        writer.indent += 1;
        writer.line(&format!(
            "<h3 class=\"update-title\">v{}</h3>",
            escape_html(&release.number)
        ));
        writer.line(&format!(
            "<p class=\"update-desc\">{}</p>",
            escape_html(&release.description)
        ));
        writer.indent -= 1;
        writer.line("</div>");
    }
    writer.finish()
}

/// Empty-state line for a changelog with no entries yet.
pub fn updates_empty() -> &'static str {
    "<p class=\"update-desc\" style=\"opacity:0.6;\">No hoppenings yet... check back soon! 🥕</p>"
}

/// Fragment shown when the changelog cannot be loaded at all.
pub fn updates_fallback() -> &'static str {
    "<p class=\"update-desc\" style=\"opacity:0.6;\">Oopsie! Bunny updates are hiding... 🐇</p>"
}

/// The longest leading `[+-]?digits[.digits]` prefix as an f64, NaN when no
/// such prefix exists.
fn version_key(number: &str) -> f64 {
    let text = number.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    text[..end].parse().unwrap_or(f64::NAN)
}

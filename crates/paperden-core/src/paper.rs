use crate::config::SiteConfig;
use crate::emit::{render_markdown, render_markdown_sanitized};
use crate::frontmatter::split_front_matter;
use crate::inline::escape_html;

/// A rendered paper: the HTML fragment plus the composed document title.
#[derive(Clone, Debug, PartialEq)]
pub struct Paper {
    pub title: Option<String>,
    pub html: String,
}

/// Resolves which markdown document a page should load: an explicit request
/// wins, otherwise the page's own file name with its extension replaced.
pub fn doc_for_page(requested: Option<&str>, page_path: &str) -> String {
    if let Some(doc) = requested {
        return doc.to_string();
    }
    let name = page_path.rsplit('/').next().unwrap_or("");
    let name = if name.is_empty() { "index.html" } else { name };
    let stem = name
        .strip_suffix(".html")
        .or_else(|| name.strip_suffix(".htm"))
        .unwrap_or(name);
    format!("{}.md", stem)
}

/// Renders a full paper fragment: title heading, author/date annotation,
/// then the body. Meta keys other than `title`, `author` and `date` are
/// captured by the splitter but not rendered.
pub fn render_paper(source: &str, config: &SiteConfig) -> Paper {
    assemble(source, config, false)
}

pub fn render_paper_sanitized(source: &str, config: &SiteConfig) -> Paper {
    assemble(source, config, true)
}

fn assemble(source: &str, config: &SiteConfig, sanitized: bool) -> Paper {
    let split = split_front_matter(source);
    let mut parts: Vec<String> = Vec::new();

    let title = split
        .meta
        .get("title")
        .map(|title| format!("{} | {}", title, config.site_name));
    if let Some(heading) = split.meta.get("title") {
        parts.push(format!("<h1>{}</h1>", escape_html(heading)));
    }

    let author = split.meta.get("author");
    let date = split.meta.get("date");
    if author.is_some() || date.is_some() {
        let mut annotation = String::new();
        if let Some(author) = author {
            annotation.push_str("<strong>Author:</strong> ");
            annotation.push_str(&escape_html(author));
        }
        if let Some(date) = date {
            annotation.push_str("<br><strong>Date:</strong> ");
            annotation.push_str(&escape_html(date));
        }
        parts.push(format!(
            "<p style=\"opacity:0.8; margin-bottom:1rem;\">{}</p>",
            annotation
        ));
    }

    let body = if sanitized {
        render_markdown_sanitized(&split.body)
    } else {
        render_markdown(&split.body)
    };
    if !body.is_empty() {
        parts.push(body);
    }

    Paper {
        title,
        html: parts.join("\n"),
    }
}

/// The fragment shown in place of a paper that could not be loaded.
pub fn paper_fallback(reason: &str) -> String {
    format!(
        "<p style=\"color: #8b4513; font-weight: bold;\">Oops! Could not load this paper.<br><span style=\"font-size:0.8em; opacity:0.7\">({})</span></p>",
        escape_html(reason)
    )
}

/// Wraps a fragment in a minimal standalone HTML page.
pub fn standalone_page(title: &str, fragment: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        fragment
    )
}

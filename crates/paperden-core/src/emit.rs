use crate::ast::{Block, CodeBlock, List};
use crate::inline::{escape_html, inline_format};
use crate::parser::parse;
use ammonia::Builder;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Emits the HTML fragment for a parsed paper body.
pub fn emit_html(blocks: &[Block]) -> String {
    // Deterministic formatting: 2-space indentation and LF newlines.
    let mut writer = HtmlWriter::new();
    for block in blocks {
        emit_block(&mut writer, block);
    }
    writer.finish()
}

/// Emits HTML and strips anything outside the renderer's own vocabulary.
pub fn emit_html_sanitized(blocks: &[Block]) -> String {
    SANITIZER.clean(&emit_html(blocks)).to_string()
}

/// Parses and emits in one step.
pub fn render_markdown(source: &str) -> String {
    emit_html(&parse(source))
}

pub fn render_markdown_sanitized(source: &str) -> String {
    emit_html_sanitized(&parse(source))
}

static SANITIZER: Lazy<Builder<'static>> = Lazy::new(|| {
    let tags: HashSet<&'static str> = [
        "a",
        "blockquote",
        "code",
        "em",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "hr",
        "img",
        "li",
        "ol",
        "p",
        "pre",
        "strong",
        "ul",
    ]
    .iter()
    .copied()
    .collect();

    let mut generic_attributes: HashSet<&'static str> = HashSet::new();
    generic_attributes.insert("class");

    let mut tag_attributes = HashMap::new();
    // `rel` stays off the allow-list: ammonia's link_rel default rewrites it
    // to "noopener noreferrer" on every anchor.
    tag_attributes.insert("a", ["href", "target"].iter().copied().collect());
    tag_attributes.insert(
        "img",
        ["alt", "src", "loading"].iter().copied().collect(),
    );

    let mut builder = Builder::new();
    builder
        .tags(tags)
        .generic_attributes(generic_attributes)
        .tag_attributes(tag_attributes);
    builder
});

pub(crate) struct HtmlWriter {
    out: String,
    pub(crate) indent: usize,
}

impl HtmlWriter {
    pub(crate) fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    pub(crate) fn line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub(crate) fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

fn emit_block(writer: &mut HtmlWriter, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            writer.line(&format!(
                "<h{}>{}</h{}>",
                level,
                inline_format(text),
                level
            ));
        }
        Block::Paragraph { text } => {
            writer.line(&format!("<p>{}</p>", inline_format(text)));
        }
        Block::BlockQuote { text } => {
            writer.line(&format!(
                "<blockquote>{}</blockquote>",
                inline_format(text)
            ));
        }
        Block::ThematicBreak => writer.line("<hr />"),
        Block::List(List { ordered, items }) => {
            let tag = if *ordered { "ol" } else { "ul" };
            writer.line(&format!("<{}>", tag));
            writer.indent += 1;
            for item in items {
                writer.line(&format!("<li>{}</li>", inline_format(item.trim())));
            }
            writer.indent -= 1;
            writer.line(&format!("</{}>", tag));
        }
        Block::CodeBlock(CodeBlock { lang, text }) => {
            let class_attr = lang
                .as_deref()
                .map(|lang| format!(" class=\"lang-{}\"", escape_html(lang)))
                .unwrap_or_default();
            writer.line(&format!(
                "<pre><code{}>{}</code></pre>",
                class_attr,
                escape_html(text)
            ));
        }
    }
}

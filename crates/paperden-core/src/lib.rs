mod ast;
mod config;
mod emit;
mod error;
mod feed;
mod frontmatter;
mod gallery;
mod inline;
mod paper;
mod parser;

pub use ast::{Block, CodeBlock, List};
pub use config::SiteConfig;
pub use emit::{
    emit_html, emit_html_sanitized, render_markdown, render_markdown_sanitized,
};
pub use error::SiteError;
pub use feed::{
    Release, UpdateFeed, parse_feed, render_updates, updates_empty, updates_fallback,
};
pub use frontmatter::{FrontMatter, split_front_matter};
pub use gallery::{
    collect_images, gallery_empty, render_gallery, sample_images, sample_images_with,
};
pub use inline::{escape_html, inline_format};
pub use paper::{
    Paper, doc_for_page, paper_fallback, render_paper, render_paper_sanitized,
    standalone_page,
};
pub use parser::parse;

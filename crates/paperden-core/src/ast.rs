/// One block of rendered output, in document order.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Paragraph { text: String },
    Heading { level: u8, text: String },
    BlockQuote { text: String },
    List(List),
    CodeBlock(CodeBlock),
    ThematicBreak,
}

/// A run of adjacent list items of the same kind.
#[derive(Clone, Debug, PartialEq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<String>,
}

/// A fenced code region. `text` holds the raw buffered lines, newline-joined;
/// escaping happens at emission.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeBlock {
    pub lang: Option<String>,
    pub text: String,
}

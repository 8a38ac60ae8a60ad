use crate::ast::{Block, CodeBlock, List};

/// Parses a paper body into blocks. Front matter must already be split off.
///
/// The parser is total: every line matches at least the paragraph rule, so
/// malformed input degrades instead of failing.
pub fn parse(source: &str) -> Vec<Block> {
    Parser::new(source).parse_blocks()
}

struct Parser {
    lines: Vec<String>,
}

impl Parser {
    fn new(source: &str) -> Self {
        let lines = source
            .replace('\r', "")
            .split('\n')
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    // Rules are tried in priority order; the paragraph rule is the fallback
    // and always matches.
    fn parse_blocks(&self) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut i = 0;

        while i < self.lines.len() {
            if self.lines[i].trim().is_empty() {
                i += 1;
                continue;
            }

            if let Some((block, next)) = self.parse_code_block(i) {
                blocks.push(block);
                i = next;
                continue;
            }

            if let Some((block, next)) = self.parse_heading(i) {
                blocks.push(block);
                i = next;
                continue;
            }

            if let Some((block, next)) = self.parse_thematic_break(i) {
                blocks.push(block);
                i = next;
                continue;
            }

            if let Some((block, next)) = self.parse_block_quote(i) {
                blocks.push(block);
                i = next;
                continue;
            }

            if let Some((block, next)) = self.parse_list(i) {
                blocks.push(block);
                i = next;
                continue;
            }

            let (block, next) = self.parse_paragraph(i);
            blocks.push(block);
            i = next;
        }

        blocks
    }

    fn parse_code_block(&self, start: usize) -> Option<(Block, usize)> {
        let tag = fence_tag(&self.lines[start])?;
        let lang = if tag.is_empty() {
            None
        } else {
            Some(tag.to_string())
        };

        let mut buffer: Vec<&str> = Vec::new();
        let mut i = start + 1;
        while i < self.lines.len() {
            if fence_tag(&self.lines[i]).is_some() {
                i += 1;
                break;
            }
            buffer.push(&self.lines[i]);
            i += 1;
        }

        // An unterminated fence still flushes its buffer; dropping the tail
        // of a document would lose user content.
        Some((
            Block::CodeBlock(CodeBlock {
                lang,
                text: buffer.join("\n"),
            }),
            i,
        ))
    }

    fn parse_heading(&self, start: usize) -> Option<(Block, usize)> {
        let line = &self.lines[start];
        let hashes = line.bytes().take_while(|byte| *byte == b'#').count();
        if hashes == 0 || hashes > 6 {
            return None;
        }
        let rest = &line[hashes..];
        if !rest.starts_with(|c: char| c.is_whitespace()) {
            return None;
        }
        Some((
            Block::Heading {
                level: hashes as u8,
                text: rest.trim().to_string(),
            },
            start + 1,
        ))
    }

    fn parse_thematic_break(&self, start: usize) -> Option<(Block, usize)> {
        let trimmed = self.lines[start].trim_end();
        let is_run =
            |marker: char| trimmed.len() >= 3 && trimmed.chars().all(|c| c == marker);
        if is_run('-') || is_run('*') {
            Some((Block::ThematicBreak, start + 1))
        } else {
            None
        }
    }

    fn parse_block_quote(&self, start: usize) -> Option<(Block, usize)> {
        let rest = self.lines[start].strip_prefix('>')?;
        // `>` swallows at most one following whitespace character; the rest
        // of the line is the quote text, verbatim.
        let text = match rest.chars().next() {
            Some(c) if c.is_whitespace() => &rest[c.len_utf8()..],
            _ => rest,
        };
        Some((
            Block::BlockQuote {
                text: text.to_string(),
            },
            start + 1,
        ))
    }

    fn parse_list(&self, start: usize) -> Option<(Block, usize)> {
        let (ordered, first) = list_item_text(&self.lines[start])?;
        let mut items = vec![first.to_string()];
        let mut i = start + 1;
        while i < self.lines.len() {
            match list_item_text(&self.lines[i]) {
                Some((kind, text)) if kind == ordered => {
                    items.push(text.to_string());
                    i += 1;
                }
                // A blank line, a differing item kind, or any non-list line
                // flushes the run.
                _ => break,
            }
        }
        Some((Block::List(List { ordered, items }), i))
    }

    fn parse_paragraph(&self, start: usize) -> (Block, usize) {
        let mut text = self.lines[start].clone();
        let mut i = start + 1;
        while i < self.lines.len() {
            let line = &self.lines[i];
            if line.trim().is_empty() || starts_block(line) {
                break;
            }
            text.push(' ');
            text.push_str(line.trim());
            i += 1;
        }
        (
            Block::Paragraph {
                text: text.trim().to_string(),
            },
            i,
        )
    }
}

/// A fence line is three backticks plus an optional language tag (the
/// leading non-whitespace run; anything after it is ignored).
fn fence_tag(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("```")?;
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn list_item_text(line: &str) -> Option<(bool, &str)> {
    let rest = line.trim_start();
    if let Some(after) = rest.strip_prefix(['-', '*']) {
        if after.starts_with(|c: char| c.is_whitespace()) {
            return Some((false, after.trim_start()));
        }
        return None;
    }
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0
        && let Some(after) = rest[digits..].strip_prefix('.')
        && after.starts_with(|c: char| c.is_whitespace())
    {
        return Some((true, after.trim_start()));
    }
    None
}

/// Whether a line looks like the start of a non-paragraph block, ending the
/// lazy continuation of the paragraph above it.
fn starts_block(line: &str) -> bool {
    if line.starts_with('#')
        || line.starts_with('>')
        || line.starts_with(' ')
        || line.starts_with("```")
    {
        return true;
    }
    let rest = line.trim_start();
    if rest.starts_with('-') || rest.starts_with('*') {
        return true;
    }
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && rest.as_bytes().get(digits) == Some(&b'.')
}

/// Escapes the four characters the renderer treats as HTML-significant.
/// `'` is deliberately left alone; attribute values are always
/// double-quoted.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Applies the inline span passes to one block's text.
///
/// The text is escaped first, then each pass rewrites its own syntax in a
/// fixed order: image before link (both use the bracket-paren shape; the
/// `!` prefix must be consumed first), bold before italic (a single-`*`
/// pass must not eat the pairs), code last (its content is final).
/// Each pass is leftmost-match-first with shortest capture.
pub fn inline_format(text: &str) -> String {
    let text = escape_html(text);
    let text = replace_bracket_pairs(&text, true);
    let text = replace_bracket_pairs(&text, false);
    let text = replace_delimited(&text, "**", "strong");
    let text = replace_delimited(&text, "__", "strong");
    let text = replace_delimited(&text, "*", "em");
    let text = replace_delimited(&text, "_", "em");
    replace_code_spans(&text)
}

/// Rewrites `[label](target)` pairs, with a `!` prefix for images.
/// The label ends at the first `](` and the target at the first `)` after
/// it; once any of the three parts is missing, no later starting point can
/// complete a match either, so the scan stops.
fn replace_bracket_pairs(text: &str, image: bool) -> String {
    let opener = if image { "![" } else { "[" };
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(start) = rest.find(opener) else { break };
        let label_start = start + opener.len();
        let Some(mid) = rest[label_start..].find("](") else {
            break;
        };
        let target_start = label_start + mid + 2;
        let Some(close) = rest[target_start..].find(')') else {
            break;
        };

        let label = &rest[label_start..label_start + mid];
        let target = &rest[target_start..target_start + close];
        out.push_str(&rest[..start]);
        if image {
            out.push_str("<img alt=\"");
            out.push_str(label);
            out.push_str("\" src=\"");
            out.push_str(target);
            out.push_str("\" class=\"paper-img\">");
        } else {
            out.push_str("<a href=\"");
            out.push_str(target);
            out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
            out.push_str(label);
            out.push_str("</a>");
        }
        rest = &rest[target_start + close + 1..];
    }
    out.push_str(rest);
    out
}

/// Wraps delimited runs in a tag. The content may be empty (`****` is an
/// empty `<strong>`); an opener with no closer anywhere stays literal.
fn replace_delimited(text: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(delim) {
        let content_start = open + delim.len();
        let Some(close) = rest[content_start..].find(delim) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&rest[content_start..content_start + close]);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        rest = &rest[content_start + close + delim.len()..];
    }
    out.push_str(rest);
    out
}

/// Wraps backtick spans. Unlike the delimiter pass, the content must be
/// non-empty; `` `` `` is two literal backticks.
fn replace_code_spans(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(open) = rest.find('`') else { break };
        let Some(len) = rest[open + 1..].find('`') else {
            break;
        };
        if len == 0 {
            out.push_str(&rest[..open + 1]);
            rest = &rest[open + 1..];
            continue;
        }
        out.push_str(&rest[..open]);
        out.push_str("<code>");
        out.push_str(&rest[open + 1..open + 1 + len]);
        out.push_str("</code>");
        rest = &rest[open + 1 + len + 1..];
    }
    out.push_str(rest);
    out
}

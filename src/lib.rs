//! A CommonMark-to-HTML converter.
//!
//! The pipeline mirrors the teacher's own: a textual pre-pass over the
//! source (here, reference-definition extraction, rather than ICU's
//! placeholder scan), a block-structure pass, an inline-analysis pass, and a
//! final render. See `DESIGN.md` for where each module's approach is
//! grounded.
//!
//! ```
//! let html = commonmark_html::convert("# Hello\n\nWorld *there*.\n");
//! assert_eq!(html, "<h1>Hello</h1>\n<p>World <em>there</em>.</p>\n");
//! ```

mod block;
mod block_parser;
mod delimiter;
mod entities;
mod escape;
mod html_tag;
mod inline;
mod refdef;
mod render;
mod text;

/// Convert a full CommonMark document to HTML.
pub fn convert(input: &str) -> String {
    let normalized = normalize_line_endings(input);
    let lines: Vec<String> = split_lines(&normalized);

    #[cfg(feature = "trace")]
    eprintln!("[commonmark_html] {} input line(s)", lines.len());

    let (body_lines, refs) = refdef::extract_reference_definitions(&lines);

    #[cfg(feature = "trace")]
    eprintln!("[commonmark_html] {} reference definition(s)", refs.len());

    let blocks = block_parser::parse_blocks(&body_lines);

    #[cfg(feature = "trace")]
    eprintln!("[commonmark_html] {} top-level block(s)", blocks.len());

    render::render_document(&blocks, &refs)
}

/// Normalize CR and CRLF line endings to LF. `str::lines()` already treats a
/// trailing `\r` before `\n` as part of the line terminator, but it leaves a
/// lone `\r` (an old Mac-style line ending) as ordinary content, so this pass
/// handles that case explicitly before any line-oriented parsing begins.
fn normalize_line_endings(input: &str) -> String {
    if !input.contains('\r') {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

/// Split normalized text into lines, preserving a trailing blank line when
/// the input ends with a newline (matching how `refdef`/`block_parser`
/// expect their input: one entry per source line, no line terminators).
fn split_lines(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<String> = input.split('\n').map(|l| l.to_string()).collect();
    if input.ends_with('\n') {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_heading_and_paragraph() {
        assert_eq!(
            convert("# Hello\n\nWorld *there*.\n"),
            "<h1>Hello</h1>\n<p>World <em>there</em>.</p>\n"
        );
    }

    #[test]
    fn normalizes_lone_cr_line_endings() {
        assert_eq!(convert("a\rb\r"), "<p>a\nb</p>\n");
    }

    #[test]
    fn normalizes_crlf_line_endings() {
        assert_eq!(convert("a\r\nb\r\n"), "<p>a\nb</p>\n");
    }

    #[test]
    fn reference_link_resolves_across_document() {
        let input = "[a link][ref]\n\n[ref]: /url \"t\"\n";
        assert_eq!(
            convert(input),
            "<p><a href=\"/url\" title=\"t\">a link</a></p>\n"
        );
    }

    #[test]
    fn empty_document_is_empty_string() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn thematic_break_and_list() {
        assert_eq!(
            convert("- a\n- b\n\n---\n"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<hr />\n"
        );
    }
}

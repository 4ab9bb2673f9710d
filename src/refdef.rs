//! Reference-definition extractor: the first textual pass over the document,
//! pulled out ahead of block parsing proper.
//!
//! The teacher has no direct analogue (ICU messages don't carry document-wide
//! link reference definitions), so this module is new, but it is written in
//! the line-classification style `block_parser.rs` uses throughout: small
//! `is_*`/`try_*` predicate functions over byte slices, no regex engine.

use std::collections::HashMap;

use crate::text::{indent_width, is_blank_line, normalize_label};

/// A single link reference definition: its destination URL and optional
/// title. Reference lookups key on the normalized label (see
/// [`crate::text::normalize_label`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefDef {
    pub url: String,
    pub title: Option<String>,
}

pub type RefMap = HashMap<String, RefDef>;

/// Split the extractor's two outputs: the lines remaining for the block
/// parser (with reference definitions removed) and the reference map those
/// definitions populated. First definition for a given normalized label
/// wins; later duplicates are silently dropped.
pub fn extract_reference_definitions(lines: &[String]) -> (Vec<String>, RefMap) {
    let mut refs = RefMap::new();
    let mut out = Vec::with_capacity(lines.len());

    let mut i = 0;
    let mut prev_was_blank_or_start = true;
    let mut in_fence: Option<(char, usize)> = None;
    let mut just_consumed_definition = false;

    while i < lines.len() {
        let line = &lines[i];

        if let Some((fence_char, fence_len)) = in_fence {
            out.push(line.clone());
            if is_closing_fence(line, fence_char, fence_len) {
                in_fence = None;
            }
            prev_was_blank_or_start = false;
            just_consumed_definition = false;
            i += 1;
            continue;
        }

        if let Some((fence_char, fence_len)) = opens_fence(line) {
            in_fence = Some((fence_char, fence_len));
            out.push(line.clone());
            prev_was_blank_or_start = false;
            just_consumed_definition = false;
            i += 1;
            continue;
        }

        if is_blank_line(line) {
            out.push(line.clone());
            prev_was_blank_or_start = true;
            just_consumed_definition = false;
            i += 1;
            continue;
        }

        // Indented-code context: a line indented >= 4 columns can't open a
        // reference definition.
        let may_start = (prev_was_blank_or_start || just_consumed_definition)
            && indent_width(line) < 4;

        if may_start {
            if let Some((label, def, lines_consumed)) = try_parse_ref_def(&lines[i..]) {
                refs.entry(label).or_insert(def);
                i += lines_consumed;
                prev_was_blank_or_start = false;
                just_consumed_definition = true;
                continue;
            }
        }

        out.push(line.clone());
        prev_was_blank_or_start = false;
        just_consumed_definition = false;
        i += 1;
    }

    (out, refs)
}

fn opens_fence(line: &str) -> Option<(char, usize)> {
    if indent_width(line) >= 4 {
        return None;
    }
    let trimmed = line.trim_start();
    let ch = trimmed.chars().next()?;
    if ch != '`' && ch != '~' {
        return None;
    }
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    if len < 3 {
        return None;
    }
    if ch == '`' && trimmed[len..].contains('`') {
        return None;
    }
    Some((ch, len))
}

fn is_closing_fence(line: &str, fence_char: char, fence_len: usize) -> bool {
    if indent_width(line) >= 4 {
        return false;
    }
    let trimmed = line.trim_start();
    let len = trimmed.chars().take_while(|c| *c == fence_char).count();
    len >= fence_len && trimmed[len..].trim().is_empty()
}

/// Try to parse a reference definition starting at `lines[0]`. On success,
/// returns the normalized label, the definition, and how many of `lines`
/// were consumed.
fn try_parse_ref_def(lines: &[String]) -> Option<(String, RefDef, usize)> {
    let first = lines[0].trim_start();
    if indent_width(&lines[0]) >= 4 || !first.starts_with('[') {
        return None;
    }

    // The definition's fields may in principle span a few soft line breaks;
    // join a bounded window of lines so the scan below can look across them.
    let window_len = lines.len().min(5);
    let joined = lines[..window_len].join("\n");
    let start_offset = lines[0].len() - first.len();
    let text = &joined[start_offset..];

    let (label_raw, after_label) = parse_label(text)?;
    let normalized = normalize_label(&label_raw);
    if normalized.is_empty() {
        return None;
    }

    let after_label = after_label.strip_prefix(':')?;
    let after_ws = skip_inline_whitespace_and_one_newline(after_label);

    let (destination, after_dest) = parse_destination(after_ws)?;

    // Try: whitespace (incl. at most one newline) + title + trailing
    // whitespace to end of that line.
    let after_dest_ws = skip_inline_whitespace_and_one_newline(after_dest);
    if let Some((title, after_title)) = parse_title(after_dest_ws) {
        if rest_of_line_is_blank(after_title) {
            let consumed_text_len = text.len() - consumed_after_trailing_ws(after_title).len();
            let consumed_lines = count_lines_consumed(text, consumed_text_len);
            return Some((
                normalized,
                RefDef {
                    url: destination,
                    title: Some(title),
                },
                consumed_lines,
            ));
        }
    }

    if rest_of_line_is_blank(after_dest) {
        let consumed_text_len = text.len() - consumed_after_trailing_ws(after_dest).len();
        let consumed_lines = count_lines_consumed(text, consumed_text_len);
        return Some((
            normalized,
            RefDef {
                url: destination,
                title: None,
            },
            consumed_lines,
        ));
    }

    None
}

fn consumed_after_trailing_ws(s: &str) -> &str {
    match s.find('\n') {
        Some(idx) => &s[idx..],
        None => "",
    }
}

fn rest_of_line_is_blank(s: &str) -> bool {
    let line_end = s.find('\n').unwrap_or(s.len());
    s[..line_end].trim().is_empty()
}

fn count_lines_consumed(original_window: &str, consumed_bytes: usize) -> usize {
    1 + original_window[..consumed_bytes.min(original_window.len())]
        .matches('\n')
        .count()
}

fn skip_inline_whitespace_and_one_newline(s: &str) -> &str {
    let mut rest = s.trim_start_matches(|c: char| c == ' ' || c == '\t');
    if let Some(after_nl) = rest.strip_prefix('\n') {
        rest = after_nl.trim_start_matches(|c: char| c == ' ' || c == '\t');
    }
    rest
}

/// Parse `[label]`, returning the raw label text and the remaining text
/// after the closing bracket. Rejects unescaped nested `[`.
///
/// Shared with the inline parser's reference-link/image lookup (spec.md
/// §4.4.8), which uses the exact same label grammar.
pub(crate) fn parse_label(s: &str) -> Option<(String, &str)> {
    let rest = s.strip_prefix('[')?;
    let bytes = rest.as_bytes();
    let mut i = 0;
    let mut depth_ok = true;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => i += 2,
            b']' => break,
            b'[' => {
                depth_ok = false;
                i += 1;
            }
            _ => i += 1,
        }
    }
    if i >= bytes.len() || !depth_ok {
        return None;
    }
    let label = rest[..i].to_string();
    Some((label, &rest[i + 1..]))
}

/// Shared with the inline parser's direct-link/image resource parsing
/// (spec.md §4.4.6), which uses the same destination grammar.
pub(crate) fn parse_destination(s: &str) -> Option<(String, &str)> {
    if let Some(rest) = s.strip_prefix('<') {
        let mut i = 0;
        let bytes = rest.as_bytes();
        while i < bytes.len() {
            match bytes[i] {
                b'\\' if i + 1 < bytes.len() => i += 2,
                b'>' => break,
                b'\n' => return None,
                _ => i += 1,
            }
        }
        if i >= bytes.len() {
            return None;
        }
        let dest = decode_destination_text(&rest[..i]);
        return Some((dest, &rest[i + 1..]));
    }

    let bytes = s.as_bytes();
    if bytes.first().is_none_or(|b| b.is_ascii_whitespace()) {
        return None;
    }
    let mut i = 0;
    let mut depth = 0i32;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => i += 2,
            b if b.is_ascii_whitespace() => break,
            b'(' => {
                depth += 1;
                i += 1;
            }
            b')' => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                i += 1;
            }
            b'<' | b'>' => break,
            _ => i += 1,
        }
    }
    if i == 0 {
        return None;
    }
    let dest = decode_destination_text(&s[..i]);
    Some((dest, &s[i..]))
}

fn decode_destination_text(raw: &str) -> String {
    crate::inline::unescape_and_decode_entities(raw)
}

/// Shared with the inline parser's direct-link/image resource parsing
/// (spec.md §4.4.6), which uses the same title grammar.
pub(crate) fn parse_title(s: &str) -> Option<(String, &str)> {
    let (close, rest) = match s.as_bytes().first()? {
        b'"' => ('"', &s[1..]),
        b'\'' => ('\'', &s[1..]),
        b'(' => (')', &s[1..]),
        _ => return None,
    };
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] as char {
            '\\' if i + 1 < bytes.len() => i += 2,
            c if c == close => break,
            _ => i += 1,
        }
    }
    if i >= bytes.len() {
        return None;
    }
    let title = decode_destination_text(&rest[..i]);
    Some((title, &rest[i + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<String> {
        s.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn extracts_simple_definition() {
        let (out, refs) = extract_reference_definitions(&lines("[foo]: /url\n\npara\n"));
        assert_eq!(out, vec!["".to_string(), "para".to_string()]);
        assert_eq!(refs.get("foo").unwrap().url, "/url");
    }

    #[test]
    fn extracts_definition_with_title() {
        let (_, refs) =
            extract_reference_definitions(&lines("[foo]: /url \"title\"\n"));
        let def = refs.get("foo").unwrap();
        assert_eq!(def.url, "/url");
        assert_eq!(def.title.as_deref(), Some("title"));
    }

    #[test]
    fn first_definition_wins() {
        let (_, refs) =
            extract_reference_definitions(&lines("[foo]: /a\n[foo]: /b\n"));
        assert_eq!(refs.get("foo").unwrap().url, "/a");
    }

    #[test]
    fn label_normalization_applies_to_keys() {
        let (_, refs) = extract_reference_definitions(&lines("[ Foo  Bar ]: /x\n"));
        assert!(refs.contains_key("foo bar"));
    }

    #[test]
    fn incomplete_definition_passes_through() {
        let (out, refs) = extract_reference_definitions(&lines("[foo]:\n"));
        assert!(refs.is_empty());
        assert_eq!(out, vec!["[foo]:".to_string()]);
    }

    #[test]
    fn does_not_start_inside_fenced_code() {
        let (_, refs) =
            extract_reference_definitions(&lines("```\n[foo]: /url\n```\n"));
        assert!(refs.is_empty());
    }
}

//! Block-structure analyzer: a line-loop state machine that classifies each
//! line as the start of exactly one block kind and consumes continuation
//! lines for container blocks (block quotes, lists), per the fixed priority
//! order thematic-break > block-quote > list > fenced-code > indented-code >
//! ATX-heading > HTML-block > setext-heading > paragraph.
//!
//! Grounded on `block_parser.rs`'s `Line` struct and its `is_blank` /
//! `is_fenced_code_block` / `is_setext_heading_underline` / `is_atx_heading`
//! predicate methods, generalized from gathering a single paragraph of an
//! ICU message into the full block grammar. Recursion on reconstructed inner
//! line arrays for block quotes and list items follows the teacher's
//! recursive-descent shape rather than an explicit container stack (see
//! DESIGN.md's Open Question decisions).

use crate::block::{Block, ListItem};
use crate::html_tag::{is_block_level_tag_name, match_raw_html, tag_name_of};
use crate::text::{indent_width, is_blank_line, strip_indent};

/// Parse an already reference-definition-filtered line array into a forest
/// of top-level blocks.
pub fn parse_blocks(lines: &[String]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;
    let mut prev_blank = true;

    while i < lines.len() {
        if is_blank_line(&lines[i]) {
            prev_blank = true;
            i += 1;
            continue;
        }

        let (block, consumed) = parse_one_block(lines, i, prev_blank);
        i += consumed.max(1);
        blocks.push(block);
        prev_blank = false;
    }

    blocks
}

fn parse_one_block(lines: &[String], i: usize, prev_blank: bool) -> (Block, usize) {
    if is_thematic_break(&lines[i]) {
        return (Block::ThematicBreak, 1);
    }
    if blockquote_open_len(&lines[i]).is_some() {
        return parse_block_quote(lines, i);
    }
    if list_marker(&lines[i]).is_some() {
        return parse_list(lines, i);
    }
    if let Some(open) = fenced_open(&lines[i]) {
        return parse_fenced_code(lines, i, open);
    }
    if indent_width(&lines[i]) >= 4 {
        return parse_indented_code(lines, i);
    }
    if let Some((level, content)) = atx_heading(&lines[i]) {
        return (Block::Heading { level, content }, 1);
    }
    if let Some(consumed) = html_block_len(lines, i, prev_blank) {
        let content = lines[i..i + consumed].join("\n") + "\n";
        return (Block::HtmlBlock { content }, consumed);
    }
    parse_paragraph(lines, i)
}

// ---------------------------------------------------------------------
// Thematic break

fn is_thematic_break(line: &str) -> bool {
    if indent_width(line) >= 4 {
        return false;
    }
    let rest = line.trim_start_matches([' ', '\t']);
    let mut marker = None;
    let mut count = 0;
    for ch in rest.chars() {
        match ch {
            '*' | '-' | '_' => match marker {
                None => {
                    marker = Some(ch);
                    count = 1;
                }
                Some(m) if m == ch => count += 1,
                Some(_) => return false,
            },
            ' ' | '\t' | '\r' => {}
            _ => return false,
        }
    }
    marker.is_some() && count >= 3
}

// ---------------------------------------------------------------------
// ATX heading

fn atx_heading(line: &str) -> Option<(u8, String)> {
    if indent_width(line) >= 4 {
        return None;
    }
    let rest = line.trim_start_matches([' ', '\t']);
    let hashes = rest.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let after = &rest[hashes..];
    if !after.is_empty() && !after.starts_with([' ', '\t']) {
        return None;
    }
    let content = strip_atx_closing(after.trim_start_matches([' ', '\t']).trim_end());
    Some((hashes as u8, content))
}

fn strip_atx_closing(content: &str) -> String {
    let trimmed = content.trim_end();
    let hash_run = trimmed.chars().rev().take_while(|&c| c == '#').count();
    if hash_run == 0 {
        return trimmed.to_string();
    }
    let before = &trimmed[..trimmed.len() - hash_run];
    if before.is_empty() {
        return String::new();
    }
    if before.ends_with([' ', '\t']) {
        before.trim_end().to_string()
    } else {
        trimmed.to_string()
    }
}

// ---------------------------------------------------------------------
// Setext heading underline

fn setext_level(line: &str) -> Option<u8> {
    if indent_width(line) >= 4 {
        return None;
    }
    let rest = line.trim_start_matches([' ', '\t']);
    let ch = rest.chars().next()?;
    if ch != '=' && ch != '-' {
        return None;
    }
    let run = rest.chars().take_while(|&c| c == ch).count();
    let remainder = &rest[run..];
    if !remainder.trim_end().chars().all(|c| c == ' ' || c == '\t') {
        return None;
    }
    Some(if ch == '=' { 1 } else { 2 })
}

// ---------------------------------------------------------------------
// Fenced code blocks

struct FenceOpen {
    ch: char,
    len: usize,
    indent: usize,
    info: String,
}

fn fenced_open(line: &str) -> Option<FenceOpen> {
    let indent = indent_width(line);
    if indent >= 4 {
        return None;
    }
    let rest = line.trim_start_matches([' ', '\t']);
    let ch = rest.chars().next()?;
    if ch != '`' && ch != '~' {
        return None;
    }
    let len = rest.chars().take_while(|&c| c == ch).count();
    if len < 3 {
        return None;
    }
    let info_raw = rest[len..].trim().to_string();
    if ch == '`' && info_raw.contains('`') {
        return None;
    }
    Some(FenceOpen { ch, len, indent, info: info_raw })
}

fn is_fenced_close(line: &str, ch: char, min_len: usize) -> bool {
    if indent_width(line) >= 4 {
        return false;
    }
    let rest = line.trim_start_matches([' ', '\t']);
    let run = rest.chars().take_while(|&c| c == ch).count();
    run >= min_len && rest[run..].trim().is_empty()
}

fn parse_fenced_code(lines: &[String], i: usize, open: FenceOpen) -> (Block, usize) {
    let mut content = String::new();
    let mut j = i + 1;
    while j < lines.len() {
        if is_fenced_close(&lines[j], open.ch, open.len) {
            j += 1;
            break;
        }
        content.push_str(&strip_indent(&lines[j], open.indent));
        content.push('\n');
        j += 1;
    }

    let info = decode_info_string(&open.info);
    let lang = info.split_whitespace().next().map(|s| s.to_string());

    (
        Block::CodeBlock {
            content,
            info: lang,
        },
        j - i,
    )
}

fn decode_info_string(raw: &str) -> String {
    crate::inline::unescape_and_decode_entities(raw)
}

// ---------------------------------------------------------------------
// Indented code blocks

fn parse_indented_code(lines: &[String], i: usize) -> (Block, usize) {
    let mut j = i;
    let mut raw: Vec<&str> = Vec::new();
    let mut trailing_blank_run = 0;

    while j < lines.len() {
        let line = &lines[j];
        if is_blank_line(line) {
            raw.push("");
            trailing_blank_run += 1;
            j += 1;
            continue;
        }
        if indent_width(line) >= 4 {
            raw.push(line.as_str());
            trailing_blank_run = 0;
            j += 1;
            continue;
        }
        break;
    }

    // Trim trailing blank lines from the collected run (they belong to
    // whatever follows, not to the code block).
    let keep = raw.len() - trailing_blank_run;
    let raw = &raw[..keep];

    let mut content = String::new();
    for line in raw {
        if line.is_empty() {
            content.push('\n');
        } else {
            content.push_str(&strip_indent(line, 4));
            content.push('\n');
        }
    }

    (
        Block::CodeBlock {
            content,
            info: None,
        },
        keep,
    )
}

// ---------------------------------------------------------------------
// HTML blocks

const CONDITION_1_TAGS: &[&str] = &["pre", "script", "style", "textarea"];

fn html_block_len(lines: &[String], i: usize, prev_blank: bool) -> Option<usize> {
    let first = lines[i].trim_start_matches([' ', '\t']);
    if indent_width(&lines[i]) >= 4 || !first.starts_with('<') {
        return None;
    }

    if let Some(name) = tag_name_of(first) {
        let lower = name.to_ascii_lowercase();
        if CONDITION_1_TAGS.contains(&lower.as_str()) {
            let close_needle = format!("</{lower}");
            return Some(find_until(lines, i, |l| {
                l.to_ascii_lowercase().contains(&close_needle)
            }));
        }
    }

    if first.starts_with("<!--") {
        return Some(find_until(lines, i, |l| l.contains("-->")));
    }
    if first.starts_with("<?") {
        return Some(find_until(lines, i, |l| l.contains("?>")));
    }
    if first.starts_with("<![CDATA[") {
        return Some(find_until(lines, i, |l| l.contains("]]>")));
    }
    if first.starts_with("<!") && first[2..].as_bytes().first().is_some_and(u8::is_ascii_alphabetic)
    {
        return Some(find_until(lines, i, |l| l.contains('>')));
    }

    if let Some(name) = tag_name_of(first) {
        if is_block_level_tag_name(name) {
            return Some(find_until_blank(lines, i));
        }
    }

    // Condition 7: a complete, single open/close tag of any other kind,
    // alone on its line (optionally with trailing whitespace), and only
    // interrupting when the previous line was blank.
    if prev_blank {
        if let Some(len) = match_raw_html(first) {
            if first[len..].trim().is_empty() && !first.starts_with("</") {
                return Some(find_until_blank(lines, i));
            }
        }
    }

    None
}

fn find_until(lines: &[String], i: usize, matches_end: impl Fn(&str) -> bool) -> usize {
    let mut j = i;
    if matches_end(&lines[j]) {
        return 1;
    }
    j += 1;
    while j < lines.len() {
        if matches_end(&lines[j]) {
            return j - i + 1;
        }
        j += 1;
    }
    j - i
}

fn find_until_blank(lines: &[String], i: usize) -> usize {
    let mut j = i + 1;
    while j < lines.len() && !is_blank_line(&lines[j]) {
        j += 1;
    }
    j - i
}

// ---------------------------------------------------------------------
// Block quotes

fn blockquote_open_len(line: &str) -> Option<usize> {
    let indent = indent_width(line);
    if indent >= 4 {
        return None;
    }
    let stripped = strip_indent(line, indent);
    if !stripped.starts_with('>') {
        return None;
    }
    let after = &stripped[1..];
    let extra = if after.starts_with(' ') {
        1
    } else if after.starts_with('\t') {
        1
    } else {
        0
    };
    Some((line.len() - stripped.len()) + 1 + extra)
}

fn strip_blockquote_marker(line: &str) -> String {
    let indent = indent_width(line);
    let stripped = strip_indent(line, indent);
    let after = &stripped[1..];
    if let Some(rest) = after.strip_prefix(' ') {
        rest.to_string()
    } else if let Some(rest) = after.strip_prefix('\t') {
        // A tab after `>` counts as the one required space plus leftover
        // columns re-materialized as spaces (tab stop is 4 from column 1).
        format!("{}{}", " ".repeat(3), rest)
    } else {
        after.to_string()
    }
}

fn parse_block_quote(lines: &[String], i: usize) -> (Block, usize) {
    let mut inner: Vec<String> = Vec::new();
    let mut j = i;

    while j < lines.len() {
        let line = &lines[j];
        if blockquote_open_len(line).is_some() {
            inner.push(strip_blockquote_marker(line));
            j += 1;
            continue;
        }
        if is_blank_line(line) {
            break;
        }
        if could_interrupt_paragraph(line) {
            break;
        }
        // Lazy continuation: only valid while the quote's last collected
        // line continues an open paragraph.
        if inner.last().is_some_and(|l| !is_blank_line(l)) {
            inner.push(line.clone());
            j += 1;
            continue;
        }
        break;
    }

    (Block::BlockQuote { children: parse_blocks(&inner) }, j - i)
}

// ---------------------------------------------------------------------
// Lists

struct ListMarker {
    indent: usize,
    ordered: bool,
    delim: Option<char>,
    start: Option<u64>,
    core_width: usize,
    after: String,
}

fn list_marker(line: &str) -> Option<ListMarker> {
    let indent = indent_width(line);
    if indent >= 4 {
        return None;
    }
    let rest = strip_indent(line, indent);
    let bytes = rest.as_bytes();

    if let Some(&b) = bytes.first() {
        if matches!(b, b'-' | b'+' | b'*') {
            let after = &rest[1..];
            if !after.is_empty() && !after.starts_with([' ', '\t']) {
                return None;
            }
            // A run of 3+ identical `-`/`*` alone on the line is a thematic
            // break, not a list marker; `is_thematic_break` is checked first
            // in `parse_one_block`'s priority order so this never matters
            // here, but guard anyway for direct callers.
            return Some(ListMarker {
                indent,
                ordered: false,
                delim: None,
                start: None,
                core_width: 1,
                after: after.to_string(),
            });
        }
    }

    let digit_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 || digit_len > 9 {
        return None;
    }
    let delim_byte = *bytes.get(digit_len)?;
    if delim_byte != b'.' && delim_byte != b')' {
        return None;
    }
    let after = &rest[digit_len + 1..];
    if !after.is_empty() && !after.starts_with([' ', '\t']) {
        return None;
    }
    let start: u64 = rest[..digit_len].parse().ok()?;
    Some(ListMarker {
        indent,
        ordered: true,
        delim: Some(delim_byte as char),
        start: Some(start),
        core_width: digit_len + 1,
        after: after.to_string(),
    })
}

fn content_indent_for(after: &str) -> usize {
    if after.trim().is_empty() {
        return 1;
    }
    let width = indent_width(after);
    if width >= 5 {
        1
    } else {
        width.max(1)
    }
}

enum ListStop {
    NewItemSameList,
    EndOfList,
}

fn parse_list(lines: &[String], i: usize) -> (Block, usize) {
    let first_marker = list_marker(&lines[i]).expect("caller checked list_marker");
    let ordered = first_marker.ordered;
    let delim = first_marker.delim;
    let start = first_marker.start;

    let mut items: Vec<ListItem> = Vec::new();
    let mut j = i;
    let mut gap_before_next = false;

    loop {
        let marker = match list_marker(&lines[j]) {
            Some(m) if m.ordered == ordered && m.delim == delim => m,
            _ => break,
        };

        let (item, consumed, had_internal_blank, trailing_gap) =
            parse_one_item(lines, j, &marker, ordered, delim);

        let mut item = item;
        item.loose = item.loose || had_internal_blank || gap_before_next;
        items.push(item);

        j += consumed;
        gap_before_next = trailing_gap;

        if j >= lines.len() {
            break;
        }
        if list_marker(&lines[j]).is_none() {
            break;
        }
    }

    let loose = items.iter().any(|it| it.loose);
    let final_items = items
        .into_iter()
        .map(|mut it| {
            it.loose = loose;
            it
        })
        .collect();

    (
        Block::List {
            ordered,
            start: if ordered && start != Some(1) { start } else { None },
            loose,
            items: final_items,
        },
        j - i,
    )
}

fn parse_one_item(
    lines: &[String],
    start_idx: usize,
    marker: &ListMarker,
    ordered: bool,
    delim: Option<char>,
) -> (ListItem, usize, bool, bool) {
    let content_indent = content_indent_for(&marker.after);
    let threshold = marker.indent + marker.core_width + content_indent;

    let first_content = strip_indent(&marker.after, content_indent);
    let mut inner: Vec<String> = vec![first_content];

    let mut j = start_idx + 1;
    let mut had_internal_blank = false;
    let mut pending_blanks = 0usize;
    let mut stop = ListStop::EndOfList;

    while j < lines.len() {
        let line = &lines[j];

        if is_blank_line(line) {
            pending_blanks += 1;
            j += 1;
            continue;
        }

        if indent_width(line) >= threshold {
            if pending_blanks > 0 {
                had_internal_blank = true;
                for _ in 0..pending_blanks {
                    inner.push(String::new());
                }
                pending_blanks = 0;
            }
            inner.push(strip_indent(line, threshold));
            j += 1;
            continue;
        }

        if let Some(m) = list_marker(line) {
            if m.ordered == ordered && m.delim == delim {
                stop = ListStop::NewItemSameList;
                break;
            }
        }

        if pending_blanks == 0
            && inner.last().is_some_and(|l| !is_blank_line(l))
            && !could_interrupt_paragraph(line)
        {
            inner.push(line.clone());
            j += 1;
            continue;
        }

        break;
    }

    let trailing_gap = pending_blanks > 0 && matches!(stop, ListStop::NewItemSameList);

    let children = parse_blocks(&inner);
    let paragraph_count = children
        .iter()
        .filter(|b| matches!(b, Block::Paragraph { .. }))
        .count();
    let item = ListItem {
        loose: had_internal_blank || paragraph_count > 1,
        children,
    };

    (item, j - start_idx, had_internal_blank, trailing_gap)
}

// ---------------------------------------------------------------------
// Paragraphs (with lazy continuation and setext detection)

/// Lines that may interrupt an open paragraph, per CommonMark: thematic
/// break, block quote marker, any bullet list marker, an ordered list marker
/// only when its start number is 1, ATX heading, fenced code opening, and
/// the subset of HTML block conditions that are allowed to interrupt
/// (everything except a bare `pre/script/style/textarea` closing tag).
fn could_interrupt_paragraph(line: &str) -> bool {
    if is_thematic_break(line) {
        return true;
    }
    if blockquote_open_len(line).is_some() {
        return true;
    }
    if let Some(m) = list_marker(line) {
        if !m.ordered || m.start == Some(1) {
            return true;
        }
        return false;
    }
    if fenced_open(line).is_some() {
        return true;
    }
    if atx_heading(line).is_some() {
        return true;
    }
    if indent_width(line) < 4 {
        let first = line.trim_start_matches([' ', '\t']);
        if first.starts_with('<') && html_block_condition_1_to_6(first) {
            return true;
        }
    }
    false
}

/// Whether `first` (already left-trimmed, known to start with `<`) opens an
/// HTML block under CommonMark conditions 1-6 -- the only conditions allowed
/// to interrupt an open paragraph. Condition 7 (a bare, complete tag alone on
/// its line) may not, so e.g. `Foo\n<a href="bar">\nbaz` stays one paragraph.
/// Mirrors `html_block_len`'s condition 1-6 branches.
fn html_block_condition_1_to_6(first: &str) -> bool {
    if let Some(name) = tag_name_of(first) {
        if CONDITION_1_TAGS.contains(&name.to_ascii_lowercase().as_str()) {
            return true;
        }
    }
    if first.starts_with("<!--") {
        return true;
    }
    if first.starts_with("<?") {
        return true;
    }
    if first.starts_with("<![CDATA[") {
        return true;
    }
    if first.starts_with("<!") && first[2..].as_bytes().first().is_some_and(u8::is_ascii_alphabetic)
    {
        return true;
    }
    if let Some(name) = tag_name_of(first) {
        if is_block_level_tag_name(name) {
            return true;
        }
    }
    false
}

/// Strip leading whitespace only. Trailing whitespace is left intact: the
/// inline layer needs it to tell a hard line break (two or more trailing
/// spaces, or a trailing backslash) from an ordinary soft break.
fn strip_paragraph_leading_ws(line: &str) -> String {
    line.trim_start_matches([' ', '\t']).to_string()
}

fn parse_paragraph(lines: &[String], i: usize) -> (Block, usize) {
    let mut content_lines = vec![strip_paragraph_leading_ws(&lines[i])];
    let mut j = i + 1;

    while j < lines.len() {
        let line = &lines[j];
        if is_blank_line(line) {
            break;
        }
        if let Some(level) = setext_level(line) {
            if indent_width(&content_lines[0]) < 4 {
                let content = content_lines.join("\n").trim_end().to_string();
                return (Block::Heading { level, content }, j - i + 1);
            }
        }
        if could_interrupt_paragraph(line) {
            break;
        }
        content_lines.push(strip_paragraph_leading_ws(line));
        j += 1;
    }

    if let Some(last) = content_lines.last_mut() {
        *last = last.trim_end().to_string();
    }

    (
        Block::Paragraph {
            content: content_lines.join("\n"),
        },
        j - i,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<String> {
        s.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn parses_thematic_break() {
        let blocks = parse_blocks(&lines("---\n"));
        assert_eq!(blocks, vec![Block::ThematicBreak]);
    }

    #[test]
    fn parses_atx_heading() {
        let blocks = parse_blocks(&lines("# hi\n"));
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 1,
                content: "hi".to_string()
            }]
        );
    }

    #[test]
    fn parses_setext_heading() {
        let blocks = parse_blocks(&lines("a\n===\n"));
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 1,
                content: "a".to_string()
            }]
        );
    }

    #[test]
    fn parses_paragraph() {
        let blocks = parse_blocks(&lines("hello\nworld\n"));
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                content: "hello\nworld".to_string()
            }]
        );
    }

    #[test]
    fn parses_block_quote() {
        let blocks = parse_blocks(&lines("> a\n> b\n"));
        match &blocks[0] {
            Block::BlockQuote { children } => {
                assert_eq!(
                    children,
                    &vec![Block::Paragraph {
                        content: "a\nb".to_string()
                    }]
                );
            }
            other => panic!("expected block quote, got {other:?}"),
        }
    }

    #[test]
    fn tight_list_two_items() {
        let blocks = parse_blocks(&lines("- a\n- b\n"));
        match &blocks[0] {
            Block::List { loose, items, .. } => {
                assert!(!loose);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn loose_list_with_blank_between_items() {
        let blocks = parse_blocks(&lines("- a\n\n- b\n"));
        match &blocks[0] {
            Block::List { loose, .. } => assert!(loose),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn indented_code_block() {
        let blocks = parse_blocks(&lines("    code\n"));
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                content: "code\n".to_string(),
                info: None
            }]
        );
    }

    #[test]
    fn fenced_code_block_with_info_string() {
        let blocks = parse_blocks(&lines("```rust\nfn f() {}\n```\n"));
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                content: "fn f() {}\n".to_string(),
                info: Some("rust".to_string())
            }]
        );
    }

    #[test]
    fn ordered_list_with_nonone_start_does_not_interrupt_paragraph() {
        let blocks = parse_blocks(&lines("para\n2. item\n"));
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], Block::Paragraph { .. }));
    }
}

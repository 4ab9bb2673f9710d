//! Inline analyzer: transforms the raw text content of one leaf block (a
//! paragraph or heading) into HTML. Handles code spans, autolinks, raw HTML,
//! backslash escapes, character references, emphasis/strong emphasis, direct
//! and reference links/images, and hard/soft line breaks, in the fixed order
//! spec.md §4.4 lists.
//!
//! Grounded on `parser/{inline,code_span,link,emphasis}.rs`: the code span's
//! tentative-parse/rewind shape (try a same-length closing run, fall back to
//! literal backticks if none is found), the link/image bracket-stack
//! open/close mechanics (`parse_link_like_open`/`parse_link_like_close`,
//! including the "deactivate earlier link openers" rule that forbids a link
//! inside a link), and `delimiter.rs`'s `process_emphasis` pairing are all
//! carried over. Where the teacher represents parsed content as cursor
//! positions into a shared CST event tape, this crate uses the tagged-span
//! representation spec.md §9 endorses as the language-neutral substitute: an
//! [`Atom`] vector walked once at the end to produce the leaf block's HTML.

use crate::delimiter::{self, CharFlags, DelimKind, EmphasisDelimiter, Neighbor};
use crate::entities::decode_character_reference;
use crate::escape::{escape_href, escape_html};
use crate::html_tag::match_raw_html;
use crate::refdef::{parse_destination, parse_label, parse_title, RefMap};
use crate::text::normalize_label;

/// One unit of a leaf block's content after inline processing.
///
/// `Char` atoms are raw, not-yet-escaped source characters that still need
/// HTML-escaping (and, for `*`/`_`, may still be resolved into emphasis) at
/// render time. `Html` atoms are already-safe, fully rendered fragments
/// (code spans, autolinks, raw HTML, decoded entities/escapes, resolved
/// links/images, or a resolved emphasis tag) -- opaque to every later stage,
/// which is what lets a code span contain an unbalanced `*` without
/// confusing emphasis matching. `Blank` atoms are delimiter characters that
/// were consumed by a matched emphasis pair and contribute nothing.
#[derive(Debug, Clone)]
enum Atom {
    Char(char),
    Html(String),
    Blank,
}

/// Render one leaf block's raw text into its HTML content (the inner HTML of
/// a `<p>`/`<hN>`, not including the wrapping tag).
pub fn inline_to_html(text: &str, refs: &RefMap) -> String {
    let atoms = scan(text, refs);
    render_atoms(&atoms)
}

// ---------------------------------------------------------------------
// Backslash-unescape + entity decode, shared with the block layer for info
// strings and with the reference-definition extractor for destinations and
// titles (spec.md §4.2, §4.3's fenced-code info string decoding).

pub fn unescape_and_decode_entities(s: &str) -> String {
    // Most destinations/titles/info-strings contain neither a backslash nor
    // an `&`; a single `memchr` pre-check lets that common case skip the
    // per-char loop below entirely. Mirrors `unescape_cow`'s fast path.
    if memchr::memchr2(b'\\', b'&', s.as_bytes()).is_none() {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if ch == '\\' {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_ascii_punctuation() {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
            out.push('\\');
            continue;
        }
        if ch == '&' {
            if let Some((decoded, len)) = decode_character_reference(&s[i..]) {
                out.push_str(&decoded);
                // Skip the bytes the reference consumed, minus the '&' we
                // already accounted for via this iteration.
                let mut skipped = 1;
                while skipped < len {
                    if let Some((_, c)) = chars.next() {
                        skipped += c.len_utf8();
                    } else {
                        break;
                    }
                }
                continue;
            }
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------
// Bracket stack (links and images)

struct BracketOpener {
    /// Index into `atoms` of the opening `[` atom (for images, one past the
    /// `!` atom, which is tracked separately below).
    bracket_atom_idx: usize,
    /// Index into `atoms` of the `!` atom, for images only.
    bang_atom_idx: Option<usize>,
    /// Byte offset in `text` of the first character of the link text/alt
    /// text, used to recover the raw source for shortcut/collapsed
    /// reference label lookups.
    content_byte_start: usize,
    is_image: bool,
    active: bool,
}

// ---------------------------------------------------------------------
// Main scan

fn scan(text: &str, refs: &RefMap) -> Vec<Atom> {
    let mut atoms: Vec<Atom> = Vec::with_capacity(text.len());
    let mut delims: Vec<EmphasisDelimiter> = Vec::new();
    let mut brackets: Vec<BracketOpener> = Vec::new();

    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        let ch = rest.chars().next().unwrap();

        match ch {
            '\\' => {
                pos += handle_backslash(rest, &mut atoms);
            }
            '`' => {
                pos += handle_code_span(rest, &mut atoms);
            }
            '<' => {
                pos += handle_angle_bracket(rest, &mut atoms);
            }
            '&' => {
                pos += handle_entity(rest, &mut atoms);
            }
            '!' if rest[1..].starts_with('[') => {
                brackets.push(BracketOpener {
                    bang_atom_idx: Some(atoms.len()),
                    bracket_atom_idx: atoms.len() + 1,
                    content_byte_start: pos + 2,
                    is_image: true,
                    active: true,
                });
                atoms.push(Atom::Char('!'));
                atoms.push(Atom::Char('['));
                pos += 2;
            }
            '[' => {
                brackets.push(BracketOpener {
                    bang_atom_idx: None,
                    bracket_atom_idx: atoms.len(),
                    content_byte_start: pos + 1,
                    is_image: false,
                    active: true,
                });
                atoms.push(Atom::Char('['));
                pos += 1;
            }
            ']' => {
                pos += handle_close_bracket(text, pos, &mut atoms, &mut brackets, &mut delims, refs);
            }
            '*' | '_' => {
                pos += handle_delimiter_run(text, pos, &mut atoms, &mut delims);
            }
            '\n' => {
                pos += handle_line_break(&mut atoms);
            }
            _ => {
                atoms.push(Atom::Char(ch));
                pos += ch.len_utf8();
            }
        }
    }

    let matches = delimiter::process_emphasis(&mut delims);
    apply_emphasis_matches(&mut atoms, matches);

    atoms
}

fn apply_emphasis_matches(atoms: &mut [Atom], matches: Vec<delimiter::MatchResult>) {
    for m in matches {
        atoms[m.open_tag_atom] = Atom::Html(m.tag.open().to_string());
        atoms[m.close_tag_atom] = Atom::Html(m.tag.close().to_string());
        for idx in m.open_blank_atoms {
            atoms[idx] = Atom::Blank;
        }
        for idx in m.close_blank_atoms {
            atoms[idx] = Atom::Blank;
        }
    }
}

fn render_atoms(atoms: &[Atom]) -> String {
    let mut out = String::with_capacity(atoms.len());
    for atom in atoms {
        match atom {
            Atom::Blank => {}
            Atom::Html(s) => out.push_str(s),
            Atom::Char(c) => push_escaped_char(&mut out, *c),
        }
    }
    out
}

fn push_escaped_char(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '&' => out.push_str("&amp;"),
        _ => out.push(c),
    }
}

// ---------------------------------------------------------------------
// Backslash escapes and hard line breaks via trailing backslash

fn handle_backslash(rest: &str, atoms: &mut Vec<Atom>) -> usize {
    let mut chars = rest.char_indices();
    chars.next(); // the backslash itself
    match chars.next() {
        Some((_, '\n')) => {
            atoms.push(Atom::Html("<br />\n".to_string()));
            1 + '\n'.len_utf8()
        }
        Some((_, next)) if next.is_ascii_punctuation() => {
            atoms.push(Atom::Html(escape_html(&next.to_string())));
            1 + next.len_utf8()
        }
        _ => {
            atoms.push(Atom::Char('\\'));
            1
        }
    }
}

// ---------------------------------------------------------------------
// Character references

fn handle_entity(rest: &str, atoms: &mut Vec<Atom>) -> usize {
    if let Some((decoded, len)) = decode_character_reference(rest) {
        atoms.push(Atom::Html(escape_html(&decoded)));
        len
    } else {
        atoms.push(Atom::Char('&'));
        1
    }
}

// ---------------------------------------------------------------------
// Code spans

fn handle_code_span(rest: &str, atoms: &mut Vec<Atom>) -> usize {
    let bytes = rest.as_bytes();
    let open_len = bytes.iter().take_while(|&&b| b == b'`').count();

    if let Some(close_run_start) = find_matching_backtick_run(rest, open_len, open_len) {
        let interior = &rest[open_len..close_run_start];
        let mut content = interior.replace('\n', " ");
        if content.starts_with(' ')
            && content.ends_with(' ')
            && content.chars().any(|c| !c.is_whitespace())
        {
            content = content[1..content.len() - 1].to_string();
        }
        atoms.push(Atom::Html(format!("<code>{}</code>", escape_html(&content))));
        close_run_start + open_len
    } else {
        for _ in 0..open_len {
            atoms.push(Atom::Char('`'));
        }
        open_len
    }
}

/// Find the byte offset (relative to `rest`) of the next run of backticks of
/// exactly `len` backticks, searching from `start`.
fn find_matching_backtick_run(rest: &str, start: usize, len: usize) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            let run_start = i;
            while i < bytes.len() && bytes[i] == b'`' {
                i += 1;
            }
            if i - run_start == len {
                return Some(run_start);
            }
        } else {
            i += 1;
        }
    }
    None
}

// ---------------------------------------------------------------------
// `<...>`: autolinks and raw HTML

fn handle_angle_bracket(rest: &str, atoms: &mut Vec<Atom>) -> usize {
    if let Some(len) = try_absolute_uri_autolink(rest) {
        let body = &rest[1..len - 1];
        atoms.push(Atom::Html(format!(
            "<a href=\"{}\">{}</a>",
            escape_href(body),
            escape_html(body)
        )));
        return len;
    }
    if let Some(len) = try_email_autolink(rest) {
        let body = &rest[1..len - 1];
        atoms.push(Atom::Html(format!(
            "<a href=\"mailto:{}\">{}</a>",
            escape_href(body),
            escape_html(body)
        )));
        return len;
    }
    if let Some(len) = match_raw_html(rest) {
        atoms.push(Atom::Html(rest[..len].to_string()));
        return len;
    }
    atoms.push(Atom::Char('<'));
    1
}

fn try_absolute_uri_autolink(rest: &str) -> Option<usize> {
    let inner = rest.strip_prefix('<')?;
    let bytes = inner.as_bytes();

    let mut i = 0;
    if !bytes.first()?.is_ascii_alphabetic() {
        return None;
    }
    i += 1;
    while bytes.get(i).is_some_and(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-')) {
        i += 1;
    }
    if !(2..=32).contains(&i) {
        return None;
    }
    if bytes.get(i) != Some(&b':') {
        return None;
    }
    i += 1;

    let body_start = i;
    while bytes
        .get(i)
        .is_some_and(|b| !b.is_ascii_whitespace() && *b != b'<' && *b != b'>')
    {
        i += 1;
    }
    if i == body_start {
        return None;
    }
    if bytes.get(i) != Some(&b'>') {
        return None;
    }
    Some(1 + i + 1)
}

fn try_email_autolink(rest: &str) -> Option<usize> {
    let inner = rest.strip_prefix('<')?;
    let bytes = inner.as_bytes();

    let mut i = 0;
    let local_start = i;
    while bytes
        .get(i)
        .is_some_and(|b| is_email_local_byte(*b))
    {
        i += 1;
    }
    if i == local_start {
        return None;
    }
    if bytes.get(i) != Some(&b'@') {
        return None;
    }
    i += 1;

    let domain_start = i;
    let mut saw_label = false;
    loop {
        let label_start = i;
        while bytes.get(i).is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'-') {
            i += 1;
        }
        if i == label_start || bytes[i - 1] == b'-' {
            break;
        }
        saw_label = true;
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            continue;
        }
        break;
    }
    if !saw_label || i == domain_start {
        return None;
    }
    if bytes.get(i) != Some(&b'>') {
        return None;
    }
    Some(1 + i + 1)
}

fn is_email_local_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'/' | b'=' | b'?' | b'^' | b'_' | b'`' | b'{' | b'|' | b'}' | b'~' | b'-')
}

// ---------------------------------------------------------------------
// Hard/soft line breaks

fn handle_line_break(atoms: &mut Vec<Atom>) -> usize {
    let mut trailing_spaces = 0;
    while matches!(atoms.last(), Some(Atom::Char(' '))) {
        atoms.pop();
        trailing_spaces += 1;
    }
    if trailing_spaces >= 2 {
        atoms.push(Atom::Html("<br />\n".to_string()));
    } else {
        atoms.push(Atom::Char('\n'));
    }
    1
}

// ---------------------------------------------------------------------
// Emphasis delimiter runs

fn handle_delimiter_run(text: &str, pos: usize, atoms: &mut Vec<Atom>, delims: &mut Vec<EmphasisDelimiter>) -> usize {
    let rest = &text[pos..];
    let marker = rest.as_bytes()[0];
    let run_len = rest.bytes().take_while(|&b| b == marker).count();

    let prev = match atoms.last() {
        Some(Atom::Html(_)) => Neighbor::Opaque,
        Some(Atom::Char(c)) => Neighbor::Plain(*c),
        Some(Atom::Blank) | None => Neighbor::Boundary,
    };
    let next_char = text[pos + run_len..].chars().next();
    let next = match next_char {
        Some(c) => Neighbor::Plain(c),
        None => Neighbor::Boundary,
    };

    // Flanking is derived from the run's own first/last neighbor, but since
    // every character in an uninterrupted run shares the same neighbors on
    // the inside, a single classification of (prev, next) suffices: the
    // "first token's preceding flags" and "last token's following flags"
    // from spec.md §4.4.9 collapse to one call each for a plain ASCII run.
    let first_flags = classify_single(prev, Neighbor::Plain(marker as char));
    let last_flags = classify_single(Neighbor::Plain(marker as char), next);
    let kind = if marker == b'*' { DelimKind::Star } else { DelimKind::Under };
    let (can_open, can_close) = delimiter::derive_open_close(kind, first_flags, last_flags);

    let atom_start = atoms.len();
    for _ in 0..run_len {
        atoms.push(Atom::Char(marker as char));
    }
    let atom_indices: Vec<usize> = (atom_start..atom_start + run_len).collect();
    delims.push(EmphasisDelimiter::new(kind, can_open, can_close, atom_indices));

    run_len
}

/// A thin wrapper around [`delimiter::classify`] used when only one side of
/// the pair needs a real neighbor and the other is the delimiter character
/// itself (which is neither whitespace nor punctuation, so it contributes no
/// flags either way).
fn classify_single(prev: Neighbor, next: Neighbor) -> CharFlags {
    delimiter::classify(prev, next)
}

// ---------------------------------------------------------------------
// Links and images

fn handle_close_bracket(
    text: &str,
    pos: usize,
    atoms: &mut Vec<Atom>,
    brackets: &mut Vec<BracketOpener>,
    delims: &mut Vec<EmphasisDelimiter>,
    refs: &RefMap,
) -> usize {
    let opener_index = brackets.iter().rposition(|b| b.active);
    let Some(opener_index) = opener_index else {
        atoms.push(Atom::Char(']'));
        return 1;
    };

    let after_bracket = pos + 1;
    let raw_text = &text[brackets[opener_index].content_byte_start..pos];

    let resolved = try_inline_resource(&text[after_bracket..])
        .map(|(dest, title, len)| (dest, title, after_bracket + len))
        .or_else(|| try_reference_resource(text, after_bracket, raw_text, refs));

    let Some((dest, title, consumed_end)) = resolved else {
        brackets.remove(opener_index);
        atoms.push(Atom::Char(']'));
        return 1;
    };

    let opener = brackets.remove(opener_index);
    let href = escape_href(&dest);
    let title_attr = title
        .as_deref()
        .map(|t| format!(" title=\"{}\"", escape_html(t)))
        .unwrap_or_default();

    if opener.is_image {
        let content_start = opener.bracket_atom_idx + 1;
        let local_delims =
            extract_delimiters_in_range(delims, content_start, atoms.len(), content_start);
        let mut local = local_delims;
        let local_matches = delimiter::process_emphasis(&mut local);
        let mut content_atoms = atoms.split_off(content_start);
        apply_emphasis_matches(&mut content_atoms, local_matches);
        // `apply_emphasis_matches` indexes into the absolute atom vector, so
        // rebase onto the split-off slice first.
        let alt_html = render_atoms(&content_atoms);
        let alt = strip_tags(&alt_html);
        atoms.truncate(opener.bang_atom_idx.unwrap_or(opener.bracket_atom_idx));
        atoms.push(Atom::Html(format!(
            "<img src=\"{href}\" alt=\"{}\"{title_attr} />",
            escape_html(&alt)
        )));
        brackets.retain(|b| b.bracket_atom_idx < opener.bracket_atom_idx);
    } else {
        // Resolve the link text's own emphasis against its own sub-range
        // before closing it off, so an opener inside the link can never pair
        // with a closer outside it (and vice versa) -- mirrors the image
        // branch's alt-text isolation above, just without collapsing the
        // content into a single rendered fragment.
        let content_start = opener.bracket_atom_idx + 1;
        let mut local_delims =
            extract_delimiters_in_range(delims, content_start, atoms.len(), 0);
        let local_matches = delimiter::process_emphasis(&mut local_delims);
        apply_emphasis_matches(atoms, local_matches);

        atoms[opener.bracket_atom_idx] = Atom::Html(format!("<a href=\"{href}\"{title_attr}>"));
        atoms.push(Atom::Html("</a>".to_string()));
        for b in brackets.iter_mut() {
            if !b.is_image {
                b.active = false;
            }
        }
    }

    consumed_end - pos
}

/// Remove and return every delimiter in `delims` whose atoms fall entirely
/// within `[start, end)`, rebasing their atom indices down by `rebase_offset`.
/// Pass `rebase_offset == start` when the caller is about to `split_off` the
/// atoms at that offset into their own slice (the image path); pass `0` to
/// leave the indices absolute, for resolving a sub-range in place within the
/// full `atoms` vector (the link path).
fn extract_delimiters_in_range(
    delims: &mut Vec<EmphasisDelimiter>,
    start: usize,
    end: usize,
    rebase_offset: usize,
) -> Vec<EmphasisDelimiter> {
    let mut kept = Vec::with_capacity(delims.len());
    let mut extracted = Vec::new();
    for delim in delims.drain(..) {
        if delim.within(start, end) {
            extracted.push(delim.rebased(rebase_offset));
        } else {
            kept.push(delim);
        }
    }
    *delims = kept;
    extracted
}

fn try_inline_resource(rest: &str) -> Option<(String, Option<String>, usize)> {
    let inner = rest.strip_prefix('(')?;
    let mut cursor = skip_link_whitespace(inner);

    if let Some(after_paren) = cursor.strip_prefix(')') {
        let consumed = rest.len() - after_paren.len();
        return Some((String::new(), None, consumed));
    }

    let (dest, after_dest) = parse_destination(cursor)?;
    cursor = after_dest;

    let before_title = cursor;
    let ws_skipped = skip_link_whitespace(cursor);
    let title = if ws_skipped.len() != before_title.len() || before_title.starts_with(['"', '\'', '(']) {
        match parse_title(ws_skipped) {
            Some((title, after_title)) => {
                cursor = skip_link_whitespace(after_title);
                Some(title)
            }
            None => {
                cursor = before_title;
                None
            }
        }
    } else {
        None
    };

    let after_close = cursor.strip_prefix(')')?;
    let consumed = rest.len() - after_close.len();
    Some((dest, title, consumed))
}

fn skip_link_whitespace(s: &str) -> &str {
    let mut rest = s.trim_start_matches([' ', '\t']);
    if let Some(after_nl) = rest.strip_prefix('\n') {
        rest = after_nl.trim_start_matches([' ', '\t']);
    }
    rest
}

fn try_reference_resource(
    text: &str,
    after_bracket: usize,
    raw_text: &str,
    refs: &RefMap,
) -> Option<(String, Option<String>, usize)> {
    let rest = &text[after_bracket..];

    if let Some(after_open) = rest.strip_prefix('[') {
        if let Some(after_close) = after_open.strip_prefix(']') {
            let normalized = normalize_label(raw_text);
            let def = refs.get(&normalized)?;
            let consumed = rest.len() - after_close.len();
            return Some((def.url.clone(), def.title.clone(), consumed));
        }
        let (label, after_label) = parse_label(rest)?;
        let normalized = normalize_label(&label);
        let def = refs.get(&normalized)?;
        let consumed = rest.len() - after_label.len();
        return Some((def.url.clone(), def.title.clone(), consumed));
    }

    let normalized = normalize_label(raw_text);
    let def = refs.get(&normalized)?;
    Some((def.url.clone(), def.title.clone(), 0))
}

/// Strip every `<...>` tag from an already-rendered HTML fragment, used to
/// produce an image's `alt` text from its (possibly emphasis-bearing) alt
/// content per spec.md §4.4.6.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn html(text: &str) -> String {
        inline_to_html(text, &HashMap::new())
    }

    #[test]
    fn plain_text_is_escaped() {
        assert_eq!(html("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn code_span_strips_bracketing_space() {
        assert_eq!(html("` a `"), "<code>a</code>");
    }

    #[test]
    fn unmatched_backtick_is_literal() {
        assert_eq!(html("`a"), "`a");
    }

    #[test]
    fn backslash_escape_of_punctuation() {
        assert_eq!(html("\\*not emphasis\\*"), "*not emphasis*");
    }

    #[test]
    fn backslash_before_non_punctuation_is_literal() {
        assert_eq!(html("\\a"), "\\a");
    }

    #[test]
    fn numeric_entity_decodes() {
        assert_eq!(html("&#65;"), "A");
    }

    #[test]
    fn simple_emphasis_and_strong() {
        assert_eq!(html("*a* **b**"), "<em>a</em> <strong>b</strong>");
    }

    #[test]
    fn rule_of_three_pairing() {
        assert_eq!(html("*foo**bar***"), "<em>foo<strong>bar</strong></em>");
    }

    #[test]
    fn intraword_underscore_is_not_emphasis() {
        assert_eq!(html("foo_bar_baz"), "foo_bar_baz");
    }

    #[test]
    fn direct_link() {
        assert_eq!(
            html("[a](/url \"t\")"),
            "<a href=\"/url\" title=\"t\">a</a>"
        );
    }

    #[test]
    fn empty_destination_link() {
        assert_eq!(html("[a]()"), "<a href=\"\">a</a>");
    }

    #[test]
    fn shortcut_reference_link() {
        let mut refs = HashMap::new();
        refs.insert(
            "foo".to_string(),
            crate::refdef::RefDef { url: "/x".to_string(), title: None },
        );
        assert_eq!(inline_to_html("[foo]", &refs), "<a href=\"/x\">foo</a>");
    }

    #[test]
    fn nested_link_is_forbidden() {
        assert_eq!(
            html("[a [b](/y) c](/x)"),
            "[a <a href=\"/y\">b</a> c](/x)"
        );
    }

    #[test]
    fn image_alt_strips_tags() {
        assert_eq!(
            html("![*alt*](/img.png)"),
            "<img src=\"/img.png\" alt=\"alt\" />"
        );
    }

    #[test]
    fn absolute_uri_autolink() {
        assert_eq!(
            html("<http://example.com>"),
            "<a href=\"http://example.com\">http://example.com</a>"
        );
    }

    #[test]
    fn email_autolink() {
        assert_eq!(
            html("<foo@bar.com>"),
            "<a href=\"mailto:foo@bar.com\">foo@bar.com</a>"
        );
    }

    #[test]
    fn raw_html_passes_through() {
        assert_eq!(html("<span class=\"x\">"), "<span class=\"x\">");
    }

    #[test]
    fn hard_break_from_two_trailing_spaces() {
        assert_eq!(html("a  \nb"), "a<br />\nb");
    }

    #[test]
    fn hard_break_from_trailing_backslash() {
        assert_eq!(html("a\\\nb"), "a<br />\nb");
    }

    #[test]
    fn soft_break_is_plain_newline() {
        assert_eq!(html("a\nb"), "a\nb");
    }
}

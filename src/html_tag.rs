//! Raw-HTML recognizer: open tags, close tags, comments, processing
//! instructions, declarations, and CDATA sections, per CommonMark §6.1/§4.6.
//!
//! No single teacher file covers this case for case (HTML-block detection
//! there is folded into line predicates rather than exposed as a standalone
//! recognizer); this module is written fresh from the grammar, in the same
//! byte-oriented, `match`-heavy style as the rest of the block layer.

fn is_tag_name_start(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

fn is_tag_name_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

/// Length of a valid tag name starting at `s[0]`, or `None`.
fn tag_name_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !is_tag_name_start(bytes[0]) {
        return None;
    }
    let mut len = 1;
    while bytes.get(len).is_some_and(|b| is_tag_name_continue(*b)) {
        len += 1;
    }
    Some(len)
}

/// The byte length of an attribute (` name`, ` name=value`) starting at
/// `s[0]`, or `None` if `s` does not start with whitespace-then-attribute.
fn attribute_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let ws_start = i;
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    if i == ws_start {
        return None;
    }

    let name_start = i;
    match bytes.get(i) {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' || *b == b':' => i += 1,
        _ => return None,
    }
    while bytes
        .get(i)
        .is_some_and(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b':' | b'-'))
    {
        i += 1;
    }
    if i == name_start {
        return None;
    }

    // Optional value spec: (whitespace)? = (whitespace)? value
    let save = i;
    let mut j = i;
    while bytes.get(j).is_some_and(|b| b.is_ascii_whitespace()) {
        j += 1;
    }
    if bytes.get(j) == Some(&b'=') {
        j += 1;
        while bytes.get(j).is_some_and(|b| b.is_ascii_whitespace()) {
            j += 1;
        }
        match bytes.get(j) {
            Some(b'\'') => {
                j += 1;
                let value_start = j;
                while bytes.get(j).is_some_and(|b| *b != b'\'') {
                    j += 1;
                }
                if j == bytes.len() {
                    return None;
                }
                let _ = value_start;
                i = j + 1;
            }
            Some(b'"') => {
                j += 1;
                while bytes.get(j).is_some_and(|b| *b != b'"') {
                    j += 1;
                }
                if j == bytes.len() {
                    return None;
                }
                i = j + 1;
            }
            Some(_) => {
                let value_start = j;
                while bytes
                    .get(j)
                    .is_some_and(|b| !b.is_ascii_whitespace() && !matches!(b, b'"' | b'\'' | b'=' | b'<' | b'>' | b'`'))
                {
                    j += 1;
                }
                if j == value_start {
                    return None;
                }
                i = j;
            }
            None => return None,
        }
    } else {
        i = save;
    }

    Some(i)
}

/// Length of a complete open tag `<tagname attrs* />?>`, or `None`.
fn open_tag_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }
    let name_len = tag_name_len(&s[1..])?;
    let mut i = 1 + name_len;

    while let Some(len) = attribute_len(&s[i..]) {
        i += len;
    }

    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    if bytes.get(i) == Some(&b'/') {
        i += 1;
    }
    if bytes.get(i) == Some(&b'>') {
        Some(i + 1)
    } else {
        None
    }
}

/// Length of a complete close tag `</tagname whitespace*>`, or `None`.
fn close_tag_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'<') || bytes.get(1) != Some(&b'/') {
        return None;
    }
    let name_len = tag_name_len(&s[2..])?;
    let mut i = 2 + name_len;
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    if bytes.get(i) == Some(&b'>') {
        Some(i + 1)
    } else {
        None
    }
}

/// Length of `<!--...-->`, including the short forms `<!-->` and `<!--->`.
fn comment_len(s: &str) -> Option<usize> {
    if !s.starts_with("<!--") {
        return None;
    }
    if s.starts_with("<!-->") {
        return Some(5);
    }
    if s.starts_with("<!--->") {
        return Some(6);
    }
    let body = &s[4..];
    // The body must not start with `>` or `->`, and must not contain `--`.
    if body.starts_with('>') || body.starts_with("->") {
        return None;
    }
    let end = body.find("-->")?;
    if body[..end].contains("--") {
        return None;
    }
    Some(4 + end + 3)
}

/// Length of `<?...?>`.
fn processing_instruction_len(s: &str) -> Option<usize> {
    if !s.starts_with("<?") {
        return None;
    }
    let end = s[2..].find("?>")?;
    Some(2 + end + 2)
}

/// Length of `<!NAME ...>`.
fn declaration_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'<') || bytes.get(1) != Some(&b'!') {
        return None;
    }
    let rest = &s[2..];
    if rest.as_bytes().first().is_none_or(|b| !b.is_ascii_alphabetic()) {
        return None;
    }
    let end = s.find('>')?;
    Some(end + 1)
}

/// Length of `<![CDATA[...]]>`.
fn cdata_len(s: &str) -> Option<usize> {
    if !s.starts_with("<![CDATA[") {
        return None;
    }
    let end = s[9..].find("]]>")?;
    Some(9 + end + 3)
}

/// If `s` begins with any recognized raw-HTML construct, return its byte
/// length. Tried in the order the grammar disambiguates them.
pub fn match_raw_html(s: &str) -> Option<usize> {
    if !s.starts_with('<') {
        return None;
    }
    comment_len(s)
        .or_else(|| processing_instruction_len(s))
        .or_else(|| cdata_len(s))
        .or_else(|| declaration_len(s))
        .or_else(|| close_tag_len(s))
        .or_else(|| open_tag_len(s))
}

/// The fixed case-insensitive "block-level" HTML tag set used for HTML block
/// condition 6 (CommonMark §4.6).
pub fn is_block_level_tag_name(name: &str) -> bool {
    const NAMES: &[&str] = &[
        "address", "article", "aside", "base", "basefont", "blockquote", "body", "caption",
        "center", "col", "colgroup", "dd", "details", "dialog", "dir", "div", "dl", "dt",
        "fieldset", "figcaption", "figure", "footer", "form", "frame", "frameset", "h1", "h2",
        "h3", "h4", "h5", "h6", "head", "header", "hr", "html", "iframe", "legend", "li", "link",
        "main", "menu", "menuitem", "nav", "noframes", "ol", "optgroup", "option", "p", "param",
        "pre", "script", "search", "section", "summary", "style", "table", "tbody", "td",
        "tfoot", "th", "thead", "title", "tr", "track", "ul", "textarea",
    ];
    let lower = name.to_ascii_lowercase();
    NAMES.contains(&lower.as_str())
}

/// Extract the tag name from a raw `<tag ...>` or `</tag ...>` string.
pub fn tag_name_of(s: &str) -> Option<&str> {
    let rest = s.strip_prefix('<')?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let len = tag_name_len(rest)?;
    Some(&rest[..len])
}

//! HTML and URI escaping for text emitted into rendered output.
//!
//! Grounded on `ast/util.rs`'s `escape_body_text` and `escape_href`.

/// Replace `& < > "` with their named entities. Applied to every raw text
/// fragment that lands in element content or an attribute value, unless the
/// fragment is explicitly raw HTML, code-block body, or an autolink href.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
    out
}

// Sourced upstream from pulldown-cmark-escape's HREF_SAFE table (the teacher
// credits the same origin in `ast/util.rs`): ASCII bytes that are safe to
// leave alone in a URI. `%` is marked safe, so an already percent-encoded
// triplet like `%20` is never touched -- that is what gives us the "already
// percent-encoded sequences are preserved" property for free, without a
// separate undo pass.
#[rustfmt::skip]
static HREF_SAFE: [u8; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0,
];

/// Percent-encode a link destination for use in an `href`/`src` attribute,
/// leaving already-escaped triplets and the `HREF_SAFE` ASCII set untouched.
pub fn escape_href(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, ch) in text.char_indices() {
        let is_safe = ch.is_ascii() && HREF_SAFE[ch as usize] != 0;
        if is_safe {
            out.push(ch);
            continue;
        }
        if ch == '&' {
            out.push_str("&amp;");
            continue;
        }
        for byte_index in index..index + ch.len_utf8() {
            out.push('%');
            out.push_str(&format!("{:02X}", text.as_bytes()[byte_index]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escape_covers_the_four_specials() {
        assert_eq!(escape_html("<a>&\"b\""), "&lt;a&gt;&amp;&quot;b&quot;");
    }

    #[test]
    fn href_preserves_already_encoded_triplets() {
        let url = "/a%20b%2Fc";
        assert_eq!(escape_href(url), url);
    }

    #[test]
    fn href_encodes_unsafe_bytes_and_amp() {
        assert_eq!(escape_href("/a b"), "/a%20b");
        assert_eq!(escape_href("/a&b"), "/a&amp;b");
    }

    #[test]
    fn href_encodes_non_ascii() {
        assert_eq!(escape_href("/caf\u{e9}"), "/caf%C3%A9");
    }
}

//! Indentation arithmetic and label normalization.
//!
//! Grounded on `block_parser.rs`'s `Line` predicate methods in the teacher
//! crate, generalized from "does this line look like a fence/heading" into
//! the raw column arithmetic those predicates are built on.

/// Tab stops occur every 4 columns, as CommonMark requires.
const TAB_STOP: usize = 4;

/// The number of columns of leading indentation on `line`, expanding tabs to
/// the next multiple of [`TAB_STOP`].
pub fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += TAB_STOP - (width % TAB_STOP),
            _ => break,
        }
    }
    width
}

/// Remove the first `columns` columns of leading indentation from `line`,
/// expanding tabs as needed. Any indentation beyond `columns` is preserved as
/// literal spaces in the result, per spec: "preserving any remaining
/// indentation spaces."
pub fn strip_indent(line: &str, columns: usize) -> String {
    if columns == 0 {
        return line.to_string();
    }

    let mut consumed = 0;
    let mut iter = line.char_indices().peekable();
    while consumed < columns {
        match iter.peek() {
            Some(&(_, ' ')) => {
                consumed += 1;
                iter.next();
            }
            Some(&(_, '\t')) => {
                let tab_width = TAB_STOP - (consumed % TAB_STOP);
                if consumed + tab_width <= columns {
                    consumed += tab_width;
                    iter.next();
                } else {
                    // This tab spans past the target column: consume it and
                    // re-materialize the overshoot as literal spaces.
                    iter.next();
                    let leftover = consumed + tab_width - columns;
                    let rest: String = iter.map(|(_, c)| c).collect();
                    return " ".repeat(leftover) + &rest;
                }
            }
            _ => break,
        }
    }
    iter.map(|(_, c)| c).collect()
}

/// True if `line` is empty or consists entirely of whitespace.
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Case-fold (mapping U+00DF "ß" to "ss") and whitespace-collapse a link
/// label for lookup purposes. Idempotent: `normalize_label(normalize_label(s))
/// == normalize_label(s)`.
pub fn normalize_label(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    let mut started = false;

    for ch in raw.chars() {
        if ch.is_whitespace() {
            if started {
                pending_space = true;
            }
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        started = true;
        if ch == 'ß' {
            out.push_str("ss");
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_counts_tabs_to_next_stop() {
        assert_eq!(indent_width(""), 0);
        assert_eq!(indent_width("   x"), 3);
        assert_eq!(indent_width("\tx"), 4);
        assert_eq!(indent_width(" \tx"), 4);
        assert_eq!(indent_width("  \tx"), 4);
        assert_eq!(indent_width("   \tx"), 4);
        assert_eq!(indent_width("    \tx"), 8);
    }

    #[test]
    fn strip_indent_expands_and_preserves_overshoot() {
        assert_eq!(strip_indent("    code", 4), "code");
        assert_eq!(strip_indent("\tcode", 4), "code");
        assert_eq!(strip_indent("\t\tcode", 4), "\tcode");
        assert_eq!(strip_indent("  foo", 4), "foo");
    }

    #[test]
    fn label_normalization_is_idempotent() {
        let cases = ["  Foo   Bar  ", "straße", "FOO\tBAR"];
        for case in cases {
            let once = normalize_label(case);
            let twice = normalize_label(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn eszett_folds_to_ss() {
        assert_eq!(normalize_label("straße"), "strasse");
    }

    #[test]
    fn whitespace_collapses_and_trims() {
        assert_eq!(normalize_label("  a   b\tc\n"), "a b c");
    }
}

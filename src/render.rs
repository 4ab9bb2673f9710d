//! HTML rendering: walks the block tree bottom-up, running each leaf's raw
//! text through the inline analyzer and wrapping it per CommonMark's block
//! tag rules.
//!
//! Grounded on `commonmark_html/mod.rs`'s per-node `HtmlFormat` impls (the
//! `write_tag!` shape: open tag, content, close tag, with a trailing newline
//! convention matching a reference HTML renderer) and, for the six-case
//! tight/loose list-item table, on the same module's list formatting -- the
//! teacher's list is always loose (ICU messages don't have CommonMark's
//! tight-list notion), so that part is new, built directly from spec.md
//! §4.5's table rather than adapted from teacher code.

use crate::block::{Block, ListItem};
use crate::escape::escape_html;
use crate::inline::inline_to_html;
use crate::refdef::RefMap;

/// Render a full block tree (the document's top-level blocks) to HTML.
pub fn render_document(blocks: &[Block], refs: &RefMap) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(block, refs, &mut out);
    }
    out
}

fn render_block(block: &Block, refs: &RefMap, out: &mut String) {
    match block {
        Block::ThematicBreak => out.push_str("<hr />\n"),
        Block::Heading { level, content } => render_heading(*level, content, refs, out),
        Block::Paragraph { content } => render_paragraph(content, refs, out),
        Block::CodeBlock { content, info } => render_code_block(content, info.as_deref(), out),
        Block::BlockQuote { children } => render_block_quote(children, refs, out),
        Block::List {
            ordered,
            start,
            loose,
            items,
        } => render_list(*ordered, *start, *loose, items, refs, out),
        Block::HtmlBlock { content } => render_html_block(content, out),
    }
}

fn render_heading(level: u8, content: &str, refs: &RefMap, out: &mut String) {
    let html = inline_to_html(content, refs);
    out.push_str(&format!("<h{level}>{html}</h{level}>\n"));
}

fn render_paragraph(content: &str, refs: &RefMap, out: &mut String) {
    let html = inline_to_html(content, refs);
    out.push_str("<p>");
    out.push_str(&html);
    out.push_str("</p>\n");
}

fn render_code_block(content: &str, info: Option<&str>, out: &mut String) {
    out.push_str("<pre><code");
    if let Some(info) = info {
        let lang = info.split_whitespace().next().unwrap_or("");
        if !lang.is_empty() {
            out.push_str(&format!(" class=\"language-{}\"", escape_html(lang)));
        }
    }
    out.push('>');
    out.push_str(&escape_html(content));
    out.push_str("</code></pre>\n");
}

fn render_block_quote(children: &[Block], refs: &RefMap, out: &mut String) {
    out.push_str("<blockquote>\n");
    for child in children {
        render_block(child, refs, out);
    }
    out.push_str("</blockquote>\n");
}

fn render_html_block(content: &str, out: &mut String) {
    out.push_str(content);
    if !content.ends_with('\n') {
        out.push('\n');
    }
}

fn render_list(
    ordered: bool,
    start: Option<u64>,
    loose: bool,
    items: &[ListItem],
    refs: &RefMap,
    out: &mut String,
) {
    if ordered {
        match start {
            Some(n) if n != 1 => out.push_str(&format!("<ol start=\"{n}\">\n")),
            _ => out.push_str("<ol>\n"),
        }
    } else {
        out.push_str("<ul>\n");
    }

    for item in items {
        render_list_item(item, loose, refs, out);
    }

    out.push_str(if ordered { "</ol>\n" } else { "</ul>\n" });
}

/// Render one list item per spec.md §4.5's tight/loose table: a tight list's
/// direct `Paragraph` children render without their own `<p>` wrapper; every
/// other child (including a paragraph nested inside a container child, which
/// keeps its own tightness) renders exactly as it would at the top level.
fn render_list_item(item: &ListItem, list_loose: bool, refs: &RefMap, out: &mut String) {
    if item.children.is_empty() {
        out.push_str("<li></li>\n");
        return;
    }

    let first_is_paragraph = matches!(item.children[0], Block::Paragraph { .. });
    if !first_is_paragraph {
        out.push_str("<li>\n");
        for child in &item.children {
            render_block(child, refs, out);
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</li>\n");
        return;
    }

    let first_content = match &item.children[0] {
        Block::Paragraph { content } => content,
        _ => unreachable!("checked above"),
    };
    let rest = &item.children[1..];

    if list_loose {
        out.push_str("<li>\n<p>");
        out.push_str(&inline_to_html(first_content, refs));
        out.push_str("</p>\n");
        for child in rest {
            render_block(child, refs, out);
        }
        out.push_str("</li>\n");
        return;
    }

    out.push_str("<li>");
    out.push_str(&inline_to_html(first_content, refs));
    if rest.is_empty() {
        out.push_str("</li>\n");
        return;
    }
    out.push('\n');
    render_list_item_children_tight(rest, refs, out);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("</li>\n");
}

/// In a tight item with more than one child block, only the item's direct
/// `Paragraph` children lose their wrapper; nested containers (a sub-list, a
/// block quote) render normally, including their own paragraphs' tightness.
fn render_list_item_children_tight(children: &[Block], refs: &RefMap, out: &mut String) {
    for child in children {
        match child {
            Block::Paragraph { content } => {
                out.push_str(&inline_to_html(content, refs));
            }
            other => render_block(other, refs, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn render(blocks: Vec<Block>) -> String {
        render_document(&blocks, &HashMap::new())
    }

    #[test]
    fn thematic_break() {
        assert_eq!(render(vec![Block::ThematicBreak]), "<hr />\n");
    }

    #[test]
    fn heading() {
        assert_eq!(
            render(vec![Block::Heading {
                level: 2,
                content: "hi".to_string()
            }]),
            "<h2>hi</h2>\n"
        );
    }

    #[test]
    fn paragraph() {
        assert_eq!(
            render(vec![Block::Paragraph {
                content: "hello *world*".to_string()
            }]),
            "<p>hello <em>world</em></p>\n"
        );
    }

    #[test]
    fn code_block_with_info_string() {
        assert_eq!(
            render(vec![Block::CodeBlock {
                content: "fn f() {}\n".to_string(),
                info: Some("rust ignore".to_string())
            }]),
            "<pre><code class=\"language-rust\">fn f() {}\n</code></pre>\n"
        );
    }

    #[test]
    fn code_block_without_info_string() {
        assert_eq!(
            render(vec![Block::CodeBlock {
                content: "code\n".to_string(),
                info: None
            }]),
            "<pre><code>code\n</code></pre>\n"
        );
    }

    #[test]
    fn block_quote() {
        assert_eq!(
            render(vec![Block::BlockQuote {
                children: vec![Block::Paragraph {
                    content: "quoted".to_string()
                }]
            }]),
            "<blockquote>\n<p>quoted</p>\n</blockquote>\n"
        );
    }

    #[test]
    fn tight_list_drops_paragraph_wrapper() {
        let list = Block::List {
            ordered: false,
            start: None,
            loose: false,
            items: vec![
                ListItem {
                    children: vec![Block::Paragraph { content: "a".to_string() }],
                    loose: false,
                },
                ListItem {
                    children: vec![Block::Paragraph { content: "b".to_string() }],
                    loose: false,
                },
            ],
        };
        assert_eq!(
            render(vec![list]),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn loose_list_keeps_paragraph_wrapper() {
        let list = Block::List {
            ordered: false,
            start: None,
            loose: true,
            items: vec![ListItem {
                children: vec![Block::Paragraph { content: "a".to_string() }],
                loose: true,
            }],
        };
        assert_eq!(
            render(vec![list]),
            "<ul>\n<li>\n<p>a</p>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn ordered_list_with_start() {
        let list = Block::List {
            ordered: true,
            start: Some(3),
            loose: false,
            items: vec![ListItem {
                children: vec![Block::Paragraph { content: "a".to_string() }],
                loose: false,
            }],
        };
        assert_eq!(
            render(vec![list]),
            "<ol start=\"3\">\n<li>a</li>\n</ol>\n"
        );
    }

    #[test]
    fn html_block_passes_through_verbatim() {
        assert_eq!(
            render(vec![Block::HtmlBlock {
                content: "<div>\n  <span>x</span>\n</div>".to_string()
            }]),
            "<div>\n  <span>x</span>\n</div>\n"
        );
    }
}

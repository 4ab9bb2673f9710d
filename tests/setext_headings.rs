mod harness;
use crate::md_test;

md_test!(level_one_equals, "Foo\n===\n", "<h1>Foo</h1>\n");
md_test!(level_two_dashes, "Foo\nbar\n---\n", "<h2>Foo\nbar</h2>\n");
md_test!(underline_can_be_indented, "Foo\n   ----      \n", "<h2>Foo</h2>\n");
md_test!(
    four_space_indent_underline_is_not_setext,
    "Foo\n    ---\n",
    "<p>Foo\n---</p>\n"
);
md_test!(
    content_can_span_multiple_lines,
    "Foo\nBar\n===\n",
    "<h1>Foo\nBar</h1>\n"
);
md_test!(
    blank_line_ends_the_paragraph_before_the_underline,
    "Foo\n\n===\n",
    "<p>Foo</p>\n<p>===</p>\n"
);

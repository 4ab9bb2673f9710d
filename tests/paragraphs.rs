mod harness;
use crate::md_test;

md_test!(
    simple_paragraph,
    "aaa\n\nbbb\n",
    "<p>aaa</p>\n<p>bbb</p>\n"
);
md_test!(
    multiline_paragraph_joins_with_newline,
    "aaa\nbbb\n\nccc\nddd\n",
    "<p>aaa\nbbb</p>\n<p>ccc\nddd</p>\n"
);
md_test!(
    multiple_blank_lines_between_paragraphs_collapse,
    "aaa\n\n\n\nbbb\n",
    "<p>aaa</p>\n<p>bbb</p>\n"
);
md_test!(
    leading_spaces_are_skipped,
    "  aaa\n bbb\n",
    "<p>aaa\nbbb</p>\n"
);
md_test!(
    leading_indent_of_four_or_more_on_first_line_is_still_a_paragraph_if_lazy,
    "aaa\n             bbb\n                                       ccc\n",
    "<p>aaa\nbbb\nccc</p>\n"
);
md_test!(
    final_line_trailing_whitespace_is_stripped,
    "aaa\nbbb     \n",
    "<p>aaa\nbbb</p>\n"
);

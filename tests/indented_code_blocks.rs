mod harness;
use crate::md_test;

md_test!(
    simple_indented_code,
    "    a simple\n      indented code block\n",
    "<pre><code>a simple\n  indented code block\n</code></pre>\n"
);
md_test!(
    list_marker_wins_over_indented_code,
    "  - foo\n\n    bar\n",
    "<ul>\n<li>\n<p>foo</p>\n<p>bar</p>\n</li>\n</ul>\n"
);
md_test!(
    cannot_interrupt_a_paragraph,
    "Foo\n    bar\n\n",
    "<p>Foo\nbar</p>\n"
);
md_test!(
    blank_lines_in_the_middle_are_preserved,
    "    chunk1\n\n    chunk2\n",
    "<pre><code>chunk1\n\nchunk2\n</code></pre>\n"
);
md_test!(
    trailing_blank_lines_are_trimmed,
    "    chunk1\n      \n      \n",
    "<pre><code>chunk1\n</code></pre>\n"
);
md_test!(
    a_tab_is_four_spaces,
    "\tfoo\n",
    "<pre><code>foo\n</code></pre>\n"
);

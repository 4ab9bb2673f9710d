mod harness;
use crate::md_test;

md_test!(
    blank_line_between_two_paragraphs_in_one_item_makes_it_loose,
    "- a\n\n  b\n",
    "<ul>\n<li>\n<p>a</p>\n<p>b</p>\n</li>\n</ul>\n"
);
md_test!(
    item_can_contain_an_indented_code_block,
    "- a\n\n      code\n",
    "<ul>\n<li>\n<p>a</p>\n<pre><code>code\n</code></pre>\n</li>\n</ul>\n"
);
md_test!(
    a_blank_line_between_any_two_items_makes_the_whole_list_loose,
    "- a\n- b\n\n- c\n",
    "<ul>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n<li>\n<p>c</p>\n</li>\n</ul>\n"
);

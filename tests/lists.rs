mod harness;
use crate::md_test;

md_test!(
    tight_bullet_list,
    "- a\n- b\n- c\n",
    "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>\n"
);
md_test!(
    loose_list_via_blank_line_between_items,
    "- a\n\n- b\n",
    "<ul>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n</ul>\n"
);
md_test!(
    ordered_list_starting_at_one_has_no_start_attribute,
    "1. a\n2. b\n",
    "<ol>\n<li>a</li>\n<li>b</li>\n</ol>\n"
);
md_test!(
    ordered_list_with_explicit_start,
    "3. a\n4. b\n",
    "<ol start=\"3\">\n<li>a</li>\n<li>b</li>\n</ol>\n"
);
md_test!(
    changing_bullet_character_starts_a_new_list,
    "- a\n+ b\n",
    "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>\n"
);
md_test!(
    changing_delimiter_starts_a_new_list,
    "1. a\n2) b\n",
    "<ol>\n<li>a</li>\n</ol>\n<ol start=\"2\">\n<li>b</li>\n</ol>\n"
);
md_test!(
    nested_list,
    "- a\n  - b\n",
    "<ul>\n<li>a\n<ul>\n<li>b</li>\n</ul>\n</li>\n</ul>\n"
);

mod harness;
use crate::md_test;

md_test!(
    single_backtick_fence,
    "`foo`\n",
    "<p><code>foo</code></p>\n"
);
md_test!(
    double_backtick_fence_can_contain_a_single_backtick,
    "``foo ` bar``\n",
    "<p><code>foo ` bar</code></p>\n"
);
md_test!(
    mismatched_run_lengths_stay_literal,
    "`foo``\n",
    "<p>`foo``</p>\n"
);
md_test!(
    interior_newline_becomes_a_space,
    "`foo\nbar`\n",
    "<p><code>foo bar</code></p>\n"
);
md_test!(
    symmetric_single_space_padding_is_stripped,
    "` foo `\n",
    "<p><code>foo</code></p>\n"
);
md_test!(
    all_space_content_is_left_untouched,
    "` `\n",
    "<p><code> </code></p>\n"
);
md_test!(
    angle_bracket_inside_code_span_is_escaped,
    "`<div>`\n",
    "<p><code>&lt;div&gt;</code></p>\n"
);

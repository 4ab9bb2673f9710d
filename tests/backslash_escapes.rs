mod harness;
use crate::md_test;

md_test!(
    escaped_asterisks_are_literal,
    "\\*foo\\*\n",
    "<p>*foo*</p>\n"
);
md_test!(
    escaped_backslash_is_literal,
    "\\\\\n",
    "<p>\\</p>\n"
);
md_test!(
    backslash_before_non_punctuation_is_literal,
    "\\a\n",
    "<p>\\a</p>\n"
);
md_test!(
    escaping_an_angle_bracket_prevents_autolink,
    "\\<http://x.com>\n",
    "<p>&lt;http://x.com&gt;</p>\n"
);
md_test!(
    escaping_a_digit_leaves_the_backslash_since_digits_are_not_punctuation,
    "\\7\n",
    "<p>\\7</p>\n"
);
md_test!(
    backslash_inside_a_code_span_is_literal,
    "`\\*`\n",
    "<p><code>\\*</code></p>\n"
);

mod harness;
use crate::md_test;

md_test!(
    backtick_fence,
    "```\n<\n >\n```\n",
    "<pre><code>&lt;\n &gt;\n</code></pre>\n"
);
md_test!(
    tilde_fence,
    "~~~\n<\n >\n~~~\n",
    "<pre><code>&lt;\n &gt;\n</code></pre>\n"
);
md_test!(
    tildes_allow_backticks_inside,
    "~~~~\n```\n```\n~~~~\n",
    "<pre><code>```\n```\n</code></pre>\n"
);
md_test!(
    closing_fence_must_be_at_least_as_long,
    "````\naaa\n```\n``````\n",
    "<pre><code>aaa\n```\n</code></pre>\n"
);
md_test!(
    blank_interior_lines_are_preserved_verbatim,
    "```\n\n  \n```\n",
    "<pre><code>\n  \n</code></pre>\n"
);
md_test!(
    info_string_is_used_as_language_class,
    "```ruby\ndef foo(x)\n  return 3\nend\n```\n",
    "<pre><code class=\"language-ruby\">def foo(x)\n  return 3\nend\n</code></pre>\n"
);
md_test!(
    info_string_only_uses_first_word,
    "``` ruby startline=3 $%@#$\ndef foo(x)\nend\n```\n",
    "<pre><code class=\"language-ruby\">def foo(x)\nend\n</code></pre>\n"
);
md_test!(
    backtick_fence_rejects_backtick_in_info_string,
    "``` aa ```\nfoo\n",
    "<p><code>aa</code>\nfoo</p>\n"
);
md_test!(
    closing_fence_may_be_indented_up_to_three_spaces,
    "```\naaa\n  ```\n",
    "<pre><code>aaa\n</code></pre>\n"
);
md_test!(
    four_space_indented_closing_fence_does_not_close,
    "```\naaa\n    ```\n",
    "<pre><code>aaa\n    ```\n</code></pre>\n"
);

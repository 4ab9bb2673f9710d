mod harness;
use crate::md_test;

md_test!(empty_input_produces_empty_output, "", "");
md_test!(atx_heading, "# hi\n", "<h1>hi</h1>\n");
md_test!(setext_heading, "a\n===\n", "<h1>a</h1>\n");
md_test!(
    block_quote,
    "> foo\n",
    "<blockquote>\n<p>foo</p>\n</blockquote>\n"
);
md_test!(
    tight_list,
    "- a\n- b\n",
    "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
);
md_test!(
    loose_list,
    "- a\n\n- b\n",
    "<ul>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n</ul>\n"
);
md_test!(
    reference_link,
    "[foo]: /x\n\n[foo]\n",
    "<p><a href=\"/x\">foo</a></p>\n"
);
md_test!(
    rule_of_three_delimiter_run,
    "*foo**bar***\n",
    "<p><em>foo<strong>bar</strong></em></p>\n"
);
md_test!(
    code_span_with_padding_spaces,
    "` foo `\n",
    "<p><code>foo</code></p>\n"
);
md_test!(indented_code, "    foo\n", "<pre><code>foo\n</code></pre>\n");
md_test!(
    an_already_percent_encoded_sequence_in_a_destination_is_preserved,
    "[a](%20)\n",
    "<p><a href=\"%20\">a</a></p>\n"
);

#[test]
fn crlf_and_lf_line_endings_normalize_to_the_same_output() {
    let crlf = harness::convert("# hi\r\n\r\nfoo\r\nbar\r\n");
    let lf = harness::convert("# hi\n\nfoo\nbar\n");
    assert_eq!(crlf, lf);
}

#[test]
fn a_lone_cr_is_also_normalized_like_a_newline() {
    let cr = harness::convert("# hi\r\rfoo\r");
    let lf = harness::convert("# hi\n\nfoo\n");
    assert_eq!(cr, lf);
}

mod harness;
use crate::md_test;

md_test!(
    basic_definition_then_reference,
    "[foo]: /url \"title\"\n\n[foo]\n",
    "<p><a href=\"/url\" title=\"title\">foo</a></p>\n"
);
md_test!(
    definition_produces_no_output_of_its_own,
    "[foo]: /url\n",
    ""
);
md_test!(
    angle_bracketed_destination,
    "[foo]: <bar>\n\n[foo]\n",
    "<p><a href=\"bar\">foo</a></p>\n"
);
md_test!(
    title_may_span_a_second_line,
    "[foo]: /url\n'title'\n\n[foo]\n",
    "<p><a href=\"/url\" title=\"title\">foo</a></p>\n"
);
md_test!(
    first_definition_wins_on_duplicate_label,
    "[foo]: /first\n[foo]: /second\n\n[foo]\n",
    "<p><a href=\"/first\">foo</a></p>\n"
);
md_test!(
    label_matching_is_case_and_whitespace_insensitive,
    "[Foo Bar]: /url\n\n[foo   bar]\n",
    "<p><a href=\"/url\">foo   bar</a></p>\n"
);
md_test!(
    reference_definitions_can_precede_and_follow_usage,
    "[foo]\n\n[foo]: /url\n",
    "<p><a href=\"/url\">foo</a></p>\n"
);
md_test!(
    a_link_reference_definition_does_not_itself_paragraph,
    "[foo]: /url \"title\"\n",
    ""
);

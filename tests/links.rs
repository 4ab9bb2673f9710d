mod harness;
use crate::md_test;

md_test!(
    inline_link_with_title,
    "[link](/uri \"title\")\n",
    "<p><a href=\"/uri\" title=\"title\">link</a></p>\n"
);
md_test!(
    inline_link_without_title,
    "[link](/uri)\n",
    "<p><a href=\"/uri\">link</a></p>\n"
);
md_test!(
    link_with_empty_destination,
    "[link]()\n",
    "<p><a href=\"\">link</a></p>\n"
);
md_test!(
    destination_in_angle_brackets,
    "[link](<foo>)\n",
    "<p><a href=\"foo\">link</a></p>\n"
);
md_test!(
    full_reference_link,
    "[link][ref]\n\n[ref]: /uri\n",
    "<p><a href=\"/uri\">link</a></p>\n"
);
md_test!(
    collapsed_reference_link,
    "[link][]\n\n[link]: /uri\n",
    "<p><a href=\"/uri\">link</a></p>\n"
);
md_test!(
    shortcut_reference_link,
    "[link]\n\n[link]: /uri\n",
    "<p><a href=\"/uri\">link</a></p>\n"
);
md_test!(
    emphasis_nests_inside_link_text,
    "[*foo*](/uri)\n",
    "<p><a href=\"/uri\"><em>foo</em></a></p>\n"
);
md_test!(
    a_link_cannot_contain_another_link,
    "[a [b](/y) c](/x)\n",
    "<p>[a <a href=\"/y\">b</a> c](/x)</p>\n"
);
md_test!(
    emphasis_cannot_straddle_the_link_boundary,
    "[a*b](/u)c*d\n",
    "<p><a href=\"/u\">a*b</a>c*d</p>\n"
);

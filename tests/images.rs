mod harness;
use crate::md_test;

md_test!(
    basic_image,
    "![foo](/url)\n",
    "<p><img src=\"/url\" alt=\"foo\" /></p>\n"
);
md_test!(
    image_with_title,
    "![foo](/url \"title\")\n",
    "<p><img src=\"/url\" alt=\"foo\" title=\"title\" /></p>\n"
);
md_test!(
    image_alt_strips_emphasis_tags,
    "![*foo* bar](/url)\n",
    "<p><img src=\"/url\" alt=\"foo bar\" /></p>\n"
);
md_test!(
    reference_image,
    "![foo][ref]\n\n[ref]: /url\n",
    "<p><img src=\"/url\" alt=\"foo\" /></p>\n"
);
md_test!(
    image_nested_inside_a_link_is_allowed,
    "[![foo](/img.png)](/url)\n",
    "<p><a href=\"/url\"><img src=\"/img.png\" alt=\"foo\" /></a></p>\n"
);

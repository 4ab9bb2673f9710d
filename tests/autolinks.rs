mod harness;
use crate::md_test;

md_test!(
    absolute_uri_autolink,
    "<http://example.com>\n",
    "<p><a href=\"http://example.com\">http://example.com</a></p>\n"
);
md_test!(
    email_autolink,
    "<foo@bar.com>\n",
    "<p><a href=\"mailto:foo@bar.com\">foo@bar.com</a></p>\n"
);
md_test!(
    uri_autolink_with_path_and_query,
    "<https://example.com/a?b=c>\n",
    "<p><a href=\"https://example.com/a?b=c\">https://example.com/a?b=c</a></p>\n"
);
md_test!(
    scheme_of_one_character_is_too_short_to_be_an_autolink,
    "<a:b>\n",
    "<p>&lt;a:b&gt;</p>\n"
);
md_test!(
    empty_local_part_is_not_an_email_autolink,
    "<@bar.com>\n",
    "<p>&lt;@bar.com&gt;</p>\n"
);

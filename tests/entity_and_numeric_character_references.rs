mod harness;
use crate::md_test;

md_test!(
    named_entity_ampersand_round_trips_through_escaping,
    "&amp;\n",
    "<p>&amp;</p>\n"
);
md_test!(
    named_entity_copyright,
    "&copy;\n",
    "<p>\u{A9}</p>\n"
);
md_test!(
    decimal_numeric_reference,
    "&#65;\n",
    "<p>A</p>\n"
);
md_test!(
    hex_numeric_reference_lowercase_x,
    "&#x41;\n",
    "<p>A</p>\n"
);
md_test!(
    hex_numeric_reference_uppercase_x,
    "&#X41;\n",
    "<p>A</p>\n"
);
md_test!(
    out_of_range_numeric_reference_becomes_replacement_character,
    "&#x110000;\n",
    "<p>\u{FFFD}</p>\n"
);
md_test!(
    unknown_named_entity_is_left_literal,
    "&foo;\n",
    "<p>&amp;foo;</p>\n"
);

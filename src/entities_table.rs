// Generated-style static table, included directly into `entities.rs` so the
// decoding logic and the data can be reviewed side by side. Values are the
// literal decoded text for each HTML5 entity name (without the surrounding
// `&`/`;`).
static NAMED_ENTITIES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    // Core XML / HTML specials
    "amp" => "&",
    "AMP" => "&",
    "lt" => "<",
    "LT" => "<",
    "gt" => ">",
    "GT" => ">",
    "quot" => "\"",
    "QUOT" => "\"",
    "apos" => "'",

    // Whitespace and separators
    "nbsp" => "\u{00A0}",
    "ensp" => "\u{2002}",
    "emsp" => "\u{2003}",
    "thinsp" => "\u{2009}",
    "zwnj" => "\u{200C}",
    "zwj" => "\u{200D}",
    "shy" => "\u{00AD}",

    // Latin-1 punctuation and symbols
    "iexcl" => "\u{00A1}",
    "cent" => "\u{00A2}",
    "pound" => "\u{00A3}",
    "curren" => "\u{00A4}",
    "yen" => "\u{00A5}",
    "brvbar" => "\u{00A6}",
    "sect" => "\u{00A7}",
    "uml" => "\u{00A8}",
    "copy" => "\u{00A9}",
    "COPY" => "\u{00A9}",
    "ordf" => "\u{00AA}",
    "laquo" => "\u{00AB}",
    "not" => "\u{00AC}",
    "reg" => "\u{00AE}",
    "REG" => "\u{00AE}",
    "macr" => "\u{00AF}",
    "deg" => "\u{00B0}",
    "plusmn" => "\u{00B1}",
    "sup2" => "\u{00B2}",
    "sup3" => "\u{00B3}",
    "acute" => "\u{00B4}",
    "micro" => "\u{00B5}",
    "para" => "\u{00B6}",
    "middot" => "\u{00B7}",
    "cedil" => "\u{00B8}",
    "sup1" => "\u{00B9}",
    "ordm" => "\u{00BA}",
    "raquo" => "\u{00BB}",
    "frac14" => "\u{00BC}",
    "frac12" => "\u{00BD}",
    "frac34" => "\u{00BE}",
    "iquest" => "\u{00BF}",
    "times" => "\u{00D7}",
    "divide" => "\u{00F7}",

    // Latin-1 letters
    "Agrave" => "\u{00C0}",
    "Aacute" => "\u{00C1}",
    "Acirc" => "\u{00C2}",
    "Atilde" => "\u{00C3}",
    "Auml" => "\u{00C4}",
    "Aring" => "\u{00C5}",
    "AElig" => "\u{00C6}",
    "Ccedil" => "\u{00C7}",
    "Egrave" => "\u{00C8}",
    "Eacute" => "\u{00C9}",
    "Ecirc" => "\u{00CA}",
    "Euml" => "\u{00CB}",
    "Igrave" => "\u{00CC}",
    "Iacute" => "\u{00CD}",
    "Icirc" => "\u{00CE}",
    "Iuml" => "\u{00CF}",
    "ETH" => "\u{00D0}",
    "Ntilde" => "\u{00D1}",
    "Ograve" => "\u{00D2}",
    "Oacute" => "\u{00D3}",
    "Ocirc" => "\u{00D4}",
    "Otilde" => "\u{00D5}",
    "Ouml" => "\u{00D6}",
    "Oslash" => "\u{00D8}",
    "Ugrave" => "\u{00D9}",
    "Uacute" => "\u{00DA}",
    "Ucirc" => "\u{00DB}",
    "Uuml" => "\u{00DC}",
    "Yacute" => "\u{00DD}",
    "THORN" => "\u{00DE}",
    "szlig" => "\u{00DF}",
    "agrave" => "\u{00E0}",
    "aacute" => "\u{00E1}",
    "acirc" => "\u{00E2}",
    "atilde" => "\u{00E3}",
    "auml" => "\u{00E4}",
    "aring" => "\u{00E5}",
    "aelig" => "\u{00E6}",
    "ccedil" => "\u{00E7}",
    "egrave" => "\u{00E8}",
    "eacute" => "\u{00E9}",
    "ecirc" => "\u{00EA}",
    "euml" => "\u{00EB}",
    "igrave" => "\u{00EC}",
    "iacute" => "\u{00ED}",
    "icirc" => "\u{00EE}",
    "iuml" => "\u{00EF}",
    "eth" => "\u{00F0}",
    "ntilde" => "\u{00F1}",
    "ograve" => "\u{00F2}",
    "oacute" => "\u{00F3}",
    "ocirc" => "\u{00F4}",
    "otilde" => "\u{00F5}",
    "ouml" => "\u{00F6}",
    "oslash" => "\u{00F8}",
    "ugrave" => "\u{00F9}",
    "uacute" => "\u{00FA}",
    "ucirc" => "\u{00FB}",
    "uuml" => "\u{00FC}",
    "yacute" => "\u{00FD}",
    "thorn" => "\u{00FE}",
    "yuml" => "\u{00FF}",
    "OElig" => "\u{0152}",
    "oelig" => "\u{0153}",
    "Scaron" => "\u{0160}",
    "scaron" => "\u{0161}",
    "Yuml" => "\u{0178}",
    "fnof" => "\u{0192}",

    // Greek letters
    "Alpha" => "\u{0391}",
    "Beta" => "\u{0392}",
    "Gamma" => "\u{0393}",
    "Delta" => "\u{0394}",
    "Epsilon" => "\u{0395}",
    "Zeta" => "\u{0396}",
    "Eta" => "\u{0397}",
    "Theta" => "\u{0398}",
    "Iota" => "\u{0399}",
    "Kappa" => "\u{039A}",
    "Lambda" => "\u{039B}",
    "Mu" => "\u{039C}",
    "Nu" => "\u{039D}",
    "Xi" => "\u{039E}",
    "Omicron" => "\u{039F}",
    "Pi" => "\u{03A0}",
    "Rho" => "\u{03A1}",
    "Sigma" => "\u{03A3}",
    "Tau" => "\u{03A4}",
    "Upsilon" => "\u{03A5}",
    "Phi" => "\u{03A6}",
    "Chi" => "\u{03A7}",
    "Psi" => "\u{03A8}",
    "Omega" => "\u{03A9}",
    "alpha" => "\u{03B1}",
    "beta" => "\u{03B2}",
    "gamma" => "\u{03B3}",
    "delta" => "\u{03B4}",
    "epsilon" => "\u{03B5}",
    "zeta" => "\u{03B6}",
    "eta" => "\u{03B7}",
    "theta" => "\u{03B8}",
    "iota" => "\u{03B9}",
    "kappa" => "\u{03BA}",
    "lambda" => "\u{03BB}",
    "mu" => "\u{03BC}",
    "nu" => "\u{03BD}",
    "xi" => "\u{03BE}",
    "omicron" => "\u{03BF}",
    "pi" => "\u{03C0}",
    "rho" => "\u{03C1}",
    "sigmaf" => "\u{03C2}",
    "sigma" => "\u{03C3}",
    "tau" => "\u{03C4}",
    "upsilon" => "\u{03C5}",
    "phi" => "\u{03C6}",
    "chi" => "\u{03C7}",
    "psi" => "\u{03C8}",
    "omega" => "\u{03C9}",

    // General punctuation
    "ndash" => "\u{2013}",
    "mdash" => "\u{2014}",
    "lsquo" => "\u{2018}",
    "rsquo" => "\u{2019}",
    "sbquo" => "\u{201A}",
    "ldquo" => "\u{201C}",
    "rdquo" => "\u{201D}",
    "bdquo" => "\u{201E}",
    "dagger" => "\u{2020}",
    "Dagger" => "\u{2021}",
    "bull" => "\u{2022}",
    "hellip" => "\u{2026}",
    "permil" => "\u{2030}",
    "prime" => "\u{2032}",
    "Prime" => "\u{2033}",
    "lsaquo" => "\u{2039}",
    "rsaquo" => "\u{203A}",
    "oline" => "\u{203E}",
    "frasl" => "\u{2044}",
    "euro" => "\u{20AC}",
    "trade" => "\u{2122}",
    "TRADE" => "\u{2122}",
    "alefsym" => "\u{2135}",

    // Arrows
    "larr" => "\u{2190}",
    "uarr" => "\u{2191}",
    "rarr" => "\u{2192}",
    "darr" => "\u{2193}",
    "harr" => "\u{2194}",
    "crarr" => "\u{21B5}",
    "lArr" => "\u{21D0}",
    "uArr" => "\u{21D1}",
    "rArr" => "\u{21D2}",
    "dArr" => "\u{21D3}",
    "hArr" => "\u{21D4}",

    // Mathematical operators
    "forall" => "\u{2200}",
    "part" => "\u{2202}",
    "exist" => "\u{2203}",
    "empty" => "\u{2205}",
    "nabla" => "\u{2207}",
    "isin" => "\u{2208}",
    "notin" => "\u{2209}",
    "ni" => "\u{220B}",
    "prod" => "\u{220F}",
    "sum" => "\u{2211}",
    "minus" => "\u{2212}",
    "lowast" => "\u{2217}",
    "radic" => "\u{221A}",
    "prop" => "\u{221D}",
    "infin" => "\u{221E}",
    "ang" => "\u{2220}",
    "and" => "\u{2227}",
    "or" => "\u{2228}",
    "cap" => "\u{2229}",
    "cup" => "\u{222A}",
    "int" => "\u{222B}",
    "there4" => "\u{2234}",
    "sim" => "\u{223C}",
    "cong" => "\u{2245}",
    "asymp" => "\u{2248}",
    "ne" => "\u{2260}",
    "equiv" => "\u{2261}",
    "le" => "\u{2264}",
    "ge" => "\u{2265}",
    "sub" => "\u{2282}",
    "sup" => "\u{2283}",
    "nsub" => "\u{2284}",
    "sube" => "\u{2286}",
    "supe" => "\u{2287}",
    "oplus" => "\u{2295}",
    "otimes" => "\u{2297}",
    "perp" => "\u{22A5}",
    "sdot" => "\u{22C5}",

    // Misc technical / box drawing
    "lceil" => "\u{2308}",
    "rceil" => "\u{2309}",
    "lfloor" => "\u{230A}",
    "rfloor" => "\u{230B}",
    "lang" => "\u{27E8}",
    "rang" => "\u{27E9}",
    "LeftAngleBracket" => "\u{27E8}",
    "RightAngleBracket" => "\u{27E9}",
    "loz" => "\u{25CA}",
    "lozenge" => "\u{25CA}",
    "spades" => "\u{2660}",
    "spadesuit" => "\u{2660}",
    "clubs" => "\u{2663}",
    "clubsuit" => "\u{2663}",
    "hearts" => "\u{2665}",
    "heartsuit" => "\u{2665}",
    "diams" => "\u{2666}",
    "diamondsuit" => "\u{2666}",
    "sung" => "\u{266A}",
    "flat" => "\u{266D}",
    "natur" => "\u{266E}",
    "natural" => "\u{266E}",
    "sharp" => "\u{266F}",

    // Latin Extended-A letters not covered by Latin-1 (Dcaron is one of
    // these -- e.g. ex. "D\u{10E}bra").
    "Amacr" => "\u{0100}",
    "amacr" => "\u{0101}",
    "Abreve" => "\u{0102}",
    "abreve" => "\u{0103}",
    "Aogon" => "\u{0104}",
    "aogon" => "\u{0105}",
    "Cacute" => "\u{0106}",
    "cacute" => "\u{0107}",
    "Ccirc" => "\u{0108}",
    "ccirc" => "\u{0109}",
    "Cdot" => "\u{010A}",
    "cdot" => "\u{010B}",
    "Ccaron" => "\u{010C}",
    "ccaron" => "\u{010D}",
    "Dcaron" => "\u{010E}",
    "dcaron" => "\u{010F}",
    "Dstrok" => "\u{0110}",
    "dstrok" => "\u{0111}",
    "Emacr" => "\u{0112}",
    "emacr" => "\u{0113}",
    "Edot" => "\u{0116}",
    "edot" => "\u{0117}",
    "Eogon" => "\u{0118}",
    "eogon" => "\u{0119}",
    "Ecaron" => "\u{011A}",
    "ecaron" => "\u{011B}",
    "Gcirc" => "\u{011C}",
    "gcirc" => "\u{011D}",
    "Gbreve" => "\u{011E}",
    "gbreve" => "\u{011F}",
    "Gdot" => "\u{0120}",
    "gdot" => "\u{0121}",
    "Gcedil" => "\u{0122}",
    "Hcirc" => "\u{0124}",
    "hcirc" => "\u{0125}",
    "Hstrok" => "\u{0126}",
    "hstrok" => "\u{0127}",
    "Itilde" => "\u{0128}",
    "itilde" => "\u{0129}",
    "Imacr" => "\u{012A}",
    "imacr" => "\u{012B}",
    "Iogon" => "\u{012E}",
    "iogon" => "\u{012F}",
    "Idot" => "\u{0130}",
    "IJlig" => "\u{0132}",
    "ijlig" => "\u{0133}",
    "Jcirc" => "\u{0134}",
    "jcirc" => "\u{0135}",
    "Kcedil" => "\u{0136}",
    "kcedil" => "\u{0137}",
    "kgreen" => "\u{0138}",
    "Lacute" => "\u{0139}",
    "lacute" => "\u{013A}",
    "Lcedil" => "\u{013B}",
    "lcedil" => "\u{013C}",
    "Lcaron" => "\u{013D}",
    "lcaron" => "\u{013E}",
    "Lmidot" => "\u{013F}",
    "lmidot" => "\u{0140}",
    "Lstrok" => "\u{0141}",
    "lstrok" => "\u{0142}",
    "Nacute" => "\u{0143}",
    "nacute" => "\u{0144}",
    "Ncedil" => "\u{0145}",
    "ncedil" => "\u{0146}",
    "Ncaron" => "\u{0147}",
    "ncaron" => "\u{0148}",
    "napos" => "\u{0149}",
    "ENG" => "\u{014A}",
    "eng" => "\u{014B}",
    "Omacr" => "\u{014C}",
    "omacr" => "\u{014D}",
    "Odblac" => "\u{0150}",
    "odblac" => "\u{0151}",
    "Racute" => "\u{0154}",
    "racute" => "\u{0155}",
    "Rcedil" => "\u{0156}",
    "rcedil" => "\u{0157}",
    "Rcaron" => "\u{0158}",
    "rcaron" => "\u{0159}",
    "Sacute" => "\u{015A}",
    "sacute" => "\u{015B}",
    "Scirc" => "\u{015C}",
    "scirc" => "\u{015D}",
    "Scedil" => "\u{015E}",
    "scedil" => "\u{015F}",
    "Tcedil" => "\u{0162}",
    "tcedil" => "\u{0163}",
    "Tcaron" => "\u{0164}",
    "tcaron" => "\u{0165}",
    "Tstrok" => "\u{0166}",
    "tstrok" => "\u{0167}",
    "Ubreve" => "\u{016C}",
    "ubreve" => "\u{016D}",
    "Uring" => "\u{016E}",
    "uring" => "\u{016F}",
    "Udblac" => "\u{0170}",
    "udblac" => "\u{0171}",
    "Uogon" => "\u{0172}",
    "uogon" => "\u{0173}",
    "Wcirc" => "\u{0174}",
    "wcirc" => "\u{0175}",
    "Ycirc" => "\u{0176}",
    "ycirc" => "\u{0177}",
    "Zacute" => "\u{0179}",
    "zacute" => "\u{017A}",
    "Zdot" => "\u{017B}",
    "zdot" => "\u{017C}",
    "Zcaron" => "\u{017D}",
    "zcaron" => "\u{017E}",

    // Greek extras beyond the core alphabet
    "thetasym" => "\u{03D1}",
    "thetav" => "\u{03D1}",
    "upsih" => "\u{03D2}",
    "straightphi" => "\u{03D5}",
    "piv" => "\u{03D6}",
    "Gammad" => "\u{03DC}",
    "gammad" => "\u{03DD}",
    "Digamma" => "\u{03DC}",
    "digamma" => "\u{03DD}",
    "kappav" => "\u{03F0}",
    "rhov" => "\u{03F1}",
    "backepsilon" => "\u{03F6}",

    // Letterlike symbols
    "CapitalDifferentialD" => "\u{2145}",
    "DD" => "\u{2145}",
    "DifferentialD" => "\u{2146}",
    "dd" => "\u{2146}",
    "ExponentialE" => "\u{2147}",
    "ee" => "\u{2147}",
    "ImaginaryI" => "\u{2148}",
    "ii" => "\u{2148}",
    "aleph" => "\u{2135}",
    "beth" => "\u{2136}",
    "gimel" => "\u{2137}",
    "daleth" => "\u{2138}",
    "weierp" => "\u{2118}",
    "wp" => "\u{2118}",
    "image" => "\u{2111}",
    "imagpart" => "\u{2111}",
    "Im" => "\u{2111}",
    "real" => "\u{211C}",
    "realpart" => "\u{211C}",
    "Re" => "\u{211C}",
    "complexes" => "\u{2102}",
    "naturals" => "\u{2115}",
    "primes" => "\u{2119}",
    "rationals" => "\u{211A}",
    "integers" => "\u{2124}",
    "angst" => "\u{212B}",
    "bernou" => "\u{212C}",
    "Bernoullis" => "\u{212C}",
    "Cayleys" => "\u{212D}",
    "Fouriertrf" => "\u{2131}",
    "hamilt" => "\u{210B}",
    "Hilbertspace" => "\u{210B}",
    "Lagrangian" => "\u{2112}",
    "lagran" => "\u{2112}",
    "Laplacetrf" => "\u{2112}",
    "Mellintrf" => "\u{2133}",
    "phmmat" => "\u{2133}",
    "order" => "\u{2134}",
    "orderof" => "\u{2134}",
    "planck" => "\u{210F}",
    "hbar" => "\u{210F}",
    "planckh" => "\u{210E}",
    "plankv" => "\u{210F}",
    "wreath" => "\u{2240}",
    "ell" => "\u{2113}",

    // Arrows beyond the basic set
    "nwarr" => "\u{2196}",
    "nwarrow" => "\u{2196}",
    "nearr" => "\u{2197}",
    "nearrow" => "\u{2197}",
    "searr" => "\u{2198}",
    "searrow" => "\u{2198}",
    "swarr" => "\u{2199}",
    "swarrow" => "\u{2199}",
    "nlarr" => "\u{219A}",
    "nleftarrow" => "\u{219A}",
    "nrarr" => "\u{219B}",
    "nrightarrow" => "\u{219B}",
    "rarrw" => "\u{219D}",
    "Larr" => "\u{219E}",
    "twoheadleftarrow" => "\u{219E}",
    "Uarr" => "\u{219F}",
    "Rarr" => "\u{21A0}",
    "twoheadrightarrow" => "\u{21A0}",
    "Darr" => "\u{21A1}",
    "larrtl" => "\u{21A2}",
    "leftarrowtail" => "\u{21A2}",
    "rarrtl" => "\u{21A3}",
    "rightarrowtail" => "\u{21A3}",
    "LeftTeeArrow" => "\u{21A4}",
    "mapstoleft" => "\u{21A4}",
    "UpTeeArrow" => "\u{21A5}",
    "mapstoup" => "\u{21A5}",
    "map" => "\u{21A6}",
    "RightTeeArrow" => "\u{21A6}",
    "mapsto" => "\u{21A6}",
    "DownTeeArrow" => "\u{21A7}",
    "mapstodown" => "\u{21A7}",
    "hookleftarrow" => "\u{21A9}",
    "larrhk" => "\u{21A9}",
    "hookrightarrow" => "\u{21AA}",
    "rarrhk" => "\u{21AA}",
    "larrlp" => "\u{21AB}",
    "looparrowleft" => "\u{21AB}",
    "rarrlp" => "\u{21AC}",
    "looparrowright" => "\u{21AC}",
    "harrw" => "\u{21AD}",
    "leftrightsquigarrow" => "\u{21AD}",
    "nharr" => "\u{21AE}",
    "nleftrightarrow" => "\u{21AE}",
    "lsh" => "\u{21B0}",
    "Lsh" => "\u{21B0}",
    "rsh" => "\u{21B1}",
    "Rsh" => "\u{21B1}",
    "ldsh" => "\u{21B2}",
    "rdsh" => "\u{21B3}",
    "cularr" => "\u{21B6}",
    "curvearrowleft" => "\u{21B6}",
    "curarr" => "\u{21B7}",
    "curvearrowright" => "\u{21B7}",
    "olarr" => "\u{21BA}",
    "circlearrowleft" => "\u{21BA}",
    "orarr" => "\u{21BB}",
    "circlearrowright" => "\u{21BB}",
    "lharu" => "\u{21BC}",
    "LeftVector" => "\u{21BC}",
    "leftharpoonup" => "\u{21BC}",
    "lhard" => "\u{21BD}",
    "leftharpoondown" => "\u{21BD}",
    "uharr" => "\u{21BE}",
    "upharpoonright" => "\u{21BE}",
    "uharl" => "\u{21BF}",
    "upharpoonleft" => "\u{21BF}",
    "rharu" => "\u{21C0}",
    "RightVector" => "\u{21C0}",
    "rightharpoonup" => "\u{21C0}",
    "rhard" => "\u{21C1}",
    "rightharpoondown" => "\u{21C1}",
    "dharr" => "\u{21C2}",
    "downharpoonright" => "\u{21C2}",
    "dharl" => "\u{21C3}",
    "downharpoonleft" => "\u{21C3}",
    "rlarr" => "\u{21C4}",
    "rightleftarrows" => "\u{21C4}",
    "RightArrowLeftArrow" => "\u{21C4}",
    "udarr" => "\u{21C5}",
    "UpArrowDownArrow" => "\u{21C5}",
    "lrarr" => "\u{21C6}",
    "leftrightarrows" => "\u{21C6}",
    "LeftArrowRightArrow" => "\u{21C6}",
    "llarr" => "\u{21C7}",
    "leftleftarrows" => "\u{21C7}",
    "uuarr" => "\u{21C8}",
    "upuparrows" => "\u{21C8}",
    "rrarr" => "\u{21C9}",
    "rightrightarrows" => "\u{21C9}",
    "ddarr" => "\u{21CA}",
    "downdownarrows" => "\u{21CA}",
    "lrhar" => "\u{21CB}",
    "ReverseEquilibrium" => "\u{21CB}",
    "leftrightharpoons" => "\u{21CB}",
    "rlhar" => "\u{21CC}",
    "rightleftharpoons" => "\u{21CC}",
    "Equilibrium" => "\u{21CC}",
    "nlArr" => "\u{21CD}",
    "nLeftarrow" => "\u{21CD}",
    "nhArr" => "\u{21CE}",
    "nLeftrightarrow" => "\u{21CE}",
    "nrArr" => "\u{21CF}",
    "nRightarrow" => "\u{21CF}",
    "Lleftarrow" => "\u{21DA}",
    "lAarr" => "\u{21DA}",
    "Rrightarrow" => "\u{21DB}",
    "rAarr" => "\u{21DB}",
    "zigrarr" => "\u{21DD}",
    "larrb" => "\u{21E4}",
    "LeftArrowBar" => "\u{21E4}",
    "rarrb" => "\u{21E5}",
    "RightArrowBar" => "\u{21E5}",

    // Mathematical operators beyond the core set
    "NotExists" => "\u{2204}",
    "nexist" => "\u{2204}",
    "nexists" => "\u{2204}",
    "niv" => "\u{220B}",
    "SuchThat" => "\u{220B}",
    "notni" => "\u{220C}",
    "notniva" => "\u{220C}",
    "Coproduct" => "\u{2210}",
    "coprod" => "\u{2210}",
    "mp" => "\u{2213}",
    "MinusPlus" => "\u{2213}",
    "plusdo" => "\u{2214}",
    "dotplus" => "\u{2214}",
    "Backslash" => "\u{2216}",
    "setminus" => "\u{2216}",
    "ssetmn" => "\u{2216}",
    "smallsetminus" => "\u{2216}",
    "compfn" => "\u{2218}",
    "SmallCircle" => "\u{2218}",
    "angrt" => "\u{221F}",
    "angle" => "\u{2220}",
    "angmsd" => "\u{2221}",
    "measuredangle" => "\u{2221}",
    "angsph" => "\u{2222}",
    "mid" => "\u{2223}",
    "VerticalBar" => "\u{2223}",
    "smid" => "\u{2223}",
    "nmid" => "\u{2224}",
    "NotVerticalBar" => "\u{2224}",
    "nsmid" => "\u{2224}",
    "par" => "\u{2225}",
    "parallel" => "\u{2225}",
    "shortparallel" => "\u{2225}",
    "spar" => "\u{2225}",
    "npar" => "\u{2226}",
    "nparallel" => "\u{2226}",
    "nshortparallel" => "\u{2226}",
    "nspar" => "\u{2226}",
    "wedge" => "\u{2227}",
    "vee" => "\u{2228}",
    "Int" => "\u{222C}",
    "iiint" => "\u{222D}",
    "oint" => "\u{222E}",
    "conint" => "\u{222E}",
    "ContourIntegral" => "\u{222E}",
    "Conint" => "\u{222F}",
    "DoubleContourIntegral" => "\u{222F}",
    "Cconint" => "\u{2230}",
    "cwint" => "\u{2231}",
    "cwconint" => "\u{2232}",
    "ClockwiseContourIntegral" => "\u{2232}",
    "awconint" => "\u{2233}",
    "CounterClockwiseContourIntegral" => "\u{2233}",
    "because" => "\u{2235}",
    "Because" => "\u{2235}",
    "ratio" => "\u{2236}",
    "Colon" => "\u{2237}",
    "Proportion" => "\u{2237}",
    "minusd" => "\u{2238}",
    "dotminus" => "\u{2238}",
    "mDDot" => "\u{223A}",
    "homtht" => "\u{223B}",
    "thksim" => "\u{223C}",
    "thicksim" => "\u{223C}",
    "backsim" => "\u{223D}",
    "bsim" => "\u{223D}",
    "ac" => "\u{223E}",
    "acd" => "\u{223F}",
    "wr" => "\u{2240}",
    "nsim" => "\u{2241}",
    "NotTilde" => "\u{2241}",
    "esim" => "\u{2242}",
    "EqualTilde" => "\u{2242}",
    "eqsim" => "\u{2242}",
    "sime" => "\u{2243}",
    "TildeEqual" => "\u{2243}",
    "simeq" => "\u{2243}",
    "nsime" => "\u{2244}",
    "nsimeq" => "\u{2244}",
    "NotTildeEqual" => "\u{2244}",
    "simne" => "\u{2246}",
    "ncong" => "\u{2247}",
    "NotTildeFullEqual" => "\u{2247}",
    "ap" => "\u{2248}",
    "TildeTilde" => "\u{2248}",
    "approx" => "\u{2248}",
    "thkap" => "\u{2248}",
    "thickapprox" => "\u{2248}",
    "nap" => "\u{2249}",
    "NotTildeTilde" => "\u{2249}",
    "napprox" => "\u{2249}",
    "ape" => "\u{224A}",
    "approxeq" => "\u{224A}",
    "apid" => "\u{224B}",
    "bcong" => "\u{224C}",
    "backcong" => "\u{224C}",
    "asympeq" => "\u{224D}",
    "CupCap" => "\u{224D}",
    "bump" => "\u{224E}",
    "HumpDownHump" => "\u{224E}",
    "Bumpeq" => "\u{224E}",
    "bumpe" => "\u{224F}",
    "HumpEqual" => "\u{224F}",
    "bumpeq" => "\u{224F}",
    "esdot" => "\u{2250}",
    "DotEqual" => "\u{2250}",
    "doteq" => "\u{2250}",
    "eDot" => "\u{2251}",
    "doteqdot" => "\u{2251}",
    "efDot" => "\u{2252}",
    "fallingdotseq" => "\u{2252}",
    "erDot" => "\u{2253}",
    "risingdotseq" => "\u{2253}",
    "colone" => "\u{2254}",
    "coloneq" => "\u{2254}",
    "Assign" => "\u{2254}",
    "ecolon" => "\u{2255}",
    "eqcolon" => "\u{2255}",
    "ecir" => "\u{2256}",
    "eqcirc" => "\u{2256}",
    "cire" => "\u{2257}",
    "circeq" => "\u{2257}",
    "wedgeq" => "\u{2259}",
    "veeeq" => "\u{225A}",
    "trie" => "\u{225C}",
    "triangleq" => "\u{225C}",
    "equest" => "\u{225F}",
    "questeq" => "\u{225F}",
    "Congruent" => "\u{2261}",
    "nequiv" => "\u{2262}",
    "NotCongruent" => "\u{2262}",
    "lE" => "\u{2266}",
    "LessFullEqual" => "\u{2266}",
    "leqq" => "\u{2266}",
    "gE" => "\u{2267}",
    "GreaterFullEqual" => "\u{2267}",
    "geqq" => "\u{2267}",
    "lnE" => "\u{2268}",
    "lneqq" => "\u{2268}",
    "gnE" => "\u{2269}",
    "gneqq" => "\u{2269}",
    "Lt" => "\u{226A}",
    "NestedLessLess" => "\u{226A}",
    "ll" => "\u{226A}",
    "Gt" => "\u{226B}",
    "NestedGreaterGreater" => "\u{226B}",
    "gg" => "\u{226B}",
    "between" => "\u{226C}",
    "twixt" => "\u{226C}",
    "NotCupCap" => "\u{226D}",
    "nlt" => "\u{226E}",
    "NotLess" => "\u{226E}",
    "nless" => "\u{226E}",
    "ngt" => "\u{226F}",
    "NotGreater" => "\u{226F}",
    "ngtr" => "\u{226F}",
    "nle" => "\u{2270}",
    "NotLessEqual" => "\u{2270}",
    "nleq" => "\u{2270}",
    "nge" => "\u{2271}",
    "NotGreaterEqual" => "\u{2271}",
    "ngeq" => "\u{2271}",
    "lsim" => "\u{2272}",
    "LessTilde" => "\u{2272}",
    "lesssim" => "\u{2272}",
    "gsim" => "\u{2273}",
    "gtrsim" => "\u{2273}",
    "GreaterTilde" => "\u{2273}",
    "nlsim" => "\u{2274}",
    "NotLessTilde" => "\u{2274}",
    "ngsim" => "\u{2275}",
    "NotGreaterTilde" => "\u{2275}",
    "lg" => "\u{2276}",
    "lessgtr" => "\u{2276}",
    "LessGreater" => "\u{2276}",
    "gl" => "\u{2277}",
    "gtrless" => "\u{2277}",
    "GreaterLess" => "\u{2277}",
    "ntlg" => "\u{2278}",
    "NotLessGreater" => "\u{2278}",
    "ntgl" => "\u{2279}",
    "NotGreaterLess" => "\u{2279}",
    "pr" => "\u{227A}",
    "Precedes" => "\u{227A}",
    "prec" => "\u{227A}",
    "sc" => "\u{227B}",
    "Succeeds" => "\u{227B}",
    "succ" => "\u{227B}",
    "prcue" => "\u{227C}",
    "PrecedesSlantEqual" => "\u{227C}",
    "preccurlyeq" => "\u{227C}",
    "sccue" => "\u{227D}",
    "SucceedsSlantEqual" => "\u{227D}",
    "succcurlyeq" => "\u{227D}",
    "prsim" => "\u{227E}",
    "precsim" => "\u{227E}",
    "PrecedesTilde" => "\u{227E}",
    "scsim" => "\u{227F}",
    "succsim" => "\u{227F}",
    "SucceedsTilde" => "\u{227F}",
    "npr" => "\u{2280}",
    "nprec" => "\u{2280}",
    "NotPrecedes" => "\u{2280}",
    "nsc" => "\u{2281}",
    "nsucc" => "\u{2281}",
    "NotSucceeds" => "\u{2281}",
    "subset" => "\u{2282}",
    "supset" => "\u{2283}",
    "Superset" => "\u{2283}",
    "nsup" => "\u{2285}",
    "SubsetEqual" => "\u{2286}",
    "SupersetEqual" => "\u{2287}",
    "nsube" => "\u{2288}",
    "NotSubsetEqual" => "\u{2288}",
    "nsubseteq" => "\u{2288}",
    "nsupe" => "\u{2289}",
    "NotSupersetEqual" => "\u{2289}",
    "nsupseteq" => "\u{2289}",
    "subne" => "\u{228A}",
    "subsetneq" => "\u{228A}",
    "supne" => "\u{228B}",
    "supsetneq" => "\u{228B}",
    "cupdot" => "\u{228D}",
    "uplus" => "\u{228E}",
    "UnionPlus" => "\u{228E}",
    "sqsub" => "\u{228F}",
    "SquareSubset" => "\u{228F}",
    "sqsubset" => "\u{228F}",
    "sqsup" => "\u{2290}",
    "SquareSuperset" => "\u{2290}",
    "sqsupset" => "\u{2290}",
    "sqsube" => "\u{2291}",
    "SquareSubsetEqual" => "\u{2291}",
    "sqsubseteq" => "\u{2291}",
    "sqsupe" => "\u{2292}",
    "SquareSupersetEqual" => "\u{2292}",
    "sqsupseteq" => "\u{2292}",
    "sqcap" => "\u{2293}",
    "SquareIntersection" => "\u{2293}",
    "sqcup" => "\u{2294}",
    "SquareUnion" => "\u{2294}",
    "CirclePlus" => "\u{2295}",
    "ominus" => "\u{2296}",
    "CircleMinus" => "\u{2296}",
    "CircleTimes" => "\u{2297}",
    "osol" => "\u{2298}",
    "odot" => "\u{2299}",
    "CircleDot" => "\u{2299}",
    "ocir" => "\u{229A}",
    "circledcirc" => "\u{229A}",
    "oast" => "\u{229B}",
    "circledast" => "\u{229B}",
    "odash" => "\u{229D}",
    "circleddash" => "\u{229D}",
    "plusb" => "\u{229E}",
    "boxplus" => "\u{229E}",
    "minusb" => "\u{229F}",
    "boxminus" => "\u{229F}",
    "timesb" => "\u{22A0}",
    "boxtimes" => "\u{22A0}",
    "sdotb" => "\u{22A1}",
    "dotsquare" => "\u{22A1}",
    "vdash" => "\u{22A2}",
    "RightTee" => "\u{22A2}",
    "dashv" => "\u{22A3}",
    "LeftTee" => "\u{22A3}",
    "top" => "\u{22A4}",
    "DownTee" => "\u{22A4}",
    "bot" => "\u{22A5}",
    "bottom" => "\u{22A5}",
    "UpTee" => "\u{22A5}",
    "models" => "\u{22A7}",
    "vDash" => "\u{22A8}",
    "DoubleRightTee" => "\u{22A8}",
    "Vdash" => "\u{22A9}",
    "Vvdash" => "\u{22AA}",
    "VDash" => "\u{22AB}",
    "nvdash" => "\u{22AC}",
    "nvDash" => "\u{22AD}",
    "nVdash" => "\u{22AE}",
    "nVDash" => "\u{22AF}",
    "prurel" => "\u{22B0}",
    "vltri" => "\u{22B2}",
    "vartriangleleft" => "\u{22B2}",
    "LeftTriangle" => "\u{22B2}",
    "vrtri" => "\u{22B3}",
    "vartriangleright" => "\u{22B3}",
    "RightTriangle" => "\u{22B3}",
    "ltrie" => "\u{22B4}",
    "trianglelefteq" => "\u{22B4}",
    "LeftTriangleEqual" => "\u{22B4}",
    "rtrie" => "\u{22B5}",
    "trianglerighteq" => "\u{22B5}",
    "RightTriangleEqual" => "\u{22B5}",
    "origof" => "\u{22B6}",
    "imof" => "\u{22B7}",
    "mumap" => "\u{22B8}",
    "multimap" => "\u{22B8}",
    "hercon" => "\u{22B9}",
    "intcal" => "\u{22BA}",
    "intercal" => "\u{22BA}",
    "veebar" => "\u{22BB}",
    "barvee" => "\u{22BD}",
    "angrtvb" => "\u{22BE}",
    "lrtri" => "\u{22BF}",
    "xwedge" => "\u{22C0}",
    "Wedge" => "\u{22C0}",
    "bigwedge" => "\u{22C0}",
    "xvee" => "\u{22C1}",
    "Vee" => "\u{22C1}",
    "bigvee" => "\u{22C1}",
    "xcap" => "\u{22C2}",
    "Intersection" => "\u{22C2}",
    "bigcap" => "\u{22C2}",
    "xcup" => "\u{22C3}",
    "Union" => "\u{22C3}",
    "bigcup" => "\u{22C3}",
    "diam" => "\u{22C4}",
    "diamond" => "\u{22C4}",
    "Diamond" => "\u{22C4}",
    "sstarf" => "\u{22C6}",
    "Star" => "\u{22C6}",
    "divonx" => "\u{22C7}",
    "divideontimes" => "\u{22C7}",
    "bowtie" => "\u{22C8}",
    "ltimes" => "\u{22C9}",
    "rtimes" => "\u{22CA}",
    "lthree" => "\u{22CB}",
    "leftthreetimes" => "\u{22CB}",
    "rthree" => "\u{22CC}",
    "rightthreetimes" => "\u{22CC}",
    "bsime" => "\u{22CD}",
    "backsimeq" => "\u{22CD}",
    "cuvee" => "\u{22CE}",
    "curlyvee" => "\u{22CE}",
    "cuwed" => "\u{22CF}",
    "curlywedge" => "\u{22CF}",
    "Sub" => "\u{22D0}",
    "Subset" => "\u{22D0}",
    "Sup" => "\u{22D1}",
    "Supset" => "\u{22D1}",
    "Cap" => "\u{22D2}",
    "Cup" => "\u{22D3}",
    "fork" => "\u{22D4}",
    "pitchfork" => "\u{22D4}",
    "epar" => "\u{22D5}",
    "ltdot" => "\u{22D6}",
    "lessdot" => "\u{22D6}",
    "gtdot" => "\u{22D7}",
    "gtrdot" => "\u{22D7}",
    "Ll" => "\u{22D8}",
    "Gg" => "\u{22D9}",
    "ggg" => "\u{22D9}",
    "leg" => "\u{22DA}",
    "LessEqualGreater" => "\u{22DA}",
    "lesseqgtr" => "\u{22DA}",
    "gel" => "\u{22DB}",
    "gtreqless" => "\u{22DB}",
    "GreaterEqualLess" => "\u{22DB}",
    "cuepr" => "\u{22DE}",
    "curlyeqprec" => "\u{22DE}",
    "cuesc" => "\u{22DF}",
    "curlyeqsucc" => "\u{22DF}",
    "nprcue" => "\u{22E0}",
    "NotPrecedesSlantEqual" => "\u{22E0}",
    "nsccue" => "\u{22E1}",
    "NotSucceedsSlantEqual" => "\u{22E1}",
    "nsqsube" => "\u{22E2}",
    "NotSquareSubsetEqual" => "\u{22E2}",
    "nsqsupe" => "\u{22E3}",
    "NotSquareSupersetEqual" => "\u{22E3}",
    "lnsim" => "\u{22E6}",
    "gnsim" => "\u{22E7}",
    "prnsim" => "\u{22E8}",
    "precnsim" => "\u{22E8}",
    "scnsim" => "\u{22E9}",
    "succnsim" => "\u{22E9}",
    "nltri" => "\u{22EA}",
    "ntriangleleft" => "\u{22EA}",
    "NotLeftTriangle" => "\u{22EA}",
    "nrtri" => "\u{22EB}",
    "ntriangleright" => "\u{22EB}",
    "NotRightTriangle" => "\u{22EB}",
    "nltrie" => "\u{22EC}",
    "ntrianglelefteq" => "\u{22EC}",
    "NotLeftTriangleEqual" => "\u{22EC}",
    "nrtrie" => "\u{22ED}",
    "ntrianglerighteq" => "\u{22ED}",
    "NotRightTriangleEqual" => "\u{22ED}",
    "vellip" => "\u{22EE}",
    "ctdot" => "\u{22EF}",
    "utdot" => "\u{22F0}",
    "dtdot" => "\u{22F1}",
    "disin" => "\u{22F2}",
    "isinsv" => "\u{22F3}",
    "isins" => "\u{22F4}",
    "isindot" => "\u{22F5}",
    "notinvc" => "\u{22F6}",
    "notinvb" => "\u{22F7}",
    "isinE" => "\u{22F9}",
    "nisd" => "\u{22FA}",
    "xnis" => "\u{22FB}",
    "nis" => "\u{22FC}",
    "notnivc" => "\u{22FD}",
    "notnivb" => "\u{22FE}",

    // Math alphabets: script, fraktur, and double-struck letters, per the
    // Unicode Mathematical Alphanumeric Symbols block, with the Letterlike
    // Symbols substitutions that block reserves (e.g. script B is U+212C,
    // not U+1D49D).
    "Ascr" => "\u{1D49C}",
    "Bscr" => "\u{212C}",
    "Cscr" => "\u{1D49E}",
    "Dscr" => "\u{1D49F}",
    "Escr" => "\u{2130}",
    "Fscr" => "\u{2131}",
    "Gscr" => "\u{1D4A2}",
    "Hscr" => "\u{210B}",
    "Iscr" => "\u{2110}",
    "Jscr" => "\u{1D4A5}",
    "Kscr" => "\u{1D4A6}",
    "Lscr" => "\u{2112}",
    "Mscr" => "\u{2133}",
    "Nscr" => "\u{1D4A9}",
    "Oscr" => "\u{1D4AA}",
    "Pscr" => "\u{1D4AB}",
    "Qscr" => "\u{1D4AC}",
    "Rscr" => "\u{211B}",
    "Sscr" => "\u{1D4AE}",
    "Tscr" => "\u{1D4AF}",
    "Uscr" => "\u{1D4B0}",
    "Vscr" => "\u{1D4B1}",
    "Wscr" => "\u{1D4B2}",
    "Xscr" => "\u{1D4B3}",
    "Yscr" => "\u{1D4B4}",
    "Zscr" => "\u{1D4B5}",
    "ascr" => "\u{1D4B6}",
    "bscr" => "\u{1D4B7}",
    "cscr" => "\u{1D4B8}",
    "dscr" => "\u{1D4B9}",
    "escr" => "\u{212F}",
    "fscr" => "\u{1D4BB}",
    "gscr" => "\u{210A}",
    "hscr" => "\u{1D4BD}",
    "iscr" => "\u{1D4BE}",
    "jscr" => "\u{1D4BF}",
    "kscr" => "\u{1D4C0}",
    "lscr" => "\u{1D4C1}",
    "mscr" => "\u{1D4C2}",
    "nscr" => "\u{1D4C3}",
    "oscr" => "\u{2134}",
    "pscr" => "\u{1D4C5}",
    "qscr" => "\u{1D4C6}",
    "rscr" => "\u{1D4C7}",
    "sscr" => "\u{1D4C8}",
    "tscr" => "\u{1D4C9}",
    "uscr" => "\u{1D4CA}",
    "vscr" => "\u{1D4CB}",
    "wscr" => "\u{1D4CC}",
    "xscr" => "\u{1D4CD}",
    "yscr" => "\u{1D4CE}",
    "zscr" => "\u{1D4CF}",
    "Afr" => "\u{1D504}",
    "Bfr" => "\u{1D505}",
    "Cfr" => "\u{212D}",
    "Dfr" => "\u{1D507}",
    "Efr" => "\u{1D508}",
    "Ffr" => "\u{1D509}",
    "Gfr" => "\u{1D50A}",
    "Hfr" => "\u{210C}",
    "Ifr" => "\u{2111}",
    "Jfr" => "\u{1D50D}",
    "Kfr" => "\u{1D50E}",
    "Lfr" => "\u{1D50F}",
    "Mfr" => "\u{1D510}",
    "Nfr" => "\u{1D511}",
    "Ofr" => "\u{1D512}",
    "Pfr" => "\u{1D513}",
    "Qfr" => "\u{1D514}",
    "Rfr" => "\u{211C}",
    "Sfr" => "\u{1D516}",
    "Tfr" => "\u{1D517}",
    "Ufr" => "\u{1D518}",
    "Vfr" => "\u{1D519}",
    "Wfr" => "\u{1D51A}",
    "Xfr" => "\u{1D51B}",
    "Yfr" => "\u{1D51C}",
    "Zfr" => "\u{2128}",
    "afr" => "\u{1D51E}",
    "bfr" => "\u{1D51F}",
    "cfr" => "\u{1D520}",
    "dfr" => "\u{1D521}",
    "efr" => "\u{1D522}",
    "ffr" => "\u{1D523}",
    "gfr" => "\u{1D524}",
    "hfr" => "\u{1D525}",
    "ifr" => "\u{1D526}",
    "jfr" => "\u{1D527}",
    "kfr" => "\u{1D528}",
    "lfr" => "\u{1D529}",
    "mfr" => "\u{1D52A}",
    "nfr" => "\u{1D52B}",
    "ofr" => "\u{1D52C}",
    "pfr" => "\u{1D52D}",
    "qfr" => "\u{1D52E}",
    "rfr" => "\u{1D52F}",
    "sfr" => "\u{1D530}",
    "tfr" => "\u{1D531}",
    "ufr" => "\u{1D532}",
    "vfr" => "\u{1D533}",
    "wfr" => "\u{1D534}",
    "xfr" => "\u{1D535}",
    "yfr" => "\u{1D536}",
    "zfr" => "\u{1D537}",
    "Aopf" => "\u{1D538}",
    "Bopf" => "\u{1D539}",
    "Copf" => "\u{2102}",
    "Dopf" => "\u{1D53B}",
    "Eopf" => "\u{1D53C}",
    "Fopf" => "\u{1D53D}",
    "Gopf" => "\u{1D53E}",
    "Hopf" => "\u{210D}",
    "Iopf" => "\u{1D540}",
    "Jopf" => "\u{1D541}",
    "Kopf" => "\u{1D542}",
    "Lopf" => "\u{1D543}",
    "Mopf" => "\u{1D544}",
    "Nopf" => "\u{2115}",
    "Oopf" => "\u{1D546}",
    "Popf" => "\u{2119}",
    "Qopf" => "\u{211A}",
    "Ropf" => "\u{211D}",
    "Sopf" => "\u{1D54A}",
    "Topf" => "\u{1D54B}",
    "Uopf" => "\u{1D54C}",
    "Vopf" => "\u{1D54D}",
    "Wopf" => "\u{1D54E}",
    "Xopf" => "\u{1D54F}",
    "Yopf" => "\u{1D550}",
    "Zopf" => "\u{2124}",
    "aopf" => "\u{1D552}",
    "bopf" => "\u{1D553}",
    "copf" => "\u{1D554}",
    "dopf" => "\u{1D555}",
    "eopf" => "\u{1D556}",
    "fopf" => "\u{1D557}",
    "gopf" => "\u{1D558}",
    "hopf" => "\u{1D559}",
    "iopf" => "\u{1D55A}",
    "jopf" => "\u{1D55B}",
    "kopf" => "\u{1D55C}",
    "lopf" => "\u{1D55D}",
    "mopf" => "\u{1D55E}",
    "nopf" => "\u{1D55F}",
    "oopf" => "\u{1D560}",
    "popf" => "\u{1D561}",
    "qopf" => "\u{1D562}",
    "ropf" => "\u{1D563}",
    "sopf" => "\u{1D564}",
    "topf" => "\u{1D565}",
    "uopf" => "\u{1D566}",
    "vopf" => "\u{1D567}",
    "wopf" => "\u{1D568}",
    "xopf" => "\u{1D569}",
    "yopf" => "\u{1D56A}",
    "zopf" => "\u{1D56B}",

    // Entities whose decoded value is more than one Unicode scalar value,
    // mostly base-symbol-plus-combining-mark pairs added for MathML parity.
    "acE" => "\u{223E}\u{0333}",
    "bne" => "=\u{20E5}",
    "bnequiv" => "\u{2261}\u{20E5}",
    "caps" => "\u{2229}\u{FE00}",
    "cups" => "\u{222A}\u{FE00}",
    "fjlig" => "fj",
    "gesl" => "\u{22DB}\u{FE00}",
    "gvertneqq" => "\u{2269}\u{FE00}",
    "gvnE" => "\u{2269}\u{FE00}",
    "lvertneqq" => "\u{2268}\u{FE00}",
    "lvnE" => "\u{2268}\u{FE00}",
    "nang" => "\u{2220}\u{20D2}",
    "napid" => "\u{224B}\u{0338}",
    "nbump" => "\u{224E}\u{0338}",
    "nbumpe" => "\u{224F}\u{0338}",
    "ncongdot" => "\u{2261}\u{0338}",
    "nedot" => "\u{2250}\u{0338}",
    "nesim" => "\u{2242}\u{0338}",
    "NotEqualTilde" => "\u{2242}\u{0338}",
    "ngE" => "\u{2267}\u{0338}",
    "ngeqq" => "\u{2267}\u{0338}",
    "nGg" => "\u{22D9}\u{0338}",
    "nGt" => "\u{226B}\u{20D2}",
    "nGtv" => "\u{226B}\u{0338}",
    "nLl" => "\u{22D8}\u{0338}",
    "nLt" => "\u{226A}\u{20D2}",
    "nLtv" => "\u{226A}\u{0338}",
    "nvap" => "\u{224D}\u{20D2}",
    "nvge" => "\u{2265}\u{20D2}",
    "nvgt" => ">\u{20D2}",
    "nvle" => "\u{2264}\u{20D2}",
    "nvlt" => "<\u{20D2}",
    "nvltrie" => "\u{22B4}\u{20D2}",
    "nvrtrie" => "\u{22B5}\u{20D2}",
    "nvsim" => "\u{223C}\u{20D2}",
    "race" => "\u{223D}\u{0331}",
    "smtes" => "\u{2AAC}\u{FE00}",
    "vnsub" => "\u{2282}\u{20D2}",
    "vnsup" => "\u{2283}\u{20D2}",
    "vsubnE" => "\u{2ACB}\u{FE00}",
    "vsubne" => "\u{228A}\u{FE00}",
    "vsupnE" => "\u{2ACC}\u{FE00}",
    "vsupne" => "\u{228B}\u{FE00}",
};

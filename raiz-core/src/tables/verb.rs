//! Verb suffixes

/// Verb forms beginning with `y`, removed only after `u`
pub const Y_VERB_SUFFIXES: &[&str] = &[
    "ya", "ye", "yan", "yen", "yeron", "yendo", "yo", "yó", "yas", "yes", "yais", "yamos",
];

/// Other verb suffixes grouped by length, longest group first
pub const OTHER_VERB_SUFFIX_GROUPS: [&[&str]; 6] = [
    // 7
    &["aríamos", "eríamos", "iríamos", "iéramos", "iésemos"],
    // 6
    &["aremos", "eremos", "iremos", "ábamos", "áramos", "ásemos"],
    // 5
    &[
        "arían", "arías", "erían", "erías", "irían", "irías", "aréis", "eréis", "iréis", "ieran",
        "ieras", "iesen", "ieses", "ieron", "iendo", "abais", "arais", "aseis", "íamos",
    ],
    // 4
    &[
        "arán", "arás", "erán", "erás", "irán", "irás", "aría", "ería", "iría", "abas", "adas",
        "aras", "idas", "idos", "íais", "amos", "imos", "ados", "iese", "iera", "aste", "iste",
        "aban", "aran", "aron", "asen", "ases", "ando",
    ],
    // 3
    &[
        "ará", "aré", "erá", "eré", "irá", "iré", "aba", "ada", "ara", "ida", "ido", "ado", "ían",
        "ías", "áis", "ase",
    ],
    // 2
    &["ía", "ís", "ad", "ed", "id", "an", "as", "ió", "ar", "er", "ir"],
];

/// Endings after which an orthographic `u` following `g` is dropped
pub const PLAIN_E_VERB_SUFFIXES: &[&str] = &["en", "es", "éis", "emos"];

//! Standard (derivational) suffixes, tried in table order

use super::SuffixRule;
use crate::region::Region;

/// Standard suffix rules in priority order; the first rule that matches wins
pub const STANDARD_RULES: [SuffixRule; 10] = [
    SuffixRule {
        suffixes: &[
            "anza", "anzas", "ico", "ica", "icos", "icas", "ismo", "ismos", "able", "ible",
            "ables", "ibles", "ista", "istas", "oso", "osa", "osos", "osas", "amiento", "imiento",
            "amientos", "imientos",
        ],
        region: Region::R2,
        replacement: "",
    },
    SuffixRule {
        suffixes: &[
            "adora", "ador", "ación", "adores", "adoras", "aciones", "ante", "antes", "ancia",
            "ancias", "icadora", "icador", "icación", "icadores", "icadoras", "icaciones",
            "icante", "icantes", "icancia", "icancias",
        ],
        region: Region::R2,
        replacement: "",
    },
    SuffixRule {
        suffixes: &["logía", "logías"],
        region: Region::R2,
        replacement: "log",
    },
    SuffixRule {
        suffixes: &["ución", "uciones"],
        region: Region::R2,
        replacement: "u",
    },
    SuffixRule {
        suffixes: &["encia", "encias"],
        region: Region::R2,
        replacement: "ente",
    },
    SuffixRule {
        suffixes: &["osamente", "icamente", "adamente", "ivamente", "ativamente"],
        region: Region::R2,
        replacement: "",
    },
    SuffixRule {
        suffixes: &["amente"],
        region: Region::R1,
        replacement: "",
    },
    SuffixRule {
        suffixes: &["mente", "antemente", "ablemente", "iblemente"],
        region: Region::R2,
        replacement: "",
    },
    SuffixRule {
        suffixes: &[
            "idad", "idades", "abilidad", "abilidades", "icidad", "icidades", "ividad", "ividades",
        ],
        region: Region::R2,
        replacement: "",
    },
    SuffixRule {
        suffixes: &["iva", "ivo", "ivas", "ivos", "ativa", "ativo", "ativas", "ativos"],
        region: Region::R2,
        replacement: "",
    },
];

//! Clickbait headline formulas, matched against lower-cased text.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! clickbait_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Spanish ────────────────────────────────────────────────────────────────
clickbait_pattern!(RE_NO_VAS_A_CREER, r"no vas a creer");
clickbait_pattern!(RE_NO_CREERAS, r"no creerás");
clickbait_pattern!(RE_LO_QUE_PASO, r"lo que pasó después");
clickbait_pattern!(RE_TE_SORPRENDERA, r"te sorprenderá");
clickbait_pattern!(RE_QUEDARAS_EN_SHOCK, r"quedarás en shock");
clickbait_pattern!(RE_NADIE_ESPERABA, r"nadie esperaba");
clickbait_pattern!(RE_LOS_N_QUE, r"los [0-9]+ [a-záéíóúñ]+ que");
clickbait_pattern!(RE_N_COSAS_QUE, r"[0-9]+ cosas que");

// ── English ────────────────────────────────────────────────────────────────
clickbait_pattern!(RE_WONT_BELIEVE, r"won'?t believe");
clickbait_pattern!(RE_WHAT_HAPPENED_NEXT, r"what happened next");
clickbait_pattern!(RE_WILL_SHOCK_YOU, r"will shock you");
clickbait_pattern!(RE_NUMBER_N_WILL, r"number [0-9]+ will");
clickbait_pattern!(RE_DOCTORS_HATE, r"doctors hate");
clickbait_pattern!(RE_ONE_TRICK, r"this one (?:weird )?trick");

/// Every clickbait formula, in a fixed order.
pub fn all_patterns() -> [&'static LazyLock<Option<Regex>>; 14] {
    [
        &RE_NO_VAS_A_CREER,
        &RE_NO_CREERAS,
        &RE_LO_QUE_PASO,
        &RE_TE_SORPRENDERA,
        &RE_QUEDARAS_EN_SHOCK,
        &RE_NADIE_ESPERABA,
        &RE_LOS_N_QUE,
        &RE_N_COSAS_QUE,
        &RE_WONT_BELIEVE,
        &RE_WHAT_HAPPENED_NEXT,
        &RE_WILL_SHOCK_YOU,
        &RE_NUMBER_N_WILL,
        &RE_DOCTORS_HATE,
        &RE_ONE_TRICK,
    ]
}

/// Number of distinct formulas present in `lowered`.
pub fn count(lowered: &str) -> usize {
    all_patterns()
        .into_iter()
        .filter(|p| super::is_match(p, lowered))
        .count()
}

//! Word lists and regexes the analyzer scores against.
//!
//! Word lists are compiled into [`Lexicon`](verity_core::Lexicon)s and so match
//! on word boundaries; a trailing `*` allows inflected endings.

pub mod clickbait;

use regex::Regex;
use std::sync::LazyLock;

macro_rules! style_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Shape of the text ──────────────────────────────────────────────────────
style_pattern!(RE_CAPS_WORD, r"\b[A-ZÁÉÍÓÚÑ]{3,}\b");
style_pattern!(RE_YEAR, r"\b(?:19|20)\d{2}\b");
style_pattern!(RE_NUMBER, r"\b\d+\b");

/// Attention-grabbing vocabulary.
pub const SENSATIONAL_WORDS: &[&str] = &[
    "urgente", "alerta", "shock", "increíble", "impactante", "impresionante",
    "secreto*", "oculto*", "prohibido*", "censurado*", "verdad", "revelado*",
    "exclusivo*", "bomba", "escándalo*", "peligro*", "milagro*", "mágico*",
    "urgent", "alert", "shocking", "unbelievable", "amazing", "secret", "secrets",
    "hidden", "banned", "censored", "truth", "revealed", "exclusive",
    "scandal*", "danger*", "miracle*", "magic*",
];

/// Hedges that push the burden of proof onto unnamed others.
pub const UNVERIFIABLE_PHRASES: &[&str] = &[
    "dicen que", "se rumorea", "según fuentes", "algunos expertos",
    "se dice que", "supuestamente", "aparentemente", "parece que",
    "se inventa", "inventado", "falso", "mentira", "engaño",
    "sources say", "allegedly", "reportedly", "apparently", "supposedly",
];

/// Subjects that need extraordinary evidence.
pub const EXTRAORDINARY_WORDS: &[&str] = &[
    "unicornio*", "alien*", "ovni*", "extraterrestre*", "milagro*",
    "sobrenatural*", "paranormal", "fantasma*", "monstruo*", "criatura*",
    "unicorn*", "ufo*", "ghost*", "monster*",
];

/// Markers that the text cites where it got its information.
pub const SOURCE_INDICATORS: &[&str] = &[
    "estudio", "investigación", "universidad", "científicos", "doctor",
    "profesor", "experto", "según", "de acuerdo", "publicado en",
    "study", "research", "university", "scientists", "professor", "expert",
    "according to", "published in",
];

/// Number of matches of an optional compiled pattern.
pub fn count_matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> usize {
    pattern.as_ref().map_or(0, |re| re.find_iter(text).count())
}

/// Whether an optional compiled pattern matches at all.
pub fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

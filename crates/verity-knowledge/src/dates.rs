//! Resolution of absolute and relative date expressions (English and Spanish).
//!
//! Relative expressions are resolved against an injected [`Clock`] so results
//! are reproducible in tests.

use std::sync::{Arc, LazyLock};

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use verity_core::traits::Clock;

macro_rules! date_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

/// Fixed relative phrases and their offset in days. Longer phrases come first
/// so that "anteayer" wins over "ayer".
const RELATIVE_PHRASES: &[(&str, u64)] = &[
    ("the day before yesterday", 2),
    ("day before yesterday", 2),
    ("hace una semana", 7),
    ("antes de ayer", 2),
    ("one month ago", 30),
    ("one week ago", 7),
    ("a month ago", 30),
    ("hace un mes", 30),
    ("a week ago", 7),
    ("last month", 30),
    ("yesterday", 1),
    ("last week", 7),
    ("anteayer", 2),
    ("antier", 2),
    ("today", 0),
    ("ayer", 1),
    ("hoy", 0),
];

date_pattern!(
    RE_RELATIVE,
    r"(?i)\b(the day before yesterday|day before yesterday|hace una semana|antes de ayer|one month ago|one week ago|a month ago|hace un mes|a week ago|last month|yesterday|last week|anteayer|antier|today|ayer|hoy)\b"
);
date_pattern!(
    RE_UNITS_AGO,
    r"(?i)\b(\d{1,4})\s+(days?|weeks?|months?)\s+ago\b"
);
date_pattern!(
    RE_HACE_UNITS,
    r"(?i)\bhace\s+(\d{1,4})\s+(d[ií]as?|semanas?|mes(?:es)?)\b"
);
date_pattern!(RE_ISO, r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b");
date_pattern!(RE_NUMERIC, r"\b(\d{1,2})[/.](\d{1,2})[/.](\d{4})\b");
date_pattern!(
    RE_EN_MONTH_FIRST,
    r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\.?\s+(\d{1,2})(?:st|nd|rd|th)?(?:,?\s+(\d{4}))?\b"
);
date_pattern!(
    RE_EN_DAY_FIRST,
    r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+(?:of\s+)?(january|february|march|april|may|june|july|august|september|october|november|december)(?:,?\s+(\d{4}))?\b"
);
date_pattern!(
    RE_ES,
    r"(?i)\b(\d{1,2})\s+de\s+(enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|setiembre|octubre|noviembre|diciembre)(?:\s+(?:de|del)\s+(\d{4}))?\b"
);

fn all_patterns() -> [&'static LazyLock<Option<Regex>>; 8] {
    [
        &RE_RELATIVE,
        &RE_UNITS_AGO,
        &RE_HACE_UNITS,
        &RE_ISO,
        &RE_NUMERIC,
        &RE_EN_MONTH_FIRST,
        &RE_EN_DAY_FIRST,
        &RE_ES,
    ]
}

/// Byte ranges of every date expression in `text`, in text order.
/// Overlapping candidates keep the earliest, then the longest.
pub fn date_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = all_patterns()
        .into_iter()
        .filter_map(|re| re.as_ref())
        .flat_map(|re| re.find_iter(text).map(|m| (m.start(), m.end())))
        .collect();
    spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut kept: Vec<(usize, usize)> = Vec::new();
    for span in spans {
        if kept.last().is_some_and(|last| span.0 < last.1) {
            continue;
        }
        kept.push(span);
    }
    kept
}

/// Turns date expressions into calendar days.
#[derive(Clone)]
pub struct DateResolver {
    clock: Arc<dyn Clock>,
}

impl DateResolver {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Resolve the first recognizable expression in `expr`. Relative phrases
    /// are tried before absolute dates; `None` when nothing parses.
    pub fn resolve(&self, expr: &str) -> Option<NaiveDate> {
        let today = self.today();
        self.resolve_relative(expr, today)
            .or_else(|| resolve_absolute(expr, today.year()))
    }

    fn resolve_relative(&self, expr: &str, today: NaiveDate) -> Option<NaiveDate> {
        if let Some(caps) = RE_RELATIVE.as_ref().and_then(|re| re.captures(expr)) {
            let phrase = caps[1].to_lowercase();
            let days = RELATIVE_PHRASES
                .iter()
                .find(|(p, _)| *p == phrase)
                .map(|(_, d)| *d)?;
            return today.checked_sub_days(Days::new(days));
        }

        let counted = RE_UNITS_AGO
            .as_ref()
            .and_then(|re| re.captures(expr))
            .or_else(|| RE_HACE_UNITS.as_ref().and_then(|re| re.captures(expr)))?;
        let count: u64 = counted[1].parse().ok()?;
        let unit = counted[2].to_lowercase();
        let per_unit = if unit.starts_with("week") || unit.starts_with("semana") {
            7
        } else if unit.starts_with("month") || unit.starts_with("mes") {
            30
        } else {
            1
        };
        today.checked_sub_days(Days::new(count * per_unit))
    }
}

impl std::fmt::Debug for DateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateResolver")
            .field("today", &self.clock.today())
            .finish()
    }
}

fn resolve_absolute(expr: &str, current_year: i32) -> Option<NaiveDate> {
    if let Some(c) = RE_ISO.as_ref().and_then(|re| re.captures(expr)) {
        return NaiveDate::from_ymd_opt(c[1].parse().ok()?, c[2].parse().ok()?, c[3].parse().ok()?);
    }
    if let Some(c) = RE_NUMERIC.as_ref().and_then(|re| re.captures(expr)) {
        let first: u32 = c[1].parse().ok()?;
        let second: u32 = c[2].parse().ok()?;
        let year: i32 = c[3].parse().ok()?;
        // Month first unless that cannot be a month.
        let (month, day) = if first > 12 { (second, first) } else { (first, second) };
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    if let Some(c) = RE_EN_MONTH_FIRST.as_ref().and_then(|re| re.captures(expr)) {
        let month = month_number(&c[1])?;
        let year = optional_year(c.get(3).map(|m| m.as_str()), current_year)?;
        return NaiveDate::from_ymd_opt(year, month, c[2].parse().ok()?);
    }
    if let Some(c) = RE_EN_DAY_FIRST.as_ref().and_then(|re| re.captures(expr)) {
        let month = month_number(&c[2])?;
        let year = optional_year(c.get(3).map(|m| m.as_str()), current_year)?;
        return NaiveDate::from_ymd_opt(year, month, c[1].parse().ok()?);
    }
    if let Some(c) = RE_ES.as_ref().and_then(|re| re.captures(expr)) {
        let month = month_number(&c[2])?;
        let year = optional_year(c.get(3).map(|m| m.as_str()), current_year)?;
        return NaiveDate::from_ymd_opt(year, month, c[1].parse().ok()?);
    }
    None
}

fn optional_year(raw: Option<&str>, current_year: i32) -> Option<i32> {
    match raw {
        Some(y) => y.parse().ok(),
        None => Some(current_year),
    }
}

/// Month number for an English (full or abbreviated) or Spanish month name.
pub fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().trim_end_matches('.') {
        "january" | "jan" | "enero" => 1,
        "february" | "feb" | "febrero" => 2,
        "march" | "mar" | "marzo" => 3,
        "april" | "apr" | "abril" => 4,
        "may" | "mayo" => 5,
        "june" | "jun" | "junio" => 6,
        "july" | "jul" | "julio" => 7,
        "august" | "aug" | "agosto" => 8,
        "september" | "sep" | "sept" | "septiembre" | "setiembre" => 9,
        "october" | "oct" | "octubre" => 10,
        "november" | "nov" | "noviembre" => 11,
        "december" | "dec" | "diciembre" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::traits::FixedClock;

    fn resolver() -> DateResolver {
        DateResolver::new(Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 2, 7).unwrap())))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anteayer_is_not_read_as_ayer() {
        assert_eq!(resolver().resolve("murió anteayer"), Some(ymd(2024, 2, 5)));
        assert_eq!(resolver().resolve("murió ayer"), Some(ymd(2024, 2, 6)));
    }

    #[test]
    fn day_before_yesterday_beats_yesterday() {
        assert_eq!(resolver().resolve("the day before yesterday"), Some(ymd(2024, 2, 5)));
    }

    #[test]
    fn months_count_as_thirty_days() {
        assert_eq!(resolver().resolve("hace 2 meses"), Some(ymd(2023, 12, 9)));
        assert_eq!(resolver().resolve("1 month ago"), Some(ymd(2024, 1, 8)));
    }

    #[test]
    fn numeric_dates_are_month_first_unless_impossible() {
        assert_eq!(resolver().resolve("2/6/2024"), Some(ymd(2024, 2, 6)));
        assert_eq!(resolver().resolve("13/2/2024"), Some(ymd(2024, 2, 13)));
    }

    #[test]
    fn spanish_dates_without_year_use_the_current_year() {
        assert_eq!(resolver().resolve("el 6 de febrero"), Some(ymd(2024, 2, 6)));
    }

    #[test]
    fn spans_prefer_the_longest_overlap() {
        let text = "falleció hace 3 días, el 6 de febrero de 2024";
        let spans: Vec<&str> = date_spans(text).into_iter().map(|(s, e)| &text[s..e]).collect();
        assert_eq!(spans, ["hace 3 días", "6 de febrero de 2024"]);
    }
}

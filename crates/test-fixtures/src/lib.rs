//! Test fixtures for the Verity workspace: golden cascade cases, mock
//! collaborators and pinned clocks.

pub mod mocks;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use verity_core::models::{ClassLabel, FactCheckClaim, NewsCorroboration, PersonRecord};
use verity_core::traits::{Clock, FixedClock};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Load every golden cascade case.
pub fn golden_cascade_cases() -> Vec<GoldenCase> {
    list_fixtures("golden/cascade")
        .into_iter()
        .map(|path| {
            let relative = path
                .strip_prefix(fixtures_root())
                .unwrap_or_else(|_| panic!("fixture outside root: {}", path.display()))
                .to_string_lossy()
                .into_owned();
            load_fixture(&relative)
        })
        .collect()
}

/// One end-to-end scenario for the fusion cascade.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    /// Day the clock is pinned to.
    pub today: NaiveDate,
    pub text: String,
    #[serde(default)]
    pub lookup: Vec<PersonRecord>,
    #[serde(default)]
    pub fact_checks: Vec<FactCheckClaim>,
    #[serde(default)]
    pub news: Option<NewsCorroboration>,
    #[serde(default)]
    pub classifier: Vec<ClassLabel>,
    pub expected: GoldenExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub method: String,
    pub label: String,
    pub score_min: f64,
    pub score_max: f64,
    #[serde(default)]
    pub confidence_min: f64,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub explanation_contains: Option<String>,
}

/// Shorthand for a calendar day.
///
/// # Panics
/// Panics on an invalid date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid date {year}-{month}-{day}"))
}

/// A shared clock pinned to one day.
pub fn fixed_clock(year: i32, month: u32, day: u32) -> Arc<dyn Clock> {
    Arc::new(FixedClock(date(year, month, day)))
}

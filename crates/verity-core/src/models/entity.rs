use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Key of an activity a canonical entity is recorded as never having done
/// (e.g. `alpaca_farming`). Each tag maps to a keyword lexicon in the seed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityTag(String);

impl ActivityTag {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized identity record for a real-world person with known attributes.
///
/// Seed data: built once when the knowledge base loads, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalEntity {
    /// Lower-cased normalized name; the identity key.
    pub name: String,
    /// Lower-cased alias phrases that resolve to this entity.
    #[serde(default)]
    pub aliases: BTreeSet<String>,
    /// `None` when liveness is not recorded.
    #[serde(default)]
    pub is_alive: Option<bool>,
    #[serde(default)]
    pub death_date: Option<NaiveDate>,
    /// Outlets that reported the death, for explanations.
    #[serde(default)]
    pub death_sources: Option<String>,
    #[serde(default)]
    pub is_professionally_active: Option<bool>,
    #[serde(default)]
    pub never_did: BTreeSet<ActivityTag>,
    /// Holds or held political office.
    #[serde(default)]
    pub politician: bool,
}

impl CanonicalEntity {
    /// Title-cased display name ("lionel messi" -> "Lionel Messi").
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }
}

/// Upper-case the first character of every whitespace-separated word.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

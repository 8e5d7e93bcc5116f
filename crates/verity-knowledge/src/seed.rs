//! Raw shape of the knowledge seed document.

use serde::Deserialize;
use verity_core::models::{ActivityTag, CanonicalEntity};

/// The seed compiled into the binary.
pub(crate) const EMBEDDED_SEED: &str = include_str!("../seed/knowledge.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SeedDocument {
    pub honorifics: Vec<String>,
    pub entities: Vec<CanonicalEntity>,
    pub activities: Vec<ActivitySeed>,
    pub topics: Vec<TopicSeed>,
    pub events: EventSeed,
    pub lexicons: LexiconSeed,
    pub gazetteer: GazetteerSeed,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActivitySeed {
    pub tag: ActivityTag,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopicSeed {
    pub key: String,
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EventSeed {
    pub death: Vec<String>,
    pub earthquake: Vec<String>,
    pub fire: Vec<String>,
    pub accident: Vec<String>,
    pub election: Vec<String>,
    pub resignation: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LexiconSeed {
    pub death_veto: Vec<String>,
    pub retirement: Vec<String>,
    pub political_office: Vec<String>,
    pub politicians: Vec<String>,
    pub attribution: Vec<String>,
    pub time_keywords: Vec<String>,
    pub fact_check_false: Vec<String>,
    pub fact_check_true: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GazetteerSeed {
    pub locations: Vec<String>,
    pub organizations: Vec<String>,
    pub person_stopwords: Vec<String>,
}

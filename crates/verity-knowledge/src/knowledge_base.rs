//! The immutable knowledge table shared by every stage of the cascade.

use std::collections::{BTreeMap, HashMap, HashSet};

use verity_core::errors::{VerityError, VerityResult};
use verity_core::models::{ActivityTag, CanonicalEntity, EventType};
use verity_core::Lexicon;

use crate::seed::{SeedDocument, EMBEDDED_SEED};

/// An activity a canonical entity is recorded as never having done.
#[derive(Debug, Clone)]
pub struct Activity {
    pub tag: ActivityTag,
    /// Human-readable description used in explanations.
    pub description: String,
    pub keywords: Lexicon,
}

/// A controversial political topic.
#[derive(Debug, Clone)]
pub struct Topic {
    pub key: String,
    /// Human-readable name used in explanations.
    pub name: String,
    pub keywords: Lexicon,
}

/// Named places or organizations recognized by the rule tagger.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    lexicon: Lexicon,
    display: HashMap<String, String>,
}

impl Gazetteer {
    fn new(name: &str, entries: &[String]) -> VerityResult<Self> {
        let display = entries
            .iter()
            .map(|e| (e.trim().to_lowercase(), e.trim().to_string()))
            .collect();
        Ok(Self {
            lexicon: Lexicon::new(name, entries)?,
            display,
        })
    }

    /// Display names of the entries found in a lower-cased text, in text order.
    pub fn find(&self, lowered: &str) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        for m in self.lexicon.matches(lowered) {
            if let Some(name) = self.display.get(&m.phrase) {
                if !found.contains(&name.as_str()) {
                    found.push(name);
                }
            }
        }
        found
    }

    /// Whether `phrase` is exactly one of the entries, ignoring case.
    pub fn contains(&self, phrase: &str) -> bool {
        self.display.contains_key(&phrase.trim().to_lowercase())
    }
}

/// Canonical entities, aliases, lexicons and gazetteers.
///
/// Built once, then only read. Share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entities: Vec<CanonicalEntity>,
    alias_index: HashMap<String, usize>,
    aliases: Lexicon,
    honorifics: Vec<String>,
    activities: BTreeMap<ActivityTag, Activity>,
    topics: Vec<Topic>,
    events: Vec<(EventType, Lexicon)>,
    death_veto: Lexicon,
    retirement: Lexicon,
    political_office: Lexicon,
    politicians: Lexicon,
    attribution: Lexicon,
    fact_check_false: Lexicon,
    fact_check_true: Lexicon,
    time_keywords: Vec<String>,
    locations: Gazetteer,
    organizations: Gazetteer,
    person_stopwords: HashSet<String>,
}

impl KnowledgeBase {
    /// Load the seed compiled into the crate.
    pub fn embedded() -> VerityResult<Self> {
        Self::from_toml(EMBEDDED_SEED)
    }

    /// Load a seed document from TOML.
    pub fn from_toml(toml_str: &str) -> VerityResult<Self> {
        let doc: SeedDocument = toml::from_str(toml_str).map_err(|e| VerityError::Seed {
            reason: e.to_string(),
        })?;
        Self::from_seed(doc)
    }

    fn from_seed(doc: SeedDocument) -> VerityResult<Self> {
        let mut activities = BTreeMap::new();
        for seed in doc.activities {
            let keywords = Lexicon::new(format!("activity:{}", seed.tag), &seed.keywords)?;
            activities.insert(
                seed.tag.clone(),
                Activity {
                    tag: seed.tag,
                    description: seed.description,
                    keywords,
                },
            );
        }

        let mut entities = Vec::with_capacity(doc.entities.len());
        let mut alias_index: HashMap<String, usize> = HashMap::new();
        let mut alias_phrases: Vec<String> = Vec::new();
        for mut entity in doc.entities {
            entity.name = collapse(&entity.name.to_lowercase());
            if entity.name.is_empty() {
                return Err(seed_err("entity with an empty name".to_string()));
            }
            if entities.iter().any(|e: &CanonicalEntity| e.name == entity.name) {
                return Err(seed_err(format!("duplicate entity '{}'", entity.name)));
            }
            if let Some(tag) = entity.never_did.iter().find(|t| !activities.contains_key(*t)) {
                return Err(seed_err(format!(
                    "entity '{}' references unknown activity '{tag}'",
                    entity.name
                )));
            }

            let idx = entities.len();
            entity.aliases = entity
                .aliases
                .iter()
                .map(|a| collapse(&a.to_lowercase()))
                .filter(|a| !a.is_empty())
                .chain(std::iter::once(entity.name.clone()))
                .collect();
            for alias in &entity.aliases {
                match alias_index.get(alias) {
                    Some(&other) if other != idx => {
                        return Err(seed_err(format!(
                            "alias '{alias}' maps to both '{}' and '{}'",
                            entities[other].name, entity.name
                        )));
                    }
                    Some(_) => {}
                    None => {
                        alias_index.insert(alias.clone(), idx);
                        alias_phrases.push(alias.clone());
                    }
                }
            }
            entities.push(entity);
        }

        let topics = doc
            .topics
            .into_iter()
            .map(|t| {
                Ok(Topic {
                    keywords: Lexicon::new(format!("topic:{}", t.key), &t.keywords)?,
                    key: t.key,
                    name: t.name,
                })
            })
            .collect::<VerityResult<Vec<_>>>()?;

        let ev = &doc.events;
        let events = vec![
            (EventType::Death, Lexicon::new("event:death", &ev.death)?),
            (EventType::Earthquake, Lexicon::new("event:earthquake", &ev.earthquake)?),
            (EventType::Fire, Lexicon::new("event:fire", &ev.fire)?),
            (EventType::Accident, Lexicon::new("event:accident", &ev.accident)?),
            (EventType::Election, Lexicon::new("event:election", &ev.election)?),
            (EventType::Resignation, Lexicon::new("event:resignation", &ev.resignation)?),
        ];

        let mut honorifics: Vec<String> = doc
            .honorifics
            .iter()
            .map(|h| collapse(&h.to_lowercase()))
            .filter(|h| !h.is_empty())
            .collect();
        honorifics.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let lx = &doc.lexicons;
        let gz = &doc.gazetteer;
        Ok(Self {
            entities,
            alias_index,
            aliases: Lexicon::new("aliases", &alias_phrases)?,
            honorifics,
            activities,
            topics,
            events,
            death_veto: Lexicon::new("death_veto", &lx.death_veto)?,
            retirement: Lexicon::new("retirement", &lx.retirement)?,
            political_office: Lexicon::new("political_office", &lx.political_office)?,
            politicians: Lexicon::new("politicians", &lx.politicians)?,
            attribution: Lexicon::new("attribution", &lx.attribution)?,
            fact_check_false: Lexicon::new("fact_check_false", &lx.fact_check_false)?,
            fact_check_true: Lexicon::new("fact_check_true", &lx.fact_check_true)?,
            time_keywords: lx
                .time_keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            locations: Gazetteer::new("locations", &gz.locations)?,
            organizations: Gazetteer::new("organizations", &gz.organizations)?,
            person_stopwords: gz.person_stopwords.iter().map(|w| w.trim().to_lowercase()).collect(),
        })
    }

    pub fn entities(&self) -> &[CanonicalEntity] {
        &self.entities
    }

    /// Lower-case a person name, collapse whitespace and strip leading honorifics.
    pub fn normalize_name(&self, raw: &str) -> String {
        let mut name = collapse(&raw.to_lowercase());
        'strip: loop {
            for honorific in &self.honorifics {
                if let Some(rest) = name.strip_prefix(honorific.as_str()) {
                    if rest.starts_with(' ') {
                        name = rest.trim_start().to_string();
                        continue 'strip;
                    }
                }
            }
            break;
        }
        name
    }

    /// Resolve a person through exact alias equality only.
    pub fn resolve_person(&self, name: &str) -> Option<&CanonicalEntity> {
        let normalized = self.normalize_name(name);
        self.alias_index.get(&normalized).map(|&i| &self.entities[i])
    }

    /// Resolve a person by exact alias, then by containment either way
    /// against canonical names. Empty names never match.
    pub fn find_entity(&self, name: &str) -> Option<&CanonicalEntity> {
        let normalized = self.normalize_name(name);
        if normalized.is_empty() {
            return None;
        }
        if let Some(&i) = self.alias_index.get(&normalized) {
            return Some(&self.entities[i]);
        }
        self.entities
            .iter()
            .find(|e| e.name.contains(&normalized) || normalized.contains(&e.name))
    }

    /// Entities whose aliases occur in a lower-cased text, in order of first mention.
    pub fn alias_mentions(&self, lowered: &str) -> Vec<&CanonicalEntity> {
        let mut seen: Vec<usize> = Vec::new();
        for m in self.aliases.matches(lowered) {
            if let Some(&i) = self.alias_index.get(&m.phrase) {
                if !seen.contains(&i) {
                    seen.push(i);
                }
            }
        }
        seen.into_iter().map(|i| &self.entities[i]).collect()
    }

    /// Whether a person name belongs to a known politician.
    pub fn is_politician(&self, person: &str) -> bool {
        let lowered = person.to_lowercase();
        self.politicians.contains_any(&lowered)
            || self.resolve_person(person).is_some_and(|e| e.politician)
    }

    pub fn activity(&self, tag: &ActivityTag) -> Option<&Activity> {
        self.activities.get(tag)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Trigger lexicons in detection order.
    pub fn event_lexicons(&self) -> impl Iterator<Item = (EventType, &Lexicon)> {
        self.events.iter().map(|(t, l)| (*t, l))
    }

    pub fn death_veto(&self) -> &Lexicon {
        &self.death_veto
    }

    pub fn retirement(&self) -> &Lexicon {
        &self.retirement
    }

    pub fn political_office(&self) -> &Lexicon {
        &self.political_office
    }

    pub fn attribution(&self) -> &Lexicon {
        &self.attribution
    }

    pub fn fact_check_false(&self) -> &Lexicon {
        &self.fact_check_false
    }

    pub fn fact_check_true(&self) -> &Lexicon {
        &self.fact_check_true
    }

    /// Time keywords in search order.
    pub fn time_keywords(&self) -> &[String] {
        &self.time_keywords
    }

    pub fn locations(&self) -> &Gazetteer {
        &self.locations
    }

    pub fn organizations(&self) -> &Gazetteer {
        &self.organizations
    }

    pub fn is_person_stopword(&self, word: &str) -> bool {
        self.person_stopwords.contains(&word.to_lowercase())
    }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn seed_err(reason: String) -> VerityError {
    VerityError::Seed { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honorifics_are_stripped_repeatedly() {
        let kb = KnowledgeBase::embedded().unwrap();
        assert_eq!(kb.normalize_name("Ex Presidente  Sebastián Piñera"), "sebastián piñera");
        assert_eq!(kb.normalize_name("Presidential Hopeful"), "presidential hopeful");
    }

    #[test]
    fn canonical_name_is_always_an_alias() {
        let kb = KnowledgeBase::embedded().unwrap();
        assert!(kb.resolve_person("Casemiro").is_some());
    }

    #[test]
    fn unknown_activity_is_a_seed_error() {
        let seed = r#"
[[entities]]
name = "someone"
never_did = ["juggling"]
"#;
        let err = KnowledgeBase::from_toml(seed).unwrap_err();
        assert!(err.to_string().contains("juggling"));
    }

    #[test]
    fn conflicting_alias_is_a_seed_error() {
        let seed = r#"
[[entities]]
name = "ana pérez"
aliases = ["ana"]

[[entities]]
name = "ana gómez"
aliases = ["ana"]
"#;
        assert!(matches!(
            KnowledgeBase::from_toml(seed),
            Err(VerityError::Seed { .. })
        ));
    }
}

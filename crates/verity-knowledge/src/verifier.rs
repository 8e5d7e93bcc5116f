//! Death-claim verification against the local table and an optional
//! external lookup.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, Instrument};
use verity_core::constants::{SOURCE_KNOWLEDGE_BASE, SOURCE_KNOWLEDGE_LOOKUP};
use verity_core::errors::CollaboratorError;
use verity_core::models::{CanonicalEntity, PersonRecord, VerificationVerdict};
use verity_core::traits::KnowledgeLookup;
use verity_observability::events;

use crate::dates::DateResolver;
use crate::knowledge_base::KnowledgeBase;

const LOCAL_CONFIDENCE: f64 = 0.95;
const DATE_AGNOSTIC_CONFIDENCE: f64 = 0.85;
const EXTERNAL_ALIVE_CONFIDENCE: f64 = 0.90;
const EXTERNAL_MATCH_CONFIDENCE: f64 = 0.90;
const EXTERNAL_MISMATCH_CONFIDENCE: f64 = 0.95;
const UNVERIFIED_CONFIDENCE: f64 = 0.3;

/// A verdict plus the evidence sources consulted to reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeathCheck {
    pub verdict: VerificationVerdict,
    pub consulted: Vec<&'static str>,
}

/// Verifies "X died (on D)" claims.
pub struct KnowledgeVerifier {
    kb: Arc<KnowledgeBase>,
    dates: DateResolver,
    lookup: Option<Arc<dyn KnowledgeLookup>>,
    lookup_timeout: Duration,
}

impl KnowledgeVerifier {
    /// A verifier that only consults the local table.
    pub fn new(kb: Arc<KnowledgeBase>, dates: DateResolver) -> Self {
        Self {
            kb,
            dates,
            lookup: None,
            lookup_timeout: Duration::from_secs(verity_core::config::defaults::DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }

    /// Fall back to `lookup` on a local miss, bounded by `timeout`.
    pub fn with_lookup(mut self, lookup: Arc<dyn KnowledgeLookup>, timeout: Duration) -> Self {
        self.lookup = Some(lookup);
        self.lookup_timeout = timeout;
        self
    }

    /// Verify that `person` died, optionally on `claimed_date`.
    pub async fn verify_death(&self, person: &str, claimed_date: Option<&str>) -> VerificationVerdict {
        self.check_death(person, claimed_date).await.verdict
    }

    /// Like [`verify_death`](Self::verify_death), also reporting which
    /// sources were consulted.
    pub async fn check_death(&self, person: &str, claimed_date: Option<&str>) -> DeathCheck {
        let claimed = claimed_date.and_then(|expr| {
            let resolved = self.dates.resolve(expr);
            if resolved.is_none() {
                debug!(expr, "claimed date did not parse, verifying without it");
            }
            resolved
        });

        if let Some(entity) = self.kb.find_entity(person) {
            return DeathCheck {
                verdict: verify_local(person, entity, claimed, claimed_date),
                consulted: vec![SOURCE_KNOWLEDGE_BASE],
            };
        }

        let Some(lookup) = &self.lookup else {
            return DeathCheck {
                verdict: unverified(person),
                consulted: vec![SOURCE_KNOWLEDGE_BASE],
            };
        };

        let verdict = match self.lookup_person(lookup.as_ref(), person).await {
            Ok(Some(record)) => verify_external(person, &record, lookup.name(), claimed, claimed_date),
            Ok(None) => unverified(person),
            Err(err) => {
                events::collaborator_failed(err.collaborator(), &err.to_string());
                unverified(person)
            }
        };
        DeathCheck {
            verdict,
            consulted: vec![SOURCE_KNOWLEDGE_BASE, SOURCE_KNOWLEDGE_LOOKUP],
        }
    }

    async fn lookup_person(
        &self,
        lookup: &dyn KnowledgeLookup,
        person: &str,
    ) -> Result<Option<PersonRecord>, CollaboratorError> {
        let call = lookup
            .lookup_person(person)
            .instrument(verity_observability::collaborator_span!(lookup.name()));
        match tokio::time::timeout(self.lookup_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(CollaboratorError::Timeout {
                collaborator: lookup.name().to_string(),
                after_ms: self.lookup_timeout.as_millis() as u64,
            }),
        }
    }
}

fn verify_local(
    person: &str,
    entity: &CanonicalEntity,
    claimed: Option<NaiveDate>,
    claimed_expr: Option<&str>,
) -> VerificationVerdict {
    let source = entity
        .death_sources
        .clone()
        .unwrap_or_else(|| "knowledge base".to_string());

    let Some(actual) = entity.death_date else {
        if entity.is_alive == Some(false) {
            return VerificationVerdict::real(
                DATE_AGNOSTIC_CONFIDENCE,
                format!("{person} is recorded as deceased; the date of death is not recorded"),
                source,
            );
        }
        return VerificationVerdict::fake(
            LOCAL_CONFIDENCE,
            format!("{person} is alive according to verified records"),
            source,
        );
    };

    match claimed {
        Some(date) if date == actual => VerificationVerdict::real(
            LOCAL_CONFIDENCE,
            format!("{person} died on {actual}"),
            source,
        ),
        Some(_) => VerificationVerdict::fake(
            LOCAL_CONFIDENCE,
            format!(
                "{person} died on {actual}, not {}",
                claimed_expr.unwrap_or_default().trim()
            ),
            source,
        )
        .with_actual_date(actual),
        None => VerificationVerdict::real(
            DATE_AGNOSTIC_CONFIDENCE,
            format!("{person} died on {actual}"),
            source,
        )
        .with_actual_date(actual),
    }
}

fn verify_external(
    person: &str,
    record: &PersonRecord,
    lookup_name: &str,
    claimed: Option<NaiveDate>,
    claimed_expr: Option<&str>,
) -> VerificationVerdict {
    let source = format!("{lookup_name}: {}", record.source_url);

    if record.is_alive == Some(true) {
        return VerificationVerdict::fake(
            EXTERNAL_ALIVE_CONFIDENCE,
            format!("{person} is alive according to {lookup_name}"),
            source,
        );
    }

    let Some(actual) = record.death_date else {
        return unverified(person);
    };

    match claimed {
        Some(date) if date == actual => VerificationVerdict::real(
            EXTERNAL_MATCH_CONFIDENCE,
            format!("{person} died on {actual} according to {lookup_name}"),
            source,
        ),
        Some(_) => VerificationVerdict::fake(
            EXTERNAL_MISMATCH_CONFIDENCE,
            format!(
                "{person} died on {actual}, not {}",
                claimed_expr.unwrap_or_default().trim()
            ),
            source,
        )
        .with_actual_date(actual),
        None => VerificationVerdict::real(
            DATE_AGNOSTIC_CONFIDENCE,
            format!("{person} died on {actual} according to {lookup_name}"),
            source,
        ),
    }
}

fn unverified(person: &str) -> VerificationVerdict {
    VerificationVerdict::unverified(
        UNVERIFIED_CONFIDENCE,
        format!("no verified information about {person}"),
        "none",
    )
}

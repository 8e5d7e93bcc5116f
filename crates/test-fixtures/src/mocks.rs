//! Scripted collaborators for cascade tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use verity_core::errors::{CollaboratorError, VerityError, VerityResult};
use verity_core::models::{
    ClassLabel, FactCheckClaim, NewsCorroboration, PersonRecord, TaggedSpan,
};
use verity_core::traits::{
    EntityTagger, FactCheckSearch, KnowledgeLookup, NewsSearch, TextClassifier,
};

/// Knowledge lookup answering from a fixed table keyed by lower-cased name.
#[derive(Debug, Default)]
pub struct StaticLookup {
    records: HashMap<String, PersonRecord>,
    calls: AtomicUsize,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = PersonRecord>) -> Self {
        let mut lookup = Self::new();
        for record in records {
            lookup.records.insert(record.name.to_lowercase(), record);
        }
        lookup
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KnowledgeLookup for StaticLookup {
    async fn lookup_person(&self, name: &str) -> Result<Option<PersonRecord>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.get(&name.to_lowercase()).cloned())
    }

    fn name(&self) -> &str {
        "static_lookup"
    }
}

/// Fact-check search returning the same claims for every query.
#[derive(Debug, Default)]
pub struct ScriptedFactCheck {
    claims: Vec<FactCheckClaim>,
    calls: AtomicUsize,
}

impl ScriptedFactCheck {
    pub fn new(claims: Vec<FactCheckClaim>) -> Self {
        Self {
            claims,
            calls: AtomicUsize::new(0),
        }
    }

    /// A single claim with the given rating.
    pub fn rated(rating: &str) -> Self {
        Self::new(vec![FactCheckClaim {
            text: "scripted claim".into(),
            rating: rating.into(),
            claimant: None,
            publisher: Some("Scripted Checks".into()),
            url: None,
        }])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FactCheckSearch for ScriptedFactCheck {
    async fn search_fact_checks(&self, _claim: &str) -> Result<Vec<FactCheckClaim>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.claims.clone())
    }

    fn name(&self) -> &str {
        "scripted_fact_check"
    }
}

/// News search returning the same corroboration for every query.
#[derive(Debug)]
pub struct ScriptedNews {
    result: NewsCorroboration,
    calls: AtomicUsize,
    last_hint: std::sync::Mutex<Option<String>>,
}

impl ScriptedNews {
    pub fn new(result: NewsCorroboration) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_hint: std::sync::Mutex::new(None),
        }
    }

    /// No articles at all.
    pub fn empty() -> Self {
        Self::new(NewsCorroboration::empty())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Person hint passed on the most recent call.
    pub fn last_hint(&self) -> Option<String> {
        self.last_hint.lock().ok().and_then(|h| h.clone())
    }
}

#[async_trait]
impl NewsSearch for ScriptedNews {
    async fn search_news(
        &self,
        _claim: &str,
        person_hint: Option<&str>,
    ) -> Result<NewsCorroboration, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut hint) = self.last_hint.lock() {
            *hint = person_hint.map(str::to_string);
        }
        Ok(self.result.clone())
    }

    fn name(&self) -> &str {
        "scripted_news"
    }
}

/// Classifier returning fixed labels.
#[derive(Debug, Default)]
pub struct FixedClassifier {
    labels: Vec<ClassLabel>,
    calls: AtomicUsize,
}

impl FixedClassifier {
    pub fn new(labels: Vec<ClassLabel>) -> Self {
        Self {
            labels,
            calls: AtomicUsize::new(0),
        }
    }

    /// A single label with the given score.
    pub fn single(label: &str, score: f64) -> Self {
        Self::new(vec![ClassLabel::new(label, score)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextClassifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> Result<Vec<ClassLabel>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.labels.clone())
    }

    fn name(&self) -> &str {
        "fixed_classifier"
    }
}

/// A collaborator that always fails with the same error.
#[derive(Debug, Clone)]
pub struct Failing {
    error: CollaboratorError,
}

impl Failing {
    pub fn new(error: CollaboratorError) -> Self {
        Self { error }
    }

    /// Fails with a transport error.
    pub fn transport() -> Self {
        Self::new(CollaboratorError::Transport {
            collaborator: "failing".into(),
            reason: "connection refused".into(),
        })
    }
}

#[async_trait]
impl KnowledgeLookup for Failing {
    async fn lookup_person(&self, _name: &str) -> Result<Option<PersonRecord>, CollaboratorError> {
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[async_trait]
impl FactCheckSearch for Failing {
    async fn search_fact_checks(&self, _claim: &str) -> Result<Vec<FactCheckClaim>, CollaboratorError> {
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[async_trait]
impl NewsSearch for Failing {
    async fn search_news(
        &self,
        _claim: &str,
        _person_hint: Option<&str>,
    ) -> Result<NewsCorroboration, CollaboratorError> {
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[async_trait]
impl TextClassifier for Failing {
    async fn classify(&self, _text: &str) -> Result<Vec<ClassLabel>, CollaboratorError> {
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Delays every call to the wrapped collaborator.
#[derive(Debug)]
pub struct Slow<T> {
    inner: T,
    delay: Duration,
}

impl<T> Slow<T> {
    pub fn new(inner: T, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl<T: KnowledgeLookup> KnowledgeLookup for Slow<T> {
    async fn lookup_person(&self, name: &str) -> Result<Option<PersonRecord>, CollaboratorError> {
        tokio::time::sleep(self.delay).await;
        self.inner.lookup_person(name).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[async_trait]
impl<T: FactCheckSearch> FactCheckSearch for Slow<T> {
    async fn search_fact_checks(&self, claim: &str) -> Result<Vec<FactCheckClaim>, CollaboratorError> {
        tokio::time::sleep(self.delay).await;
        self.inner.search_fact_checks(claim).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[async_trait]
impl<T: NewsSearch> NewsSearch for Slow<T> {
    async fn search_news(
        &self,
        claim: &str,
        person_hint: Option<&str>,
    ) -> Result<NewsCorroboration, CollaboratorError> {
        tokio::time::sleep(self.delay).await;
        self.inner.search_news(claim, person_hint).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[async_trait]
impl<T: TextClassifier> TextClassifier for Slow<T> {
    async fn classify(&self, text: &str) -> Result<Vec<ClassLabel>, CollaboratorError> {
        tokio::time::sleep(self.delay).await;
        self.inner.classify(text).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// An entity tagger that is always unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingTagger;

impl EntityTagger for FailingTagger {
    fn tag(&self, _text: &str) -> VerityResult<Vec<TaggedSpan>> {
        Err(VerityError::Tagger {
            reason: "tagger model unavailable".into(),
        })
    }
}

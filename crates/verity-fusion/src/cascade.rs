//! The verification cascade: first applicable stage wins.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, Instrument};
use verity_collaborators::HttpCollaborators;
use verity_core::constants::{
    SOURCE_ABSURD_DETECTOR, SOURCE_CLASSIFIER, SOURCE_CONTROVERSIAL_DETECTOR,
    SOURCE_ENTITY_VERIFICATION, SOURCE_FACT_CHECK, SOURCE_NEWS_SEARCH, SOURCE_TEXT_HEURISTICS,
};
use verity_core::errors::VerityResult;
use verity_core::models::{
    EventType, ExtractedEntities, FactCheckClaim, FusionResult, NewsCorroboration, TextFeatures,
    VerificationMethod,
};
use verity_core::traits::{
    Clock, EntityTagger, FactCheckSearch, KnowledgeLookup, NewsSearch, SystemClock, TextClassifier,
};
use verity_core::VerityConfig;
use verity_detection::{check_absurd, check_controversial};
use verity_extraction::EntityExtractor;
use verity_heuristics::TextAnalyzer;
use verity_knowledge::{DateResolver, KnowledgeBase, KnowledgeVerifier};
use verity_observability::{events, stage_span, verification_span};

use crate::call;
use crate::scorer::StatisticalScorer;
use crate::stages::{self, StageVerdict};

type Evidence = BTreeSet<String>;

/// Turns a claim text into a [`FusionResult`].
///
/// Immutable after construction and safe to share across tasks. `verify`
/// never fails: collaborator errors and timeouts count as "no result".
pub struct FusionCascade {
    kb: Arc<KnowledgeBase>,
    config: VerityConfig,
    clock: Arc<dyn Clock>,
    extractor: EntityExtractor,
    verifier: KnowledgeVerifier,
    analyzer: TextAnalyzer,
    scorer: StatisticalScorer,
    lookup: Option<Arc<dyn KnowledgeLookup>>,
    fact_check: Option<Arc<dyn FactCheckSearch>>,
    news: Option<Arc<dyn NewsSearch>>,
}

impl FusionCascade {
    /// A cascade over `kb` with no external collaborators and the system
    /// clock. Attach collaborators with the `with_*` builders.
    pub fn new(kb: Arc<KnowledgeBase>, config: &VerityConfig) -> VerityResult<Self> {
        config.validate()?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Ok(Self {
            extractor: EntityExtractor::new(Arc::clone(&kb)),
            verifier: KnowledgeVerifier::new(Arc::clone(&kb), DateResolver::new(Arc::clone(&clock))),
            analyzer: TextAnalyzer::new()?,
            scorer: StatisticalScorer::new(config.classifier.clone()),
            kb,
            config: config.clone(),
            clock,
            lookup: None,
            fact_check: None,
            news: None,
        })
    }

    /// The production cascade: embedded knowledge seed and HTTP collaborators.
    pub fn from_config(config: &VerityConfig) -> VerityResult<Self> {
        let kb = Arc::new(KnowledgeBase::embedded()?);
        let http = HttpCollaborators::from_config(config)?;
        let mut cascade = Self::new(kb, config)?
            .with_fact_check(http.fact_check)
            .with_news(http.news)
            .with_classifier(http.classifier);
        if let Some(lookup) = http.lookup {
            cascade = cascade.with_lookup(lookup);
        }
        Ok(cascade)
    }

    /// Pin "today" for relative date expressions.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self.rebuild_verifier();
        self
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn EntityTagger>) -> Self {
        self.extractor = EntityExtractor::with_tagger(Arc::clone(&self.kb), tagger);
        self
    }

    /// Consulted on a local knowledge miss.
    pub fn with_lookup(mut self, lookup: Arc<dyn KnowledgeLookup>) -> Self {
        self.lookup = Some(lookup);
        self.rebuild_verifier();
        self
    }

    pub fn with_fact_check(mut self, fact_check: Arc<dyn FactCheckSearch>) -> Self {
        self.fact_check = Some(fact_check);
        self
    }

    pub fn with_news(mut self, news: Arc<dyn NewsSearch>) -> Self {
        self.news = Some(news);
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn TextClassifier>) -> Self {
        self.scorer = self.scorer.with_classifier(classifier);
        self
    }

    fn rebuild_verifier(&mut self) {
        let verifier = KnowledgeVerifier::new(
            Arc::clone(&self.kb),
            DateResolver::new(Arc::clone(&self.clock)),
        );
        self.verifier = match &self.lookup {
            Some(lookup) => verifier.with_lookup(
                Arc::clone(lookup),
                Duration::from_secs(self.config.knowledge_lookup.timeout_secs),
            ),
            None => verifier,
        };
    }

    /// Verify one claim.
    pub async fn verify(&self, text: &str) -> FusionResult {
        self.run(text)
            .instrument(verification_span!(text.chars().count()))
            .await
    }

    async fn run(&self, text: &str) -> FusionResult {
        let entities = self.extractor.extract(text);
        let features = self.analyzer.analyze(text);
        let mut evidence = Evidence::new();

        let verdict = match self.entity_stages(text, &entities, &mut evidence).await {
            Some(verdict) => verdict,
            None => match self.corroboration_stages(text, &entities, &mut evidence).await {
                Some(verdict) => verdict,
                None => self.statistical_stage(text, &features, &mut evidence).await,
            },
        };

        finish(verdict, &features, entities, evidence)
    }

    /// Stages 1 to 3: absurd claim, controversial claim, death claim.
    async fn entity_stages(
        &self,
        text: &str,
        entities: &ExtractedEntities,
        evidence: &mut Evidence,
    ) -> Option<StageVerdict> {
        let absurd = {
            let _stage = stage_span!(VerificationMethod::AbsurdClaim).entered();
            check_absurd(&self.kb, text, entities)
        };
        if let Some(verdict) = absurd {
            evidence.insert(SOURCE_ENTITY_VERIFICATION.to_string());
            evidence.insert(SOURCE_ABSURD_DETECTOR.to_string());
            return stages::entity::resolve(VerificationMethod::AbsurdClaim, &verdict, &self.config.fusion);
        }

        let controversial = {
            let _stage = stage_span!(VerificationMethod::ControversialClaim).entered();
            check_controversial(&self.kb, text, entities)
        };
        if let Some(flag) = controversial {
            evidence.insert(SOURCE_ENTITY_VERIFICATION.to_string());
            evidence.insert(SOURCE_CONTROVERSIAL_DETECTOR.to_string());
            let hint = entities.persons.first().map(String::as_str);
            let news = self
                .search_news(text, hint, evidence)
                .instrument(stage_span!(VerificationMethod::ControversialClaim))
                .await;
            return Some(stages::controversial::resolve(&flag, news.as_ref(), &self.config.fusion));
        }

        self.knowledge_stage(text, entities, evidence)
            .instrument(stage_span!(VerificationMethod::KnowledgeVerified))
            .await
    }

    /// Check each person in order; the first definitive verdict resolves.
    async fn knowledge_stage(
        &self,
        text: &str,
        entities: &ExtractedEntities,
        evidence: &mut Evidence,
    ) -> Option<StageVerdict> {
        if !entities.has_event(EventType::Death) || entities.persons.is_empty() {
            return None;
        }
        let claimed = self.extractor.claimed_date(text, entities);
        for person in &entities.persons {
            let check = self.verifier.check_death(person, claimed.as_deref()).await;
            evidence.extend(check.consulted.iter().map(|s| s.to_string()));
            let resolved = stages::entity::resolve(
                VerificationMethod::KnowledgeVerified,
                &check.verdict,
                &self.config.fusion,
            );
            if resolved.is_some() {
                evidence.insert(SOURCE_ENTITY_VERIFICATION.to_string());
                return resolved;
            }
            debug!(person = %person, "death claim not settled, trying next person");
        }
        None
    }

    /// Stages 4 and 5: fact-check and news searches, issued together.
    async fn corroboration_stages(
        &self,
        text: &str,
        entities: &ExtractedEntities,
        evidence: &mut Evidence,
    ) -> Option<StageVerdict> {
        if self.fact_check.is_none() && self.news.is_none() {
            return None;
        }
        let hint = entities.persons.first().map(String::as_str);
        let mut news_evidence = Evidence::new();
        let (claims, news) = async {
            tokio::join!(
                self.search_fact_checks(text),
                self.search_news(text, hint, &mut news_evidence)
            )
        }
        .instrument(stage_span!(VerificationMethod::FactCheck))
        .await;
        evidence.append(&mut news_evidence);
        if self.fact_check.is_some() {
            evidence.insert(SOURCE_FACT_CHECK.to_string());
        }

        let fusion = &self.config.fusion;
        stages::corroboration::fact_check(claims.as_deref().unwrap_or(&[]), &self.kb, fusion)
            .or_else(|| news.as_ref().and_then(|n| stages::corroboration::news(n, fusion)))
    }

    /// Stage 6: always resolves.
    async fn statistical_stage(
        &self,
        text: &str,
        features: &TextFeatures,
        evidence: &mut Evidence,
    ) -> StageVerdict {
        let scored = self
            .scorer
            .score(text)
            .instrument(stage_span!(VerificationMethod::StatisticalFallback))
            .await;
        if scored.consulted {
            evidence.insert(SOURCE_CLASSIFIER.to_string());
        }
        evidence.insert(SOURCE_TEXT_HEURISTICS.to_string());
        stages::statistical::blend(&scored.output, features, &self.config.fusion)
    }

    async fn search_fact_checks(&self, text: &str) -> Option<Vec<FactCheckClaim>> {
        let fact_check = self.fact_check.as_ref()?;
        let timeout = Duration::from_secs(self.config.fact_check.timeout_secs);
        call::bounded(fact_check.name(), timeout, fact_check.search_fact_checks(text)).await
    }

    async fn search_news(
        &self,
        text: &str,
        hint: Option<&str>,
        evidence: &mut Evidence,
    ) -> Option<NewsCorroboration> {
        let news = self.news.as_ref()?;
        evidence.insert(SOURCE_NEWS_SEARCH.to_string());
        let timeout = Duration::from_secs(self.config.news.timeout_secs);
        call::bounded(news.name(), timeout, news.search_news(text, hint)).await
    }
}

impl std::fmt::Debug for FusionCascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FusionCascade")
            .field("entities", &self.kb.entities().len())
            .field("lookup", &self.lookup.as_ref().map(|l| l.name().to_string()))
            .field("fact_check", &self.fact_check.as_ref().map(|c| c.name().to_string()))
            .field("news", &self.news.as_ref().map(|n| n.name().to_string()))
            .field("scorer", &self.scorer)
            .finish()
    }
}

/// Assemble the result. Warnings come from the style features whatever stage
/// resolved; an entity stage's explanation leads them.
fn finish(
    verdict: StageVerdict,
    features: &TextFeatures,
    entities: ExtractedEntities,
    evidence_sources: Evidence,
) -> FusionResult {
    let mut warnings = Vec::new();
    if verdict.from_entity_stage() {
        warnings.extend(verdict.explanation.clone());
    }
    warnings.extend(verity_heuristics::warnings(features));

    let score = verdict.score.clamp(0.0, 1.0);
    events::stage_resolved(
        verdict.method.as_str(),
        verdict.label.as_str(),
        score,
        verdict.confidence.value(),
    );

    FusionResult {
        score,
        label: verdict.label,
        confidence: verdict.confidence,
        method: verdict.method,
        evidence_sources,
        warnings,
        explanation: verdict.explanation,
        entities,
    }
}

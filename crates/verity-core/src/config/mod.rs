//! Configuration for every subsystem, loaded from TOML with per-section defaults.

mod classifier_config;
mod corroboration_config;
pub mod defaults;
mod fusion_config;
mod lookup_config;
mod observability_config;

pub use classifier_config::ClassifierConfig;
pub use corroboration_config::{FactCheckConfig, NewsConfig};
pub use fusion_config::{FusionConfig, ScoreBand};
pub use lookup_config::KnowledgeLookupConfig;
pub use observability_config::ObservabilityConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{VerityError, VerityResult};

/// Environment variables consulted by [`VerityConfig::apply_env_overrides`].
pub const ENV_CLASSIFIER_TOKEN: &str = "VERITY_CLASSIFIER_TOKEN";
pub const ENV_FACT_CHECK_KEY: &str = "VERITY_FACT_CHECK_KEY";
pub const ENV_NEWS_KEY: &str = "VERITY_NEWS_KEY";

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerityConfig {
    pub fusion: FusionConfig,
    pub classifier: ClassifierConfig,
    pub knowledge_lookup: KnowledgeLookupConfig,
    pub fact_check: FactCheckConfig,
    pub news: NewsConfig,
    pub observability: ObservabilityConfig,
}

impl VerityConfig {
    /// Parse a TOML string. Missing sections and fields fall back to defaults.
    pub fn from_toml(toml_str: &str) -> VerityResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> VerityResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Fill secrets from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Fill secrets from an arbitrary key lookup. Empty values are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(token) = non_empty(ENV_CLASSIFIER_TOKEN) {
            self.classifier.api_token = Some(token);
        }
        if let Some(key) = non_empty(ENV_FACT_CHECK_KEY) {
            self.fact_check.api_key = Some(key);
        }
        if let Some(key) = non_empty(ENV_NEWS_KEY) {
            self.news.api_key = Some(key);
        }
    }

    /// Reject configurations the cascade cannot operate with.
    pub fn validate(&self) -> VerityResult<()> {
        let fusion = &self.fusion;
        if fusion.fake_threshold > fusion.real_threshold {
            return Err(config_err(format!(
                "fusion.fake_threshold ({}) exceeds fusion.real_threshold ({})",
                fusion.fake_threshold, fusion.real_threshold
            )));
        }
        let weight_sum = fusion.classifier_weight + fusion.feature_weight;
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(config_err(format!(
                "fusion blend weights must sum to 1.0, got {weight_sum}"
            )));
        }
        if self.classifier.max_chars == 0 {
            return Err(config_err("classifier.max_chars must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.classifier.label_threshold) {
            return Err(config_err(format!(
                "classifier.label_threshold must be within [0, 1], got {}",
                self.classifier.label_threshold
            )));
        }
        Ok(())
    }
}

fn config_err(reason: String) -> VerityError {
    VerityError::Config { reason }
}

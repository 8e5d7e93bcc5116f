use verity_core::config::*;
use verity_core::VerityError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = VerityConfig::from_toml("").unwrap();

    // Fusion defaults
    assert_eq!(config.fusion.fake_score_scale, 0.10);
    assert_eq!(config.fusion.real_score_base, 0.90);
    assert_eq!(config.fusion.controversial_strong, ScoreBand { score: 0.70, confidence: 0.75 });
    assert_eq!(config.fusion.news_none_relevant, ScoreBand { score: 0.50, confidence: 0.55 });
    assert_eq!(config.fusion.classifier_weight, 0.6);
    assert_eq!(config.fusion.feature_weight, 0.4);
    assert_eq!(config.fusion.fake_threshold, 0.35);
    assert_eq!(config.fusion.real_threshold, 0.65);

    // Classifier defaults
    assert_eq!(config.classifier.max_chars, 500);
    assert_eq!(config.classifier.label_threshold, 0.7);
    assert!(config.classifier.api_token.is_none());
    assert!(config.classifier.negative_labels.iter().any(|l| l == "LABEL_0"));

    // Collaborator defaults
    assert!(config.knowledge_lookup.enabled);
    assert_eq!(config.knowledge_lookup.timeout_secs, 10);
    assert_eq!(config.fact_check.timeout_secs, 30);
    assert_eq!(config.news.days_back, 30);
    assert_eq!(config.news.page_size, 5);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[fusion]
fake_threshold = 0.30

[fusion.news_strong]
score = 0.8
confidence = 0.9

[news]
language = "en"
"#;
    let config = VerityConfig::from_toml(toml).unwrap();
    assert_eq!(config.fusion.fake_threshold, 0.30);
    assert_eq!(config.fusion.news_strong.score, 0.8);
    // Non-overridden fields keep defaults
    assert_eq!(config.fusion.real_threshold, 0.65);
    assert_eq!(config.news.language, "en");
    assert_eq!(config.news.page_size, 5);
}

#[test]
fn config_serde_roundtrip() {
    let config = VerityConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = VerityConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.fusion.fact_check_fake, config.fusion.fact_check_fake);
    assert_eq!(roundtripped.classifier.model, config.classifier.model);
}

#[test]
fn model_url_appends_model_to_endpoint() {
    let config = ClassifierConfig::default();
    assert_eq!(
        config.model_url(),
        "https://api-inference.huggingface.co/models/hamzab/roberta-fake-news-classification"
    );
}

// --- Validation ---

#[test]
fn inverted_thresholds_are_rejected() {
    let toml = r#"
[fusion]
fake_threshold = 0.8
real_threshold = 0.2
"#;
    let err = VerityConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, VerityError::Config { .. }));
    assert!(err.to_string().contains("fake_threshold"));
}

#[test]
fn blend_weights_must_sum_to_one() {
    let toml = r#"
[fusion]
classifier_weight = 0.7
feature_weight = 0.7
"#;
    assert!(VerityConfig::from_toml(toml).is_err());
}

#[test]
fn zero_max_chars_is_rejected() {
    assert!(VerityConfig::from_toml("[classifier]\nmax_chars = 0\n").is_err());
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = VerityConfig::from_toml("[fusion\n").unwrap_err();
    assert!(matches!(err, VerityError::Config { .. }));
}

// --- Environment overrides ---

#[test]
fn overrides_fill_secrets() {
    let mut config = VerityConfig::default();
    config.apply_overrides_from(|key| match key {
        ENV_CLASSIFIER_TOKEN => Some("hf_token".into()),
        ENV_FACT_CHECK_KEY => Some("fc_key".into()),
        ENV_NEWS_KEY => Some("news_key".into()),
        _ => None,
    });
    assert_eq!(config.classifier.api_token.as_deref(), Some("hf_token"));
    assert_eq!(config.fact_check.api_key.as_deref(), Some("fc_key"));
    assert_eq!(config.news.api_key.as_deref(), Some("news_key"));
}

#[test]
fn empty_override_values_are_ignored() {
    let mut config = VerityConfig::from_toml("[news]\napi_key = \"from_file\"\n").unwrap();
    config.apply_overrides_from(|_| Some("   ".into()));
    assert_eq!(config.news.api_key.as_deref(), Some("from_file"));
    assert!(config.fact_check.api_key.is_none());
}

#[test]
fn load_reports_missing_file_as_io_error() {
    let err = VerityConfig::load("/nonexistent/verity.toml").unwrap_err();
    assert!(matches!(err, VerityError::Io(_)));
}

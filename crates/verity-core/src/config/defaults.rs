// Single source of truth for all default values.

// --- Fusion cascade: absurd claims / knowledge verdicts ---
pub const DEFAULT_FAKE_SCORE_SCALE: f64 = 0.10;
pub const DEFAULT_REAL_SCORE_BASE: f64 = 0.90;
pub const DEFAULT_REAL_SCORE_SCALE: f64 = 0.10;

// --- Fusion cascade: controversial claims (score, confidence) ---
pub const DEFAULT_CONTROVERSIAL_STRONG: (f64, f64) = (0.70, 0.75);
pub const DEFAULT_CONTROVERSIAL_WEAK: (f64, f64) = (0.55, 0.60);
pub const DEFAULT_CONTROVERSIAL_UNRESOLVED: (f64, f64) = (0.50, 0.50);

// --- Fusion cascade: fact-check ratings (score, confidence) ---
pub const DEFAULT_FACT_CHECK_FAKE: (f64, f64) = (0.10, 0.85);
pub const DEFAULT_FACT_CHECK_REAL: (f64, f64) = (0.90, 0.85);
pub const DEFAULT_FACT_CHECK_MIXED: (f64, f64) = (0.50, 0.65);

// --- Fusion cascade: news corroboration (score, confidence) ---
pub const DEFAULT_NEWS_STRONG: (f64, f64) = (0.75, 0.80);
pub const DEFAULT_NEWS_WEAK: (f64, f64) = (0.60, 0.65);
pub const DEFAULT_NEWS_NONE_RELEVANT: (f64, f64) = (0.50, 0.55);

// --- Fusion cascade: statistical blend ---
pub const DEFAULT_CLASSIFIER_WEIGHT: f64 = 0.6;
pub const DEFAULT_FEATURE_WEIGHT: f64 = 0.4;
pub const DEFAULT_FAKE_THRESHOLD: f64 = 0.35;
pub const DEFAULT_REAL_THRESHOLD: f64 = 0.65;

// --- Statistical classifier ---
pub const DEFAULT_CLASSIFIER_ENDPOINT: &str = "https://api-inference.huggingface.co/models/";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "hamzab/roberta-fake-news-classification";
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CLASSIFIER_MAX_CHARS: usize = 500;
pub const DEFAULT_CLASSIFIER_LABEL_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CLASSIFIER_FAKE_SCORE: f64 = 0.2;
pub const DEFAULT_CLASSIFIER_REAL_SCORE: f64 = 0.8;
pub const DEFAULT_CLASSIFIER_UNCERTAIN_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_NEUTRAL_SCORE: f64 = 0.5;
pub const DEFAULT_NEUTRAL_CONFIDENCE: f64 = 0.5;

// --- Knowledge lookup (Wikipedia / Wikidata) ---
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://es.wikipedia.org/w/api.php";
pub const DEFAULT_WIKIDATA_ENTITY_URL: &str = "https://www.wikidata.org/wiki/Special:EntityData/";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

// --- Fact-check search (Google Fact Check Tools) ---
pub const DEFAULT_FACT_CHECK_URL: &str =
    "https://factchecktools.googleapis.com/v1alpha1/claims:search";
pub const DEFAULT_FACT_CHECK_LANGUAGE: &str = "en";
pub const DEFAULT_FACT_CHECK_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FACT_CHECK_QUERY_CHARS: usize = 500;

// --- News search (NewsAPI) ---
pub const DEFAULT_NEWS_URL: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_NEWS_LANGUAGE: &str = "es";
pub const DEFAULT_NEWS_DAYS_BACK: i64 = 30;
pub const DEFAULT_NEWS_PAGE_SIZE: u32 = 5;
pub const DEFAULT_NEWS_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_NEWS_QUERY_CHARS: usize = 100;

// --- Shared HTTP ---
pub const DEFAULT_USER_AGENT: &str = "Verity/0.1 (claim verification engine)";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

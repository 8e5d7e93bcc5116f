//! # verity-fusion
//!
//! The priority cascade that turns a claim text into a
//! [`FusionResult`](verity_core::FusionResult):
//!
//! 1. absurd claim about a known entity
//! 2. unattributed controversial political claim, checked against the news
//! 3. death claim checked against the knowledge base
//! 4. external fact-check rating
//! 5. recent news corroboration
//! 6. statistical classifier blended with style heuristics
//!
//! The first stage that applies decides the verdict.

pub mod call;
pub mod cascade;
pub mod scorer;
pub mod stages;

pub use cascade::FusionCascade;
pub use scorer::StatisticalScorer;
pub use stages::StageVerdict;

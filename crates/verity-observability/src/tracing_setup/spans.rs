//! Span definitions per operation: verification, cascade stage, collaborator call.

/// Create a span covering one `verify` call.
#[macro_export]
macro_rules! verification_span {
    ($text_len:expr) => {
        tracing::info_span!("verity.verify", text_len = $text_len)
    };
}

/// Create a span for one cascade stage.
#[macro_export]
macro_rules! stage_span {
    ($stage:expr) => {
        tracing::debug_span!("verity.stage", stage = %$stage)
    };
}

/// Create a span for one outbound collaborator call.
#[macro_export]
macro_rules! collaborator_span {
    ($collaborator:expr) => {
        tracing::debug_span!("verity.collaborator", collaborator = %$collaborator)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const VERIFY: &str = "verity.verify";
    pub const STAGE: &str = "verity.stage";
    pub const COLLABORATOR: &str = "verity.collaborator";
}

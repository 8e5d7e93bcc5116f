//! Structured log events for key cascade operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the stage that produced the final verdict.
pub fn stage_resolved(method: &str, label: &str, score: f64, confidence: f64) {
    tracing::info!(
        event = "stage_resolved",
        method = %method,
        label = %label,
        score = score,
        confidence = confidence,
        "verification resolved"
    );
}

/// Log a collaborator failure that was downgraded to "no result".
pub fn collaborator_failed(collaborator: &str, error: &str) {
    tracing::warn!(
        event = "collaborator_failed",
        collaborator = %collaborator,
        error = %error,
        "collaborator failed, continuing without it"
    );
}

/// Log a death trigger suppressed by policy context.
pub fn death_event_vetoed(keyword: &str, context: &str) {
    tracing::info!(
        event = "death_event_vetoed",
        keyword = %keyword,
        context = %context,
        "death keyword in policy context, not a death event"
    );
}

/// Log a tagger failure and the fallback used.
pub fn tagger_degraded(failure: &str) {
    tracing::warn!(
        event = "tagger_degraded",
        failure = %failure,
        fallback = "alias_only",
        "entity tagger failed, extracting aliases only"
    );
}

/// Failures of an external collaborator (knowledge lookup, fact-check search,
/// news search, statistical classifier).
///
/// The cascade treats every variant as "no result" for the stage that made
/// the call; they exist so the failure can be logged with a reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{collaborator} is not configured")]
    NotConfigured { collaborator: String },

    #[error("{collaborator} timed out after {after_ms}ms")]
    Timeout { collaborator: String, after_ms: u64 },

    #[error("{collaborator} transport error: {reason}")]
    Transport { collaborator: String, reason: String },

    #[error("{collaborator} returned HTTP {status}")]
    Status { collaborator: String, status: u16 },

    #[error("{collaborator} returned a malformed payload: {reason}")]
    Malformed { collaborator: String, reason: String },
}

impl CollaboratorError {
    /// Name of the collaborator that failed.
    pub fn collaborator(&self) -> &str {
        match self {
            Self::NotConfigured { collaborator }
            | Self::Timeout { collaborator, .. }
            | Self::Transport { collaborator, .. }
            | Self::Status { collaborator, .. }
            | Self::Malformed { collaborator, .. } => collaborator,
        }
    }
}

//! Error types. Only construction-time operations surface these to callers;
//! the verification path converts every collaborator failure into "no result".

mod collaborator_error;
mod verity_error;

pub use collaborator_error::CollaboratorError;
pub use verity_error::VerityError;

/// Convenience alias used across the workspace.
pub type VerityResult<T> = Result<T, VerityError>;

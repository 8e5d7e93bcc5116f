//! Shared client construction and error mapping.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use verity_core::errors::CollaboratorError;

pub(crate) fn build_client(
    collaborator: &str,
    user_agent: &str,
    timeout: Duration,
) -> Result<Client, CollaboratorError> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(|e| CollaboratorError::Transport {
            collaborator: collaborator.to_string(),
            reason: format!("client construction failed: {e}"),
        })
}

pub(crate) fn send_error(collaborator: &str, timeout: Duration, err: reqwest::Error) -> CollaboratorError {
    if err.is_timeout() {
        CollaboratorError::Timeout {
            collaborator: collaborator.to_string(),
            after_ms: timeout.as_millis() as u64,
        }
    } else if err.is_decode() {
        CollaboratorError::Malformed {
            collaborator: collaborator.to_string(),
            reason: err.to_string(),
        }
    } else {
        CollaboratorError::Transport {
            collaborator: collaborator.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Reject non-2xx responses, then decode the body as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(
    collaborator: &str,
    timeout: Duration,
    response: Response,
) -> Result<T, CollaboratorError> {
    let status = response.status();
    if !status.is_success() {
        return Err(CollaboratorError::Status {
            collaborator: collaborator.to_string(),
            status: status.as_u16(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| match send_error(collaborator, timeout, e) {
            CollaboratorError::Transport { collaborator, reason } => {
                CollaboratorError::Malformed { collaborator, reason }
            }
            other => other,
        })
}

pub(crate) fn not_configured(collaborator: &str) -> CollaboratorError {
    CollaboratorError::NotConfigured {
        collaborator: collaborator.to_string(),
    }
}

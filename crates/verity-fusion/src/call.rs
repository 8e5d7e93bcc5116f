//! Bounded collaborator calls.

use std::future::Future;
use std::time::Duration;

use tracing::Instrument;
use verity_core::errors::CollaboratorError;
use verity_observability::events;

/// Await `call` for at most `timeout`. Errors and timeouts are logged and
/// become `None`.
pub async fn bounded<T, F>(collaborator: &str, timeout: Duration, call: F) -> Option<T>
where
    F: Future<Output = Result<T, CollaboratorError>>,
{
    let call = call.instrument(verity_observability::collaborator_span!(collaborator));
    let err = match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => return Some(value),
        Ok(Err(err)) => err,
        Err(_) => CollaboratorError::Timeout {
            collaborator: collaborator.to_string(),
            after_ms: timeout.as_millis() as u64,
        },
    };
    events::collaborator_failed(collaborator, &err.to_string());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_passes_through() {
        let out = bounded("t", Duration::from_secs(1), async { Ok::<_, CollaboratorError>(7) }).await;
        assert_eq!(out, Some(7));
    }

    #[tokio::test]
    async fn error_becomes_none() {
        let out: Option<u8> = bounded("t", Duration::from_secs(1), async {
            Err(CollaboratorError::NotConfigured { collaborator: "t".into() })
        })
        .await;
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn timeout_becomes_none() {
        let out = bounded("t", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, CollaboratorError>(1)
        })
        .await;
        assert_eq!(out, None);
    }
}

//! Races a transport future against the request timeout.

use futures_timer::Delay;
use futures_util::future::{select, Either};
use futures_util::pin_mut;
use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;
use crate::http::classify::classify;
use crate::http::transport::TransportFailure;

/// Drive `operation` until it settles or `timeout` elapses, whichever is first.
///
/// A transport failure is classified. If the timer wins, the call settles with
/// a `Timeout` error and the still-pending operation is dropped, so its outcome
/// can never reach the caller. If the operation wins, the timer is dropped.
pub async fn race<T, F>(timeout: Duration, operation: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, TransportFailure>>,
{
    let timer = Delay::new(timeout);
    pin_mut!(operation, timer);

    match select(operation, timer).await {
        Either::Left((outcome, _timer)) => outcome.map_err(classify),
        Either::Right(((), _operation)) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "request timed out");
            Err(ApiError::request_timeout())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::time::Instant;

    #[tokio::test]
    async fn test_race_pending_operation_times_out() {
        let started = Instant::now();
        let result = race::<(), _>(
            Duration::from_millis(50),
            futures_util::future::pending(),
        )
        .await;
        let elapsed = started.elapsed();

        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Timeout);
        assert_eq!(err.message.as_deref(), Some("request_timeout"));
        assert!(err.raw_response.is_none());
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
    }

    #[tokio::test]
    async fn test_race_fast_operation_wins() {
        let result = race(Duration::from_millis(400), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok::<_, TransportFailure>(42)
        })
        .await;
        assert_eq!(result.unwrap(), 42);

        // The dropped timer must not resurface once its deadline passes.
        tokio::time::sleep(Duration::from_millis(450)).await;
    }

    #[tokio::test]
    async fn test_race_failure_is_classified() {
        let result = race::<(), _>(Duration::from_secs(5), async {
            Err(TransportFailure::from_status(503, "down"))
        })
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unavailable);
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_race_ready_operation_without_runtime() {
        let result = tokio_test::block_on(race(Duration::from_secs(5), async {
            Ok::<_, TransportFailure>("done")
        }));
        assert_eq!(result.unwrap(), "done");
    }
}

//! Maps a failed transport outcome onto the closed [`ErrorKind`] set.

use crate::error::{ApiError, ErrorKind};
use crate::http::transport::TransportFailure;

/// Classify a transport failure.
///
/// Matched kinds keep the failure as `raw_response`; `Unknown` carries nothing.
pub fn classify(failure: TransportFailure) -> ApiError {
    let kind = failure
        .status
        .map(ErrorKind::from_status)
        .unwrap_or(ErrorKind::Unknown);

    tracing::debug!(status = ?failure.status, kind = %kind, "classified transport failure");

    match kind {
        ErrorKind::Unknown => ApiError::unknown(),
        kind => ApiError {
            kind,
            message: None,
            raw_response: Some(failure),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_matched_statuses_keep_raw() {
        for (status, kind) in [
            (401, ErrorKind::Unauthorized),
            (408, ErrorKind::Timeout),
            (500, ErrorKind::Internal),
            (503, ErrorKind::Unavailable),
        ] {
            let failure = TransportFailure::from_status(status, "{}");
            let err = classify(failure.clone());
            assert_eq!(err.kind, kind);
            assert_eq!(err.raw_response, Some(failure));
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn test_classify_unlisted_status_is_bare_unknown() {
        for status in [400, 403, 404, 418, 429, 502, 504] {
            let err = classify(TransportFailure::from_status(status, "nope"));
            assert_eq!(err.kind, ErrorKind::Unknown);
            assert!(err.raw_response.is_none());
        }
    }

    #[test]
    fn test_classify_network_failure_is_bare_unknown() {
        let err = classify(TransportFailure::network("connection refused"));
        assert_eq!(err, ApiError::unknown());
    }
}

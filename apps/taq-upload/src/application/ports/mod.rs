//! Port Interfaces
//!
//! Defines the outbound interface (port) the uploader drives to write
//! quote cells, following the Hexagonal Architecture pattern. The
//! Bigtable adapter in the infrastructure layer is the production
//! implementation; tests substitute in-memory fakes.

use tonic::Code;
use tonic_types::StatusExt;

/// Sink for serialized quote cells, one write per call.
///
/// Implementations perform exactly one synchronous round trip per call;
/// the uploader awaits each write before issuing the next, so at most
/// one request is ever in flight.
#[async_trait::async_trait]
pub trait MutationSink {
    /// Write one quote cell under `row_key`.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when the remote write does not succeed,
    /// for transport failures and rejected mutations alike.
    async fn write_quote(&mut self, row_key: String, payload: Vec<u8>) -> Result<(), RequestError>;
}

/// A remote write that did not succeed.
///
/// Captures the status code, message, and any rich error detail so the
/// failure can be reported once at the process boundary.
#[derive(Debug, thiserror::Error)]
#[error("MutateRow failed: {message} [{code}] {details}")]
pub struct RequestError {
    /// gRPC status code of the failed request.
    pub code: Code,
    /// Human-readable status message.
    pub message: String,
    /// Additional detail, if the server attached any.
    pub details: String,
}

impl RequestError {
    /// A failure to obtain or attach request credentials.
    pub fn auth(message: impl Into<String>) -> Self {
        Self {
            code: Code::Unauthenticated,
            message: message.into(),
            details: String::new(),
        }
    }
}

impl From<tonic::Status> for RequestError {
    fn from(status: tonic::Status) -> Self {
        // Prefer the structured ErrorInfo detail when the server sent one.
        let details = status
            .get_details_error_info()
            .map(|info| format!("{}/{}", info.domain, info.reason))
            .unwrap_or_else(|| String::from_utf8_lossy(status.details()).into_owned());

        Self {
            code: status.code(),
            message: status.message().to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_from_status_keeps_code_and_message() {
        let status = tonic::Status::permission_denied("table is read-only");
        let err = RequestError::from(status);

        assert_eq!(err.code, Code::PermissionDenied);
        assert_eq!(err.message, "table is read-only");
    }

    #[test]
    fn request_error_display_reports_code_message_and_detail() {
        let err = RequestError {
            code: Code::NotFound,
            message: "no such table".to_string(),
            details: "bigtable.googleapis.com/TABLE_NOT_FOUND".to_string(),
        };
        let text = err.to_string();

        assert!(text.contains("no such table"));
        assert!(text.contains("TABLE_NOT_FOUND"));
    }
}

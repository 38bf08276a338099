//! Shared error type across labelgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Label metadata present but not parseable.
    MalformedLabels,
    /// Backend could not be reached at the transport layer.
    UpstreamUnreachable,
    /// Backend call exceeded its deadline.
    UpstreamTimeout,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON error responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::MalformedLabels => "MALFORMED_LABELS",
            ClientCode::UpstreamUnreachable => "UPSTREAM_UNREACHABLE",
            ClientCode::UpstreamTimeout => "UPSTREAM_TIMEOUT",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LabelGateError>;

/// Unified error type used by core and gateway.
///
/// Upstream transport failures are kept distinct from policy outcomes: an
/// unreachable backend must never be reported as either ALLOW or the 403
/// denial shape.
#[derive(Debug, Error)]
pub enum LabelGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("malformed label metadata: {0}")]
    MalformedLabels(String),
    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),
    #[error("upstream timed out: {0}")]
    UpstreamTimeout(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl LabelGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LabelGateError::BadRequest(_) => ClientCode::BadRequest,
            LabelGateError::MalformedLabels(_) => ClientCode::MalformedLabels,
            LabelGateError::UpstreamUnreachable(_) => ClientCode::UpstreamUnreachable,
            LabelGateError::UpstreamTimeout(_) => ClientCode::UpstreamTimeout,
            LabelGateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            LabelGateError::Internal(_) => ClientCode::Internal,
        }
    }
}

//! Per-invocation failure taxonomy for upstream API calls
//!
//! These are recoverable, caller-visible values: one failing call never
//! affects other in-flight calls or the process. Startup problems use
//! [`crate::error::ServerError`] instead.

use thiserror::Error;

/// Classification of a non-2xx upstream response by status-code range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    RateLimited,
    UpstreamServer,
    Unknown,
}

impl FailureKind {
    /// Classify an HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            500..=599 => Self::UpstreamServer,
            _ => Self::Unknown,
        }
    }

    /// Stable identifier for logging and result metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::RateLimited => "rate_limited",
            Self::UpstreamServer => "upstream_server_error",
            Self::Unknown => "unknown_http_error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single upstream API call.
///
/// No retry is performed for any of these; rate-limit and transient-failure
/// handling is the caller's responsibility.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No API credential configured. Raised per call, before any network I/O.
    #[error("CATS_API_KEY not configured")]
    MissingCredential,

    /// The upstream call exceeded the fixed time bound
    #[error("API timeout error: {method} {path} exceeded {timeout_secs}s")]
    Timeout {
        method: String,
        path: String,
        timeout_secs: u64,
    },

    /// Transport-level failure (connect, TLS, body decode)
    #[error("API network error: {method} {path}: {detail}")]
    Network {
        method: String,
        path: String,
        detail: String,
    },

    /// The upstream answered with a non-2xx status
    #[error("API HTTP error {status} ({kind}) for {method} {path}: {detail}")]
    Status {
        kind: FailureKind,
        status: u16,
        method: String,
        path: String,
        detail: String,
    },
}

impl ApiError {
    /// Stable identifier for logging and result metadata
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Timeout { .. } => "timeout",
            Self::Network { .. } => "network_error",
            Self::Status { kind, .. } => kind.as_str(),
        }
    }

    /// Upstream status code, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ranges_map_to_kinds() {
        assert_eq!(FailureKind::from_status(400), FailureKind::BadRequest);
        assert_eq!(FailureKind::from_status(401), FailureKind::Unauthorized);
        assert_eq!(FailureKind::from_status(403), FailureKind::Forbidden);
        assert_eq!(FailureKind::from_status(404), FailureKind::NotFound);
        assert_eq!(FailureKind::from_status(409), FailureKind::Conflict);
        assert_eq!(FailureKind::from_status(429), FailureKind::RateLimited);
        assert_eq!(FailureKind::from_status(500), FailureKind::UpstreamServer);
        assert_eq!(FailureKind::from_status(503), FailureKind::UpstreamServer);
        assert_eq!(FailureKind::from_status(418), FailureKind::Unknown);
        assert_eq!(FailureKind::from_status(302), FailureKind::Unknown);
    }
}

//! Error taxonomy for REST calls.

use thiserror::Error;

/// Failure of a REST call, normalized for the UI.
///
/// `AuthFailed` covers 401-class rejections of credentials; any other
/// non-2xx status becomes `Status`; transport problems (offline, DNS,
/// aborted) become `Network`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("authentication failed")]
    AuthFailed,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// True for failures worth retrying by simply re-submitting.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

//! Failures talking to the budgeting service.

use reqwest::StatusCode;
use thiserror::Error;

/// What went wrong during a service call.
///
/// The variants carry the operation they interrupted so the message reads as
/// a full sentence; screens decide whether it lands in a toast or an inline
/// panel.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered, but not with success.
    #[error("error while {context}: the service answered {status}")]
    Status {
        context: &'static str,
        status: StatusCode,
    },
    /// The request never completed, or the body could not be decoded.
    #[error("error while {context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// The status the service answered with, when it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status(),
        }
    }
}

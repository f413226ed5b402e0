use std::error::Error as StdError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("Webhook URL has no host: {0}")]
    MissingHost(String),

    #[error("Payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Request error: {}", chain(.0))]
    Transport(#[from] reqwest::Error),
}

impl NotifyError {
    /// True for failures detected before anything touched the network.
    pub fn is_url_error(&self) -> bool {
        matches!(
            self,
            NotifyError::InvalidUrl { .. }
                | NotifyError::UnsupportedScheme(_)
                | NotifyError::MissingHost(_)
        )
    }
}

/// reqwest's Display stops at "error sending request"; the useful part is in the sources.
fn chain(err: &reqwest::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

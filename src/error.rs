//! Error types for the dashboard.
//!
//! [`FetchError`] covers the two ways the one-shot user fetch can fail. The
//! boxed [`DynError`] and its [`Context`] extension are used for the ambient
//! plumbing around it (terminal setup, runtime, log file).

use reqwest::StatusCode;

pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type Result<T> = std::result::Result<T, DynError>;

/// Fixed message shown when the endpoint answers with a non-success status.
pub const RESPONSE_FAILED_MESSAGE: &str = "データの取得に失敗しました";

/// Why fetching the user list failed.
///
/// The `Display` output is what the error banner shows; the status code of a
/// `Response` failure is only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request completed but the endpoint reported failure.
    #[error("{}", RESPONSE_FAILED_MESSAGE)]
    Response { status: StatusCode },
    /// The request could not be completed or its body could not be decoded.
    #[error("{message}")]
    Transport { message: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(describe_chain(&err))
    }
}

/// Join an error and its `source()` chain into one line, so the banner says
/// why a request failed and not only that it did. Causes whose text is
/// already part of the message are skipped.
pub fn describe_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}

/// Adds a short description of what was being attempted to a failure.
pub trait Context<T> {
    fn with_ctx<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

#[derive(Debug, thiserror::Error)]
#[error("{context}: {source}")]
pub struct ContextError {
    pub context: String,
    pub source: DynError,
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_ctx<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            ContextError {
                context: f(),
                source: Box::new(e),
            }
            .into()
        })
    }
}

use expert_core::error::CompletionError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("OpenAI format error: {0}")]
    Format(String),

    #[error("API key is not a valid header value")]
    InvalidApiKey,
}

impl OpenAiError {
    /// `true` when OpenAI rejected the credential (401/403).
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            OpenAiError::Api { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }

    /// `true` when OpenAI throttled the request (429).
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, OpenAiError::Api { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS)
    }
}

impl From<OpenAiError> for CompletionError {
    fn from(value: OpenAiError) -> Self {
        CompletionError::Backend(Box::new(value))
    }
}

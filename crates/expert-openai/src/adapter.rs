use std::sync::Arc;

use expert_core::error::{CompletionError, Result};
use reqwest::Client as HttpClient;

use crate::{client::OpenAiClient, error::OpenAiError};

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`expert_core::provider::ChatCompletionProvider`].
///
/// It owns the API key and a shareable, connection-pooled `reqwest::Client`.
/// All user-facing functionality sits on [`expert_core::CompletionClient`]
/// once the adapter is plugged in.
#[derive(Debug)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// The key is always handed in explicitly; the adapter never reads the
/// environment on its own.
///
/// ```rust,no_run
/// use expert_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new()
///     .with_api_key("sk-…")
///     .build()
///     .expect("valid configuration");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at an OpenAI-compatible endpoint instead of
    /// `https://api.openai.com/v1`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`CompletionError::InvalidRequest`] – if the API key is missing or empty.
    /// * [`CompletionError::Backend`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CompletionError::InvalidRequest("missing OpenAI API key".into()))?;

        let http = HttpClient::builder().build().map_err(OpenAiError::from)?;

        Ok(OpenAiAdapter {
            client: Arc::new(OpenAiClient::with_http(api_key, http, self.base_url)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_a_key() {
        let err = OpenAiAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, CompletionError::InvalidRequest(_)));

        let err = OpenAiAdapterBuilder::new().with_api_key("").build().unwrap_err();
        assert!(matches!(err, CompletionError::InvalidRequest(_)));
    }

    #[test]
    fn build_honours_base_url() {
        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("sk-test")
            .with_base_url("http://127.0.0.1:9/v1")
            .build()
            .unwrap();
        assert_eq!(adapter.base_url(), "http://127.0.0.1:9/v1");
    }
}

//! Lightweight client that pins a model and sampling settings on top of a
//! single concrete [`ChatCompletionProvider`].
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that the prompt's message type converts into what the backend
//! expects, and no dynamic dispatch shows up in user code.
//!
//! ```rust,ignore
//! use expert_core::{CompletionClient, model::{Model, OpenAiModel}};
//!
//! let client = CompletionClient::new(backend, Model::OpenAi(OpenAiModel::Gpt4oMini))
//!     .with_temperature(0.7);
//! let text = client.complete(prompt).await?;
//! ```
use std::sync::Arc;

use crate::{
    error::{CompletionError, Result},
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

/// A client bound to a single provider, model and temperature.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct CompletionClient<B> {
    backend: Arc<B>,
    model: Model,
    temperature: Option<f64>,
}

impl<B> Clone for CompletionClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

impl<B> CompletionClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B, model: Model) -> Self {
        Self {
            backend: Arc::new(backend),
            model,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Send `prompt` in one round-trip and return the assistant's text as-is.
    ///
    /// # Errors
    ///
    /// * whatever the backend reports (transport, auth, rate limit, decoding),
    /// * [`CompletionError::EmptyCompletion`] if the reply carries no text.
    pub async fn complete<M>(&self, prompt: Vec<M>) -> Result<String>
    where
        M: Into<B::Message> + Clone + Send + Sync + 'static,
    {
        let mut params = ChatCompleteParameters::new(prompt, self.model.clone());
        if let Some(temperature) = self.temperature {
            params = params.with_temperature(temperature);
        }

        let response = self.backend.chat_complete(params).await?;

        match response.content.content {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(CompletionError::EmptyCompletion),
        }
    }
}

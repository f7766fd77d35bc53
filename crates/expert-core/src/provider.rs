use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::GenericChatCompletionResponse, model::Model};

/// Boxed future returned by [`ChatCompletionProvider::chat_complete`].
pub type CompletionFuture<'p> =
    Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>;

/// A **provider** turns a chat prompt into a network call to a concrete
/// back-end (OpenAI or any compatible endpoint) and parses the reply.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One async-ish method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip.
///
/// The method returns a boxed future so we stay free of `async_trait`.
/// Implementations must not borrow `self` inside the future; clone whatever
/// shared handle they need instead.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute the chat prompt and return the assistant message.
    fn chat_complete<'p, M>(&self, params: ChatCompleteParameters<M>) -> CompletionFuture<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
}

impl<M: Clone> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
        }
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

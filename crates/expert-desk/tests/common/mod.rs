// tests/common/mod.rs
// Scripted provider shared by the integration tests

#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use expert_desk::openai::error::OpenAiError;
use expert_core::{
    error::CompletionError,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole},
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionProvider, CompletionFuture},
};

/// One recorded `chat_complete` call.
#[derive(Debug, Clone)]
pub struct Call {
    pub model: Model,
    pub temperature: Option<f64>,
    pub messages: Vec<GenericMessage>,
}

pub enum Reply {
    Text(&'static str),
    Fail,
}

/// Provider that replays scripted replies and records every call.
/// Once the script runs out it keeps answering with the last reply.
#[derive(Clone)]
pub struct ScriptedProvider {
    calls: Arc<Mutex<Vec<Call>>>,
    script: Arc<Mutex<VecDeque<Reply>>>,
    fallback: &'static str,
}

impl ScriptedProvider {
    pub fn answering(text: &'static str) -> Self {
        Self::scripted(vec![], text)
    }

    pub fn scripted(script: Vec<Reply>, fallback: &'static str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            script: Arc::new(Mutex::new(script.into())),
            fallback,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatCompletionProvider for ScriptedProvider {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(&self, params: ChatCompleteParameters<M>) -> CompletionFuture<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let calls = Arc::clone(&self.calls);
        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Text(self.fallback));

        Box::pin(async move {
            calls.lock().unwrap().push(Call {
                model: params.model(),
                temperature: params.temperature,
                messages: params.into_messages().into_iter().map(Into::into).collect(),
            });

            match reply {
                Reply::Text(text) => Ok(GenericChatCompletionResponse {
                    content: GenericMessage::new(text.to_owned(), GenericRole::Assistant),
                    usage: None,
                }),
                Reply::Fail => Err(CompletionError::from(OpenAiError::Format(
                    "simulated provider outage".into(),
                ))),
            }
        })
    }
}

/// `application/x-www-form-urlencoded` body for the page form.
pub fn form_body(persona: &str, question: &str) -> String {
    format!(
        "persona={}&question={}",
        urlencoding::encode(persona),
        urlencoding::encode(question)
    )
}

//! The completion client the page talks to: fixed model, fixed temperature.

use expert_core::{
    CompletionClient,
    error::Result,
    model::{Model, OpenAiModel},
    provider::ChatCompletionProvider,
};
use expert_openai::{OpenAiAdapter, OpenAiAdapterBuilder};

use crate::credential::ApiKey;

pub const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);
pub const TEMPERATURE: f64 = 0.7;

/// Wrap any provider with the page's model and temperature.
pub fn completion_client<B: ChatCompletionProvider>(backend: B) -> CompletionClient<B> {
    CompletionClient::new(backend, MODEL).with_temperature(TEMPERATURE)
}

/// Build the OpenAI backend from an already resolved key.
pub fn openai_backend(api_key: &ApiKey, base_url: Option<&str>) -> Result<OpenAiAdapter> {
    let mut builder = OpenAiAdapterBuilder::new().with_api_key(api_key.expose());
    if let Some(base_url) = base_url {
        builder = builder.with_base_url(base_url);
    }
    builder.build()
}

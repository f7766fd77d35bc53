use std::sync::Arc;

use expert_core::{
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider, CompletionFuture},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(&self, params: ChatCompleteParameters<M>) -> CompletionFuture<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::from(params);

            let response = match client.chat_completion(request).await {
                Ok(response) => response,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        error = %err,
                        auth = err.is_auth(),
                        rate_limited = err.is_rate_limited(),
                        "chat completion failed"
                    );
                    return Err(err.into());
                }
            };

            let usage_report = response.usage.map(|usage| GenericUsageReport {
                prompt_tokens: usage.prompt_tokens as i64,
                completion_tokens: usage.completion_tokens as i64,
                total_tokens: usage.total_tokens as i64,
            });

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            match &first_choice.finish_reason {
                None | Some(FinishReason::Stop) | Some(FinishReason::Length) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(usage = ?usage_report, "chat completion finished");

                    Ok(GenericChatCompletionResponse {
                        content: first_choice.message.into(),
                        usage: usage_report,
                    })
                }
                Some(other) => Err(OpenAiError::Format(format!(
                    "unhandled finish reason on API: {other:?}"
                ))
                .into()),
            }
        })
    }
}

use expert_core::generic::{GenericMessage, GenericRole};
use expert_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl<M> From<ChatCompleteParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage> + Clone,
{
    fn from(value: ChatCompleteParameters<M>) -> Self {
        Self {
            model: map_model(&value.model).to_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
    Tool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<ChatCompletionMessageForResponse> for GenericMessage {
    fn from(value: ChatCompletionMessageForResponse) -> Self {
        GenericMessage {
            content: value.content,
            role: value.role.into(),
            name: value.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<common::Usage>,
    pub system_fingerprint: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<MessageRole> for GenericRole {
    fn from(value: MessageRole) -> Self {
        match value {
            MessageRole::User => GenericRole::User,
            MessageRole::System => GenericRole::System,
            MessageRole::Assistant | MessageRole::Tool => GenericRole::Assistant,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content.unwrap_or_default(),
            name: value.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use expert_core::model::{Model, OpenAiModel};
    use serde_json::json;

    use super::*;

    #[test]
    fn request_carries_model_temperature_and_ordered_messages() {
        let params = ChatCompleteParameters::new(
            vec![
                GenericMessage::new("be a planner".into(), GenericRole::System),
                GenericMessage::new("2泊3日".into(), GenericRole::User),
            ],
            Model::OpenAi(OpenAiModel::Gpt4oMini),
        )
        .with_temperature(0.7);

        let request = ChatCompletionRequest::from(params);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "temperature": 0.7,
                "messages": [
                    { "role": "system", "content": "be a planner" },
                    { "role": "user", "content": "2泊3日" }
                ]
            })
        );
    }

    #[test]
    fn temperature_is_omitted_when_unset() {
        let params: ChatCompleteParameters<GenericMessage> =
            ChatCompleteParameters::new(vec![], OpenAiModel::Gpt4oMini.into());
        let request = ChatCompletionRequest::from(params);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn response_parses_null_content_and_missing_usage() {
        let raw = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": null, "refusal": "no" },
                "finish_reason": "stop"
            }]
        });

        let parsed: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        assert!(parsed.usage.is_none());
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(parsed.choices[0].finish_reason, Some(FinishReason::Stop));

        let message: GenericMessage = parsed.choices.into_iter().next().unwrap().message.into();
        assert_eq!(message.role, GenericRole::Assistant);
        assert!(message.content.is_none());
    }
}

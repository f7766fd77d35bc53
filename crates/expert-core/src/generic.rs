//! Generic message and role types used by the *expert-core* crate.
//!
//! They mirror the concepts exposed by most provider APIs (“system”, “user”,
//! “assistant”) while staying small enough to:
//!
//! * convert into provider-specific structs via a simple `From`/`Into`,
//! * serialize without pulling in heavyweight dependencies, and
//! * use in unit tests without mocking a full transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lightweight container representing a single chat message that is
/// independent of any specific LLM provider.
///
/// * `content` – the raw UTF-8 text. Passed through untouched.
/// * `role` – see [`GenericRole`] for permitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: Option<String>,
    pub role: GenericRole,
    pub name: Option<String>,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use expert_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a helpful bot.".into(),
    ///                               GenericRole::System);
    /// assert_eq!(sys.text(), Some("You are a helpful bot."));
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            content: Some(message),
            role,
            name: None,
        }
    }

    /// Borrow the text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name so you
/// can feed it directly into JSON without extra mapping logic.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// “System” messages define global behaviour and style guidelines.
    System,
    /// Messages produced by the assistant / model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// One finished round-trip: the assistant message plus optional token usage.
#[derive(Debug, Clone)]
pub struct GenericChatCompletionResponse {
    pub content: GenericMessage,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_matches_wire_names() {
        assert_eq!(GenericRole::System.to_string(), "system");
        assert_eq!(GenericRole::User.to_string(), "user");
        assert_eq!(GenericRole::Assistant.to_string(), "assistant");
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&GenericRole::System).unwrap();
        assert_eq!(json, "\"system\"");
    }
}

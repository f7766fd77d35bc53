use expert_core::error::CompletionError;
use thiserror::Error;

/// Everything that can go wrong while serving the page.
///
/// None of these terminate the process: each one is rendered as a fixed,
/// user-readable message via [`PageError::user_message`].
#[derive(Debug, Error)]
pub enum PageError {
    /// No API key in the environment or the secrets file. Blocks the page.
    #[error("OPENAI_API_KEY is not configured")]
    Configuration,

    /// The question was empty or whitespace only.
    #[error("question is empty")]
    Validation,

    /// The completion call failed for this submission.
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),
}

impl PageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PageError::Configuration => {
                "OPENAI_API_KEY が未設定です。ローカルは .env、Cloudは Secrets に設定してください。"
            }
            PageError::Validation => "入力テキストを入力してください。",
            PageError::Completion(_) => {
                "回答の生成に失敗しました。時間をおいて再度お試しください。"
            }
        }
    }

    /// Configuration errors halt the session; the others only affect one
    /// submission.
    pub fn is_blocking(&self) -> bool {
        matches!(self, PageError::Configuration)
    }
}

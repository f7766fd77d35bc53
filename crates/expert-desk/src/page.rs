//! The page controller: one form submission in, one [`PageView`] out.
//!
//! The controller holds no per-user state. Every submission carries the
//! persona and question it was made with, and the returned view hands both
//! back so the form stays populated.

use expert_core::{CompletionClient, generic::GenericMessage, provider::ChatCompletionProvider};
use expert_prompt::{Persona, build_prompt};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::error::PageError;

/// Raw form fields as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostedForm {
    #[serde(default)]
    pub persona: Option<String>,
    #[serde(default)]
    pub question: String,
}

impl PostedForm {
    /// Resolve the persona key. A missing key selects the default persona.
    ///
    /// On an unknown key the returned view re-renders the form with the
    /// submitted question and the default persona.
    pub fn into_submission(self) -> Result<SubmitForm, PageView> {
        let persona = match self.persona.as_deref() {
            None => Persona::default(),
            Some(key) => match Persona::from_key(key) {
                Some(persona) => persona,
                None => {
                    return Err(PageView {
                        question: self.question,
                        ..PageView::idle()
                    });
                }
            },
        };

        Ok(SubmitForm {
            persona,
            question: self.question,
        })
    }
}

/// A validated submission: a known persona plus the question as typed.
#[derive(Debug, Clone, Default)]
pub struct SubmitForm {
    pub persona: Persona,
    pub question: String,
}

/// What the page shows below the form.
#[derive(Debug)]
pub enum Outcome {
    /// Fresh page, nothing submitted yet.
    Idle,
    /// The completion text, shown under the answer heading.
    Answered(String),
    /// A non-blocking warning; the form stays usable.
    Warned(PageError),
    /// The submission failed; the form stays usable.
    Failed(PageError),
    /// The page cannot be used at all; no form is rendered.
    Halted(PageError),
}

#[derive(Debug)]
pub struct PageView {
    pub persona: Persona,
    pub question: String,
    pub outcome: Outcome,
}

impl PageView {
    pub fn idle() -> Self {
        Self {
            persona: Persona::default(),
            question: String::new(),
            outcome: Outcome::Idle,
        }
    }

    /// The blocking view shown when no API key could be resolved.
    pub fn unconfigured() -> Self {
        Self {
            outcome: Outcome::Halted(PageError::Configuration),
            ..Self::idle()
        }
    }

    pub fn answer(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Answered(answer) => Some(answer),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PageError> {
        match &self.outcome {
            Outcome::Warned(err) | Outcome::Failed(err) | Outcome::Halted(err) => Some(err),
            Outcome::Idle | Outcome::Answered(_) => None,
        }
    }
}

pub struct PageController<B> {
    client: CompletionClient<B>,
}

impl<B> PageController<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(client: CompletionClient<B>) -> Self {
        Self { client }
    }

    pub fn render(&self) -> PageView {
        PageView::idle()
    }

    /// Validate, build the prompt, await the completion and report the
    /// outcome. Never fails: errors become part of the view.
    pub async fn submit(&self, form: SubmitForm) -> PageView {
        let SubmitForm { persona, question } = form;

        if question.trim().is_empty() {
            warn!(persona = persona.key(), "rejected empty question");
            return PageView {
                persona,
                question,
                outcome: Outcome::Warned(PageError::Validation),
            };
        }

        let prompt = build_prompt(persona, &question);
        info!(
            persona = persona.key(),
            chars = question.chars().count(),
            "requesting completion"
        );

        let outcome = match self.client.complete(prompt).await {
            Ok(answer) => {
                info!(
                    persona = persona.key(),
                    chars = answer.chars().count(),
                    "completion received"
                );
                Outcome::Answered(answer)
            }
            Err(err) => {
                error!(persona = persona.key(), error = %err, "completion failed");
                Outcome::Failed(PageError::Completion(err))
            }
        };

        PageView {
            persona,
            question,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posted(persona: Option<&str>, question: &str) -> PostedForm {
        PostedForm {
            persona: persona.map(str::to_owned),
            question: question.into(),
        }
    }

    #[test]
    fn known_key_resolves_persona() {
        let submission = posted(Some("travel_planner"), "京都").into_submission().unwrap();
        assert_eq!(submission.persona, Persona::TravelPlanner);
        assert_eq!(submission.question, "京都");
    }

    #[test]
    fn missing_key_selects_default_persona() {
        let submission = posted(None, "面接").into_submission().unwrap();
        assert_eq!(submission.persona, Persona::default());
    }

    #[test]
    fn unknown_key_keeps_the_question() {
        let view = posted(Some("chef"), "今夜の献立").into_submission().unwrap_err();
        assert_eq!(view.persona, Persona::default());
        assert_eq!(view.question, "今夜の献立");
        assert!(matches!(view.outcome, Outcome::Idle));
    }
}

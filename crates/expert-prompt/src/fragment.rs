//! A minimal fragment that injects a fixed string into the prompt.
//!
//! Use this for pre-determined text (persona instruction, a user question
//! passed through as-is) that should land in the prompt untouched.
//!
//! ```rust
//! use expert_prompt::fragment::StaticFragment;
//! use expert_core::generic::GenericRole;
//! use expert_core::template::IntoPrompt;
//!
//! let sys_msg = StaticFragment::new("You are a travel planner.", GenericRole::System);
//! assert_eq!(sys_msg.into_prompt().len(), 1);
//! ```
//!
//! The `From<&str>` impl defaults to `GenericRole::System` since system
//! messages are the most common static fragments.

use expert_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// A borrowed string bundled with an LLM chat role.
pub struct StaticFragment<'a>((&'a str, GenericRole));

/// Shorthand so you can write `StaticFragment::from("…")` without specifying
/// the role each time.  Defaults to **system**.
impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self((value, GenericRole::System))
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let (text, role) = self.0;
        vec![GenericMessage::new(text.to_string(), role)]
    }
}

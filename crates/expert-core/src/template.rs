//! Conversion of arbitrary values into an ordered list of chat messages.
//!
//! [`IntoPrompt`] is the single seam prompt fragments implement. The
//! `expert-prompt` crate chains several of them into one prompt; the
//! [`crate::CompletionClient`] accepts the resulting `Vec`.
//!
//! ```rust
//! use expert_core::template::IntoPrompt;
//! use expert_core::generic::{GenericMessage, GenericRole};
//!
//! struct Greeting;
//!
//! impl IntoPrompt for Greeting {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! assert_eq!(Greeting.into_prompt().len(), 1);
//! ```

/// Converts a value into a series of chat messages.
///
/// By making the `Message` type an **associated type** a back-end can require
/// its own richer struct without resorting to dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] is a prompt of length one.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}

//! # `expert-core`
//!
//! Provider-agnostic building blocks shared by the Expert Desk workspace:
//!
//! * [`generic`] – chat messages and roles that every back-end understands,
//! * [`model`] – logical model identifiers,
//! * [`provider`] – the [`provider::ChatCompletionProvider`] trait a back-end
//!   implements,
//! * [`client`] – [`CompletionClient`], which pins a model and sampling
//!   settings and reduces a provider reply to its text,
//! * [`error`] – the unified [`error::CompletionError`].
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use client::CompletionClient;

//! Prompt composition for Expert Desk: reusable fragments, a chaining helper
//! and the persona table that turns a form submission into a prompt.
pub mod chain;
pub mod fragment;
pub mod persona;

pub use persona::{Persona, build_prompt};

//! # `expert-desk`
//!
//! A single-page web form that sends a question, framed by one of two expert
//! personas, to OpenAI and shows the answer.
//!
//! | Module         | What it provides                                                   |
//! |----------------|--------------------------------------------------------------------|
//! | [`credential`] | `.env`/environment → secrets-file lookup of `OPENAI_API_KEY`        |
//! | [`completion`] | the completion client with the page's fixed model and temperature  |
//! | [`page`]       | the page controller turning a form submission into a view          |
//! | [`view`]       | HTML rendering                                                     |
//! | [`server`]     | axum routes                                                        |
//! | [`config`]     | `clap` settings                                                    |
//!
//! ```rust,no_run
//! use expert_desk::{completion, credential::{ApiKey}, page::PageController, server};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let backend = completion::openai_backend(&ApiKey::new("sk-…"), None)?;
//! let app = server::router(PageController::new(completion::completion_client(backend)));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8501").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
pub mod completion;
pub mod config;
pub mod credential;
pub mod error;
pub mod page;
pub mod server;
pub mod view;

pub use expert_openai as openai;
pub use expert_prompt as prompt;

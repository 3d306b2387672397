//! # sw-llm
//!
//! OpenAI-compatible HTTP client for suppwise.
//!
//! Covers the four provider calls the pipelines make:
//! - chat completion (name translation, interaction classification)
//! - training file upload
//! - fine-tuning job creation
//! - fine-tuning job retrieval
//!
//! The pipelines depend on the [`ChatModel`] and [`FineTuneProvider`] traits, not on
//! [`OpenAiClient`] directly.

pub mod chat;
pub mod fine_tuning;

mod client;
mod error;

pub use chat::{ChatMessage, ChatModel, ChatRequest};
pub use client::OpenAiClient;
pub use error::LlmError;
pub use fine_tuning::FineTuneProvider;

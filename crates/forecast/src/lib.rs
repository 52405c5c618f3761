//! # forecast
//!
//! One-shot LLM market forecast client for pulse-bot.
//!
//! Sends a fixed crypto-analyst prompt to an OpenAI-compatible
//! chat-completions endpoint (Groq by default) and returns the model's
//! text. The public surface never fails: a missing credential or any
//! upstream error is mapped to a short explanatory string so the
//! conversation continues normally.

pub mod client;
pub mod error;
pub mod message;

pub use client::{DEFAULT_MODEL, ForecastClient, MISSING_CREDENTIAL_NOTICE};
pub use error::{ForecastError, Result};
pub use message::{ChatMessage, Role};

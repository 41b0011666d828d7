//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion (Groq's OpenAI-compatible chat endpoint)
//! - Mock completion for tests and offline runs

pub mod adapter;

pub use adapter::*;

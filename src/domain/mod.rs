//! # Domain Layer
//!
//! Core models, the fixed system instruction, and error types.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;
pub mod prompt;

pub use error::*;
pub use models::*;
pub use prompt::*;

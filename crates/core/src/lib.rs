//! DigiBot Core Library
//!
//! This crate provides the foundational utilities shared by every DigiBot crate:
//! - Error handling (`AppError`, `ApiError`, `AppResult`)
//! - Logging infrastructure
//! - Layered configuration (`AppConfig`)

pub mod config;
pub mod error;
pub mod logging;
pub mod provider;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{ApiError, AppError, AppResult};
pub use provider::ProviderType;

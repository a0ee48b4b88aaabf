//! Utilities
//!
//! - [`logger`]: tracing setup and log retention
//! - Re-exports of the shared error types used by handlers

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

//! Shared types for the cafe service
//!
//! Pure, synchronous building blocks used by `cafe-server`: data models,
//! the error/response envelope, field validation, form state managers and
//! the cart. Nothing here performs I/O.

pub mod cart;
pub mod error;
pub mod forms;
pub mod models;
pub mod validation;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use forms::{FormFields, FormLifecycle, FormState, FormStatus, OrderForm};
pub use validation::{Field, ValidationContext};

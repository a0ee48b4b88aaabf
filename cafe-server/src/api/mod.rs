//! API routes
//!
//! - [`health`] - liveness
//! - [`store_info`] - home/about/contact content
//! - [`menu`] - menu browser
//! - [`reviews`] - customer reviews
//! - [`sessions`] - visitor session lifecycle
//! - [`contact`] - contact form
//! - [`reservation`] - table reservation form
//! - [`order`] - cart and checkout

pub mod contact;
pub mod extract;
pub mod health;
pub mod menu;
pub mod order;
pub mod reservation;
pub mod reviews;
pub mod sessions;
pub mod store_info;
pub mod views;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

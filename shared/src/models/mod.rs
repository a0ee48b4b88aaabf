//! Data models
//!
//! Shared between cafe-server and the frontend (via API).
//! Read-only catalogue data (menu, reviews, store info) is loaded from
//! JSON fixtures; everything else lives only for a visitor session.

pub mod contact;
pub mod menu;
pub mod order;
pub mod reservation;
pub mod review;
pub mod store_info;

// Re-exports
pub use contact::*;
pub use menu::*;
pub use order::*;
pub use reservation::*;
pub use review::*;
pub use store_info::*;

//! Contact Message Model

use serde::{Deserialize, Serialize};

/// Catering / franchise enquiry sent through the contact form
///
/// Transient: only logged on submission, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

//! Store Info Model
//!
//! Informational content for the home, about and contact pages.

use serde::{Deserialize, Serialize};

/// Store information (singleton, loaded from the store fixture)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// Postal address, one entry per line
    #[serde(default)]
    pub address_lines: Vec<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,
    /// About-us history, oldest first
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// e.g. "Monday - Friday"
    pub days: String,
    /// e.g. "8:00 AM - 10:00 PM"
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: i32,
    pub month: String,
    pub location: String,
    pub title: String,
    pub description: String,
}

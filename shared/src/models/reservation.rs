//! Reservation Model

use serde::{Deserialize, Serialize};

/// Validated table booking, before it is given an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// ISO calendar date (YYYY-MM-DD)
    pub date: String,
    /// Clock time (HH:MM)
    pub time: String,
    /// Party size, 1-20
    pub guests: u8,
    pub name: String,
    pub phone: String,
}

impl ReservationRequest {
    /// Attach the submission identifier (Unix millis of the submission)
    pub fn into_reservation(self, id: i64) -> Reservation {
        Reservation {
            id,
            date: self.date,
            time: self.time,
            guests: self.guests,
            name: self.name,
            phone: self.phone,
        }
    }
}

/// Table booking as kept in the reservations collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub guests: u8,
    pub name: String,
    pub phone: String,
}

//! Simulated persistence
//!
//! Nothing is stored: every accepted submission is written to the
//! `submission` log target, which the logger routes to its own file.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use shared::cart::round_money;
use shared::error::{AppError, AppResult};
use shared::models::{Address, ContactMessage, Order, OrderLineItem, Reservation, ReservationRequest};

use crate::fixtures::FixtureStore;

/// Log target for accepted submissions
pub const SUBMISSION_TARGET: &str = "submission";

pub fn record_contact(message: &ContactMessage) {
    tracing::info!(
        target: "submission",
        kind = "contact",
        name = %message.name,
        email = %message.email,
        message = %message.message,
        "Form submitted"
    );
}

/// Append the request to the fixture reservations and log the result
///
/// The reservation id is the submission time in Unix milliseconds.
pub async fn record_reservation(
    fixtures: &FixtureStore,
    request: ReservationRequest,
) -> AppResult<Reservation> {
    let existing = fixtures.reservations().await?;
    let reservation = request.into_reservation(Utc::now().timestamp_millis());
    let reservations = append_reservation(existing, &reservation)?;

    let total = reservations.len();
    let collection = Value::Array(reservations);
    tracing::info!(
        target: "submission",
        kind = "reservation",
        id = reservation.id,
        total,
        reservations = %collection,
        "Reservation submitted"
    );
    Ok(reservation)
}

/// The stored collection with `reservation` added at the end
pub fn append_reservation(
    mut reservations: Vec<Value>,
    reservation: &Reservation,
) -> AppResult<Vec<Value>> {
    let entry = serde_json::to_value(reservation)
        .map_err(|e| AppError::internal(format!("Failed to encode reservation: {e}")))?;
    reservations.push(entry);
    Ok(reservations)
}

/// What the visitor gets back after ordering; the card is masked
#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
    pub items: Vec<OrderLineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub address: Address,
    pub card: String,
}

pub fn record_order(order: &Order) -> OrderReceipt {
    let receipt = OrderReceipt {
        items: order.items.clone(),
        total_price: round_money(order.total_price()),
        address: order.address.clone(),
        card: order.payment.masked_card_number(),
    };

    let items = serde_json::to_string(&receipt.items).unwrap_or_default();
    tracing::info!(
        target: "submission",
        kind = "order",
        lines = receipt.items.len(),
        total_price = %receipt.total_price,
        street = %receipt.address.street,
        city = %receipt.address.city,
        zip = %receipt.address.zip,
        card = %receipt.card,
        items = %items,
        "Order submitted"
    );
    receipt
}

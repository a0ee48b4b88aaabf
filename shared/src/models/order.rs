//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::menu::MenuItem;

/// Cart line: a menu item snapshot plus the quantity chosen when it was added
///
/// Lines are never merged; adding the same item twice yields two lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl OrderLineItem {
    pub fn new(item: MenuItem, quantity: u32) -> Self {
        Self { item, quantity }
    }

    /// price x quantity
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// Delivery address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: String,
}

/// Dummy card details (never charged)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(alias = "cardnumber")]
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl Payment {
    /// Card number reduced to its last four digits, for logs
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("**** {tail}")
    }
}

/// Submitted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<OrderLineItem>,
    pub address: Address,
    pub payment: Payment,
}

impl Order {
    /// Sum of price x quantity over all lines, derived on every call
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(OrderLineItem::line_total).sum()
    }
}

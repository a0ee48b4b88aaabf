//! Shopping cart
//!
//! An ordered list of line items. Lines are never merged and the total is
//! derived on every call.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{MenuItem, OrderLineItem};

/// Decimal places of displayed money
pub const DECIMAL_PLACES: u32 = 2;

/// Quantity used when the selector value is missing or unusable
pub const DEFAULT_QUANTITY: u32 = 1;

/// Round to cents, half away from zero
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Read the quantity selector's raw value
///
/// Takes the leading integer (`"3 pcs"` is 3); anything that does not yield a
/// positive integer falls back to [`DEFAULT_QUANTITY`].
pub fn parse_quantity(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_QUANTITY;
    };
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();

    match digits.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_QUANTITY,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    items: Vec<OrderLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line; returns its index
    pub fn add(&mut self, item: MenuItem, quantity: u32) -> usize {
        self.items.push(OrderLineItem::new(item, quantity));
        self.items.len() - 1
    }

    /// Remove exactly the line at `index`
    pub fn remove(&mut self, index: usize) -> AppResult<OrderLineItem> {
        if index >= self.items.len() {
            return Err(AppError::cart_item_not_found(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(OrderLineItem::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn menu_item(id: i64, price: &str) -> MenuItem {
        MenuItem {
            id,
            name: format!("Dish {id}"),
            description: String::new(),
            price: dec(price),
            category: "mains".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_same_item_twice_gives_two_lines() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(menu_item(1, "10.00"), 2), 0);
        assert_eq!(cart.add(menu_item(1, "10.00"), 3), 1);
        assert_eq!(cart.len(), 2);

        cart.remove(0).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut cart = Cart::new();
        cart.add(menu_item(1, "1.00"), 1);
        let err = cart.remove(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartItemNotFound);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_is_derived() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_price(), Decimal::ZERO);

        cart.add(menu_item(1, "12.99"), 2);
        cart.add(menu_item(2, "4.50"), 1);
        assert_eq!(cart.total_price(), dec("30.48"));

        cart.remove(0).unwrap();
        assert_eq!(cart.total_price(), dec("4.50"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(Some("3")), 3);
        assert_eq!(parse_quantity(Some(" 12 ")), 12);
        assert_eq!(parse_quantity(Some("4 pcs")), 4);
        assert_eq!(parse_quantity(Some("+2")), 2);
        assert_eq!(parse_quantity(Some("2.9")), 2);
        assert_eq!(parse_quantity(Some("0")), 1);
        assert_eq!(parse_quantity(Some("-5")), 1);
        assert_eq!(parse_quantity(Some("abc")), 1);
        assert_eq!(parse_quantity(Some("")), 1);
        assert_eq!(parse_quantity(None), 1);
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(dec("2.345")), dec("2.35"));
        assert_eq!(round_money(dec("-2.345")), dec("-2.35"));
        assert_eq!(round_money(dec("2.344")), dec("2.34"));
    }
}

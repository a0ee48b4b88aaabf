//! Order form: cart plus checkout panel

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::{Cart, round_money};
use crate::error::{AppError, AppResult};
use crate::models::{MenuItem, Order, OrderLineItem};
use crate::validation::{Field, ValidationContext};

use super::{CheckoutDraft, FieldErrors, FormLifecycle, FormState, FormStatus};

/// Cart, checkout fields and the checkout panel flag
///
/// The checkout panel is only visible while it was opened AND the cart holds
/// at least one line. Order submission requires a visible panel.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    cart: Cart,
    checkout: FormState<CheckoutDraft>,
    checkout_open: bool,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn checkout(&self) -> &FormState<CheckoutDraft> {
        &self.checkout
    }

    /// Append `item` with `quantity`; returns the new line's index
    pub fn add_item(&mut self, item: MenuItem, quantity: u32) -> usize {
        self.cart.add(item, quantity)
    }

    pub fn remove_item(&mut self, index: usize) -> AppResult<OrderLineItem> {
        self.cart.remove(index)
    }

    pub fn total_price(&self) -> Decimal {
        self.cart.total_price()
    }

    pub fn proceed_to_checkout(&mut self) -> AppResult<()> {
        if self.cart.is_empty() {
            return Err(AppError::checkout_unavailable());
        }
        self.checkout_open = true;
        Ok(())
    }

    pub fn checkout_visible(&self) -> bool {
        self.checkout_open && !self.cart.is_empty()
    }

    pub fn on_field_change(
        &mut self,
        field: Field,
        value: impl Into<String>,
        ctx: &ValidationContext,
    ) -> AppResult<&str> {
        self.checkout.on_field_change(field, value, ctx)
    }

    pub fn can_submit(&self) -> bool {
        self.checkout_visible() && self.checkout.can_submit()
    }

    /// Validate address and payment, then build the order; nothing is reset
    pub fn prepare_submit(&mut self, ctx: &ValidationContext) -> AppResult<Order> {
        if !self.checkout_visible() {
            return Err(AppError::checkout_unavailable());
        }
        let (address, payment) = self.checkout.prepare_submit(ctx)?;
        Ok(Order {
            items: self.cart.items().to_vec(),
            address,
            payment,
        })
    }

    /// Empty the cart, reset the checkout fields and close the panel
    pub fn complete_submit(&mut self) {
        self.cart.clear();
        self.checkout.complete_submit();
        self.checkout_open = false;
    }

    pub fn submit_order(&mut self, ctx: &ValidationContext) -> AppResult<Order> {
        let order = self.prepare_submit(ctx)?;
        self.complete_submit();
        Ok(order)
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            items: self.cart.items().to_vec(),
            total_price: round_money(self.total_price()),
            checkout_visible: self.checkout_visible(),
            values: self.checkout.values().clone(),
            errors: self.checkout.errors().clone(),
            can_submit: self.can_submit(),
            status: self.checkout.status(),
        }
    }
}

impl FormLifecycle for OrderForm {
    fn status(&self) -> FormStatus {
        self.checkout.status()
    }

    fn clear_submitted(&mut self) {
        self.checkout.clear_submitted();
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderSnapshot {
    pub items: Vec<OrderLineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub checkout_visible: bool,
    pub values: CheckoutDraft,
    pub errors: FieldErrors,
    pub can_submit: bool,
    pub status: FormStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;

    fn ctx() -> ValidationContext {
        ValidationContext::on(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    fn menu_item(id: i64, price: &str) -> MenuItem {
        MenuItem {
            id,
            name: format!("Dish {id}"),
            description: String::new(),
            price: price.parse().unwrap(),
            category: "mains".to_string(),
            image: String::new(),
        }
    }

    fn fill_checkout(form: &mut OrderForm, expiry: &str) {
        let ctx = ctx();
        form.on_field_change(Field::Street, "12 Main St", &ctx).unwrap();
        form.on_field_change(Field::City, "Springfield", &ctx).unwrap();
        form.on_field_change(Field::Zip, "12345", &ctx).unwrap();
        form.on_field_change(Field::CardNumber, "4111 1111 1111 1111", &ctx)
            .unwrap();
        form.on_field_change(Field::Expiry, expiry, &ctx).unwrap();
        form.on_field_change(Field::Cvv, "123", &ctx).unwrap();
    }

    #[test]
    fn test_checkout_needs_items() {
        let mut form = OrderForm::new();
        let err = form.proceed_to_checkout().unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckoutUnavailable);
        assert!(!form.checkout_visible());
    }

    #[test]
    fn test_panel_hides_when_cart_empties() {
        let mut form = OrderForm::new();
        form.add_item(menu_item(1, "9.00"), 1);
        form.proceed_to_checkout().unwrap();
        assert!(form.checkout_visible());

        form.remove_item(0).unwrap();
        assert!(!form.checkout_visible());

        // panel reappears once the cart has lines again
        form.add_item(menu_item(2, "3.00"), 1);
        assert!(form.checkout_visible());
    }

    #[test]
    fn test_submit_with_hidden_panel_rejected() {
        let mut form = OrderForm::new();
        form.add_item(menu_item(1, "9.00"), 1);
        fill_checkout(&mut form, "04/25");
        assert!(!form.can_submit());

        let err = form.submit_order(&ctx()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckoutUnavailable);
        assert_eq!(form.cart().len(), 1);
    }

    #[test]
    fn test_expired_card_blocks_order() {
        let mut form = OrderForm::new();
        form.add_item(menu_item(1, "9.00"), 1);
        form.proceed_to_checkout().unwrap();
        fill_checkout(&mut form, "03/25");
        assert!(!form.can_submit());

        let err = form.submit_order(&ctx()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let fields = &err.details.as_ref().unwrap()["fields"];
        assert_eq!(fields["expiry"], "Expiry date must be in the future");
        assert_eq!(form.status(), FormStatus::Invalid);
        assert_eq!(form.cart().len(), 1);
        assert!(form.checkout_visible());
    }

    #[test]
    fn test_submit_order_resets_everything() {
        let mut form = OrderForm::new();
        form.add_item(menu_item(1, "12.50"), 2);
        form.add_item(menu_item(2, "3.25"), 1);
        form.proceed_to_checkout().unwrap();
        fill_checkout(&mut form, "04/25");
        assert!(form.can_submit());

        let order = form.submit_order(&ctx()).unwrap();
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_price(), "28.25".parse::<Decimal>().unwrap());
        assert_eq!(order.address.city, "Springfield");
        assert_eq!(order.payment.cvv, "123");

        assert!(form.cart().is_empty());
        assert!(!form.checkout_visible());
        assert_eq!(form.checkout().values(), &CheckoutDraft::default());
        assert_eq!(form.status(), FormStatus::Submitted);

        form.clear_submitted();
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_snapshot() {
        let mut form = OrderForm::new();
        form.add_item(menu_item(1, "0.1"), 1);
        form.add_item(menu_item(2, "0.2"), 1);
        let json = serde_json::to_value(form.snapshot()).unwrap();
        assert_eq!(json["total_price"], serde_json::json!(0.3));
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["checkout_visible"], false);
        assert_eq!(json["values"]["payment"]["cardNumber"], "");
        assert_eq!(json["errors"]["cardNumber"], "");
    }
}

//! Online ordering API: cart and checkout

use axum::{
    Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::Value;
use shared::cart::parse_quantity;
use shared::error::AppError;
use shared::validation::{Field, ValidationContext};

use super::extract::JsonBody;
use super::views::{FieldChange, OrderView, Submitted, order_view};
use super::{ApiResponse, AppResult};
use crate::core::ServerState;
use crate::submissions::{self, OrderReceipt};

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your order! Your order is submitted successfully and on the way!";

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sessions/{id}/order", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(view))
        .route("/items", post(add_item))
        .route("/items/{index}", delete(remove_item))
        .route("/checkout", post(proceed_to_checkout))
        .route("/fields/{field}", put(update_field))
        .route("/submit", post(submit))
}

/// Body of `POST .../order/items`
///
/// `quantity` is the quantity selector's raw value, string or number.
#[derive(Debug, Deserialize)]
pub struct AddItem {
    pub menu_item_id: i64,
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl AddItem {
    fn raw_quantity(&self) -> Option<String> {
        match self.quantity.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

pub async fn view(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<OrderView>> {
    let session = state.sessions.get(&id)?;
    let slot = session.order().lock().await;
    Ok(ApiResponse::success(order_view(&slot)))
}

/// Append a new cart line; the same item added twice gives two lines
pub async fn add_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<AddItem>,
) -> AppResult<ApiResponse<OrderView>> {
    let session = state.sessions.get(&id)?;
    let item = state
        .fixtures
        .menu()
        .await
        .find(payload.menu_item_id)
        .cloned()
        .ok_or_else(|| AppError::menu_item_not_found(payload.menu_item_id))?;
    let quantity = parse_quantity(payload.raw_quantity().as_deref());

    let mut slot = session.order().lock().await;
    let index = slot.form.add_item(item, quantity);
    tracing::debug!(session_id = %session.id(), index, quantity, "Cart line added");
    Ok(ApiResponse::success(order_view(&slot)))
}

pub async fn remove_item(
    State(state): State<ServerState>,
    Path((id, index)): Path<(String, String)>,
) -> AppResult<ApiResponse<OrderView>> {
    let index: usize = index
        .parse()
        .map_err(|_| AppError::invalid_request(format!("Invalid cart index: {index}")))?;
    let session = state.sessions.get(&id)?;
    let mut slot = session.order().lock().await;
    slot.form.remove_item(index)?;
    Ok(ApiResponse::success(order_view(&slot)))
}

pub async fn proceed_to_checkout(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<OrderView>> {
    let session = state.sessions.get(&id)?;
    let mut slot = session.order().lock().await;
    slot.form.proceed_to_checkout()?;
    Ok(ApiResponse::success(order_view(&slot)))
}

pub async fn update_field(
    State(state): State<ServerState>,
    Path((id, field)): Path<(String, String)>,
    JsonBody(change): JsonBody<FieldChange>,
) -> AppResult<ApiResponse<OrderView>> {
    let field: Field = field.parse()?;
    let session = state.sessions.get(&id)?;
    let mut slot = session.order().lock().await;
    slot.form
        .on_field_change(field, change.value, &ValidationContext::now())?;
    Ok(ApiResponse::success(order_view(&slot)))
}

pub async fn submit(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Submitted<OrderReceipt, OrderView>>> {
    let session = state.sessions.get(&id)?;
    let shared_slot = session.order();
    let mut slot = shared_slot.lock().await;

    let order = slot.form.submit_order(&ValidationContext::now())?;
    let receipt = submissions::record_order(&order);
    slot.show_banner(shared_slot);

    Ok(ApiResponse::success_with_message(
        SUCCESS_MESSAGE,
        Submitted {
            record: receipt,
            form: order_view(&slot),
        },
    ))
}

//! Store Info API

use axum::{Router, extract::State, routing::get};
use shared::models::StoreInfo;

use super::{ApiResponse, AppResult};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/store-info", get(get_store_info))
}

/// Name, address, opening hours and history
pub async fn get_store_info(State(state): State<ServerState>) -> AppResult<ApiResponse<StoreInfo>> {
    Ok(ApiResponse::success(state.fixtures.store_info().await))
}

//! Menu API

use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use shared::models::{ALL_CATEGORIES, MenuCategory, MenuItem};

use super::{ApiResponse, AppResult};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(list))
        .route("/categories", get(categories))
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
}

/// Menu items, optionally restricted to one category
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<ApiResponse<Vec<MenuItem>>> {
    let menu = state.fixtures.menu().await;
    let category = query
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let items = menu.filter(&category).cloned().collect();
    Ok(ApiResponse::success(items))
}

/// `all` followed by every category in menu order
pub async fn categories(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<MenuCategory>>> {
    Ok(ApiResponse::success(state.fixtures.menu().await.categories()))
}

//! Reviews API

use axum::{Router, extract::State, routing::get};
use shared::models::Review;

use super::{ApiResponse, AppResult};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reviews", get(list))
}

pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Review>>> {
    let reviews = state.fixtures.reviews().await;
    Ok(ApiResponse::success(reviews.as_ref().clone()))
}

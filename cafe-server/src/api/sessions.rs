//! Visitor session API

use axum::{
    Router,
    extract::{Path, State},
    routing::{delete, post},
};
use serde::Serialize;
use shared::forms::ReservationDraft;
use shared::models::ContactMessage;

use super::views::{FormView, OrderView, form_view, order_view};
use super::{ApiResponse, AppResult};
use crate::core::ServerState;
use crate::sessions::{Session, SessionInfo};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sessions", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(create))
        .route("/{id}", delete(remove).get(get))
}

/// Session id plus the initial state of every form
#[derive(Debug, Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub session: SessionInfo,
    pub contact: FormView<ContactMessage>,
    pub reservation: FormView<ReservationDraft>,
    pub order: OrderView,
}

async fn session_view(session: &Session) -> SessionView {
    SessionView {
        session: SessionInfo::from(session),
        contact: form_view(&*session.contact().lock().await),
        reservation: form_view(&*session.reservation().lock().await),
        order: order_view(&*session.order().lock().await),
    }
}

pub async fn create(State(state): State<ServerState>) -> AppResult<ApiResponse<SessionView>> {
    let session = state.sessions.create();
    Ok(ApiResponse::success(session_view(&session).await))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<SessionView>> {
    let session = state.sessions.get(&id)?;
    Ok(ApiResponse::success(session_view(&session).await))
}

/// Tear down the session and its pending banner timers
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    state.sessions.remove(&id).await?;
    Ok(ApiResponse::ok())
}

//! Table reservation API

use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use shared::forms::ReservationDraft;
use shared::models::Reservation;
use shared::validation::{Field, ValidationContext};

use super::extract::JsonBody;
use super::views::{FieldChange, FormView, Submitted, form_view};
use super::{ApiResponse, AppResult};
use crate::core::ServerState;
use crate::submissions;

pub const SUCCESS_MESSAGE: &str =
    "Thank you, we have received your request for table reservation! We will get back to you soon.";

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sessions/{id}/reservation", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(view))
        .route("/fields/{field}", put(update_field))
        .route("/submit", post(submit))
}

type ReservationView = FormView<ReservationDraft>;

pub async fn view(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ReservationView>> {
    let session = state.sessions.get(&id)?;
    let slot = session.reservation().lock().await;
    Ok(ApiResponse::success(form_view(&slot)))
}

pub async fn update_field(
    State(state): State<ServerState>,
    Path((id, field)): Path<(String, String)>,
    JsonBody(change): JsonBody<FieldChange>,
) -> AppResult<ApiResponse<ReservationView>> {
    let field: Field = field.parse()?;
    let session = state.sessions.get(&id)?;
    let mut slot = session.reservation().lock().await;
    slot.form
        .on_field_change(field, change.value, &ValidationContext::now())?;
    Ok(ApiResponse::success(form_view(&slot)))
}

/// Validate, append to the reservation list, then reset the form
///
/// A failed reservation read leaves the form as it was.
pub async fn submit(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Submitted<Reservation, ReservationView>>> {
    let session = state.sessions.get(&id)?;
    let shared_slot = session.reservation();
    let mut slot = shared_slot.lock().await;

    let request = slot.form.prepare_submit(&ValidationContext::now())?;
    let reservation = submissions::record_reservation(&state.fixtures, request).await?;
    slot.form.complete_submit();
    slot.show_banner(shared_slot);

    Ok(ApiResponse::success_with_message(
        SUCCESS_MESSAGE,
        Submitted {
            record: reservation,
            form: form_view(&slot),
        },
    ))
}

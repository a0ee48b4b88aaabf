//! Contact form API

use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use shared::models::ContactMessage;
use shared::validation::{Field, ValidationContext};

use super::extract::JsonBody;
use super::views::{FieldChange, FormView, Submitted, form_view};
use super::{ApiResponse, AppResult};
use crate::core::ServerState;
use crate::submissions;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sessions/{id}/contact", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(view))
        .route("/fields/{field}", put(update_field))
        .route("/submit", post(submit))
}

type ContactView = FormView<ContactMessage>;

pub async fn view(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ContactView>> {
    let session = state.sessions.get(&id)?;
    let slot = session.contact().lock().await;
    Ok(ApiResponse::success(form_view(&slot)))
}

pub async fn update_field(
    State(state): State<ServerState>,
    Path((id, field)): Path<(String, String)>,
    JsonBody(change): JsonBody<FieldChange>,
) -> AppResult<ApiResponse<ContactView>> {
    let field: Field = field.parse()?;
    let session = state.sessions.get(&id)?;
    let mut slot = session.contact().lock().await;
    slot.form
        .on_field_change(field, change.value, &ValidationContext::now())?;
    Ok(ApiResponse::success(form_view(&slot)))
}

pub async fn submit(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Submitted<ContactMessage, ContactView>>> {
    let session = state.sessions.get(&id)?;
    let shared_slot = session.contact();
    let mut slot = shared_slot.lock().await;

    let message = slot.form.on_submit(&ValidationContext::now())?;
    submissions::record_contact(&message);
    slot.show_banner(shared_slot);

    Ok(ApiResponse::success_with_message(
        SUCCESS_MESSAGE,
        Submitted {
            record: message,
            form: form_view(&slot),
        },
    ))
}

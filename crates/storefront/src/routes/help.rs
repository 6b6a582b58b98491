//! Help overlay route handlers.
//!
//! The help overlay shows static store information. Like the account
//! overlay it has exactly one instance, tracked by its controller.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use storeclick_core::OverlayTransition;

use crate::state::AppState;

/// Help overlay fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/help_modal.html")]
pub struct HelpModalTemplate;

/// Open the help overlay (HTMX fragment).
///
/// A no-op 204 when the overlay is already open.
#[instrument(skip(state))]
pub async fn open(State(state): State<AppState>) -> impl IntoResponse {
    match state.help_overlay().open() {
        OverlayTransition::Opened => HelpModalTemplate.into_response(),
        _ => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Dismiss the help overlay.
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> StatusCode {
    state.help_overlay().close();
    StatusCode::NO_CONTENT
}

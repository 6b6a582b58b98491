//! Account-registration overlay route handlers.
//!
//! The overlay controller guarantees at most one rendered instance: opening
//! an already-open overlay answers 204 No Content so nothing is inserted
//! twice. Validation failures re-render the form fragment with the error
//! and persist nothing; a successful submission persists the record and
//! renders the success panel, which schedules the overlay close.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use storeclick_core::{OverlayTransition, Registration};

use crate::state::AppState;

/// Registration form data.
///
/// The consent checkboxes arrive as `"on"` when checked; they default to
/// checked in the form and are not validated.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub promotions: Option<String>,
    #[serde(default)]
    pub terms: Option<String>,
}

/// Account-registration overlay fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/account_modal.html")]
pub struct AccountModalTemplate {
    pub message: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl AccountModalTemplate {
    /// A fresh, empty registration form.
    fn empty() -> Self {
        Self {
            message: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

/// Form fragment re-rendered with a validation error.
#[derive(Template, WebTemplate)]
#[template(path = "partials/account_error.html")]
pub struct AccountErrorTemplate {
    pub message: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Success panel replacing the form after registration.
#[derive(Template, WebTemplate)]
#[template(path = "partials/account_success.html")]
pub struct AccountSuccessTemplate {
    pub email: String,
}

/// Open the account overlay (HTMX fragment).
///
/// A no-op 204 when the overlay is already open.
#[instrument(skip(state))]
pub async fn open(State(state): State<AppState>) -> impl IntoResponse {
    match state.account_overlay().open() {
        OverlayTransition::Opened => AccountModalTemplate::empty().into_response(),
        _ => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Submit the registration form.
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> impl IntoResponse {
    match Registration::from_form(&form.name, &form.email, &form.phone, Utc::now()) {
        Err(e) => {
            // Form is not submitted; no state is mutated
            AccountErrorTemplate {
                message: e.to_string(),
                name: form.name,
                email: form.email,
                phone: form.phone,
            }
            .into_response()
        }
        Ok(registration) => {
            let email = registration.email.to_string();
            if let Err(e) = state.storage().write_account(&registration) {
                // Known inconsistency window: the session continues with the
                // in-memory record even though persistence failed
                tracing::error!(error = %e, "failed to persist account registration");
            } else {
                tracing::info!(email = %email, "account registered");
            }
            AccountSuccessTemplate { email }.into_response()
        }
    }
}

/// Dismiss the account overlay.
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> StatusCode {
    state.account_overlay().close();
    StatusCode::NO_CONTENT
}

//! Panel page, section switching and notifications.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::instrument;

use crate::app_state::AppState;
use crate::error::AppError;
use crate::views::PanelTemplate;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the backend.
pub async fn health() -> &'static str {
    "ok"
}

/// Full panel page for the current state.
pub async fn index(State(state): State<AppState>) -> PanelTemplate {
    state.controller().panel().await
}

/// Show a section, load its table, and go back to the panel.
#[instrument(skip(state))]
pub async fn show_section(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Redirect, AppError> {
    if state.controller().show_section(&name).await {
        Ok(Redirect::to("/"))
    } else {
        Err(AppError::NotFound(format!("section {name}")))
    }
}

#[instrument(skip(state))]
pub async fn dismiss_notification(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Redirect {
    state.controller().dismiss_notification(id).await;
    Redirect::to("/")
}

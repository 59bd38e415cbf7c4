//! Category action handlers.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use flohmarkt_core::CategoryId;
use tracing::instrument;

use super::{ConfirmForm, NameForm};
use crate::app_state::AppState;
use crate::dialogs::PresetAnswers;

#[instrument(skip(state, answer))]
pub async fn add(State(state): State<AppState>, Form(answer): Form<NameForm>) -> Redirect {
    state
        .controller()
        .add_category(&PresetAnswers::from(answer))
        .await;
    Redirect::to("/")
}

#[instrument(skip(state, answer))]
pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Form(answer): Form<NameForm>,
) -> Redirect {
    state
        .controller()
        .edit_category(id, &PresetAnswers::from(answer))
        .await;
    Redirect::to("/")
}

#[instrument(skip(state, answer))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Form(answer): Form<ConfirmForm>,
) -> Redirect {
    state
        .controller()
        .delete_category(id, &PresetAnswers::from(answer))
        .await;
    Redirect::to("/")
}

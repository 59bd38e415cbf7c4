//! Product modal and product action handlers.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use flohmarkt_core::ProductId;
use tracing::instrument;

use super::ConfirmForm;
use crate::app_state::AppState;
use crate::dialogs::PresetAnswers;
use crate::form::ProductForm;

/// Open the empty "add product" modal.
pub async fn new(State(state): State<AppState>) -> Redirect {
    state.controller().open_add_product_modal().await;
    Redirect::to("/")
}

/// Open the modal filled from the cached product.
///
/// Unknown ids leave the modal closed.
#[instrument(skip(state))]
pub async fn edit(State(state): State<AppState>, Path(id): Path<ProductId>) -> Redirect {
    if !state.controller().edit_product(id).await {
        tracing::debug!(product_id = %id, "Product not in cache, edit ignored");
    }
    Redirect::to("/")
}

pub async fn close_modal(State(state): State<AppState>) -> Redirect {
    state.controller().close_product_modal().await;
    Redirect::to("/")
}

/// Create or update a product from the modal form.
#[instrument(skip(state, form))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Redirect {
    state.controller().submit_product_form(form).await;
    Redirect::to("/")
}

#[instrument(skip(state))]
pub async fn approve(State(state): State<AppState>, Path(id): Path<ProductId>) -> Redirect {
    state.controller().approve_product(id).await;
    Redirect::to("/")
}

#[instrument(skip(state, answer))]
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(answer): Form<ConfirmForm>,
) -> Redirect {
    state
        .controller()
        .reject_product(id, &PresetAnswers::from(answer))
        .await;
    Redirect::to("/")
}

#[instrument(skip(state, answer))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(answer): Form<ConfirmForm>,
) -> Redirect {
    state
        .controller()
        .delete_product(id, &PresetAnswers::from(answer))
        .await;
    Redirect::to("/")
}

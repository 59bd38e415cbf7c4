//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Health check
//!
//! # Panel
//! GET  /                               - Full panel (current section)
//! GET  /sections/{name}                - Show a section and load its table
//! POST /notifications/{id}/dismiss     - Dismiss a notification
//!
//! # Products
//! GET  /products/new                   - Open the empty product modal
//! GET  /products/{id}/edit             - Open the modal filled from the cache
//! POST /products/modal/close           - Close the modal
//! POST /products                       - Submit the product form
//! POST /products/{id}/approve          - Approve a pending product
//! POST /products/{id}/reject           - Reject (needs confirmed=true)
//! POST /products/{id}/delete           - Delete (needs confirmed=true)
//!
//! # Categories
//! POST /categories                     - Add (form field name)
//! POST /categories/{id}/rename         - Rename (form field name)
//! POST /categories/{id}/delete         - Delete (needs confirmed=true)
//! ```
//!
//! Every action redirects back to `/`, which renders the resulting state.

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::dialogs::PresetAnswers;

pub mod categories;
pub mod panel;
pub mod products;

/// Confirmation answer posted with destructive actions.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub confirmed: bool,
}

impl From<ConfirmForm> for PresetAnswers {
    fn from(form: ConfirmForm) -> Self {
        Self::confirmed(form.confirmed)
    }
}

/// Text answer posted with category add/rename.
#[derive(Debug, Default, Deserialize)]
pub struct NameForm {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<NameForm> for PresetAnswers {
    fn from(form: NameForm) -> Self {
        Self::text(form.name)
    }
}

/// Build the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(panel::health))
        // Panel
        .route("/", get(panel::index))
        .route("/sections/{name}", get(panel::show_section))
        .route("/notifications/{id}/dismiss", post(panel::dismiss_notification))
        // Products
        .route("/products", post(products::submit))
        .route("/products/new", get(products::new))
        .route("/products/modal/close", post(products::close_modal))
        .route("/products/{id}/edit", get(products::edit))
        .route("/products/{id}/approve", post(products::approve))
        .route("/products/{id}/reject", post(products::reject))
        .route("/products/{id}/delete", post(products::delete))
        // Categories
        .route("/categories", post(categories::add))
        .route("/categories/{id}/rename", post(categories::rename))
        .route("/categories/{id}/delete", post(categories::delete))
}

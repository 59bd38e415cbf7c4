//! Marketplace backend REST API.
//!
//! The backend owns persistence, authentication and image storage. This
//! module only depends on the shape of its JSON endpoints:
//!
//! ```text
//! GET    /api/admin/products                 list products
//! GET    /api/admin/users                    list users
//! GET    /api/categories                     list categories
//! POST   /api/products                       create product
//! PUT    /api/admin/products/{id}            update product
//! DELETE /api/admin/products/{id}            delete product
//! POST   /api/admin/products/{id}/approve    approve → {message} | {error}
//! POST   /api/admin/products/{id}/reject     reject  → {message} | {error}
//! POST   /api/admin/categories               create category {name}
//! PUT    /api/admin/categories/{id}          rename category {name}
//! DELETE /api/admin/categories/{id}          delete category
//! ```
//!
//! [`AdminBackend`] is the seam the controller talks through; [`RestClient`]
//! is the reqwest implementation.

use std::future::Future;

use flohmarkt_core::{Category, CategoryId, Product, ProductId, ProductInput, User};
use serde::Deserialize;

mod client;
mod error;

pub use client::RestClient;
pub use error::ApiError;

/// Body of a successful approve/reject call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActionReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// Operations the admin panel needs from the backend.
///
/// Each call issues exactly one HTTP request.
pub trait AdminBackend: Send + Sync {
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;

    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;

    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>> + Send;

    fn create_product(
        &self,
        input: &ProductInput,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn update_product(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete_product(&self, id: ProductId) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn approve_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<ActionReply, ApiError>> + Send;

    fn reject_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<ActionReply, ApiError>> + Send;

    fn create_category(&self, name: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn rename_category(
        &self,
        id: CategoryId,
        name: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete_category(&self, id: CategoryId) -> impl Future<Output = Result<(), ApiError>> + Send;
}

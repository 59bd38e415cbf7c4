//! Marketplace records as the backend REST API returns them.
//!
//! These are transient caches of server state: they are re-fetched every
//! time a section is shown and never persisted locally.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Price, ProductId, ProductStatus, UserId, UserRole};

/// A listing as returned by `GET /api/admin/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    /// Category display name. Older clients called this `category_name`.
    #[serde(alias = "category_name", default)]
    pub category: String,
    /// Seller display name. Older clients called this `seller_name`.
    #[serde(alias = "seller_name", default)]
    pub seller: String,
    #[serde(default)]
    pub seller_email: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A product category as returned by `GET /api/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub product_count: Option<u32>,
}

/// A marketplace account as returned by `GET /api/admin/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub fullname: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub product_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Request body for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category_id: CategoryId,
    pub image_url: String,
}

/// Request body for creating or renaming a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInput {
    pub name: String,
}

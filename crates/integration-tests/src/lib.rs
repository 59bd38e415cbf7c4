//! Integration test support for the Flohmarkt admin panel.
//!
//! [`MockBackend`] is an in-process axum server that speaks the marketplace
//! backend's REST API, keeps its data in memory and records every request it
//! receives, so tests can assert both on what the panel shows and on which
//! requests were (or were not) sent.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p flohmarkt-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use flohmarkt_admin::api::RestClient;
use flohmarkt_admin::controller::AdminController;
use flohmarkt_admin::notifications::Notifications;
use flohmarkt_core::{
    Category, CategoryId, Price, Product, ProductId, ProductStatus, User, UserId, UserRole,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use url::Url;

/// Product request body as the backend reads it.
#[derive(Debug, Deserialize)]
struct ProductBody {
    name: String,
    #[serde(default)]
    description: String,
    price: Price,
    category_id: CategoryId,
    #[serde(default)]
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct CategoryBody {
    name: String,
}

#[derive(Default)]
struct Store {
    products: Mutex<Vec<Product>>,
    users: Mutex<Vec<User>>,
    categories: Mutex<Vec<Category>>,
    requests: Mutex<Vec<String>>,
    fail_lists: AtomicBool,
    fail_categories: AtomicBool,
    fail_mutations: Mutex<Option<String>>,
}

impl Store {
    fn category_name(&self, id: CategoryId) -> String {
        self.categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }

    fn mutation_error(&self) -> Option<Response> {
        self.fail_mutations.lock().unwrap().clone().map(|message| {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        })
    }
}

type Shared = Arc<Store>;

/// In-process fake of the marketplace backend.
pub struct MockBackend {
    url: Url,
    store: Shared,
}

impl MockBackend {
    /// Start a backend seeded with [`sample_products`], [`sample_users`] and
    /// [`sample_categories`] on an ephemeral port.
    pub async fn start() -> Self {
        let store = Shared::default();
        *store.products.lock().unwrap() = sample_products();
        *store.users.lock().unwrap() = sample_users();
        *store.categories.lock().unwrap() = sample_categories();

        let app = Router::new()
            .route("/api/admin/products", get(list_products))
            .route("/api/admin/users", get(list_users))
            .route("/api/categories", get(list_categories))
            .route("/api/products", post(create_product))
            .route(
                "/api/admin/products/{id}",
                put(update_product).delete(delete_product),
            )
            .route("/api/admin/products/{id}/approve", post(approve_product))
            .route("/api/admin/products/{id}/reject", post(reject_product))
            .route("/api/admin/categories", post(create_category))
            .route(
                "/api/admin/categories/{id}",
                put(rename_category).delete(delete_category),
            )
            .layer(middleware::from_fn_with_state(store.clone(), record))
            .with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: Url::parse(&format!("http://{addr}/")).unwrap(),
            store,
        }
    }

    /// Base URL of the running backend.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// A client pointed at this backend.
    #[must_use]
    pub fn client(&self) -> RestClient {
        RestClient::new(self.url.clone(), None)
    }

    /// A fresh controller talking to this backend.
    #[must_use]
    pub fn controller(&self) -> AdminController<RestClient> {
        AdminController::new(self.client(), Notifications::default())
    }

    /// Every request received so far, as `"METHOD /path"`.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.store.requests.lock().unwrap().clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.store.requests.lock().unwrap().len()
    }

    /// Answer every list request with HTTP 500.
    pub fn fail_lists(&self, fail: bool) {
        self.store.fail_lists.store(fail, Ordering::SeqCst);
    }

    /// Answer only `GET /api/categories` with HTTP 500.
    pub fn fail_categories(&self, fail: bool) {
        self.store.fail_categories.store(fail, Ordering::SeqCst);
    }

    /// Answer every mutation with HTTP 400 and `{"error": message}`.
    pub fn fail_mutations(&self, message: Option<&str>) {
        *self.store.fail_mutations.lock().unwrap() = message.map(str::to_string);
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.store
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.store.categories.lock().unwrap().clone()
    }
}

async fn record(State(store): State<Shared>, request: Request, next: Next) -> Response {
    store
        .requests
        .lock()
        .unwrap()
        .push(format!("{} {}", request.method(), request.uri().path()));
    next.run(request).await
}

fn list_response<T: serde::Serialize + Clone>(store: &Store, items: &Mutex<Vec<T>>) -> Response {
    if store.fail_lists.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "db down" })))
            .into_response();
    }
    Json(items.lock().unwrap().clone()).into_response()
}

async fn list_products(State(store): State<Shared>) -> Response {
    list_response(&store, &store.products)
}

async fn list_users(State(store): State<Shared>) -> Response {
    list_response(&store, &store.users)
}

async fn list_categories(State(store): State<Shared>) -> Response {
    if store.fail_categories.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "db down" })))
            .into_response();
    }
    list_response(&store, &store.categories)
}

async fn create_product(State(store): State<Shared>, Json(body): Json<ProductBody>) -> Response {
    if let Some(err) = store.mutation_error() {
        return err;
    }
    let category = store.category_name(body.category_id);
    let mut products = store.products.lock().unwrap();
    let id = products.iter().map(|p| p.id.as_i32()).max().unwrap_or(0) + 1;
    products.push(Product {
        id: ProductId::new(id),
        name: body.name,
        description: Some(body.description),
        price: body.price,
        category,
        seller: "المدير".to_string(),
        seller_email: None,
        status: ProductStatus::Pending,
        image_url: Some(body.image_url).filter(|u| !u.is_empty()),
        created_at: None,
    });
    (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
}

async fn update_product(
    State(store): State<Shared>,
    Path(id): Path<ProductId>,
    Json(body): Json<ProductBody>,
) -> Response {
    if let Some(err) = store.mutation_error() {
        return err;
    }
    let category = store.category_name(body.category_id);
    let mut products = store.products.lock().unwrap();
    let Some(product) = products.iter_mut().find(|p| p.id == id) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "المنتج غير موجود" })))
            .into_response();
    };
    product.name = body.name;
    product.description = Some(body.description);
    product.price = body.price;
    product.category = category;
    product.image_url = Some(body.image_url).filter(|u| !u.is_empty());
    Json(json!({ "message": "ok" })).into_response()
}

async fn delete_product(State(store): State<Shared>, Path(id): Path<ProductId>) -> Response {
    if let Some(err) = store.mutation_error() {
        return err;
    }
    store.products.lock().unwrap().retain(|p| p.id != id);
    StatusCode::NO_CONTENT.into_response()
}

fn set_status(store: &Store, id: ProductId, status: ProductStatus, message: &str) -> Response {
    if let Some(err) = store.mutation_error() {
        return err;
    }
    let mut products = store.products.lock().unwrap();
    match products.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            product.status = status;
            Json(json!({ "message": message })).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "المنتج غير موجود" })))
            .into_response(),
    }
}

async fn approve_product(State(store): State<Shared>, Path(id): Path<ProductId>) -> Response {
    set_status(&store, id, ProductStatus::Approved, "تم قبول المنتج ونشره")
}

async fn reject_product(State(store): State<Shared>, Path(id): Path<ProductId>) -> Response {
    // The rejection endpoint answers without a body.
    if let Some(err) = store.mutation_error() {
        return err;
    }
    let mut products = store.products.lock().unwrap();
    if let Some(product) = products.iter_mut().find(|p| p.id == id) {
        product.status = ProductStatus::Rejected;
    }
    StatusCode::OK.into_response()
}

async fn create_category(State(store): State<Shared>, Json(body): Json<CategoryBody>) -> Response {
    if let Some(err) = store.mutation_error() {
        return err;
    }
    let mut categories = store.categories.lock().unwrap();
    if categories.iter().any(|c| c.name == body.name) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "الفئة موجودة بالفعل" })))
            .into_response();
    }
    let id = categories.iter().map(|c| c.id.as_i32()).max().unwrap_or(0) + 1;
    categories.push(Category {
        id: CategoryId::new(id),
        name: body.name,
        product_count: None,
    });
    (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
}

async fn rename_category(
    State(store): State<Shared>,
    Path(id): Path<CategoryId>,
    Json(body): Json<CategoryBody>,
) -> Response {
    if let Some(err) = store.mutation_error() {
        return err;
    }
    let mut categories = store.categories.lock().unwrap();
    if let Some(category) = categories.iter_mut().find(|c| c.id == id) {
        category.name = body.name;
    }
    Json(json!({ "message": "ok" })).into_response()
}

async fn delete_category(State(store): State<Shared>, Path(id): Path<CategoryId>) -> Response {
    if let Some(err) = store.mutation_error() {
        return err;
    }
    store.categories.lock().unwrap().retain(|c| c.id != id);
    StatusCode::NO_CONTENT.into_response()
}

// =============================================================================
// Fixtures
// =============================================================================

/// Three categories: كتب (1), أثاث (2), ملابس (3).
#[must_use]
pub fn sample_categories() -> Vec<Category> {
    [(1, "كتب"), (2, "أثاث"), (3, "ملابس")]
        .into_iter()
        .map(|(id, name)| Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            product_count: None,
        })
        .collect()
}

/// Three products: 1 and 2 pending, 3 approved.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    [
        (1, "رواية قديمة", "كتب", ProductStatus::Pending, 45),
        (2, "قاموس", "كتب", ProductStatus::Pending, 120),
        (3, "كرسي خشب", "أثاث", ProductStatus::Approved, 1250),
    ]
    .into_iter()
    .map(|(id, name, category, status, price)| Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: None,
        price: Price::new(Decimal::new(price, 0)),
        category: category.to_string(),
        seller: "سارة".to_string(),
        seller_email: Some("sara@example.com".to_string()),
        status,
        image_url: None,
        created_at: Some("2024-05-01 09:15".to_string()),
    })
    .collect()
}

#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(1),
            fullname: "سارة أحمد".to_string(),
            email: "sara@example.com".to_string(),
            phone: Some("01000000000".to_string()),
            role: UserRole::User,
            product_count: Some(3),
            created_at: Some("2024-01-10 12:00".to_string()),
        },
        User {
            id: UserId::new(2),
            fullname: "المدير".to_string(),
            email: "admin@example.com".to_string(),
            phone: None,
            role: UserRole::Admin,
            product_count: None,
            created_at: None,
        },
    ]
}

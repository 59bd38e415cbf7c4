//! End-to-end tests for the admin panel against the in-process mock backend.
//!
//! Each test starts its own backend, drives the controller (or the HTTP
//! surface) and checks both the resulting panel state and the requests the
//! backend received.

#![allow(clippy::unwrap_used)]

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::TimeDelta;
use flohmarkt_admin::{
    AppState, app,
    config::AdminConfig,
    controller::{
        ActionOutcome, AdminController, LOAD_CATEGORIES_FAILED, LOAD_PRODUCTS_FAILED,
        PRODUCT_APPROVED, PRODUCT_REJECTED,
    },
    dialogs::PresetAnswers,
    form::ProductForm,
    notifications::{NotificationKind, Notifications},
    state::Section,
};
use flohmarkt_core::{
    CategoryId, ProductId, ProductStatus,
    search::{LiveFilter, ProductCard},
};
use flohmarkt_integration_tests::MockBackend;
use tower::ServiceExt;

fn decline() -> PresetAnswers {
    PresetAnswers::confirmed(false)
}

fn accept() -> PresetAnswers {
    PresetAnswers::confirmed(true)
}

fn answer(text: &str) -> PresetAnswers {
    PresetAnswers::text(Some(text.to_string()))
}

// =============================================================================
// Loading tables
// =============================================================================

#[tokio::test]
async fn test_products_section_loads_rows() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();

    assert!(controller.show_section("products").await);

    let state = controller.snapshot().await;
    assert_eq!(state.section, Section::Products);
    assert_eq!(state.products_table.rows().len(), 3);
    assert_eq!(state.products.len(), 3);
    assert_eq!(backend.requests(), vec!["GET /api/admin/products"]);
}

#[tokio::test]
async fn test_failed_fetch_shows_error_row_and_one_notification() {
    let backend = MockBackend::start().await;
    backend.fail_lists(true);
    let controller = backend.controller();

    assert!(!controller.load_products().await);

    let state = controller.snapshot().await;
    assert!(state.products_table.is_failed());
    let errors: Vec<_> = state
        .notifications
        .all()
        .iter()
        .filter(|n| n.kind == NotificationKind::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, LOAD_PRODUCTS_FAILED);

    let html = controller.render().await.unwrap();
    assert_eq!(html.matches("فشل في تحميل البيانات").count(), 1);
    assert!(html.contains(r#"colspan="8""#));
}

#[tokio::test]
async fn test_categories_table_counts_products_by_name() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();

    assert!(controller.show_section("categories").await);

    let state = controller.snapshot().await;
    let counts: Vec<(&str, usize)> = state
        .categories_table
        .rows()
        .iter()
        .map(|row| (row.category.name.as_str(), row.product_count))
        .collect();
    assert_eq!(counts, vec![("كتب", 2), ("أثاث", 1), ("ملابس", 0)]);
}

#[tokio::test]
async fn test_failed_categories_fetch_fails_categories_table() {
    let backend = MockBackend::start().await;
    backend.fail_categories(true);
    let controller = backend.controller();

    assert!(controller.show_section("categories").await);

    let state = controller.snapshot().await;
    assert!(state.categories_table.is_failed());
    assert_eq!(state.notifications.all().len(), 1);
    assert_eq!(state.notifications.all()[0].message, LOAD_CATEGORIES_FAILED);
    assert_eq!(backend.requests(), vec!["GET /api/categories"]);

    let html = controller.render().await.unwrap();
    assert_eq!(html.matches("فشل في تحميل البيانات").count(), 1);
    assert!(html.contains(r#"colspan="4""#));
}

#[tokio::test]
async fn test_unknown_section_is_ignored() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();
    controller.show_section("users").await;
    let requests_before = backend.request_count();

    assert!(!controller.show_section("reports").await);

    assert_eq!(controller.snapshot().await.section, Section::Users);
    assert_eq!(backend.request_count(), requests_before);
}

// =============================================================================
// Product actions
// =============================================================================

#[tokio::test]
async fn test_approve_refetches_with_new_status() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();
    controller.load_products().await;

    let outcome = controller.approve_product(ProductId::new(1)).await;

    assert_eq!(outcome, ActionOutcome::Succeeded);
    assert_eq!(
        backend.requests(),
        vec![
            "GET /api/admin/products",
            "POST /api/admin/products/1/approve",
            "GET /api/admin/products",
        ]
    );
    let state = controller.snapshot().await;
    let approved = state.cached_product(ProductId::new(1)).unwrap();
    assert_eq!(approved.status, ProductStatus::Approved);
    // The backend message wins over the fallback text.
    let last = state.notifications.all().last().unwrap();
    assert_eq!(last.message, "تم قبول المنتج ونشره");
    assert_ne!(last.message, PRODUCT_APPROVED);
}

#[tokio::test]
async fn test_reject_without_body_uses_fallback_message() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();

    let outcome = controller.reject_product(ProductId::new(2), &accept()).await;

    assert_eq!(outcome, ActionOutcome::Succeeded);
    assert_eq!(
        backend.product(ProductId::new(2)).unwrap().status,
        ProductStatus::Rejected
    );
    let state = controller.snapshot().await;
    assert_eq!(state.notifications.all().last().unwrap().message, PRODUCT_REJECTED);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();

    let outcome = controller.delete_product(ProductId::new(3), &decline()).await;

    assert_eq!(outcome, ActionOutcome::Cancelled);
    assert_eq!(backend.request_count(), 0);
    assert!(backend.product(ProductId::new(3)).is_some());
    assert!(controller.snapshot().await.notifications.all().is_empty());
}

#[tokio::test]
async fn test_backend_error_message_is_shown() {
    let backend = MockBackend::start().await;
    backend.fail_mutations(Some("المنتج محجوز"));
    let controller = backend.controller();

    let outcome = controller.delete_product(ProductId::new(3), &accept()).await;

    assert_eq!(outcome, ActionOutcome::Failed);
    let state = controller.snapshot().await;
    let last = state.notifications.all().last().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
    assert!(last.message.ends_with("المنتج محجوز"));
}

// =============================================================================
// Product modal
// =============================================================================

#[tokio::test]
async fn test_edit_unknown_product_keeps_modal_closed() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();
    controller.load_products().await;

    assert!(!controller.edit_product(ProductId::new(99)).await);
    assert!(!controller.snapshot().await.product_modal.open);
}

#[tokio::test]
async fn test_submit_new_product_creates_and_closes_modal() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();
    controller.load_categories().await;
    controller.open_add_product_modal().await;

    let form = ProductForm {
        name: "مصباح".to_string(),
        description: "مصباح مكتب".to_string(),
        price: "75.5".to_string(),
        category_id: Some(CategoryId::new(2)),
        ..ProductForm::default()
    };
    let outcome = controller.submit_product_form(form).await;

    assert_eq!(outcome, ActionOutcome::Succeeded);
    let created = backend.product(ProductId::new(4)).unwrap();
    assert_eq!(created.category, "أثاث");
    let state = controller.snapshot().await;
    assert!(!state.product_modal.open);
    assert_eq!(state.products.len(), 4);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();
    controller.open_add_product_modal().await;
    let requests_before = backend.request_count();

    let form = ProductForm {
        name: "مصباح".to_string(),
        price: "غالي".to_string(),
        category_id: Some(CategoryId::new(2)),
        ..ProductForm::default()
    };
    let outcome = controller.submit_product_form(form).await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert_eq!(backend.request_count(), requests_before);
    let state = controller.snapshot().await;
    assert!(state.product_modal.open);
    assert_eq!(state.product_modal.form.price, "غالي");
}

// =============================================================================
// Category actions
// =============================================================================

#[tokio::test]
async fn test_blank_category_name_sends_nothing() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();

    let outcome = controller.add_category(&answer("   ")).await;

    assert_eq!(outcome, ActionOutcome::Cancelled);
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn test_add_category_trims_and_refreshes_table() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();

    let outcome = controller.add_category(&answer("  ألعاب ")).await;

    assert_eq!(outcome, ActionOutcome::Succeeded);
    assert!(backend.categories().iter().any(|c| c.name == "ألعاب"));
    let state = controller.snapshot().await;
    assert_eq!(state.categories.len(), 4);
    assert_eq!(state.categories_table.rows().len(), 4);
}

#[tokio::test]
async fn test_unchanged_rename_sends_nothing() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();
    controller.load_categories().await;
    let requests_before = backend.request_count();

    let outcome = controller
        .edit_category(CategoryId::new(1), &answer("كتب"))
        .await;

    assert_eq!(outcome, ActionOutcome::Cancelled);
    assert_eq!(backend.request_count(), requests_before);
}

#[tokio::test]
async fn test_rename_category() {
    let backend = MockBackend::start().await;
    let controller = backend.controller();
    controller.load_categories().await;

    let outcome = controller
        .edit_category(CategoryId::new(3), &answer("أزياء"))
        .await;

    assert_eq!(outcome, ActionOutcome::Succeeded);
    assert!(
        backend
            .requests()
            .contains(&"PUT /api/admin/categories/3".to_string())
    );
    let state = controller.snapshot().await;
    assert_eq!(state.cached_category(CategoryId::new(3)).unwrap().name, "أزياء");
}

// =============================================================================
// Notifications
// =============================================================================

#[tokio::test]
async fn test_notifications_expire_after_ttl() {
    let backend = MockBackend::start().await;
    let controller =
        AdminController::new(backend.client(), Notifications::new(TimeDelta::seconds(5)));
    controller.approve_product(ProductId::new(1)).await;

    let created_at = controller.snapshot().await.notifications.all()[0].created_at;
    controller
        .with_state(|state| {
            assert_eq!(state.notifications.visible_at(created_at + TimeDelta::seconds(4)).len(), 1);
            assert!(state.notifications.visible_at(created_at + TimeDelta::seconds(5)).is_empty());
        })
        .await;
}

// =============================================================================
// HTTP surface
// =============================================================================

fn http_app(backend: &MockBackend) -> axum::Router {
    let url = backend.url().to_string();
    let config = AdminConfig::from_lookup(|key| {
        (key == "FLOHMARKT_API_URL").then(|| url.clone())
    })
    .unwrap();
    app(AppState::new(config), "static")
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let backend = MockBackend::start().await;
    let response = http_app(&backend)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_action_redirects_to_panel() {
    let backend = MockBackend::start().await;
    let response = http_app(&backend)
        .oneshot(form_post("/products/1/approve", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(
        backend.product(ProductId::new(1)).unwrap().status,
        ProductStatus::Approved
    );
}

#[tokio::test]
async fn test_unconfirmed_delete_over_http_sends_nothing() {
    let backend = MockBackend::start().await;
    let response = http_app(&backend)
        .oneshot(form_post("/products/3/delete", "confirmed=false"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn test_unknown_section_over_http_is_not_found() {
    let backend = MockBackend::start().await;
    let response = http_app(&backend)
        .oneshot(Request::get("/sections/reports").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_panel_renders_arabic_page() {
    let backend = MockBackend::start().await;
    let response = http_app(&backend)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(r#"dir="rtl""#));
    assert!(html.contains("لوحة التحكم"));
}

// =============================================================================
// Storefront live filter
// =============================================================================

#[test]
fn test_live_filter_phone_example() {
    let mut filter = LiveFilter::new(vec![
        ProductCard::new("هاتف سامسونج", "بحالة ممتازة", "إلكترونيات"),
        ProductCard::new("كرسي", "خشب زان", "أثاث"),
        ProductCard::new("شاحن", "يناسب أي هاتف", "إلكترونيات"),
    ]);

    filter.on_input("  هاتف ");

    assert_eq!(filter.visible_indices(), vec![0, 2]);
    assert!(filter.no_results().is_none());

    filter.on_input("دراجة");
    assert_eq!(filter.visible_count(), 0);
    assert_eq!(
        filter.no_results().map(|p| p.message()),
        Some("لم نجد منتجات تطابق البحث عن \"دراجة\"".to_string())
    );
}

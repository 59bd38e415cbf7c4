//! Askama views of the admin panel.
//!
//! Every view is built from an [`AdminState`] snapshot and holds preformatted
//! strings, so rendering is a pure function of the state.

use askama::Template;
use askama_web::WebTemplate;
use chrono::{DateTime, Utc};
use flohmarkt_core::format::{NOT_SPECIFIED, format_date_ar};
use flohmarkt_core::{Category, CategoryId, Product, User};

use crate::form::ProductModal;
use crate::notifications::Notification;
use crate::state::{AdminState, CategoryRow, Section, TableState};

/// Columns of the products table.
pub const PRODUCT_COLUMNS: usize = 8;
/// Columns of the users table.
pub const USER_COLUMNS: usize = 6;
/// Columns of the categories table.
pub const CATEGORY_COLUMNS: usize = 4;

/// Placeholder of the category select.
pub const CHOOSE_CATEGORY: &str = "اختر الفئة";

// =============================================================================
// Row views
// =============================================================================

/// Product row for templates.
#[derive(Debug, Clone)]
pub struct ProductRowView {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub category: String,
    pub price: String,
    pub seller: String,
    pub status: &'static str,
    pub status_label: &'static str,
    pub is_pending: bool,
}

impl From<&Product> for ProductRowView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            image_url: product.image_url.clone().filter(|url| !url.is_empty()),
            category: product.category.clone(),
            price: product.price.display_ar(),
            seller: product.seller.clone(),
            status: product.status.as_str(),
            status_label: product.status.label_ar(),
            is_pending: product.status.is_pending(),
        }
    }
}

/// User row for templates.
#[derive(Debug, Clone)]
pub struct UserRowView {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub is_admin: bool,
    pub role_label: &'static str,
    pub joined: String,
}

impl From<&User> for UserRowView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            fullname: user.fullname.clone(),
            email: user.email.clone(),
            phone: user
                .phone
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            is_admin: user.role.is_admin(),
            role_label: user.role.label_ar(),
            joined: format_date_ar(user.created_at.as_deref()),
        }
    }
}

/// Category row for templates.
#[derive(Debug, Clone)]
pub struct CategoryRowView {
    pub id: String,
    pub name: String,
    pub product_count: String,
}

impl From<&CategoryRow> for CategoryRowView {
    fn from(row: &CategoryRow) -> Self {
        Self {
            id: row.category.id.to_string(),
            name: row.category.name.clone(),
            product_count: row.product_count.to_string(),
        }
    }
}

/// One `<option>` of the category select.
#[derive(Debug, Clone)]
pub struct CategoryOptionView {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

impl CategoryOptionView {
    fn list(categories: &[Category], selected: Option<CategoryId>) -> Vec<Self> {
        categories
            .iter()
            .map(|c| Self {
                id: c.id.to_string(),
                name: c.name.clone(),
                selected: selected == Some(c.id),
            })
            .collect()
    }
}

/// Notification for templates.
#[derive(Debug, Clone)]
pub struct NotificationView {
    pub id: u64,
    pub kind: &'static str,
    pub message: String,
}

impl From<&Notification> for NotificationView {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind.as_str(),
            message: notification.message.clone(),
        }
    }
}

/// Navigation entry.
#[derive(Debug, Clone)]
pub struct NavLinkView {
    pub section: &'static str,
    pub label: &'static str,
    pub active: bool,
}

// =============================================================================
// Templates
// =============================================================================

/// Body of the products table.
#[derive(Template)]
#[template(path = "partials/products_body.html")]
pub struct ProductsBodyTemplate {
    pub loading: bool,
    pub failed: bool,
    pub columns: usize,
    pub rows: Vec<ProductRowView>,
}

impl From<&TableState<Product>> for ProductsBodyTemplate {
    fn from(table: &TableState<Product>) -> Self {
        Self {
            loading: table.is_loading(),
            failed: table.is_failed(),
            columns: PRODUCT_COLUMNS,
            rows: table.rows().iter().map(ProductRowView::from).collect(),
        }
    }
}

/// Body of the users table.
#[derive(Template)]
#[template(path = "partials/users_body.html")]
pub struct UsersBodyTemplate {
    pub loading: bool,
    pub failed: bool,
    pub columns: usize,
    pub rows: Vec<UserRowView>,
}

impl From<&TableState<User>> for UsersBodyTemplate {
    fn from(table: &TableState<User>) -> Self {
        Self {
            loading: table.is_loading(),
            failed: table.is_failed(),
            columns: USER_COLUMNS,
            rows: table.rows().iter().map(UserRowView::from).collect(),
        }
    }
}

/// Body of the categories table.
#[derive(Template)]
#[template(path = "partials/categories_body.html")]
pub struct CategoriesBodyTemplate {
    pub loading: bool,
    pub failed: bool,
    pub columns: usize,
    pub rows: Vec<CategoryRowView>,
}

impl From<&TableState<CategoryRow>> for CategoriesBodyTemplate {
    fn from(table: &TableState<CategoryRow>) -> Self {
        Self {
            loading: table.is_loading(),
            failed: table.is_failed(),
            columns: CATEGORY_COLUMNS,
            rows: table.rows().iter().map(CategoryRowView::from).collect(),
        }
    }
}

/// Options of the product form's category select.
#[derive(Template)]
#[template(path = "partials/category_options.html")]
pub struct CategoryOptionsTemplate {
    pub placeholder: &'static str,
    pub options: Vec<CategoryOptionView>,
}

impl CategoryOptionsTemplate {
    #[must_use]
    pub fn new(categories: &[Category], selected: Option<CategoryId>) -> Self {
        Self {
            placeholder: CHOOSE_CATEGORY,
            options: CategoryOptionView::list(categories, selected),
        }
    }
}

/// The shared add/edit product modal.
#[derive(Template)]
#[template(path = "partials/product_modal.html")]
pub struct ProductModalTemplate {
    pub open: bool,
    pub title: &'static str,
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub category_options: CategoryOptionsTemplate,
}

impl ProductModalTemplate {
    #[must_use]
    pub fn new(modal: &ProductModal, categories: &[Category]) -> Self {
        let form = &modal.form;
        Self {
            open: modal.open,
            title: modal.title(),
            id: form.id.map(|id| id.to_string()).unwrap_or_default(),
            name: form.name.clone(),
            description: form.description.clone(),
            price: form.price.clone(),
            image_url: form.image_url.clone(),
            category_options: CategoryOptionsTemplate::new(categories, form.category_id),
        }
    }
}

/// The alerts container.
#[derive(Template)]
#[template(path = "partials/notifications.html")]
pub struct NotificationsTemplate {
    pub items: Vec<NotificationView>,
}

/// The whole panel page.
#[derive(Template, WebTemplate)]
#[template(path = "panel.html")]
pub struct PanelTemplate {
    pub current_section: &'static str,
    pub nav: Vec<NavLinkView>,
    pub products_body: ProductsBodyTemplate,
    pub users_body: UsersBodyTemplate,
    pub categories_body: CategoriesBodyTemplate,
    pub product_modal: ProductModalTemplate,
    pub notifications: NotificationsTemplate,
}

impl PanelTemplate {
    /// Build the page for `state` as seen at `now`.
    #[must_use]
    pub fn new(state: &AdminState, now: DateTime<Utc>) -> Self {
        Self {
            current_section: state.section.as_str(),
            nav: Section::ALL
                .into_iter()
                .map(|section| NavLinkView {
                    section: section.as_str(),
                    label: section.label_ar(),
                    active: section == state.section,
                })
                .collect(),
            products_body: ProductsBodyTemplate::from(&state.products_table),
            users_body: UsersBodyTemplate::from(&state.users_table),
            categories_body: CategoriesBodyTemplate::from(&state.categories_table),
            product_modal: ProductModalTemplate::new(&state.product_modal, &state.categories),
            notifications: NotificationsTemplate {
                items: state
                    .notifications
                    .visible_at(now)
                    .into_iter()
                    .map(NotificationView::from)
                    .collect(),
            },
        }
    }

    fn is_current(&self, section: &str) -> bool {
        self.current_section == section
    }
}

/// Render the panel page for `state` at `now`.
///
/// # Errors
///
/// Returns the template error if rendering fails.
pub fn render_panel(state: &AdminState, now: DateTime<Utc>) -> askama::Result<String> {
    PanelTemplate::new(state, now).render()
}

//! Admin View Controller.
//!
//! Switches sections, loads the three resource tables, runs product and
//! category actions against the backend, and queues notifications. All
//! state lives in one [`AdminState`] behind a lock that is never held
//! across a backend call. Overlapping loads of the same table are not
//! coordinated: whichever completes last replaces the table.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use flohmarkt_core::{CategoryId, ProductId};
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::api::{AdminBackend, ApiError};
use crate::dialogs::{Confirmation, Dialogs, TextPrompt, trimmed_answer};
use crate::form::ProductForm;
use crate::notifications::Notifications;
use crate::state::{AdminState, CategoryRow, Section, TableState};
use crate::views::{self, PanelTemplate};

// User-facing texts.
pub const LOAD_PRODUCTS_FAILED: &str = "حدث خطأ في تحميل المنتجات: فشل في تحميل المنتجات";
pub const LOAD_USERS_FAILED: &str = "حدث خطأ في تحميل المستخدمين: فشل في تحميل المستخدمين";
pub const LOAD_CATEGORIES_FAILED: &str = "حدث خطأ في تحميل الفئات: فشل في تحميل الفئات";

pub const ERROR_PREFIX: &str = "حدث خطأ: ";
pub const DELETE_PRODUCT_ERROR_PREFIX: &str = "حدث خطأ في حذف المنتج: ";
pub const SERVER_ERROR: &str = "حدث خطأ في الخادم";

pub const PRODUCT_APPROVED: &str = "تم قبول المنتج بنجاح";
pub const APPROVE_FAILED: &str = "فشل في الموافقة على المنتج";
pub const PRODUCT_REJECTED: &str = "تم رفض المنتج";
pub const REJECT_FAILED: &str = "فشل في رفض المنتج";
pub const PRODUCT_DELETED: &str = "تم حذف المنتج بنجاح";
pub const DELETE_FAILED: &str = "فشل في حذف المنتج";
pub const PRODUCT_CREATED: &str = "تم إضافة المنتج بنجاح";
pub const PRODUCT_UPDATED: &str = "تم تحديث المنتج بنجاح";

pub const CATEGORY_CREATED: &str = "تم إضافة الفئة بنجاح";
pub const CATEGORY_RENAMED: &str = "تم تحديث الفئة بنجاح";
pub const CATEGORY_DELETED: &str = "تم حذف الفئة بنجاح";

/// Result of a mutating action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The admin declined or gave no usable input; no request was sent.
    Cancelled,
    /// The backend accepted the request.
    Succeeded,
    /// The request failed or the form was invalid; an error was shown.
    Failed,
}

impl ActionOutcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Drives the admin panel against an [`AdminBackend`].
pub struct AdminController<B> {
    backend: B,
    state: Arc<RwLock<AdminState>>,
}

impl<B: Clone> Clone for AdminController<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<B> std::fmt::Debug for AdminController<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminController").finish_non_exhaustive()
    }
}

impl<B: AdminBackend> AdminController<B> {
    #[must_use]
    pub fn new(backend: B, notifications: Notifications) -> Self {
        Self {
            backend,
            state: Arc::new(RwLock::new(AdminState::new(notifications))),
        }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> AdminState {
        self.state.read().await.clone()
    }

    /// Run `f` against the current state without cloning it.
    pub async fn with_state<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R {
        f(&*self.state.read().await)
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// Reveal the section called `name` and load its data.
    ///
    /// Returns `false` and leaves everything untouched when no section has
    /// that name.
    #[instrument(skip(self))]
    pub async fn show_section(&self, name: &str) -> bool {
        let Ok(section) = name.parse::<Section>() else {
            warn!(section = name, "Ignoring unknown section");
            return false;
        };

        self.state.write().await.section = section;

        match section {
            Section::Dashboard => {}
            Section::Products => {
                self.load_products().await;
            }
            Section::Users => {
                self.load_users().await;
            }
            Section::Categories => {
                self.load_categories_table().await;
            }
        }
        true
    }

    // =========================================================================
    // Loads
    // =========================================================================

    /// Fetch products into the table and the edit cache.
    #[instrument(skip(self))]
    pub async fn load_products(&self) -> bool {
        self.state.write().await.products_table = TableState::Loading;

        let result = self.backend.list_products().await;

        let mut state = self.state.write().await;
        match result {
            Ok(products) => {
                state.products.clone_from(&products);
                state.products_table = TableState::Loaded(products);
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to load products");
                state.products_table = TableState::Failed;
                state.notifications.error(LOAD_PRODUCTS_FAILED);
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn load_users(&self) -> bool {
        self.state.write().await.users_table = TableState::Loading;

        let result = self.backend.list_users().await;

        let mut state = self.state.write().await;
        match result {
            Ok(users) => {
                state.users_table = TableState::Loaded(users);
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to load users");
                state.users_table = TableState::Failed;
                state.notifications.error(LOAD_USERS_FAILED);
                false
            }
        }
    }

    /// Refresh the category cache behind the product form's select.
    ///
    /// Failures are logged only.
    #[instrument(skip(self))]
    pub async fn load_categories(&self) -> bool {
        match self.backend.list_categories().await {
            Ok(categories) => {
                self.state.write().await.categories = categories;
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to load categories");
                false
            }
        }
    }

    /// Refresh the categories table with per-category product counts.
    ///
    /// Also refreshes the category cache. Counts come from the product list,
    /// matched on category name. Either request failing fails the table.
    #[instrument(skip(self))]
    pub async fn load_categories_table(&self) -> bool {
        self.state.write().await.categories_table = TableState::Loading;

        let result = match self.backend.list_categories().await {
            Ok(categories) => self
                .backend
                .list_products()
                .await
                .map(|products| (categories, products)),
            Err(e) => Err(e),
        };

        let mut state = self.state.write().await;
        match result {
            Ok((categories, products)) => {
                let mut counts: HashMap<&str, usize> = HashMap::new();
                for product in &products {
                    *counts.entry(product.category.as_str()).or_default() += 1;
                }
                let rows: Vec<CategoryRow> = categories
                    .iter()
                    .map(|category| CategoryRow {
                        product_count: counts.get(category.name.as_str()).copied().unwrap_or(0),
                        category: category.clone(),
                    })
                    .collect();
                state.categories = categories;
                state.categories_table = TableState::Loaded(rows);
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to load categories table");
                state.categories_table = TableState::Failed;
                state.notifications.error(LOAD_CATEGORIES_FAILED);
                false
            }
        }
    }

    // =========================================================================
    // Product actions
    // =========================================================================

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn approve_product(&self, id: ProductId) -> ActionOutcome {
        match self.backend.approve_product(id).await {
            Ok(reply) => {
                info!("Product approved");
                self.succeed(reply.message, PRODUCT_APPROVED).await;
                self.load_products().await;
                ActionOutcome::Succeeded
            }
            Err(e) => self.fail(ERROR_PREFIX, &e, APPROVE_FAILED).await,
        }
    }

    #[instrument(skip(self, dialogs), fields(product_id = %id))]
    pub async fn reject_product(&self, id: ProductId, dialogs: &impl Dialogs) -> ActionOutcome {
        if !dialogs.confirm(Confirmation::RejectProduct).await {
            return ActionOutcome::Cancelled;
        }

        match self.backend.reject_product(id).await {
            Ok(reply) => {
                info!("Product rejected");
                self.succeed(reply.message, PRODUCT_REJECTED).await;
                self.load_products().await;
                ActionOutcome::Succeeded
            }
            Err(e) => self.fail(ERROR_PREFIX, &e, REJECT_FAILED).await,
        }
    }

    #[instrument(skip(self, dialogs), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ProductId, dialogs: &impl Dialogs) -> ActionOutcome {
        if !dialogs.confirm(Confirmation::DeleteProduct).await {
            return ActionOutcome::Cancelled;
        }

        match self.backend.delete_product(id).await {
            Ok(()) => {
                info!("Product deleted");
                self.succeed(None, PRODUCT_DELETED).await;
                self.load_products().await;
                ActionOutcome::Succeeded
            }
            Err(e) => {
                self.fail(DELETE_PRODUCT_ERROR_PREFIX, &e, DELETE_FAILED)
                    .await
            }
        }
    }

    // =========================================================================
    // Product modal
    // =========================================================================

    pub async fn open_add_product_modal(&self) {
        self.state.write().await.product_modal.open_blank();
    }

    /// Open the modal filled from the cached product `id`.
    ///
    /// Returns `false` without touching the modal when the product is not in
    /// the cache.
    pub async fn edit_product(&self, id: ProductId) -> bool {
        let mut state = self.state.write().await;
        let Some(form) = state
            .cached_product(id)
            .map(|product| ProductForm::from_product(product, &state.categories))
        else {
            return false;
        };
        state.product_modal.open_with(form);
        true
    }

    pub async fn close_product_modal(&self) {
        self.state.write().await.product_modal.close();
    }

    /// Create or update a product from the modal form.
    ///
    /// A form with an id updates that product; one without creates a new
    /// product. The modal closes only on success.
    #[instrument(skip(self, form), fields(product_id = ?form.id))]
    pub async fn submit_product_form(&self, form: ProductForm) -> ActionOutcome {
        let input = match form.to_input() {
            Ok(input) => input,
            Err(e) => {
                warn!(error = %e, "Product form rejected");
                let mut state = self.state.write().await;
                state.product_modal.open_with(form);
                state.notifications.error(format!("{ERROR_PREFIX}{e}"));
                return ActionOutcome::Failed;
            }
        };

        let result = match form.id {
            Some(id) => self.backend.update_product(id, &input).await,
            None => self.backend.create_product(&input).await,
        };

        match result {
            Ok(()) => {
                let message = if form.is_edit() {
                    PRODUCT_UPDATED
                } else {
                    PRODUCT_CREATED
                };
                {
                    let mut state = self.state.write().await;
                    state.notifications.success(message);
                    state.product_modal.close();
                }
                self.load_products().await;
                ActionOutcome::Succeeded
            }
            Err(e) => {
                self.state.write().await.product_modal.open_with(form);
                self.fail(ERROR_PREFIX, &e, SERVER_ERROR).await
            }
        }
    }

    // =========================================================================
    // Category actions
    // =========================================================================

    /// Ask for a name and create a category with it.
    #[instrument(skip(self, dialogs))]
    pub async fn add_category(&self, dialogs: &impl Dialogs) -> ActionOutcome {
        let Some(name) = trimmed_answer(dialogs.prompt(TextPrompt::new_category()).await) else {
            return ActionOutcome::Cancelled;
        };

        match self.backend.create_category(&name).await {
            Ok(()) => {
                info!(name = %name, "Category created");
                self.succeed(None, CATEGORY_CREATED).await;
                self.load_categories_table().await;
                ActionOutcome::Succeeded
            }
            Err(e) => self.fail(ERROR_PREFIX, &e, SERVER_ERROR).await,
        }
    }

    /// Ask for a new name for the cached category `id` and rename it.
    ///
    /// Unknown ids, empty answers and unchanged names send nothing.
    #[instrument(skip(self, dialogs), fields(category_id = %id))]
    pub async fn edit_category(&self, id: CategoryId, dialogs: &impl Dialogs) -> ActionOutcome {
        let Some(current) = self
            .with_state(|state| state.cached_category(id).map(|c| c.name.clone()))
            .await
        else {
            return ActionOutcome::Cancelled;
        };

        let answer = dialogs
            .prompt(TextPrompt::rename_category(current.clone()))
            .await;
        let Some(name) = trimmed_answer(answer).filter(|name| *name != current) else {
            return ActionOutcome::Cancelled;
        };

        match self.backend.rename_category(id, &name).await {
            Ok(()) => {
                info!(name = %name, "Category renamed");
                self.succeed(None, CATEGORY_RENAMED).await;
                self.load_categories_table().await;
                ActionOutcome::Succeeded
            }
            Err(e) => self.fail(ERROR_PREFIX, &e, SERVER_ERROR).await,
        }
    }

    #[instrument(skip(self, dialogs), fields(category_id = %id))]
    pub async fn delete_category(&self, id: CategoryId, dialogs: &impl Dialogs) -> ActionOutcome {
        if !dialogs.confirm(Confirmation::DeleteCategory).await {
            return ActionOutcome::Cancelled;
        }

        match self.backend.delete_category(id).await {
            Ok(()) => {
                info!("Category deleted");
                self.succeed(None, CATEGORY_DELETED).await;
                self.load_categories_table().await;
                ActionOutcome::Succeeded
            }
            Err(e) => self.fail(ERROR_PREFIX, &e, SERVER_ERROR).await,
        }
    }

    // =========================================================================
    // Notifications and rendering
    // =========================================================================

    pub async fn dismiss_notification(&self, id: u64) -> bool {
        self.state.write().await.notifications.dismiss(id)
    }

    /// The panel page for the current state. Expired notifications are
    /// pruned first.
    pub async fn panel(&self) -> PanelTemplate {
        let now = Utc::now();
        let mut state = self.state.write().await;
        state.notifications.prune_at(now);
        PanelTemplate::new(&state, now)
    }

    /// Render the panel page to a string.
    ///
    /// # Errors
    ///
    /// Returns the template error if rendering fails.
    pub async fn render(&self) -> askama::Result<String> {
        let now = Utc::now();
        let mut state = self.state.write().await;
        state.notifications.prune_at(now);
        views::render_panel(&state, now)
    }

    async fn succeed(&self, reply: Option<String>, fallback: &str) {
        let message = reply
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        self.state.write().await.notifications.success(message);
    }

    async fn fail(&self, prefix: &str, err: &ApiError, fallback: &str) -> ActionOutcome {
        warn!(error = %err, status = ?err.status(), "Admin action failed");
        let message = format!("{prefix}{}", err.user_message(fallback));
        self.state.write().await.notifications.error(message);
        ActionOutcome::Failed
    }
}

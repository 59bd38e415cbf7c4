//! Explicit application state of the admin panel.
//!
//! Everything the views render comes from [`AdminState`]. The controller
//! owns it behind a lock and replaces whole tables when requests complete;
//! rendering never mutates it.

use flohmarkt_core::{Category, CategoryId, Product, ProductId, User};

use crate::form::ProductModal;
use crate::notifications::Notifications;

/// A top-level admin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Products,
    Users,
    Categories,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Products, Self::Users, Self::Categories];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::Users => "users",
            Self::Categories => "categories",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label_ar(self) -> &'static str {
        match self {
            Self::Dashboard => "لوحة التحكم",
            Self::Products => "المنتجات",
            Self::Users => "المستخدمين",
            Self::Categories => "الفئات",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}

/// What a resource table currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableState<T> {
    /// A request is in flight; the loading indicator is shown.
    Loading,
    /// The last completed request succeeded.
    Loaded(Vec<T>),
    /// The last completed request failed; one error row is shown.
    Failed,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> TableState<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Rows of a loaded table, empty otherwise.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        match self {
            Self::Loaded(rows) => rows,
            Self::Loading | Self::Failed => &[],
        }
    }
}

/// A categories table row: the category and how many listings use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: Category,
    pub product_count: usize,
}

/// Everything the admin panel shows.
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    /// The visible section.
    pub section: Section,
    /// Last fetched products, used to pre-fill the edit modal.
    pub products: Vec<Product>,
    /// Last fetched categories, used for the category select and renames.
    pub categories: Vec<Category>,
    pub products_table: TableState<Product>,
    pub users_table: TableState<User>,
    pub categories_table: TableState<CategoryRow>,
    pub product_modal: ProductModal,
    pub notifications: Notifications,
}

impl AdminState {
    #[must_use]
    pub fn new(notifications: Notifications) -> Self {
        Self {
            notifications,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn cached_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn cached_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parse() {
        assert_eq!("users".parse::<Section>().unwrap(), Section::Users);
        assert!("settings".parse::<Section>().is_err());
        assert!("Products".parse::<Section>().is_err());
    }

    #[test]
    fn test_table_rows_only_when_loaded() {
        let loading: TableState<u8> = TableState::Loading;
        assert!(loading.rows().is_empty());
        assert!(loading.is_loading());

        let loaded = TableState::Loaded(vec![1, 2]);
        assert_eq!(loaded.rows(), &[1, 2]);

        let failed: TableState<u8> = TableState::Failed;
        assert!(failed.is_failed());
        assert!(failed.rows().is_empty());
    }
}

//! The shared product modal form.
//!
//! One modal serves both "add product" and "edit product". A form with an id
//! updates that product on submit; a form without one creates a new product.

use std::fmt::Display;
use std::str::FromStr;

use flohmarkt_core::{Category, CategoryId, Price, PriceError, Product, ProductId, ProductInput};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Native-constraint failures of the product form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("اسم المنتج مطلوب")]
    MissingName,
    #[error("السعر غير صالح: {0}")]
    InvalidPrice(#[from] PriceError),
    #[error("اختر الفئة")]
    MissingCategory,
}

/// Treat an empty form field as absent and parse anything else.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Field values of the product modal, as typed by the admin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub image_url: String,
}

impl ProductForm {
    /// Fill the form from a cached product.
    ///
    /// The product only carries its category name, so the category is
    /// selected by matching that name against the cached categories.
    #[must_use]
    pub fn from_product(product: &Product, categories: &[Category]) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            category_id: categories
                .iter()
                .find(|c| c.name == product.category)
                .map(|c| c.id),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    /// Whether submitting this form updates an existing product.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Validate the fields and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the first field that would fail the browser's own checks.
    pub fn to_input(&self) -> Result<ProductInput, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let price = Price::parse(&self.price)?;
        let category_id = self.category_id.ok_or(FormError::MissingCategory)?;

        Ok(ProductInput {
            name: name.to_string(),
            description: self.description.clone(),
            price,
            category_id,
            image_url: self.image_url.trim().to_string(),
        })
    }
}

/// Open/closed state of the product modal and the form inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductModal {
    pub open: bool,
    pub form: ProductForm,
}

impl ProductModal {
    /// Modal heading for the current form.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.form.is_edit() {
            "تعديل المنتج"
        } else {
            "إضافة منتج جديد"
        }
    }

    /// Show an empty form for a new product.
    pub fn open_blank(&mut self) {
        self.form = ProductForm::default();
        self.open = true;
    }

    /// Show the form filled with `form`.
    pub fn open_with(&mut self, form: ProductForm) {
        self.form = form;
        self.open = true;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use flohmarkt_core::ProductStatus;
    use rust_decimal::Decimal;

    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(5),
            name: "دراجة".to_string(),
            description: None,
            price: Price::new(Decimal::new(1200, 0)),
            category: "رياضة".to_string(),
            seller: "علي".to_string(),
            seller_email: None,
            status: ProductStatus::Approved,
            image_url: Some("https://img.example/bike.jpg".to_string()),
            created_at: None,
        }
    }

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: CategoryId::new(1),
                name: "كتب".to_string(),
                product_count: None,
            },
            Category {
                id: CategoryId::new(4),
                name: "رياضة".to_string(),
                product_count: None,
            },
        ]
    }

    #[test]
    fn test_from_product_selects_category_by_name() {
        let form = ProductForm::from_product(&product(), &categories());
        assert_eq!(form.id, Some(ProductId::new(5)));
        assert_eq!(form.category_id, Some(CategoryId::new(4)));
        assert_eq!(form.price, "1200");
        assert_eq!(form.description, "");
        assert_eq!(form.image_url, "https://img.example/bike.jpg");
    }

    #[test]
    fn test_from_product_unknown_category_leaves_select_empty() {
        let form = ProductForm::from_product(&product(), &[]);
        assert_eq!(form.category_id, None);
    }

    #[test]
    fn test_to_input_validates_like_the_browser() {
        let mut form = ProductForm::from_product(&product(), &categories());
        assert!(form.to_input().is_ok());

        form.name = "  ".to_string();
        assert_eq!(form.to_input(), Err(FormError::MissingName));

        form.name = "دراجة".to_string();
        form.price = "غالي".to_string();
        assert!(matches!(form.to_input(), Err(FormError::InvalidPrice(_))));

        form.price = "10".to_string();
        form.category_id = None;
        assert_eq!(form.to_input(), Err(FormError::MissingCategory));
    }

    #[test]
    fn test_deserialize_from_form_fields() {
        let form: ProductForm = serde_json::from_value(serde_json::json!({
            "id": "",
            "name": "طاولة",
            "description": "خشب",
            "price": "250",
            "category_id": "3",
            "image_url": ""
        }))
        .unwrap();
        assert_eq!(form.id, None);
        assert_eq!(form.category_id, Some(CategoryId::new(3)));
        assert!(!form.is_edit());
    }

    #[test]
    fn test_modal_title_follows_mode() {
        let mut modal = ProductModal::default();
        modal.open_blank();
        assert!(modal.open);
        assert_eq!(modal.title(), "إضافة منتج جديد");

        modal.open_with(ProductForm::from_product(&product(), &categories()));
        assert_eq!(modal.title(), "تعديل المنتج");

        modal.close();
        assert!(!modal.open);
    }
}

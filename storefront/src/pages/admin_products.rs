//! # Admin Products Page
//!
//! Catalog management: one form for create and edit, soft delete and the
//! availability switch.

use crate::app::auth::AuthContext;
use crate::app::guards;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::CatalogApi;
use crate::utils::validation;
use shared::{Product, ProductDraft, ProductQuery, ProductUpdate, CATEGORY_SLUGS};
use std::sync::Arc;

pub const ADMIN_PRODUCTS_LIMIT: u32 = 200;

/// Product form as typed; the price stays text until submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub badge: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: CATEGORY_SLUGS[0].to_string(),
            price: String::new(),
            description: String::new(),
            image: String::new(),
            badge: String::new(),
        }
    }
}

impl ProductForm {
    /// Form pre-filled for editing `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
            badge: product.badge.clone().unwrap_or_default(),
        }
    }

    /// Validate and convert into the request body.
    pub fn to_draft(&self) -> Result<ProductDraft> {
        validation::validate_min_length(&self.name, "Product name", 3).into_result()?;
        if !CATEGORY_SLUGS.contains(&self.category.as_str()) {
            return Err(AppError::Validation(format!("Unknown category: {}", self.category)));
        }
        let price = validation::parse_price(&self.price)?;
        validation::validate_required(&self.image, "Image").into_result()?;
        validation::validate_required(&self.description, "Description").into_result()?;

        let badge = self.badge.trim();
        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            category: self.category.clone(),
            price,
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            badge: (!badge.is_empty()).then(|| badge.to_uppercase()),
        })
    }
}

pub struct AdminProductsPage {
    catalog: Arc<dyn CatalogApi>,
    auth: AuthContext,
    toasts: ToastContext,
    pub products: Vec<Product>,
    pub form: ProductForm,
    editing: Option<String>,
}

impl AdminProductsPage {
    pub fn new(catalog: Arc<dyn CatalogApi>, auth: AuthContext, toasts: ToastContext) -> Self {
        Self {
            catalog,
            auth,
            toasts,
            products: Vec::new(),
            form: ProductForm::default(),
            editing: None,
        }
    }

    pub async fn load(&mut self) -> Result<&[Product]> {
        guards::require_admin(&self.auth)?;
        self.products = self
            .catalog
            .list_products(ProductQuery::with_limit(ADMIN_PRODUCTS_LIMIT))
            .await
            .map_err(|e| AppError::from_api(e, "Failed to load products"))?;
        Ok(self.products.as_slice())
    }

    /// Id of the product being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn edit(&mut self, product_id: &str) -> Result<()> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::State("Product not found".to_string()))?;
        self.form = ProductForm::from_product(product);
        self.editing = Some(product_id.to_string());
        Ok(())
    }

    pub fn reset_form(&mut self) {
        self.form = ProductForm::default();
        self.editing = None;
    }

    /// Create or update from the form, then reload the list.
    pub async fn submit(&mut self) -> Result<Product> {
        guards::require_admin(&self.auth)?;
        let draft = self.form.to_draft()?;

        let saved = match self.editing.clone() {
            Some(id) => {
                let product = self
                    .catalog
                    .update_product(&id, ProductUpdate::from(draft))
                    .await
                    .map_err(|e| AppError::from_api(e, "Failed to save product"))?;
                self.toasts.success("Product updated");
                product
            }
            None => {
                let product = self
                    .catalog
                    .create_product(draft)
                    .await
                    .map_err(|e| AppError::from_api(e, "Failed to save product"))?;
                self.toasts.success("Product created");
                product
            }
        };

        self.reset_form();
        self.load().await?;
        Ok(saved)
    }

    pub async fn delete(&mut self, product_id: &str) -> Result<()> {
        guards::require_admin(&self.auth)?;
        self.catalog
            .delete_product(product_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to delete product"))?;
        self.toasts.success("Product deleted");
        self.load().await?;
        Ok(())
    }

    /// Flip a product between available and unavailable.
    pub async fn toggle_availability(&mut self, product_id: &str) -> Result<bool> {
        guards::require_admin(&self.auth)?;
        let current = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.is_available)
            .ok_or_else(|| AppError::State("Product not found".to_string()))?;

        let update = ProductUpdate {
            is_available: Some(!current),
            ..ProductUpdate::default()
        };
        let updated = self
            .catalog
            .update_product(product_id, update)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to update product"))?;

        if let Some(slot) = self.products.iter_mut().find(|p| p.id == product_id) {
            *slot = updated.clone();
        }
        Ok(updated.is_available)
    }
}

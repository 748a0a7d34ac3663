//! # Recipes Page
//!
//! One recipe per product. The same form creates a missing recipe or
//! updates the existing one; costing and the ingredient check help plan a
//! production run.

use crate::app::auth::AuthContext;
use crate::app::guards;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::{CatalogApi, InventoryApi};
use crate::utils::validation;
use futures::future::join_all;
use shared::{
    DeductResult, IngredientCheck, Product, ProductQuery, Recipe, RecipeCost, RecipeDraft, RecipeIngredient,
    RecipeUpdate,
};
use std::collections::HashMap;
use std::sync::Arc;

pub const RECIPE_PRODUCTS_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeForm {
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: String,
    pub origin: String,
    pub story: String,
    pub history: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            ingredients: Vec::new(),
            instructions: String::new(),
            origin: String::new(),
            story: String::new(),
            history: String::new(),
            prep_time: 0,
            cook_time: 0,
            servings: 1,
        }
    }
}

impl RecipeForm {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone().unwrap_or_default(),
            origin: recipe.origin.clone().unwrap_or_default(),
            story: recipe.story.clone().unwrap_or_default(),
            history: recipe.history.clone().unwrap_or_default(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings.max(1),
        }
    }

    /// Add an ingredient line, or replace the line for the same ingredient.
    pub fn set_ingredient(&mut self, ingredient_id: &str, quantity: f64, unit: &str) -> Result<()> {
        validation::validate_stock_quantity(quantity).into_result()?;
        validation::validate_required(unit, "Unit").into_result()?;

        let line = RecipeIngredient {
            ingredient_id: ingredient_id.to_string(),
            quantity,
            unit: unit.trim().to_string(),
        };
        match self.ingredients.iter_mut().find(|l| l.ingredient_id == ingredient_id) {
            Some(existing) => *existing = line,
            None => self.ingredients.push(line),
        }
        Ok(())
    }

    pub fn remove_ingredient(&mut self, ingredient_id: &str) {
        self.ingredients.retain(|l| l.ingredient_id != ingredient_id);
    }

    pub fn to_draft(&self, product_id: &str) -> Result<RecipeDraft> {
        if self.servings == 0 {
            return Err(AppError::Validation("Servings must be at least 1".to_string()));
        }
        Ok(RecipeDraft {
            product_id: product_id.to_string(),
            ingredients: self.ingredients.clone(),
            instructions: non_empty(&self.instructions),
            origin: non_empty(&self.origin),
            story: non_empty(&self.story),
            history: non_empty(&self.history),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
        })
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

pub struct RecipesPage {
    catalog: Arc<dyn CatalogApi>,
    inventory: Arc<dyn InventoryApi>,
    auth: AuthContext,
    toasts: ToastContext,
    pub products: Vec<Product>,
    recipes: HashMap<String, Recipe>,
    pub form: RecipeForm,
    selected: Option<String>,
}

impl RecipesPage {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        inventory: Arc<dyn InventoryApi>,
        auth: AuthContext,
        toasts: ToastContext,
    ) -> Self {
        Self {
            catalog,
            inventory,
            auth,
            toasts,
            products: Vec::new(),
            recipes: HashMap::new(),
            form: RecipeForm::default(),
            selected: None,
        }
    }

    /// Load products, then every product's recipe concurrently.
    pub async fn load(&mut self) -> Result<usize> {
        guards::require_admin(&self.auth)?;
        self.products = self
            .catalog
            .list_products(ProductQuery::with_limit(RECIPE_PRODUCTS_LIMIT))
            .await
            .map_err(|e| AppError::from_api(e, "Failed to load data"))?;

        let lookups = self.products.iter().map(|product| {
            let inventory = self.inventory.clone();
            let product_id = product.id.clone();
            async move {
                let recipe = inventory.recipe_for_product(&product_id).await;
                (product_id, recipe)
            }
        });

        self.recipes = join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(product_id, recipe)| match recipe {
                Ok(Some(recipe)) => Some((product_id, recipe)),
                Ok(None) => None,
                Err(e) => {
                    tracing::warn!(product_id = %product_id, error = %e, "Recipe lookup failed");
                    None
                }
            })
            .collect();

        tracing::debug!(products = self.products.len(), recipes = self.recipes.len(), "Recipes loaded");
        Ok(self.recipes.len())
    }

    pub fn recipe_for(&self, product_id: &str) -> Option<&Recipe> {
        self.recipes.get(product_id)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Open the form for a product, pre-filled from its recipe when it has one.
    pub fn select(&mut self, product_id: &str) -> Result<()> {
        if !self.products.iter().any(|p| p.id == product_id) {
            return Err(AppError::State("Product not found".to_string()));
        }
        self.form = self
            .recipes
            .get(product_id)
            .map(RecipeForm::from_recipe)
            .unwrap_or_default();
        self.selected = Some(product_id.to_string());
        Ok(())
    }

    pub fn reset_form(&mut self) {
        self.form = RecipeForm::default();
        self.selected = None;
    }

    pub async fn submit(&mut self) -> Result<Recipe> {
        guards::require_admin(&self.auth)?;
        let product_id = self
            .selected
            .clone()
            .ok_or_else(|| AppError::State("No product selected".to_string()))?;
        let draft = self.form.to_draft(&product_id)?;

        let saved = match self.recipes.get(&product_id).map(|r| r.id.clone()) {
            Some(recipe_id) => {
                let recipe = self
                    .inventory
                    .update_recipe(&recipe_id, RecipeUpdate::from(draft))
                    .await
                    .map_err(|e| AppError::from_api(e, "Failed to save recipe"))?;
                self.toasts.success("Recipe updated successfully");
                recipe
            }
            None => {
                let recipe = self
                    .inventory
                    .create_recipe(draft)
                    .await
                    .map_err(|e| AppError::from_api(e, "Failed to save recipe"))?;
                self.toasts.success("Recipe created successfully");
                recipe
            }
        };

        self.reset_form();
        self.load().await?;
        Ok(saved)
    }

    /// Delete a product's recipe; products without one are left alone.
    pub async fn delete(&mut self, product_id: &str) -> Result<bool> {
        guards::require_admin(&self.auth)?;
        let Some(recipe_id) = self.recipes.get(product_id).map(|r| r.id.clone()) else {
            return Ok(false);
        };

        self.inventory
            .delete_recipe(&recipe_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to delete recipe"))?;
        self.toasts.success("Recipe deleted successfully");
        self.load().await?;
        Ok(true)
    }

    pub async fn cost(&self, product_id: &str) -> Result<RecipeCost> {
        guards::require_admin(&self.auth)?;
        let recipe = self
            .recipes
            .get(product_id)
            .ok_or_else(|| AppError::State("This product has no recipe".to_string()))?;
        self.inventory
            .recipe_cost(&recipe.id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to compute cost"))
    }

    /// Whether stock covers `quantity` units of a product.
    pub async fn check_ingredients(&self, product_id: &str, quantity: u32) -> Result<IngredientCheck> {
        guards::require_admin(&self.auth)?;
        self.catalog
            .check_product_ingredients(product_id, quantity.max(1))
            .await
            .map_err(|e| AppError::from_api(e, "Failed to check ingredients"))
    }

    /// Take the ingredients for `quantity` units out of stock.
    pub async fn deduct(&self, product_id: &str, quantity: u32) -> Result<DeductResult> {
        guards::require_admin(&self.auth)?;
        let result = self
            .inventory
            .deduct_ingredients(product_id, quantity.max(1))
            .await
            .map_err(|e| AppError::from_api(e, "Failed to deduct ingredients"))?;

        if result.success {
            self.toasts.success(result.message.clone());
        } else {
            self.toasts.warning(result.message.clone());
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_ingredient_lines() {
        let mut form = RecipeForm::default();
        form.set_ingredient("flour", 0.5, "kg").expect("line should be valid in test");
        form.set_ingredient("butter", 200.0, "g").expect("line should be valid in test");
        form.set_ingredient("flour", 0.6, "kg").expect("line should be valid in test");

        assert_eq!(form.ingredients.len(), 2);
        assert_eq!(form.ingredients[0].quantity, 0.6);
        assert!(form.set_ingredient("sugar", 0.0, "kg").is_err());

        form.remove_ingredient("butter");
        assert_eq!(form.ingredients.len(), 1);
    }

    #[test]
    fn test_to_draft_drops_blank_text() {
        let form = RecipeForm {
            story: "  Baked since 1998 ".to_string(),
            prep_time: 20,
            cook_time: 35,
            ..RecipeForm::default()
        };

        let draft = form.to_draft("p1").expect("form should be valid in test");

        assert_eq!(draft.product_id, "p1");
        assert_eq!(draft.story.as_deref(), Some("Baked since 1998"));
        assert_eq!(draft.origin, None);
        assert_eq!(draft.servings, 1);

        let zero = RecipeForm {
            servings: 0,
            ..RecipeForm::default()
        };
        assert!(zero.to_draft("p1").is_err());
    }
}

//! # Ingredients Page
//!
//! Back-office inventory: the ingredient list with filters, the ingredient
//! form, stock imports/exports and the per-ingredient stock ledger.

use crate::app::auth::AuthContext;
use crate::app::guards;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::InventoryApi;
use crate::utils::validation;
use shared::{Ingredient, IngredientDraft, IngredientUpdate, StockChange, StockLedgerEntry, StockMovement};
use std::cmp::Ordering;
use std::sync::Arc;

/// Low-stock threshold the form starts with.
pub const DEFAULT_MIN_QUANTITY: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngredientFilter {
    #[default]
    All,
    LowStock,
    Active,
}

impl IngredientFilter {
    pub fn parse(raw: &str) -> Option<IngredientFilter> {
        match raw.trim() {
            "all" => Some(IngredientFilter::All),
            "low-stock" => Some(IngredientFilter::LowStock),
            "active" => Some(IngredientFilter::Active),
            _ => None,
        }
    }

    fn matches(&self, ingredient: &Ingredient) -> bool {
        match self {
            IngredientFilter::All => true,
            IngredientFilter::LowStock => ingredient.is_low_stock,
            IngredientFilter::Active => ingredient.is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngredientSort {
    #[default]
    Name,
    /// Largest stock first
    Quantity,
    /// Most expensive first
    Price,
}

impl IngredientSort {
    pub fn parse(raw: &str) -> Option<IngredientSort> {
        match raw.trim() {
            "name" => Some(IngredientSort::Name),
            "quantity" => Some(IngredientSort::Quantity),
            "price" => Some(IngredientSort::Price),
            _ => None,
        }
    }

    fn compare(&self, a: &Ingredient, b: &Ingredient) -> Ordering {
        match self {
            IngredientSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            IngredientSort::Quantity => b.quantity.total_cmp(&a.quantity),
            IngredientSort::Price => b.price_per_unit.total_cmp(&a.price_per_unit),
        }
    }
}

/// Ingredients passing `filter` whose name or supplier contains `search`.
pub fn select_ingredients<'a>(
    ingredients: &'a [Ingredient],
    filter: IngredientFilter,
    search: &str,
    sort: IngredientSort,
) -> Vec<&'a Ingredient> {
    let query = search.trim().to_lowercase();
    let mut selected: Vec<&Ingredient> = ingredients
        .iter()
        .filter(|i| filter.matches(i))
        .filter(|i| {
            query.is_empty()
                || i.name.to_lowercase().contains(&query)
                || i
                    .supplier
                    .as_deref()
                    .map(|s| s.to_lowercase().contains(&query))
                    .unwrap_or(false)
        })
        .collect();
    selected.sort_by(|a, b| sort.compare(a, b));
    selected
}

/// Counters shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InventorySummary {
    pub total: usize,
    pub low_stock: usize,
    pub active: usize,
    pub stock_value: f64,
}

pub fn summarize(ingredients: &[Ingredient]) -> InventorySummary {
    InventorySummary {
        total: ingredients.len(),
        low_stock: ingredients.iter().filter(|i| i.is_low_stock).count(),
        active: ingredients.iter().filter(|i| i.is_active).count(),
        stock_value: ingredients.iter().map(Ingredient::stock_value).sum(),
    }
}

/// Ingredient form as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientForm {
    pub name: String,
    pub unit: String,
    pub price_per_unit: String,
    pub quantity: String,
    pub min_quantity: String,
    pub supplier: String,
    pub description: String,
}

impl Default for IngredientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            unit: "kg".to_string(),
            price_per_unit: String::new(),
            quantity: String::new(),
            min_quantity: DEFAULT_MIN_QUANTITY.to_string(),
            supplier: String::new(),
            description: String::new(),
        }
    }
}

impl IngredientForm {
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            unit: ingredient.unit.clone(),
            price_per_unit: ingredient.price_per_unit.to_string(),
            quantity: ingredient.quantity.to_string(),
            min_quantity: ingredient.min_quantity.to_string(),
            supplier: ingredient.supplier.clone().unwrap_or_default(),
            description: ingredient.description.clone().unwrap_or_default(),
        }
    }

    /// Validate and convert. Empty quantity means 0, empty minimum means 10.
    pub fn to_draft(&self) -> Result<IngredientDraft> {
        validation::validate_min_length(&self.name, "Ingredient name", 2).into_result()?;
        validation::validate_required(&self.unit, "Unit").into_result()?;
        let price_per_unit = validation::parse_price(&self.price_per_unit)?;
        let quantity = parse_amount(&self.quantity, 0.0, "Quantity")?;
        let min_quantity = parse_amount(&self.min_quantity, DEFAULT_MIN_QUANTITY, "Minimum quantity")?;

        Ok(IngredientDraft {
            name: self.name.trim().to_string(),
            unit: self.unit.trim().to_string(),
            price_per_unit,
            quantity,
            min_quantity,
            supplier: non_empty(&self.supplier),
            description: non_empty(&self.description),
        })
    }
}

fn parse_amount(text: &str, default: f64, field: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(default);
    }
    let amount: f64 = text
        .parse()
        .map_err(|_| AppError::Validation(format!("{} must be a number", field)))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::Validation(format!("{} cannot be negative", field)));
    }
    Ok(amount)
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

pub struct IngredientsPage {
    inventory: Arc<dyn InventoryApi>,
    auth: AuthContext,
    toasts: ToastContext,
    pub ingredients: Vec<Ingredient>,
    pub filter: IngredientFilter,
    pub search: String,
    pub sort: IngredientSort,
    pub form: IngredientForm,
    editing: Option<String>,
}

impl IngredientsPage {
    pub fn new(inventory: Arc<dyn InventoryApi>, auth: AuthContext, toasts: ToastContext) -> Self {
        Self {
            inventory,
            auth,
            toasts,
            ingredients: Vec::new(),
            filter: IngredientFilter::All,
            search: String::new(),
            sort: IngredientSort::Name,
            form: IngredientForm::default(),
            editing: None,
        }
    }

    pub async fn load(&mut self) -> Result<&[Ingredient]> {
        guards::require_admin(&self.auth)?;
        self.ingredients = self
            .inventory
            .list_ingredients()
            .await
            .map_err(|e| AppError::from_api(e, "Failed to load ingredients"))?;
        Ok(self.ingredients.as_slice())
    }

    /// Rows after filter, search and sort.
    pub fn visible(&self) -> Vec<&Ingredient> {
        select_ingredients(&self.ingredients, self.filter, &self.search, self.sort)
    }

    pub fn summary(&self) -> InventorySummary {
        summarize(&self.ingredients)
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn edit(&mut self, ingredient_id: &str) -> Result<()> {
        let ingredient = self.find(ingredient_id)?;
        self.form = IngredientForm::from_ingredient(ingredient);
        self.editing = Some(ingredient_id.to_string());
        Ok(())
    }

    pub fn reset_form(&mut self) {
        self.form = IngredientForm::default();
        self.editing = None;
    }

    /// Create or update from the form. Editing never changes the stock.
    pub async fn submit(&mut self) -> Result<Ingredient> {
        guards::require_admin(&self.auth)?;
        let draft = self.form.to_draft()?;

        let saved = match self.editing.clone() {
            Some(id) => {
                let ingredient = self
                    .inventory
                    .update_ingredient(&id, IngredientUpdate::from(draft))
                    .await
                    .map_err(|e| AppError::from_api(e, "Failed to save ingredient"))?;
                self.toasts.success("Ingredient updated");
                ingredient
            }
            None => {
                let ingredient = self
                    .inventory
                    .create_ingredient(draft)
                    .await
                    .map_err(|e| AppError::from_api(e, "Failed to save ingredient"))?;
                self.toasts.success("Ingredient added");
                ingredient
            }
        };

        self.reset_form();
        self.load().await?;
        Ok(saved)
    }

    pub async fn delete(&mut self, ingredient_id: &str) -> Result<()> {
        guards::require_admin(&self.auth)?;
        self.inventory
            .delete_ingredient(ingredient_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to delete ingredient"))?;
        self.toasts.success("Ingredient deleted");
        self.load().await?;
        Ok(())
    }

    /// Import or export stock; the API records the ledger entry.
    pub async fn change_stock(
        &mut self,
        ingredient_id: &str,
        movement: StockMovement,
        quantity: f64,
        note: &str,
    ) -> Result<Ingredient> {
        guards::require_admin(&self.auth)?;
        validation::validate_stock_quantity(quantity).into_result()?;

        let change = StockChange {
            quantity,
            note: note.trim().to_string(),
        };
        let updated = match movement {
            StockMovement::Import => self.inventory.import_stock(ingredient_id, change).await,
            StockMovement::Export => self.inventory.export_stock(ingredient_id, change).await,
        }
        .map_err(|e| AppError::from_api(e, "Failed to update stock"))?;

        tracing::info!(
            ingredient_id,
            movement = movement.as_str(),
            quantity,
            stock = updated.quantity,
            "Stock changed"
        );
        self.toasts.success(match movement {
            StockMovement::Import => "Stock imported",
            StockMovement::Export => "Stock exported",
        });
        if updated.is_low_stock {
            self.toasts
                .warning(format!("{} is running low ({} {})", updated.name, updated.quantity, updated.unit));
        }

        self.load().await?;
        Ok(updated)
    }

    pub async fn history(&self, ingredient_id: &str) -> Result<Vec<StockLedgerEntry>> {
        guards::require_admin(&self.auth)?;
        self.inventory
            .stock_history(ingredient_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to load stock history"))
    }

    fn find(&self, ingredient_id: &str) -> Result<&Ingredient> {
        self.ingredients
            .iter()
            .find(|i| i.id == ingredient_id)
            .ok_or_else(|| AppError::State("Ingredient not found".to_string()))
    }
}

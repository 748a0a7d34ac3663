//! # Ingredient and Stock Ledger DTOs
//!
//! Every import or export of an ingredient is recorded server-side as a
//! [`StockLedgerEntry`] holding the quantity before and after the change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Units the back-office offers for ingredients.
pub const INGREDIENT_UNITS: [&str; 6] = ["kg", "g", "lít", "ml", "cái", "gói"];

/// An ingredient with its current stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub price_per_unit: f64,
    pub quantity: f64,
    pub min_quantity: f64,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_low_stock: bool,
    #[serde(with = "crate::dto::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::dto::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    /// Value of the stock on hand.
    pub fn stock_value(&self) -> f64 {
        self.quantity * self.price_per_unit
    }
}

/// Body of `POST /api/ingredients`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientDraft {
    pub name: String,
    pub unit: String,
    pub price_per_unit: f64,
    pub quantity: f64,
    pub min_quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `PUT /api/ingredients/{id}`; stock is only changed through the ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<IngredientDraft> for IngredientUpdate {
    fn from(draft: IngredientDraft) -> Self {
        Self {
            name: Some(draft.name),
            unit: Some(draft.unit),
            price_per_unit: Some(draft.price_per_unit),
            min_quantity: Some(draft.min_quantity),
            supplier: draft.supplier,
            description: draft.description,
        }
    }
}

/// Body of the import/export endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockChange {
    pub quantity: f64,
    #[serde(default)]
    pub note: String,
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StockMovement {
    Import,
    Export,
}

impl StockMovement {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockMovement::Import => "import",
            StockMovement::Export => "export",
        }
    }
}

/// One audit record of the stock ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockLedgerEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub movement: StockMovement,
    pub quantity: f64,
    pub before: f64,
    pub after: f64,
    #[serde(default)]
    pub note: String,
    #[serde(with = "crate::dto::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl StockLedgerEntry {
    /// Signed change (`after - before`).
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }
}

fn default_true() -> bool {
    true
}

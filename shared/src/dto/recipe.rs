//! # Recipe DTOs
//!
//! A product has at most one recipe. The recipe also carries the product's
//! origin, story and history text shown on the public product page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeIngredient {
    pub ingredient_id: String,
    pub quantity: f64,
    pub unit: String,
}

/// A product's recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(with = "crate::dto::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::dto::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

/// Body of `POST /api/recipes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeDraft {
    pub product_id: String,
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
}

/// Body of `PUT /api/recipes/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<RecipeIngredient>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl From<RecipeDraft> for RecipeUpdate {
    fn from(draft: RecipeDraft) -> Self {
        Self {
            ingredients: Some(draft.ingredients),
            instructions: draft.instructions,
            origin: draft.origin,
            story: draft.story,
            history: draft.history,
            prep_time: Some(draft.prep_time),
            cook_time: Some(draft.cook_time),
            servings: Some(draft.servings),
        }
    }
}

/// Costed ingredient line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostLine {
    pub ingredient_id: String,
    #[serde(default)]
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub price_per_unit: f64,
    pub cost: f64,
}

/// Cost of a recipe (`GET /api/recipes/{id}/cost`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipeCost {
    pub total_cost: f64,
    #[serde(default)]
    pub details: Vec<CostLine>,
}

/// Public origin/story/history of a product
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductStory {
    pub product_id: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub history: String,
}

impl ProductStory {
    pub fn is_empty(&self) -> bool {
        self.origin.trim().is_empty() && self.story.trim().is_empty() && self.history.trim().is_empty()
    }
}

/// Answer of `POST /api/recipes/product/{id}/deduct`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeductResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

fn default_servings() -> u32 {
    1
}

//! # Catalog DTOs
//!
//! Products and categories served by `/api/products`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category slugs the catalog ships with.
pub const CATEGORY_SLUGS: [&str; 4] = [
    "birthday-cakes",
    "bread-savory",
    "cookies-minicakes",
    "beverages",
];

/// Badges a product may carry.
pub const PRODUCT_BADGES: [&str; 5] = ["SPECIAL", "NEW", "POPULAR", "BESTSELLER", "HEALTHY"];

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(with = "crate::dto::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::dto::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/products`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub badge: Option<String>,
}

/// Body of `PUT /api/products/{id}`; only present fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl From<ProductDraft> for ProductUpdate {
    fn from(draft: ProductDraft) -> Self {
        Self {
            name: Some(draft.name),
            category: Some(draft.category),
            price: Some(draft.price),
            description: Some(draft.description),
            image: Some(draft.image),
            badge: draft.badge,
            is_available: None,
        }
    }
}

/// Category with its product count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_count: u64,
}

/// Catalog query for `GET /api/products`.
///
/// When both `page` and `limit` are set the page is translated into a
/// `skip` offset; the pseudo-category `all` is never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProductQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Query-string pairs in the order the API expects them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        match (self.page, self.limit) {
            (Some(page), Some(limit)) if page > 0 => {
                pairs.push(("skip", (page - 1).saturating_mul(limit).to_string()));
                pairs.push(("limit", limit.to_string()));
            }
            _ => {
                if let Some(skip) = self.skip {
                    pairs.push(("skip", skip.to_string()));
                }
                if let Some(limit) = self.limit.filter(|l| *l > 0) {
                    pairs.push(("limit", limit.to_string()));
                }
            }
        }

        if let Some(category) = self.category.as_deref() {
            if !category.is_empty() && category != "all" {
                pairs.push(("category", category.to_string()));
            }
        }

        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                pairs.push(("search", search.to_string()));
            }
        }

        pairs
    }
}

/// Ingredient that falls short for a production run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissingIngredient {
    pub name: String,
    pub needed: f64,
    pub available: f64,
    pub shortage: f64,
    pub unit: String,
}

/// Answer of `GET /api/products/{id}/check-ingredients`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientCheck {
    pub available: bool,
    #[serde(default)]
    pub missing: Vec<MissingIngredient>,
}

fn default_available() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_translates_page_into_skip() {
        let query = ProductQuery {
            page: Some(3),
            limit: Some(12),
            skip: Some(99),
            ..Default::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![("skip", "24".to_string()), ("limit", "12".to_string())]
        );
    }

    #[test]
    fn test_query_skip_saturates_on_huge_page() {
        // Arrange
        let query = ProductQuery {
            page: Some(u32::MAX),
            limit: Some(100),
            ..Default::default()
        };

        // Act
        let pairs = query.to_pairs();

        // Assert
        assert_eq!(pairs[0], ("skip", u32::MAX.to_string()));
        assert_eq!(pairs[1], ("limit", "100".to_string()));
    }

    #[test]
    fn test_query_skips_all_category_and_empty_search() {
        let query = ProductQuery {
            category: Some("all".to_string()),
            search: Some(String::new()),
            ..ProductQuery::with_limit(100)
        };
        assert_eq!(query.to_pairs(), vec![("limit", "100".to_string())]);

        let query = ProductQuery {
            category: Some("beverages".to_string()),
            search: Some("latte".to_string()),
            ..Default::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("category", "beverages".to_string()),
                ("search", "latte".to_string())
            ]
        );
    }

    #[test]
    fn test_update_from_draft_keeps_availability_untouched() {
        let update = ProductUpdate::from(ProductDraft {
            name: "Croissant".to_string(),
            category: "bread-savory".to_string(),
            price: 4.5,
            description: "Buttery".to_string(),
            image: "https://img/croissant.jpg".to_string(),
            badge: None,
        });
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("is_available").is_none());
        assert!(json.get("badge").is_none());
        assert_eq!(json["price"], 4.5);
    }
}

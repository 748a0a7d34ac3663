use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product summary embedded in a favourite
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavouriteProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub is_available: bool,
}

/// Favourite with product details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favourite {
    pub favourite_id: String,
    #[serde(with = "crate::dto::timestamp")]
    pub added_at: DateTime<Utc>,
    pub product: FavouriteProduct,
}

/// Response when adding to favourites
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavouriteAddResponse {
    pub message: String,
    pub product_id: String,
    pub is_favourite: bool,
}

/// Response of the favourite check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavouriteCheck {
    pub product_id: String,
    pub is_favourite: bool,
}

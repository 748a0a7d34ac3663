use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_pending: bool,
    #[serde(with = "crate::dto::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Review {
    /// Moderation state as shown in the back-office.
    pub fn moderation_label(&self) -> &'static str {
        if self.is_approved {
            "Approved"
        } else if self.is_pending {
            "Pending"
        } else {
            "Hidden"
        }
    }

    /// Author name, falling back for deleted accounts.
    pub fn author(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Customer")
    }
}

/// Body of `POST /api/reviews`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewCreate {
    pub product_id: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Average rating of a product
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductRating {
    pub avg_rating: f64,
    pub total_reviews: u64,
}

/// Whether the current user may review a product
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanReview {
    pub can_review: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub has_reviewed: bool,
}

impl CanReview {
    /// Answer given to visitors without a session.
    pub fn login_required() -> Self {
        Self {
            can_review: false,
            reason: Some("Please login to review".to_string()),
            order_id: None,
            has_reviewed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderation_label() {
        let mut review: Review = serde_json::from_str(
            r#"{"id":"r1","user_id":"u1","product_id":"p1","rating":5,"comment":"Lovely",
                "is_approved":false,"is_pending":true,"created_at":"2024-05-01T09:00:00"}"#,
        )
        .unwrap();
        assert_eq!(review.moderation_label(), "Pending");
        assert_eq!(review.author(), "Customer");

        review.is_pending = false;
        assert_eq!(review.moderation_label(), "Hidden");
        review.is_approved = true;
        assert_eq!(review.moderation_label(), "Approved");
    }

    #[test]
    fn test_can_review_defaults() {
        let answer: CanReview = serde_json::from_str(r#"{"can_review":true,"order_id":"o1"}"#).unwrap();
        assert!(answer.can_review);
        assert!(!answer.has_reviewed);
        assert_eq!(CanReview::login_required().reason.as_deref(), Some("Please login to review"));
    }
}

//! # Admin Reviews Page
//!
//! Review moderation. Every action reloads the current list.

use crate::app::auth::AuthContext;
use crate::app::guards;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::ReviewApi;
use shared::Review;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewFilter {
    #[default]
    Pending,
    All,
    Approved,
    Hidden,
}

impl ReviewFilter {
    pub fn parse(raw: &str) -> Option<ReviewFilter> {
        match raw.trim() {
            "pending" => Some(ReviewFilter::Pending),
            "all" => Some(ReviewFilter::All),
            "approved" => Some(ReviewFilter::Approved),
            "hidden" => Some(ReviewFilter::Hidden),
            _ => None,
        }
    }

    /// Narrow the full review list to this filter.
    pub fn apply(&self, reviews: Vec<Review>) -> Vec<Review> {
        match self {
            ReviewFilter::All => reviews,
            ReviewFilter::Pending => reviews.into_iter().filter(|r| r.moderation_label() == "Pending").collect(),
            ReviewFilter::Approved => reviews.into_iter().filter(|r| r.is_approved).collect(),
            ReviewFilter::Hidden => reviews.into_iter().filter(|r| r.moderation_label() == "Hidden").collect(),
        }
    }
}

pub struct AdminReviewsPage {
    reviews_api: Arc<dyn ReviewApi>,
    auth: AuthContext,
    toasts: ToastContext,
    pub filter: ReviewFilter,
    pub reviews: Vec<Review>,
}

impl AdminReviewsPage {
    pub fn new(reviews_api: Arc<dyn ReviewApi>, auth: AuthContext, toasts: ToastContext) -> Self {
        Self {
            reviews_api,
            auth,
            toasts,
            filter: ReviewFilter::Pending,
            reviews: Vec::new(),
        }
    }

    pub async fn set_filter(&mut self, filter: ReviewFilter) -> Result<&[Review]> {
        self.filter = filter;
        self.load().await
    }

    pub async fn load(&mut self) -> Result<&[Review]> {
        guards::require_admin(&self.auth)?;
        let reviews = match self.filter {
            ReviewFilter::Pending => self.reviews_api.pending_reviews().await,
            _ => self
                .reviews_api
                .all_reviews()
                .await
                .map(|all| self.filter.apply(all)),
        };
        self.reviews = reviews.map_err(|e| AppError::from_api(e, "Failed to load reviews"))?;
        Ok(self.reviews.as_slice())
    }

    pub async fn approve(&mut self, review_id: &str) -> Result<()> {
        guards::require_admin(&self.auth)?;
        self.reviews_api
            .approve_review(review_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to approve"))?;
        self.toasts.success("Review approved!");
        self.load().await?;
        Ok(())
    }

    pub async fn hide(&mut self, review_id: &str) -> Result<()> {
        guards::require_admin(&self.auth)?;
        self.reviews_api
            .hide_review(review_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to hide"))?;
        self.toasts.success("Review hidden!");
        self.load().await?;
        Ok(())
    }

    pub async fn delete(&mut self, review_id: &str) -> Result<()> {
        guards::require_admin(&self.auth)?;
        self.reviews_api
            .delete_review(review_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to delete"))?;
        self.toasts.success("Review deleted!");
        self.load().await?;
        Ok(())
    }
}

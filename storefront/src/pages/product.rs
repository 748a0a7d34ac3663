//! # Product Page
//!
//! Product detail with its rating, approved reviews, story and the
//! favourite toggle.

use super::AddToCart;
use crate::app::auth::AuthContext;
use crate::app::cart::CartContext;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::{ApiResult, CatalogApi, FavouritesApi, InventoryApi, ReviewApi};
use crate::services::api::ApiError;
use crate::utils::validation;
use shared::{CanReview, Product, ProductRating, ProductStory, Review, ReviewCreate};
use std::sync::Arc;

/// Optional data next to the product: `None` on failure, except a rejected
/// token.
fn side_panel<T>(result: ApiResult<T>, product_id: &str, panel: &str) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::SessionExpired) => Err(AppError::SessionExpired),
        Err(e) => {
            tracing::warn!(product_id, panel, error = %e, "Side panel unavailable");
            Ok(None)
        }
    }
}

/// Outcome of the heart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteToggle {
    Added,
    Removed,
    LoginRequired,
}

pub struct ProductPage {
    catalog: Arc<dyn CatalogApi>,
    reviews_api: Arc<dyn ReviewApi>,
    inventory: Arc<dyn InventoryApi>,
    favourites: Arc<dyn FavouritesApi>,
    auth: AuthContext,
    cart: CartContext,
    toasts: ToastContext,
    pub product: Option<Product>,
    pub rating: ProductRating,
    pub reviews: Vec<Review>,
    pub story: Option<ProductStory>,
    pub can_review: CanReview,
    pub is_favourite: bool,
}

impl ProductPage {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        reviews_api: Arc<dyn ReviewApi>,
        inventory: Arc<dyn InventoryApi>,
        favourites: Arc<dyn FavouritesApi>,
        auth: AuthContext,
        cart: CartContext,
        toasts: ToastContext,
    ) -> Self {
        Self {
            catalog,
            reviews_api,
            inventory,
            favourites,
            auth,
            cart,
            toasts,
            product: None,
            rating: ProductRating::default(),
            reviews: Vec::new(),
            story: None,
            can_review: CanReview::login_required(),
            is_favourite: false,
        }
    }

    /// Load everything shown for a product.
    ///
    /// Only the product itself is required; the side panels fall back to
    /// empty values when their calls fail. A rejected token still ends the
    /// load with `SessionExpired`.
    pub async fn load(&mut self, product_id: &str) -> Result<&Product> {
        let (product, rating, reviews, story, can_review) = futures::join!(
            self.catalog.get_product(product_id),
            self.reviews_api.product_rating(product_id),
            self.reviews_api.product_reviews(product_id),
            self.inventory.product_story(product_id),
            self.reviews_api.can_review(product_id),
        );

        let product = product.map_err(|e| AppError::from_api(e, "Product not found"))?;

        self.rating = side_panel(rating, product_id, "Rating")?.unwrap_or_default();
        self.reviews = side_panel(reviews, product_id, "Reviews")?
            .map(|list| list.into_iter().filter(|r| r.is_approved).collect())
            .unwrap_or_default();
        self.story = side_panel(story, product_id, "Story")?
            .flatten()
            .filter(|s| !s.is_empty());
        self.can_review =
            side_panel(can_review, product_id, "Review eligibility")?.unwrap_or_else(CanReview::login_required);

        self.is_favourite = if self.auth.is_authenticated() {
            let check = self.favourites.check_favourite(product_id).await;
            side_panel(check, product_id, "Favourite state")?.is_some_and(|check| check.is_favourite)
        } else {
            false
        };

        Ok(&*self.product.insert(product))
    }

    pub async fn add_to_cart(&self, quantity: u32) -> Result<AddToCart> {
        let product = self.current()?;
        if self.auth.user().is_none() {
            return Ok(AddToCart::LoginRequired);
        }

        let response = self.cart.add(&product.id, quantity).await?;
        self.toasts.success(format!("{} added to cart!", product.name));
        Ok(AddToCart::Added(response))
    }

    pub async fn toggle_favourite(&mut self) -> Result<FavouriteToggle> {
        let product_id = self.current()?.id.clone();
        if !self.auth.is_authenticated() {
            return Ok(FavouriteToggle::LoginRequired);
        }

        if self.is_favourite {
            self.favourites
                .remove_favourite(&product_id)
                .await
                .map_err(|e| AppError::from_api(e, "Failed to remove favourite"))?;
            self.is_favourite = false;
            self.toasts.info("Removed from favourites");
            Ok(FavouriteToggle::Removed)
        } else {
            let response = self
                .favourites
                .add_favourite(&product_id)
                .await
                .map_err(|e| AppError::from_api(e, "Failed to add favourite"))?;
            self.is_favourite = response.is_favourite;
            self.toasts.success("Added to favourites");
            Ok(FavouriteToggle::Added)
        }
    }

    /// Post a review; it stays hidden until an administrator approves it.
    pub async fn submit_review(&mut self, rating: u8, comment: &str) -> Result<Review> {
        validation::validate_rating(rating).into_result()?;
        let product_id = self.current()?.id.clone();

        if !self.can_review.can_review {
            let reason = self
                .can_review
                .reason
                .clone()
                .unwrap_or_else(|| "You cannot review this product".to_string());
            return Err(AppError::Validation(reason));
        }

        let comment = comment.trim();
        let review = self
            .reviews_api
            .create_review(ReviewCreate {
                product_id: product_id.clone(),
                rating,
                comment: (!comment.is_empty()).then(|| comment.to_string()),
            })
            .await
            .map_err(|e| AppError::from_api(e, "Failed to submit review"))?;

        self.toasts.success("Thank you! Your review is waiting for approval.");
        self.can_review = self
            .reviews_api
            .can_review(&product_id)
            .await
            .unwrap_or(CanReview {
                can_review: false,
                has_reviewed: true,
                ..CanReview::default()
            });
        Ok(review)
    }

    fn current(&self) -> Result<&Product> {
        self.product
            .as_ref()
            .ok_or_else(|| AppError::State("Product not loaded".to_string()))
    }
}

/// Stars for a rating, e.g. `★★★★☆` for 4.2.
pub fn stars(rating: f64) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

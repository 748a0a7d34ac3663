//! # Review Endpoints
//!
//! Customers review products they received; reviews stay pending until an
//! administrator approves them.

use super::client::ApiClient;
use super::error::ApiError;
use shared::{CanReview, ProductRating, Review, ReviewCreate};

#[tracing::instrument(skip(client, review), fields(product_id = %review.product_id, rating = review.rating))]
pub async fn create_review(client: &ApiClient, review: &ReviewCreate) -> Result<Review, ApiError> {
    client.send(client.post("/reviews").json(review)).await
}

/// Approved reviews of a product.
pub async fn product_reviews(client: &ApiClient, product_id: &str) -> Result<Vec<Review>, ApiError> {
    client
        .send(client.get(&format!("/reviews/product/{}", product_id)))
        .await
}

pub async fn product_rating(client: &ApiClient, product_id: &str) -> Result<ProductRating, ApiError> {
    client
        .send(client.get(&format!("/reviews/product/{}/rating", product_id)))
        .await
}

/// Whether the current user may review a product.
///
/// Without a session no request is made.
pub async fn can_review(client: &ApiClient, product_id: &str) -> Result<CanReview, ApiError> {
    if !client.has_token() {
        return Ok(CanReview::login_required());
    }
    client
        .send(client.get(&format!("/reviews/product/{}/can-review", product_id)))
        .await
}

pub async fn my_reviews(client: &ApiClient) -> Result<Vec<Review>, ApiError> {
    client.send(client.get("/reviews/me")).await
}

pub async fn pending_reviews(client: &ApiClient) -> Result<Vec<Review>, ApiError> {
    client.send(client.get("/reviews/pending")).await
}

pub async fn all_reviews(client: &ApiClient) -> Result<Vec<Review>, ApiError> {
    client.send(client.get("/reviews/all")).await
}

#[tracing::instrument(skip(client))]
pub async fn approve_review(client: &ApiClient, review_id: &str) -> Result<Review, ApiError> {
    client
        .send(client.post(&format!("/reviews/{}/approve", review_id)))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn hide_review(client: &ApiClient, review_id: &str) -> Result<Review, ApiError> {
    client
        .send(client.post(&format!("/reviews/{}/hide", review_id)))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_review(client: &ApiClient, review_id: &str) -> Result<(), ApiError> {
    client
        .send_empty(client.delete(&format!("/reviews/{}", review_id)))
        .await
}

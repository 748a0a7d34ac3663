//! # Cart Endpoints
//!
//! The cart is held server-side per user; totals (subtotal, shipping,
//! total) are computed by the API.

use super::client::ApiClient;
use super::error::ApiError;
use shared::{CartAddResponse, CartItem, CartQuantity, CartTotal, MessageResponse};

pub async fn get_cart(client: &ApiClient) -> Result<Vec<CartItem>, ApiError> {
    client.send(client.get("/cart")).await
}

pub async fn get_cart_total(client: &ApiClient) -> Result<CartTotal, ApiError> {
    client.send(client.get("/cart/total")).await
}

/// Add `quantity` (at least 1) of a product to the cart.
#[tracing::instrument(skip(client))]
pub async fn add_to_cart(client: &ApiClient, product_id: &str, quantity: u32) -> Result<CartAddResponse, ApiError> {
    let body = CartQuantity {
        quantity: quantity.max(1),
    };
    client
        .send(client.post(&format!("/cart/{}", product_id)).json(&body))
        .await
}

/// Set the quantity of a cart line; 0 removes the line.
#[tracing::instrument(skip(client))]
pub async fn update_cart(client: &ApiClient, product_id: &str, quantity: u32) -> Result<MessageResponse, ApiError> {
    client
        .send(client.put(&format!("/cart/{}", product_id)).json(&CartQuantity { quantity }))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn remove_from_cart(client: &ApiClient, product_id: &str) -> Result<MessageResponse, ApiError> {
    client.send(client.delete(&format!("/cart/{}", product_id))).await
}

pub async fn clear_cart(client: &ApiClient) -> Result<MessageResponse, ApiError> {
    client.send(client.delete("/cart")).await
}

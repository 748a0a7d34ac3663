//! # Ingredient Endpoints
//!
//! Back-office inventory. Stock only changes through import/export, each of
//! which appends a [`StockLedgerEntry`] server-side.

use super::client::ApiClient;
use super::error::ApiError;
use shared::{Ingredient, IngredientDraft, IngredientUpdate, StockChange, StockLedgerEntry};

pub async fn list_ingredients(client: &ApiClient) -> Result<Vec<Ingredient>, ApiError> {
    client.send(client.get("/ingredients")).await
}

/// Ingredients at or below their minimum quantity.
pub async fn low_stock(client: &ApiClient) -> Result<Vec<Ingredient>, ApiError> {
    client.send(client.get("/ingredients/low-stock")).await
}

pub async fn get_ingredient(client: &ApiClient, id: &str) -> Result<Ingredient, ApiError> {
    client.send(client.get(&format!("/ingredients/{}", id))).await
}

#[tracing::instrument(skip(client, draft), fields(name = %draft.name))]
pub async fn create_ingredient(client: &ApiClient, draft: &IngredientDraft) -> Result<Ingredient, ApiError> {
    client.send(client.post("/ingredients").json(draft)).await
}

#[tracing::instrument(skip(client, update))]
pub async fn update_ingredient(
    client: &ApiClient,
    id: &str,
    update: &IngredientUpdate,
) -> Result<Ingredient, ApiError> {
    client
        .send(client.put(&format!("/ingredients/{}", id)).json(update))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_ingredient(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client
        .send_empty(client.delete(&format!("/ingredients/{}", id)))
        .await
}

/// Receive stock. Returns the ingredient with its new quantity.
#[tracing::instrument(skip(client, change), fields(quantity = change.quantity))]
pub async fn import_stock(client: &ApiClient, id: &str, change: &StockChange) -> Result<Ingredient, ApiError> {
    tracing::info!("Importing stock");
    client
        .send(client.post(&format!("/ingredients/{}/import", id)).json(change))
        .await
}

/// Consume stock. The API answers 400 when stock is insufficient.
#[tracing::instrument(skip(client, change), fields(quantity = change.quantity))]
pub async fn export_stock(client: &ApiClient, id: &str, change: &StockChange) -> Result<Ingredient, ApiError> {
    tracing::info!("Exporting stock");
    client
        .send(client.post(&format!("/ingredients/{}/export", id)).json(change))
        .await
}

/// Stock ledger of one ingredient, newest first.
pub async fn stock_history(client: &ApiClient, id: &str) -> Result<Vec<StockLedgerEntry>, ApiError> {
    client
        .send(client.get(&format!("/ingredients/{}/history", id)))
        .await
}

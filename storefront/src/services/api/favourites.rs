//! # Favourites Endpoints

use super::client::ApiClient;
use super::error::ApiError;
use shared::{CountResponse, Favourite, FavouriteAddResponse, FavouriteCheck, MessageResponse};

pub async fn list_favourites(client: &ApiClient, skip: u32, limit: u32) -> Result<Vec<Favourite>, ApiError> {
    client
        .send(client.get("/favourites").query(&[("skip", skip), ("limit", limit)]))
        .await
}

pub async fn favourites_count(client: &ApiClient) -> Result<u64, ApiError> {
    let response: CountResponse = client.send(client.get("/favourites/count")).await?;
    Ok(response.count)
}

pub async fn check_favourite(client: &ApiClient, product_id: &str) -> Result<FavouriteCheck, ApiError> {
    client
        .send(client.get(&format!("/favourites/check/{}", product_id)))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn add_favourite(client: &ApiClient, product_id: &str) -> Result<FavouriteAddResponse, ApiError> {
    client.send(client.post(&format!("/favourites/{}", product_id))).await
}

#[tracing::instrument(skip(client))]
pub async fn remove_favourite(client: &ApiClient, product_id: &str) -> Result<MessageResponse, ApiError> {
    client.send(client.delete(&format!("/favourites/{}", product_id))).await
}

pub async fn clear_favourites(client: &ApiClient) -> Result<MessageResponse, ApiError> {
    client.send(client.delete("/favourites")).await
}

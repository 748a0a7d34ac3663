//! # Recipe Endpoints

use super::client::ApiClient;
use super::error::ApiError;
use shared::{DeductResult, ProductStory, Recipe, RecipeCost, RecipeDraft, RecipeUpdate};

/// Recipe of a product; `None` when the product has none yet.
pub async fn recipe_for_product(client: &ApiClient, product_id: &str) -> Result<Option<Recipe>, ApiError> {
    client
        .send_optional(client.get(&format!("/recipes/product/{}", product_id)))
        .await
}

/// Public origin/story/history of a product; `None` without a recipe.
pub async fn product_story(client: &ApiClient, product_id: &str) -> Result<Option<ProductStory>, ApiError> {
    client
        .send_optional(client.get(&format!("/recipes/product/{}/story", product_id)))
        .await
}

#[tracing::instrument(skip(client, draft), fields(product_id = %draft.product_id, ingredients = draft.ingredients.len()))]
pub async fn create_recipe(client: &ApiClient, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
    client.send(client.post("/recipes").json(draft)).await
}

#[tracing::instrument(skip(client, update))]
pub async fn update_recipe(client: &ApiClient, recipe_id: &str, update: &RecipeUpdate) -> Result<Recipe, ApiError> {
    client
        .send(client.put(&format!("/recipes/{}", recipe_id)).json(update))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn delete_recipe(client: &ApiClient, recipe_id: &str) -> Result<(), ApiError> {
    client
        .send_empty(client.delete(&format!("/recipes/{}", recipe_id)))
        .await
}

pub async fn recipe_cost(client: &ApiClient, recipe_id: &str) -> Result<RecipeCost, ApiError> {
    client
        .send(client.get(&format!("/recipes/{}/cost", recipe_id)))
        .await
}

/// Deduct the ingredients for `quantity` units of a product from stock.
#[tracing::instrument(skip(client))]
pub async fn deduct_ingredients(client: &ApiClient, product_id: &str, quantity: u32) -> Result<DeductResult, ApiError> {
    client
        .send(
            client
                .post(&format!("/recipes/product/{}/deduct", product_id))
                .query(&[("quantity", quantity)]),
        )
        .await
}

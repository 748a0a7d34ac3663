//! # Catalog Endpoints
//!
//! Products, categories and the admin product CRUD under `/api/products`.
//! Deleting a product is a soft delete on the server (it becomes unavailable).

use super::client::ApiClient;
use super::error::ApiError;
use shared::{Category, CountResponse, IngredientCheck, Product, ProductDraft, ProductQuery, ProductUpdate};

/// List products matching `query`.
#[tracing::instrument(skip(client))]
pub async fn list_products(client: &ApiClient, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
    let start = std::time::Instant::now();
    let products: Vec<Product> = client
        .send(client.get("/products").query(&query.to_pairs()))
        .await?;

    tracing::debug!(
        count = products.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Products loaded"
    );
    Ok(products)
}

/// Count available products, optionally within one category.
pub async fn product_count(client: &ApiClient, category: Option<&str>) -> Result<u64, ApiError> {
    let mut builder = client.get("/products/count");
    if let Some(category) = category.filter(|c| !c.is_empty() && *c != "all") {
        builder = builder.query(&[("category", category)]);
    }
    let response: CountResponse = client.send(builder).await?;
    Ok(response.count)
}

pub async fn categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    client.send(client.get("/products/categories")).await
}

pub async fn get_product(client: &ApiClient, id: &str) -> Result<Product, ApiError> {
    client.send(client.get(&format!("/products/{}", id))).await
}

#[tracing::instrument(skip(client, draft), fields(name = %draft.name))]
pub async fn create_product(client: &ApiClient, draft: &ProductDraft) -> Result<Product, ApiError> {
    tracing::info!("Creating product");
    client.send(client.post("/products").json(draft)).await
}

#[tracing::instrument(skip(client, update))]
pub async fn update_product(client: &ApiClient, id: &str, update: &ProductUpdate) -> Result<Product, ApiError> {
    client.send(client.put(&format!("/products/{}", id)).json(update)).await
}

#[tracing::instrument(skip(client))]
pub async fn delete_product(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    tracing::info!("Deleting product");
    client.send_empty(client.delete(&format!("/products/{}", id))).await
}

/// Check whether stock covers `quantity` units of a product.
pub async fn check_product_ingredients(
    client: &ApiClient,
    id: &str,
    quantity: u32,
) -> Result<IngredientCheck, ApiError> {
    client
        .send(
            client
                .get(&format!("/products/{}/check-ingredients", id))
                .query(&[("quantity", quantity)]),
        )
        .await
}

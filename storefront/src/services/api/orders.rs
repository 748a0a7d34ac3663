//! # Order Endpoints
//!
//! Customer order placement and tracking, plus the admin order desk.

use super::client::ApiClient;
use super::error::ApiError;
use shared::{Order, OrderCreate, OrderStats, OrderStatus, OrderStatusUpdate};

#[tracing::instrument(skip(client, order), fields(items = order.items.len(), method = order.payment_method.as_str()))]
pub async fn create_order(client: &ApiClient, order: &OrderCreate) -> Result<Order, ApiError> {
    tracing::info!("Placing order");
    let start = std::time::Instant::now();
    let created: Order = client.send(client.post("/orders").json(order)).await?;
    tracing::info!(
        order_id = %created.id,
        total = created.total_amount,
        duration_ms = start.elapsed().as_millis() as u64,
        "Order placed"
    );
    Ok(created)
}

pub async fn my_orders(client: &ApiClient) -> Result<Vec<Order>, ApiError> {
    client.send(client.get("/orders/me")).await
}

pub async fn get_order(client: &ApiClient, order_id: &str) -> Result<Order, ApiError> {
    client.send(client.get(&format!("/orders/{}", order_id))).await
}

#[tracing::instrument(skip(client))]
pub async fn cancel_order(client: &ApiClient, order_id: &str) -> Result<Order, ApiError> {
    client
        .send(client.post(&format!("/orders/{}/cancel", order_id)))
        .await
}

/// Delete a cancelled order from the customer's history.
#[tracing::instrument(skip(client))]
pub async fn delete_order(client: &ApiClient, order_id: &str) -> Result<(), ApiError> {
    client
        .send_empty(client.delete(&format!("/orders/{}", order_id)))
        .await
}

/// Admin: all orders, optionally filtered by status.
pub async fn list_orders(client: &ApiClient, status: Option<OrderStatus>) -> Result<Vec<Order>, ApiError> {
    let mut builder = client.get("/orders");
    if let Some(status) = status {
        builder = builder.query(&[("status", status.as_str())]);
    }
    client.send(builder).await
}

#[tracing::instrument(skip(client))]
pub async fn update_order_status(client: &ApiClient, order_id: &str, status: OrderStatus) -> Result<Order, ApiError> {
    client
        .send(
            client
                .put(&format!("/orders/{}/status", order_id))
                .json(&OrderStatusUpdate { status }),
        )
        .await
}

pub async fn order_stats(client: &ApiClient) -> Result<OrderStats, ApiError> {
    client.send(client.get("/orders/stats/count")).await
}

//! # Payment Endpoints
//!
//! The API talks to the payment gateway; the client only requests a payment
//! link (checkout URL and QR payload) and asks for the resulting status.

use super::client::ApiClient;
use super::error::ApiError;
use shared::{PaymentCheck, PaymentLink, PaymentStatusInfo};

#[tracing::instrument(skip(client))]
pub async fn create_payment_link(client: &ApiClient, order_id: &str) -> Result<PaymentLink, ApiError> {
    tracing::info!("Requesting payment link");
    client
        .send(client.post(&format!("/payments/payos/{}", order_id)))
        .await
}

/// Ask the API to check the gateway for the order's payment.
pub async fn check_payment(client: &ApiClient, order_id: &str) -> Result<PaymentCheck, ApiError> {
    client
        .send(client.get(&format!("/payments/payos/check/{}", order_id)))
        .await
}

/// Locally recorded payment state, without contacting the gateway.
pub async fn payment_status(client: &ApiClient, order_id: &str) -> Result<PaymentStatusInfo, ApiError> {
    client
        .send(client.get(&format!("/payments/check/{}", order_id)))
        .await
}

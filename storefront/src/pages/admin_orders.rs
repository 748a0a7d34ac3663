//! # Admin Orders Page
//!
//! All orders with a status filter, status changes and the order counters.
//! Administrators may set any status; the API validates the value.

use crate::app::auth::AuthContext;
use crate::app::guards;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::OrderApi;
use shared::{Order, OrderStats, OrderStatus};
use std::sync::Arc;

pub struct AdminOrdersPage {
    orders_api: Arc<dyn OrderApi>,
    auth: AuthContext,
    toasts: ToastContext,
    pub status: Option<OrderStatus>,
    pub orders: Vec<Order>,
    pub stats: Option<OrderStats>,
}

impl AdminOrdersPage {
    pub fn new(orders_api: Arc<dyn OrderApi>, auth: AuthContext, toasts: ToastContext) -> Self {
        Self {
            orders_api,
            auth,
            toasts,
            status: None,
            orders: Vec::new(),
            stats: None,
        }
    }

    /// Load the orders for the current filter together with the counters.
    pub async fn load(&mut self) -> Result<&[Order]> {
        guards::require_admin(&self.auth)?;
        let (orders, stats) = futures::join!(
            self.orders_api.list_orders(self.status),
            self.orders_api.order_stats()
        );

        self.orders = orders.map_err(|e| AppError::from_api(e, "Failed to load orders"))?;
        self.stats = match stats {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::warn!(error = %e, "Order stats unavailable");
                None
            }
        };
        Ok(self.orders.as_slice())
    }

    pub async fn set_status_filter(&mut self, status: Option<OrderStatus>) -> Result<&[Order]> {
        self.status = status;
        self.load().await
    }

    pub async fn update_status(&mut self, order_id: &str, status: OrderStatus) -> Result<Order> {
        guards::require_admin(&self.auth)?;
        let updated = self
            .orders_api
            .update_order_status(order_id, status)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to update order"))?;
        self.toasts.success(format!("Order marked as {}", status.label()));
        self.load().await?;
        Ok(updated)
    }
}

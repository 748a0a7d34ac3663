//! # Order Pages
//!
//! The customer's order history and the confirmation shown after checkout.

use crate::app::auth::AuthContext;
use crate::app::guards;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::OrderApi;
use shared::{Order, OrderStatus};
use std::sync::Arc;

/// Orders that have not been confirmed by the bakery can still be cancelled.
pub fn can_cancel(order: &Order) -> bool {
    matches!(order.status, OrderStatus::Pending | OrderStatus::Paid)
}

/// Only cancelled orders can be removed from the history.
pub fn can_delete(order: &Order) -> bool {
    order.status == OrderStatus::Cancelled
}

/// Customer label of a payment status.
pub fn payment_label(payment_status: &str) -> &'static str {
    match payment_status {
        "paid" => "Paid",
        "refunded" => "Refunded",
        _ => "Unpaid",
    }
}

/// Date shown next to an order, e.g. `Mar 05, 2024, 09:30`.
pub fn format_order_date(order: &Order) -> String {
    order.created_at.format("%b %d, %Y, %H:%M").to_string()
}

pub struct MyOrdersPage {
    orders_api: Arc<dyn OrderApi>,
    auth: AuthContext,
    toasts: ToastContext,
    pub orders: Vec<Order>,
}

impl MyOrdersPage {
    pub fn new(orders_api: Arc<dyn OrderApi>, auth: AuthContext, toasts: ToastContext) -> Self {
        Self {
            orders_api,
            auth,
            toasts,
            orders: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> Result<&[Order]> {
        guards::require_auth(&self.auth)?;
        self.orders = self
            .orders_api
            .my_orders()
            .await
            .map_err(|e| AppError::from_api(e, "Failed to load orders"))?;
        Ok(self.orders.as_slice())
    }

    pub async fn cancel(&mut self, order_id: &str) -> Result<()> {
        let order = self.find(order_id)?;
        if !can_cancel(order) {
            return Err(AppError::Validation(format!(
                "A {} order can no longer be cancelled",
                order.status.label().to_lowercase()
            )));
        }

        self.orders_api
            .cancel_order(order_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to cancel order"))?;
        self.toasts.success("Order cancelled");
        self.load().await?;
        Ok(())
    }

    pub async fn delete(&mut self, order_id: &str) -> Result<()> {
        if !can_delete(self.find(order_id)?) {
            return Err(AppError::Validation("Only cancelled orders can be deleted".to_string()));
        }

        self.orders_api
            .delete_order(order_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to delete order"))?;
        self.orders.retain(|order| order.id != order_id);
        self.toasts.success("Order deleted");
        Ok(())
    }

    fn find(&self, order_id: &str) -> Result<&Order> {
        self.orders
            .iter()
            .find(|order| order.id == order_id)
            .ok_or_else(|| AppError::State("Order not found".to_string()))
    }
}

/// Confirmation page for one order.
pub struct OrderSuccessPage {
    orders_api: Arc<dyn OrderApi>,
    pub order: Option<Order>,
}

impl OrderSuccessPage {
    pub fn new(orders_api: Arc<dyn OrderApi>) -> Self {
        Self {
            orders_api,
            order: None,
        }
    }

    /// Load the order; a missing order leaves the page on "Order not found".
    pub async fn load(&mut self, order_id: &str) -> Result<Option<&Order>> {
        self.order = match self.orders_api.get_order(order_id).await {
            Ok(order) => Some(order),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(AppError::from_api(e, "Failed to load order")),
        };
        Ok(self.order.as_ref())
    }
}

//! # Cart Page
//!
//! Presentation helpers over the [`CartContext`]: lines, totals, the free
//! shipping hint and the quantity buttons.

use crate::app::auth::AuthContext;
use crate::app::cart::CartContext;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use shared::{format_price, CartItem, CartTotal};

/// Rendering of the shipping cost.
pub fn shipping_label(total: &CartTotal) -> String {
    if total.shipping == 0.0 {
        "Free".to_string()
    } else {
        format_price(total.shipping)
    }
}

/// "Add $x more for free shipping!" while under the threshold.
pub fn free_shipping_note(gap: Option<f64>) -> Option<String> {
    gap.map(|gap| format!("Add {} more for free shipping!", format_price(gap)))
}

pub struct CartPage {
    auth: AuthContext,
    cart: CartContext,
    toasts: ToastContext,
}

impl CartPage {
    pub fn new(auth: AuthContext, cart: CartContext, toasts: ToastContext) -> Self {
        Self { auth, cart, toasts }
    }

    /// Anonymous visitors see a login prompt instead of the cart.
    pub fn requires_login(&self) -> bool {
        self.auth.user().is_none()
    }

    pub fn is_loading(&self) -> bool {
        self.cart.is_loading()
    }

    pub fn lines(&self) -> Vec<CartItem> {
        self.cart.items()
    }

    pub fn total(&self) -> CartTotal {
        self.cart.total()
    }

    pub fn shipping_label(&self) -> String {
        shipping_label(&self.cart.total())
    }

    pub fn free_shipping_note(&self) -> Option<String> {
        free_shipping_note(self.cart.free_shipping_gap())
    }

    pub async fn increment(&self, product_id: &str) -> Result<()> {
        let quantity = self.quantity_of(product_id)?;
        self.cart.update_quantity(product_id, quantity + 1).await
    }

    /// Lower a line by one; a line never drops below one this way.
    pub async fn decrement(&self, product_id: &str) -> Result<()> {
        let quantity = self.quantity_of(product_id)?;
        if quantity <= 1 {
            return Ok(());
        }
        self.cart.update_quantity(product_id, quantity - 1).await
    }

    pub async fn set_quantity(&self, product_id: &str, quantity: u32) -> Result<()> {
        self.cart.update_quantity(product_id, quantity).await
    }

    pub async fn remove(&self, product_id: &str) -> Result<()> {
        self.cart.remove(product_id).await?;
        self.toasts.info("Item removed from cart");
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        self.cart.clear().await?;
        self.toasts.info("Cart cleared");
        Ok(())
    }

    /// Checkout is offered for a non-empty cart.
    pub fn can_checkout(&self) -> bool {
        !self.requires_login() && !self.cart.is_empty()
    }

    fn quantity_of(&self, product_id: &str) -> Result<u32> {
        self.cart
            .items()
            .iter()
            .find(|item| item.product.id == product_id)
            .map(|item| item.quantity)
            .ok_or_else(|| AppError::State("Item is not in the cart".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_label() {
        let free = CartTotal {
            subtotal: 60.0,
            shipping: 0.0,
            total: 60.0,
            total_items: 3,
        };
        assert_eq!(shipping_label(&free), "Free");

        let paid = CartTotal {
            subtotal: 20.0,
            shipping: 5.0,
            total: 25.0,
            total_items: 2,
        };
        assert_eq!(shipping_label(&paid), "$5.00");
    }

    #[test]
    fn test_free_shipping_note() {
        assert_eq!(
            free_shipping_note(Some(12.5)).as_deref(),
            Some("Add $12.50 more for free shipping!")
        );
        assert_eq!(free_shipping_note(None), None);
    }
}

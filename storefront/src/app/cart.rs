//! # Cart Context
//!
//! Server-side cart of the logged-in user. Every mutation is followed by a
//! full refetch; quantity changes and removals are applied locally first and
//! reconciled by that refetch.

use super::auth::AuthState;
use crate::core::error::{AppError, Result};
use crate::core::service::CartApi;
use crate::services::api::ApiError;
use parking_lot::RwLock;
use shared::{CartAddResponse, CartItem, CartTotal};
use std::sync::Arc;

/// Subtotal from which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total: CartTotal,
    pub loading: bool,
    pub initialized: bool,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: CartTotal::default(),
            loading: true,
            initialized: false,
        }
    }
}

/// Cheap-clone handle; clones share state.
#[derive(Clone)]
pub struct CartContext {
    api: Arc<dyn CartApi>,
    state: Arc<RwLock<CartState>>,
}

impl CartContext {
    pub fn new(api: Arc<dyn CartApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(CartState::default())),
        }
    }

    /// Follow the auth state: load the cart for a session, empty it otherwise.
    ///
    /// Does nothing while auth is still loading.
    pub async fn sync_with_auth(&self, auth: &AuthState) -> Result<()> {
        if auth.loading {
            return Ok(());
        }

        let result = if auth.token.is_some() {
            self.fetch().await
        } else {
            self.reset();
            Ok(())
        };

        self.state.write().initialized = true;
        result
    }

    /// Load cart and totals with the loading flag raised.
    ///
    /// Failures are logged and the previous values kept; only an expired
    /// session is reported.
    pub async fn fetch(&self) -> Result<()> {
        if !self.api.has_token() {
            return Ok(());
        }

        self.state.write().loading = true;
        let result = self.load().await;
        self.state.write().loading = false;
        result
    }

    /// Like [`CartContext::fetch`] without touching the loading flag.
    pub async fn refresh(&self) -> Result<()> {
        if !self.api.has_token() {
            return Ok(());
        }
        self.load().await
    }

    async fn load(&self) -> Result<()> {
        let (items, total) = futures::join!(self.api.get_cart(), self.api.get_cart_total());

        let mut expired = false;
        let mut state = self.state.write();
        match items {
            Ok(items) => state.items = items,
            Err(e) => {
                expired |= matches!(e, ApiError::SessionExpired);
                tracing::warn!(error = %e, "Cart fetch failed");
            }
        }
        match total {
            Ok(total) => state.total = total,
            Err(e) => {
                expired |= matches!(e, ApiError::SessionExpired);
                tracing::warn!(error = %e, "Cart total fetch failed");
            }
        }

        if expired {
            return Err(AppError::SessionExpired);
        }
        Ok(())
    }

    /// Add `quantity` (at least 1) of a product.
    ///
    /// # Errors
    ///
    /// `Validation("Please login first")` without a session; otherwise the
    /// backend detail or "Failed to add to cart".
    pub async fn add(&self, product_id: &str, quantity: u32) -> Result<CartAddResponse> {
        if !self.api.has_token() {
            return Err(AppError::Validation("Please login first".to_string()));
        }

        let response = self
            .api
            .add_to_cart(product_id, quantity.max(1))
            .await
            .map_err(|e| AppError::from_api(e, "Failed to add to cart"))?;

        tracing::info!(product_id, quantity = response.quantity, "Added to cart");
        self.refresh().await?;
        Ok(response)
    }

    /// Set a line's quantity; 0 removes the line server-side.
    ///
    /// The local line changes immediately. The server's answer wins after the
    /// refetch; a rejected update is reported once the cart is reconciled.
    pub async fn update_quantity(&self, product_id: &str, quantity: u32) -> Result<()> {
        if !self.api.has_token() {
            return Ok(());
        }

        {
            let mut state = self.state.write();
            if let Some(item) = state.items.iter_mut().find(|item| item.product.id == product_id) {
                item.quantity = quantity;
            }
        }

        let result = self.api.update_cart(product_id, quantity).await;
        self.refresh().await?;
        result
            .map(|_| ())
            .map_err(|e| AppError::from_api(e, "Failed to update cart"))
    }

    /// Remove a line, optimistically.
    pub async fn remove(&self, product_id: &str) -> Result<()> {
        if !self.api.has_token() {
            return Ok(());
        }

        self.state
            .write()
            .items
            .retain(|item| item.product.id != product_id);

        let result = self.api.remove_from_cart(product_id).await;
        self.refresh().await?;
        result
            .map(|_| ())
            .map_err(|e| AppError::from_api(e, "Failed to remove item"))
    }

    /// Empty the cart. Local state is only cleared once the server agrees.
    pub async fn clear(&self) -> Result<()> {
        if !self.api.has_token() {
            return Ok(());
        }

        self.api
            .clear_cart()
            .await
            .map_err(|e| AppError::from_api(e, "Failed to clear cart"))?;

        let mut state = self.state.write();
        state.items.clear();
        state.total = CartTotal::default();
        Ok(())
    }

    pub(crate) fn reset(&self) {
        let mut state = self.state.write();
        state.items.clear();
        state.total = CartTotal::default();
        state.loading = false;
    }

    pub fn snapshot(&self) -> CartState {
        self.state.read().clone()
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.state.read().items.clone()
    }

    pub fn total(&self) -> CartTotal {
        self.state.read().total
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().items.is_empty()
    }

    /// Sum of line quantities.
    pub fn item_count(&self) -> u32 {
        self.state.read().items.iter().map(|item| item.quantity).sum()
    }

    /// Amount still needed for free shipping, if any.
    pub fn free_shipping_gap(&self) -> Option<f64> {
        let subtotal = self.state.read().total.subtotal;
        (subtotal < FREE_SHIPPING_THRESHOLD).then(|| FREE_SHIPPING_THRESHOLD - subtotal)
    }
}

//! # Storefront Root
//!
//! [`Storefront`] owns the API client and the three shared contexts, and
//! builds page controllers wired to them.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Storefront                                  │
//! │  ├── AuthContext   token + user + session    │
//! │  ├── CartContext   items + total             │
//! │  └── ToastContext  ephemeral messages        │
//! └───────────────┬──────────────────────────────┘
//!                 │ page factories
//! ┌───────────────▼──────────────────────────────┐
//! │  pages::*  (own their list and form state)   │
//! └───────────────┬──────────────────────────────┘
//!                 │ Arc<dyn ...Api>
//! ┌───────────────▼──────────────────────────────┐
//! │  ApiClient  (bearer token, JSON over HTTP)   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Error Flow
//!
//! Pages toast their successes and return their failures. Callers hand
//! failures to [`Storefront::handle_error`], which ends the session when the
//! API rejected the token and shows the message either way.
//!
//! ## Key Components
//!
//! - **[`auth`]**: login state and session restore
//! - **[`cart`]**: server-side cart mirror with optimistic updates
//! - **[`toast`]**: notification queue with auto-dismiss
//! - **[`guards`]**: login and admin checks for pages
//! - **[`session`]**: token persistence between runs

pub mod auth;
pub mod cart;
pub mod guards;
pub mod session;
pub mod toast;

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::pages::admin_orders::AdminOrdersPage;
use crate::pages::admin_products::AdminProductsPage;
use crate::pages::admin_reviews::AdminReviewsPage;
use crate::pages::cart::CartPage;
use crate::pages::chatbot::ChatWidget;
use crate::pages::checkout::CheckoutPage;
use crate::pages::favourites::FavouritesPage;
use crate::pages::ingredients::IngredientsPage;
use crate::pages::orders::{MyOrdersPage, OrderSuccessPage};
use crate::pages::product::ProductPage;
use crate::pages::questions::{AdminQuestionsPage, ContactPage, NotificationsPage};
use crate::pages::recipes::RecipesPage;
use crate::pages::shop::ShopPage;
use crate::services::api::ApiClient;
use auth::AuthContext;
use cart::CartContext;
use session::{FileSessionStore, SessionStore};
use shared::UserInfo;
use std::sync::Arc;
use toast::ToastContext;

pub use auth::AuthState;
pub use cart::CartState;
pub use toast::{ToastKind, VisibleToast};

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";

/// Application root shared by every page.
pub struct Storefront {
    config: ClientConfig,
    api: Arc<ApiClient>,
    pub auth: AuthContext,
    pub cart: CartContext,
    pub toasts: ToastContext,
}

impl Storefront {
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Self {
        let api = Arc::new(ApiClient::new(&config));
        let auth = AuthContext::new(api.clone(), store);
        let cart = CartContext::new(api.clone());

        tracing::info!(api_url = %config.api_url, "Storefront created");

        Self {
            config,
            api,
            auth,
            cart,
            toasts: ToastContext::new(),
        }
    }

    /// Root persisting its session in `config.session_file`.
    pub fn from_config(config: ClientConfig) -> Self {
        let store = Arc::new(FileSessionStore::new(config.session_file.clone()));
        Self::new(config, store)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> Arc<ApiClient> {
        self.api.clone()
    }

    /// Restore the stored session, then load its cart.
    pub async fn start(&self) -> Option<UserInfo> {
        let user = self.auth.init().await;
        if let Err(e) = self.cart.sync_with_auth(&self.auth.snapshot()).await {
            self.handle_error(&e);
        }
        user
    }

    /// React to a failure returned by a page or context.
    ///
    /// A rejected token logs the user out and empties the cart.
    pub fn handle_error(&self, err: &AppError) {
        if err.is_session_expired() {
            tracing::warn!("Session expired, logging out");
            self.auth.logout();
            self.cart.reset();
            self.toasts.error(SESSION_EXPIRED_MESSAGE);
            return;
        }

        tracing::warn!(error = %err, "Action failed");
        self.toasts.error(err.message());
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo> {
        let user = self.auth.login(email, password).await?;
        self.cart.sync_with_auth(&self.auth.snapshot()).await?;
        self.toasts.success("Login successful!");
        Ok(user)
    }

    pub fn logout(&self) {
        self.auth.logout();
        self.cart.reset();
        self.toasts.info("You have been logged out");
    }

    pub fn shop(&self) -> ShopPage {
        ShopPage::new(self.api.clone(), self.auth.clone(), self.cart.clone(), self.toasts.clone())
    }

    pub fn product(&self) -> ProductPage {
        ProductPage::new(
            self.api.clone(),
            self.api.clone(),
            self.api.clone(),
            self.api.clone(),
            self.auth.clone(),
            self.cart.clone(),
            self.toasts.clone(),
        )
    }

    pub fn cart_page(&self) -> CartPage {
        CartPage::new(self.auth.clone(), self.cart.clone(), self.toasts.clone())
    }

    pub fn checkout(&self) -> CheckoutPage {
        CheckoutPage::new(self.api.clone(), self.auth.clone(), self.cart.clone(), self.toasts.clone())
    }

    pub fn my_orders(&self) -> MyOrdersPage {
        MyOrdersPage::new(self.api.clone(), self.auth.clone(), self.toasts.clone())
    }

    pub fn order_success(&self) -> OrderSuccessPage {
        OrderSuccessPage::new(self.api.clone())
    }

    pub fn favourites(&self) -> FavouritesPage {
        FavouritesPage::new(self.api.clone(), self.auth.clone(), self.cart.clone(), self.toasts.clone())
    }

    pub fn contact(&self) -> ContactPage {
        ContactPage::new(self.api.clone(), self.auth.clone(), self.toasts.clone())
    }

    pub fn notifications(&self) -> NotificationsPage {
        NotificationsPage::new(self.api.clone(), self.auth.clone())
    }

    pub fn chat(&self) -> ChatWidget {
        ChatWidget::new(self.api.clone(), self.auth.clone())
    }

    pub fn admin_products(&self) -> AdminProductsPage {
        AdminProductsPage::new(self.api.clone(), self.auth.clone(), self.toasts.clone())
    }

    pub fn admin_orders(&self) -> AdminOrdersPage {
        AdminOrdersPage::new(self.api.clone(), self.auth.clone(), self.toasts.clone())
    }

    pub fn admin_reviews(&self) -> AdminReviewsPage {
        AdminReviewsPage::new(self.api.clone(), self.auth.clone(), self.toasts.clone())
    }

    pub fn admin_questions(&self) -> AdminQuestionsPage {
        AdminQuestionsPage::new(self.api.clone(), self.auth.clone(), self.toasts.clone())
    }

    pub fn ingredients(&self) -> IngredientsPage {
        IngredientsPage::new(self.api.clone(), self.auth.clone(), self.toasts.clone())
    }

    pub fn recipes(&self) -> RecipesPage {
        RecipesPage::new(self.api.clone(), self.api.clone(), self.auth.clone(), self.toasts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::MemorySessionStore;

    fn storefront() -> Storefront {
        let config = ClientConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            ..ClientConfig::default()
        };
        Storefront::new(config, Arc::new(MemorySessionStore::new()))
    }

    #[tokio::test]
    async fn test_handle_error_session_expired_logs_out() {
        // Arrange
        let app = storefront();
        app.auth.init().await;

        // Act
        app.handle_error(&AppError::SessionExpired);

        // Assert
        assert!(!app.auth.is_authenticated());
        assert!(app.cart.is_empty());
        let toasts = app.toasts.drain();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, SESSION_EXPIRED_MESSAGE);
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn test_handle_error_shows_message() {
        let app = storefront();
        app.handle_error(&AppError::Api("Insufficient stock".to_string()));

        let toasts = app.toasts.drain();
        assert_eq!(toasts[0].message, "Insufficient stock");
    }

    #[tokio::test]
    async fn test_start_without_session() {
        let app = storefront();
        assert!(app.start().await.is_none());
        assert!(!app.auth.is_loading());
        assert!(!app.cart.is_loading());
        assert!(app.toasts.is_empty());
    }
}

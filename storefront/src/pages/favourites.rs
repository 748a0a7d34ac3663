//! # Favourites Page

use super::AddToCart;
use crate::app::auth::AuthContext;
use crate::app::cart::CartContext;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::FavouritesApi;
use shared::Favourite;
use std::sync::Arc;

pub const FAVOURITES_LIMIT: u32 = 100;

pub struct FavouritesPage {
    favourites_api: Arc<dyn FavouritesApi>,
    auth: AuthContext,
    cart: CartContext,
    toasts: ToastContext,
    pub favourites: Vec<Favourite>,
}

impl FavouritesPage {
    pub fn new(
        favourites_api: Arc<dyn FavouritesApi>,
        auth: AuthContext,
        cart: CartContext,
        toasts: ToastContext,
    ) -> Self {
        Self {
            favourites_api,
            auth,
            cart,
            toasts,
            favourites: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> Result<&[Favourite]> {
        self.favourites = self
            .favourites_api
            .list_favourites(0, FAVOURITES_LIMIT)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to load favourites"))?;
        Ok(self.favourites.as_slice())
    }

    pub async fn remove(&mut self, product_id: &str) -> Result<()> {
        self.favourites_api
            .remove_favourite(product_id)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to remove from favourites"))?;
        self.favourites.retain(|fav| fav.product.id != product_id);
        Ok(())
    }

    pub async fn add_to_cart(&self, product_id: &str) -> Result<AddToCart> {
        if !self.auth.is_authenticated() {
            return Ok(AddToCart::LoginRequired);
        }

        let response = self.cart.add(product_id, 1).await?;
        let name = self
            .favourites
            .iter()
            .find(|fav| fav.product.id == product_id)
            .map(|fav| fav.product.name.as_str())
            .unwrap_or("Product");
        self.toasts.success(format!("{} added to cart!", name));
        Ok(AddToCart::Added(response))
    }

    pub async fn clear(&mut self) -> Result<()> {
        self.favourites_api
            .clear_favourites()
            .await
            .map_err(|e| AppError::from_api(e, "Failed to clear favourites"))?;
        self.favourites.clear();
        self.toasts.info("Favourites cleared");
        Ok(())
    }
}

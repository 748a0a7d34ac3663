//! Favourites page and the product page heart against the fake API.

mod common;

use common::FakeBackend;
use storefront::app::ToastKind;
use storefront::pages::product::FavouriteToggle;
use storefront::pages::AddToCart;
use storefront::AppError;

fn favourite_ids(backend: &FakeBackend) -> Vec<String> {
    backend.state.lock().favourites.clone()
}

#[tokio::test]
async fn test_load_and_remove_favourite() {
    // Arrange
    let backend = FakeBackend::start().await;
    backend.state.lock().favourites = vec!["p1".to_string(), "p7".to_string(), "p12".to_string()];
    let app = backend.customer().await;
    let mut page = app.favourites();

    // Act
    let loaded: Vec<String> = page
        .load()
        .await
        .expect("load should succeed in test")
        .iter()
        .map(|fav| fav.product.id.clone())
        .collect();
    page.remove("p7").await.expect("remove should succeed in test");

    // Assert
    assert_eq!(loaded, vec!["p1", "p7", "p12"]);
    let kept: Vec<&str> = page.favourites.iter().map(|fav| fav.product.id.as_str()).collect();
    assert_eq!(kept, vec!["p1", "p12"]);
    assert_eq!(page.favourites[0].favourite_id, "f-p1");
    assert_eq!(favourite_ids(&backend), vec!["p1", "p12"]);
}

#[tokio::test]
async fn test_remove_unknown_favourite_keeps_list() {
    let backend = FakeBackend::start().await;
    backend.state.lock().favourites = vec!["p1".to_string()];
    let app = backend.customer().await;
    let mut page = app.favourites();
    page.load().await.expect("load should succeed in test");

    let result = page.remove("p9").await;

    assert_eq!(result, Err(AppError::Api("Favourite not found".to_string())));
    assert_eq!(page.favourites.len(), 1);
}

#[tokio::test]
async fn test_clear_favourites_toasts() {
    // Arrange
    let backend = FakeBackend::start().await;
    backend.state.lock().favourites = vec!["p2".to_string(), "p3".to_string()];
    let app = backend.customer().await;
    let mut page = app.favourites();
    page.load().await.expect("load should succeed in test");

    // Act
    page.clear().await.expect("clear should succeed in test");

    // Assert
    assert!(page.favourites.is_empty());
    assert!(favourite_ids(&backend).is_empty());
    let toasts = app.toasts.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Info);
    assert_eq!(toasts[0].message, "Favourites cleared");
}

#[tokio::test]
async fn test_add_favourite_to_cart() {
    // Arrange
    let backend = FakeBackend::start().await;
    backend.state.lock().favourites = vec!["p7".to_string()];
    let guest = backend.storefront();
    let app = backend.customer().await;
    let mut page = app.favourites();
    page.load().await.expect("load should succeed in test");

    // Act
    let anonymous = guest
        .favourites()
        .add_to_cart("p7")
        .await
        .expect("guest add should not fail in test");
    let added = page.add_to_cart("p7").await.expect("add should succeed in test");

    // Assert
    assert_eq!(anonymous, AddToCart::LoginRequired);
    assert!(matches!(added, AddToCart::Added(ref response) if response.quantity == 1));
    assert_eq!(backend.state.lock().cart, vec![("p7".to_string(), 1)]);
    assert_eq!(app.toasts.drain()[0].message, "bread savory 1 added to cart!");
}

#[tokio::test]
async fn test_guest_favourites_are_unauthorised() {
    let backend = FakeBackend::start().await;
    let app = backend.storefront();

    let result = app.favourites().load().await.map(<[_]>::len);

    assert!(result.is_err());
    assert!(!app.auth.is_authenticated());
}

#[tokio::test]
async fn test_product_heart_follows_favourites() {
    // Arrange
    let backend = FakeBackend::start().await;
    backend.state.lock().favourites = vec!["p1".to_string()];
    let app = backend.customer().await;
    let mut page = app.product();

    // Act
    page.load("p1").await.expect("load should succeed in test");
    let was_favourite = page.is_favourite;
    let toggled = page.toggle_favourite().await.expect("toggle should succeed in test");

    // Assert
    assert!(was_favourite);
    assert_eq!(toggled, FavouriteToggle::Removed);
    assert!(!page.is_favourite);
    assert!(favourite_ids(&backend).is_empty());
}

#[tokio::test]
async fn test_product_load_reports_expired_session() {
    // Arrange
    let backend = FakeBackend::start().await;
    let app = backend.customer().await;
    let mut page = app.product();
    backend.expire_sessions();

    // Act
    let result = page.load("p1").await.map(|product| product.id.clone());
    if let Err(e) = &result {
        app.handle_error(e);
    }

    // Assert
    assert_eq!(result, Err(AppError::SessionExpired));
    assert!(page.product.is_none());
    assert!(!app.auth.is_authenticated());
}

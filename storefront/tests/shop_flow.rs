//! Catalog browsing against the fake API.

mod common;

use common::{FakeBackend, SEEDED_CATEGORIES, UNAVAILABLE_PRODUCT};
use storefront::pages::shop::SortOrder;
use storefront::pages::AddToCart;
use storefront::AppError;

#[tokio::test]
async fn test_catalog_counts_and_pagination() {
    // Arrange
    let backend = FakeBackend::start().await;
    let app = backend.storefront();
    let mut shop = app.shop();

    // Act
    let loaded = shop.load().await.expect("load should succeed in test");

    // Assert
    assert_eq!(loaded, 15);
    assert!(!shop.is_loading());
    let counts = shop.categories();
    assert_eq!(counts[0].slug, "all");
    assert_eq!(counts[0].count, 15);
    for (slug, expected) in SEEDED_CATEGORIES {
        let entry = counts
            .iter()
            .find(|c| c.slug == slug)
            .expect("category should be listed");
        assert_eq!(entry.count, expected, "count for {slug}");
    }

    assert_eq!(shop.total_pages(), 2);
    assert_eq!(shop.visible().len(), 12);
    shop.set_page(2);
    assert_eq!(shop.visible().len(), 3);
    assert_eq!(shop.showing(), (13, 15, 15));
    shop.set_page(9);
    assert_eq!(shop.page(), 2);
}

#[tokio::test]
async fn test_category_and_sort() {
    let backend = FakeBackend::start().await;
    let app = backend.storefront();
    let mut shop = app.shop();
    shop.load().await.expect("load should succeed in test");
    shop.set_page(2);

    shop.set_category("bread-savory");
    assert_eq!(shop.page(), 1);
    assert_eq!(shop.total_pages(), 1);
    assert!(shop.visible().iter().all(|p| p.category == "bread-savory"));

    shop.set_category("all");
    shop.set_sort(SortOrder::PriceHigh);
    assert_eq!(shop.visible()[0].id, UNAVAILABLE_PRODUCT);
    shop.set_sort(SortOrder::PriceLow);
    assert_eq!(shop.visible()[0].id, "p1");
}

#[tokio::test]
async fn test_add_to_cart_from_grid() {
    // Arrange
    let backend = FakeBackend::start().await;
    let guest = backend.storefront();
    let customer = backend.customer().await;
    let mut guest_shop = guest.shop();
    let mut shop = customer.shop();
    guest_shop.load().await.expect("load should succeed in test");
    shop.load().await.expect("load should succeed in test");

    // Act
    let anonymous = guest_shop.add_to_cart("p1").await.expect("add should not fail for guests");
    let added = shop.add_to_cart("p1").await.expect("add should succeed in test");
    let rejected = shop.add_to_cart(UNAVAILABLE_PRODUCT).await;

    // Assert
    assert_eq!(anonymous, AddToCart::LoginRequired);
    assert!(guest.cart.is_empty());
    assert!(matches!(added, AddToCart::Added(ref response) if response.quantity == 1));
    assert_eq!(customer.cart.item_count(), 1);
    assert_eq!(rejected, Err(AppError::Api("Product is not available".to_string())));
    let toasts = customer.toasts.drain();
    assert_eq!(toasts[0].message, "birthday cakes 1 added to cart!");
}

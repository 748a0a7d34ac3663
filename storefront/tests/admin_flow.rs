//! Back-office inventory and review moderation against the fake API.

mod common;

use common::FakeBackend;
use shared::StockMovement;
use storefront::app::ToastKind;
use storefront::pages::admin_reviews::ReviewFilter;
use storefront::pages::ingredients::IngredientFilter;
use storefront::AppError;

#[tokio::test]
async fn test_inventory_summary_and_low_stock() {
    // Arrange
    let backend = FakeBackend::start().await;
    let app = backend.admin().await;
    let mut page = app.ingredients();

    // Act
    page.load().await.expect("load should succeed in test");
    let summary = page.summary();
    page.filter = IngredientFilter::LowStock;
    let low: Vec<String> = page.visible().iter().map(|i| i.name.clone()).collect();

    // Assert
    assert_eq!(summary.total, 3);
    assert_eq!(summary.low_stock, 1);
    assert_eq!(summary.active, 3);
    assert!((summary.stock_value - 136.0).abs() < 1e-9);
    assert_eq!(low, vec!["Sugar".to_string()]);
}

#[tokio::test]
async fn test_stock_movements_are_recorded() {
    // Arrange
    let backend = FakeBackend::start().await;
    let app = backend.admin().await;
    let mut page = app.ingredients();
    page.load().await.expect("load should succeed in test");

    // Act
    let sugar = page
        .change_stock("i3", StockMovement::Import, 6.0, "  weekly delivery ")
        .await
        .expect("import should succeed in test");
    let butter = page
        .change_stock("i2", StockMovement::Export, 3.0, "")
        .await
        .expect("export should succeed in test");
    let history = page.history("i3").await.expect("history should succeed in test");

    // Assert
    assert_eq!(sugar.quantity, 10.0);
    assert!(!sugar.is_low_stock);
    assert_eq!(butter.quantity, 9.0);
    assert!(butter.is_low_stock);
    assert_eq!(page.summary().low_stock, 1);

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].movement, StockMovement::Import);
    assert_eq!(history[0].delta(), 6.0);
    assert_eq!(history[0].note, "weekly delivery");

    let toasts = app.toasts.drain();
    let messages: Vec<&str> = toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["Stock imported", "Stock exported", "Butter is running low (9 kg)"]);
    assert_eq!(toasts[2].kind, ToastKind::Warning);
}

#[tokio::test]
async fn test_stock_export_rejections() {
    let backend = FakeBackend::start().await;
    let app = backend.admin().await;
    let mut page = app.ingredients();
    page.load().await.expect("load should succeed in test");

    let too_much = page.change_stock("i3", StockMovement::Export, 50.0, "").await;
    let zero = page.change_stock("i3", StockMovement::Export, 0.0, "").await;

    assert_eq!(too_much, Err(AppError::Api("Not enough stock".to_string())));
    assert!(matches!(zero, Err(AppError::Validation(_))));
    assert!(page.history("i3").await.expect("history should succeed in test").is_empty());
    assert!(app.toasts.is_empty());
}

#[tokio::test]
async fn test_back_office_refuses_customers() {
    let backend = FakeBackend::start().await;
    let app = backend.customer().await;

    assert!(matches!(app.ingredients().load().await, Err(AppError::Forbidden(_))));
    assert!(matches!(app.admin_reviews().load().await, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn test_review_moderation() {
    // Arrange
    let backend = FakeBackend::start().await;
    let app = backend.admin().await;
    let mut page = app.admin_reviews();

    // Act
    let pending: Vec<String> = page
        .load()
        .await
        .expect("load should succeed in test")
        .iter()
        .map(|r| r.id.clone())
        .collect();
    page.approve("r1").await.expect("approve should succeed in test");
    let after_approve = page.reviews.len();
    let approved = page
        .set_filter(ReviewFilter::Approved)
        .await
        .expect("filter should succeed in test")
        .len();
    let hidden: Vec<String> = page
        .set_filter(ReviewFilter::Hidden)
        .await
        .expect("filter should succeed in test")
        .iter()
        .map(|r| r.id.clone())
        .collect();

    // Assert
    assert_eq!(pending, vec!["r1".to_string()]);
    assert_eq!(after_approve, 0);
    assert_eq!(approved, 2);
    assert_eq!(hidden, vec!["r3".to_string()]);
    assert_eq!(app.toasts.drain()[0].message, "Review approved!");
}

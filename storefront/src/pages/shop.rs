//! # Shop Page
//!
//! The catalog grid: category filter with counts, sorting and pagination
//! over the first 100 products.

use super::AddToCart;
use crate::app::auth::AuthContext;
use crate::app::cart::CartContext;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::CatalogApi;
use shared::{Product, ProductQuery};
use std::cmp::Ordering;
use std::sync::Arc;

/// Products fetched for the grid.
pub const SHOP_FETCH_LIMIT: u32 = 100;

pub const DEFAULT_PER_PAGE: usize = 12;

/// Category filter entries: slug and label.
pub const SHOP_CATEGORIES: [(&str, &str); 5] = [
    ("all", "All Products"),
    ("birthday-cakes", "Birthday Cakes"),
    ("bread-savory", "Bread & Savory"),
    ("cookies-minicakes", "Cookies & Minicakes"),
    ("beverages", "Beverages"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Default,
    PriceLow,
    PriceHigh,
    NameAz,
    NameZa,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[
            SortOrder::Default,
            SortOrder::PriceLow,
            SortOrder::PriceHigh,
            SortOrder::NameAz,
            SortOrder::NameZa,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
            SortOrder::NameAz => "name-az",
            SortOrder::NameZa => "name-za",
        }
    }

    pub fn parse(raw: &str) -> Option<SortOrder> {
        SortOrder::all().iter().copied().find(|s| s.as_str() == raw.trim())
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::Default => Ordering::Equal,
            SortOrder::PriceLow => a.price.total_cmp(&b.price),
            SortOrder::PriceHigh => b.price.total_cmp(&a.price),
            SortOrder::NameAz => compare_names(&a.name, &b.name),
            SortOrder::NameZa => compare_names(&b.name, &a.name),
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub slug: &'static str,
    pub name: &'static str,
    pub count: usize,
}

/// Count products per filter entry; `all` counts everything.
pub fn category_counts(products: &[Product]) -> Vec<CategoryCount> {
    SHOP_CATEGORIES
        .iter()
        .map(|&(slug, name)| CategoryCount {
            slug,
            name,
            count: if slug == "all" {
                products.len()
            } else {
                products.iter().filter(|p| p.category == slug).count()
            },
        })
        .collect()
}

/// Products of `category` (or all) in `order`. Sorting is stable.
pub fn filter_and_sort<'a>(products: &'a [Product], category: &str, order: SortOrder) -> Vec<&'a Product> {
    let mut selected: Vec<&Product> = products
        .iter()
        .filter(|p| category == "all" || p.category == category)
        .collect();
    selected.sort_by(|a, b| order.compare(a, b));
    selected
}

pub struct ShopPage {
    catalog: Arc<dyn CatalogApi>,
    auth: AuthContext,
    cart: CartContext,
    toasts: ToastContext,
    products: Vec<Product>,
    category: String,
    sort: SortOrder,
    page: usize,
    per_page: usize,
    loading: bool,
}

impl ShopPage {
    pub fn new(catalog: Arc<dyn CatalogApi>, auth: AuthContext, cart: CartContext, toasts: ToastContext) -> Self {
        Self {
            catalog,
            auth,
            cart,
            toasts,
            products: Vec::new(),
            category: "all".to_string(),
            sort: SortOrder::Default,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            loading: true,
        }
    }

    /// Fetch the catalog; returns how many products arrived.
    pub async fn load(&mut self) -> Result<usize> {
        self.loading = true;
        let result = self
            .catalog
            .list_products(ProductQuery::with_limit(SHOP_FETCH_LIMIT))
            .await;
        self.loading = false;

        self.products = result.map_err(|e| AppError::from_api(e, "Failed to load products"))?;
        tracing::debug!(count = self.products.len(), "Catalog loaded");
        Ok(self.products.len())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> Vec<CategoryCount> {
        category_counts(&self.products)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Select a category filter and go back to the first page.
    pub fn set_category(&mut self, slug: &str) {
        self.category = slug.to_string();
        self.page = 1;
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Jump to a page, clamped to the available range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn total_pages(&self) -> usize {
        self.selection().len().div_ceil(self.per_page)
    }

    /// Products on the current page.
    pub fn visible(&self) -> Vec<&Product> {
        self.selection()
            .into_iter()
            .skip((self.page - 1) * self.per_page)
            .take(self.per_page)
            .collect()
    }

    /// "Showing first–last of total results" numbers, 1-based.
    pub fn showing(&self) -> (usize, usize, usize) {
        let total = self.selection().len();
        let start = (self.page - 1) * self.per_page;
        (start + 1, (start + self.per_page).min(total), total)
    }

    fn selection(&self) -> Vec<&Product> {
        filter_and_sort(&self.products, &self.category, self.sort)
    }

    /// Put one unit of a product in the cart.
    pub async fn add_to_cart(&self, product_id: &str) -> Result<AddToCart> {
        if self.auth.user().is_none() {
            return Ok(AddToCart::LoginRequired);
        }

        let response = self.cart.add(product_id, 1).await?;
        let name = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.name.as_str())
            .unwrap_or("Product");
        self.toasts.success(format!("{} added to cart!", name));
        Ok(AddToCart::Added(response))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;

    pub(crate) fn product(id: &str, name: &str, category: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            description: format!("{} from the oven", name),
            image: format!("/images/{}.jpg", id),
            badge: None,
            is_available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Tiramisu", "birthday-cakes", 30.0),
            product("2", "baguette", "bread-savory", 4.5),
            product("3", "Croissant", "bread-savory", 3.0),
            product("4", "Matcha Latte", "beverages", 5.0),
            product("5", "Almond Cookies", "cookies-minicakes", 6.0),
        ]
    }

    #[test]
    fn test_category_counts() {
        let counts = category_counts(&catalog());
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0].count, 5);
        assert_eq!(counts[2].slug, "bread-savory");
        assert_eq!(counts[2].count, 2);
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn test_filter_and_sort() {
        let products = catalog();

        let ids = |list: Vec<&Product>| list.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(filter_and_sort(&products, "all", SortOrder::Default)), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(ids(filter_and_sort(&products, "bread-savory", SortOrder::PriceLow)), vec!["3", "2"]);
        assert_eq!(ids(filter_and_sort(&products, "all", SortOrder::PriceHigh))[0], "1");
        assert_eq!(
            ids(filter_and_sort(&products, "all", SortOrder::NameAz)),
            vec!["5", "2", "3", "4", "1"]
        );
        assert_eq!(ids(filter_and_sort(&products, "all", SortOrder::NameZa))[0], "1");
        assert!(filter_and_sort(&products, "unknown", SortOrder::Default).is_empty());
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("price-low"), Some(SortOrder::PriceLow));
        assert_eq!(SortOrder::parse("name-za"), Some(SortOrder::NameZa));
        assert_eq!(SortOrder::parse("cheapest"), None);
    }
}

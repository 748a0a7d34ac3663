//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! Every trait is implemented by [`crate::services::api::ApiClient`]; contexts
//! and pages hold `Arc<dyn Trait>` so tests can swap in small in-memory fakes.
//! Methods return [`ApiError`] so callers can pick their own fallback message
//! when the backend sends no detail.

use crate::services::api::ApiError;
use async_trait::async_trait;
use shared::{
    CanReview, CartAddResponse, CartItem, CartTotal, Category, ChangePasswordRequest, ChatHistory, ChatReply,
    ChatSuggestions, DeductResult, Favourite, FavouriteAddResponse, FavouriteCheck, Ingredient, IngredientCheck,
    IngredientDraft, IngredientUpdate, MessageResponse, Order, OrderCreate, OrderStats, OrderStatus, PaymentCheck,
    PaymentLink, PaymentStatusInfo, Product, ProductDraft, ProductQuery, ProductRating, ProductStory, ProductUpdate,
    Question, QuestionCreate, Recipe, RecipeCost, RecipeDraft, RecipeUpdate, RegisterRequest, Review, ReviewCreate,
    StockChange, StockLedgerEntry, TokenResponse, UpdateProfileRequest, UserInfo,
};

/// Result of a single API call.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Access to the bearer token attached to requests.
pub trait Session: Send + Sync {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: Option<String>);

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// Authentication and profile operations
#[async_trait]
pub trait AuthApi: Session {
    async fn login(&self, email: String, password: String) -> ApiResult<TokenResponse>;

    async fn register(&self, request: RegisterRequest) -> ApiResult<TokenResponse>;

    /// Profile of the token holder
    async fn me(&self) -> ApiResult<UserInfo>;

    async fn update_me(&self, request: UpdateProfileRequest) -> ApiResult<UserInfo>;

    async fn change_password(&self, request: ChangePasswordRequest) -> ApiResult<MessageResponse>;
}

/// Catalog browsing and admin product management
#[async_trait]
pub trait CatalogApi: Session {
    async fn list_products(&self, query: ProductQuery) -> ApiResult<Vec<Product>>;

    async fn product_count(&self, category: Option<String>) -> ApiResult<u64>;

    async fn categories(&self) -> ApiResult<Vec<Category>>;

    async fn get_product(&self, id: &str) -> ApiResult<Product>;

    async fn create_product(&self, draft: ProductDraft) -> ApiResult<Product>;

    async fn update_product(&self, id: &str, update: ProductUpdate) -> ApiResult<Product>;

    /// Soft delete: the product becomes unavailable
    async fn delete_product(&self, id: &str) -> ApiResult<()>;

    async fn check_product_ingredients(&self, id: &str, quantity: u32) -> ApiResult<IngredientCheck>;
}

/// Server-side cart of the token holder
#[async_trait]
pub trait CartApi: Session {
    async fn get_cart(&self) -> ApiResult<Vec<CartItem>>;

    async fn get_cart_total(&self) -> ApiResult<CartTotal>;

    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> ApiResult<CartAddResponse>;

    /// Set a line's quantity; 0 removes it
    async fn update_cart(&self, product_id: &str, quantity: u32) -> ApiResult<MessageResponse>;

    async fn remove_from_cart(&self, product_id: &str) -> ApiResult<MessageResponse>;

    async fn clear_cart(&self) -> ApiResult<MessageResponse>;
}

#[async_trait]
pub trait FavouritesApi: Session {
    async fn list_favourites(&self, skip: u32, limit: u32) -> ApiResult<Vec<Favourite>>;

    async fn favourites_count(&self) -> ApiResult<u64>;

    async fn check_favourite(&self, product_id: &str) -> ApiResult<FavouriteCheck>;

    async fn add_favourite(&self, product_id: &str) -> ApiResult<FavouriteAddResponse>;

    async fn remove_favourite(&self, product_id: &str) -> ApiResult<MessageResponse>;

    async fn clear_favourites(&self) -> ApiResult<MessageResponse>;
}

/// Orders and their payments
#[async_trait]
pub trait OrderApi: Session {
    async fn create_order(&self, order: OrderCreate) -> ApiResult<Order>;

    async fn my_orders(&self) -> ApiResult<Vec<Order>>;

    async fn get_order(&self, order_id: &str) -> ApiResult<Order>;

    async fn cancel_order(&self, order_id: &str) -> ApiResult<Order>;

    async fn delete_order(&self, order_id: &str) -> ApiResult<()>;

    /// Admin: all orders, optionally by status
    async fn list_orders(&self, status: Option<OrderStatus>) -> ApiResult<Vec<Order>>;

    async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> ApiResult<Order>;

    async fn order_stats(&self) -> ApiResult<OrderStats>;

    async fn create_payment_link(&self, order_id: &str) -> ApiResult<PaymentLink>;

    async fn check_payment(&self, order_id: &str) -> ApiResult<PaymentCheck>;

    async fn payment_status(&self, order_id: &str) -> ApiResult<PaymentStatusInfo>;
}

/// Back-office ingredients, stock ledger and recipes
#[async_trait]
pub trait InventoryApi: Session {
    async fn list_ingredients(&self) -> ApiResult<Vec<Ingredient>>;

    async fn low_stock(&self) -> ApiResult<Vec<Ingredient>>;

    async fn get_ingredient(&self, id: &str) -> ApiResult<Ingredient>;

    async fn create_ingredient(&self, draft: IngredientDraft) -> ApiResult<Ingredient>;

    async fn update_ingredient(&self, id: &str, update: IngredientUpdate) -> ApiResult<Ingredient>;

    async fn delete_ingredient(&self, id: &str) -> ApiResult<()>;

    async fn import_stock(&self, id: &str, change: StockChange) -> ApiResult<Ingredient>;

    async fn export_stock(&self, id: &str, change: StockChange) -> ApiResult<Ingredient>;

    async fn stock_history(&self, id: &str) -> ApiResult<Vec<StockLedgerEntry>>;

    /// `None` when the product has no recipe
    async fn recipe_for_product(&self, product_id: &str) -> ApiResult<Option<Recipe>>;

    /// `None` when the product has no recipe
    async fn product_story(&self, product_id: &str) -> ApiResult<Option<ProductStory>>;

    async fn create_recipe(&self, draft: RecipeDraft) -> ApiResult<Recipe>;

    async fn update_recipe(&self, recipe_id: &str, update: RecipeUpdate) -> ApiResult<Recipe>;

    async fn delete_recipe(&self, recipe_id: &str) -> ApiResult<()>;

    async fn recipe_cost(&self, recipe_id: &str) -> ApiResult<RecipeCost>;

    async fn deduct_ingredients(&self, product_id: &str, quantity: u32) -> ApiResult<DeductResult>;
}

/// Product reviews and their moderation
#[async_trait]
pub trait ReviewApi: Session {
    async fn create_review(&self, review: ReviewCreate) -> ApiResult<Review>;

    async fn product_reviews(&self, product_id: &str) -> ApiResult<Vec<Review>>;

    async fn product_rating(&self, product_id: &str) -> ApiResult<ProductRating>;

    /// Answers `can_review = false` without a session
    async fn can_review(&self, product_id: &str) -> ApiResult<CanReview>;

    async fn my_reviews(&self) -> ApiResult<Vec<Review>>;

    async fn pending_reviews(&self) -> ApiResult<Vec<Review>>;

    async fn all_reviews(&self) -> ApiResult<Vec<Review>>;

    async fn approve_review(&self, review_id: &str) -> ApiResult<Review>;

    async fn hide_review(&self, review_id: &str) -> ApiResult<Review>;

    async fn delete_review(&self, review_id: &str) -> ApiResult<()>;
}

/// Customer questions and the support chatbot
#[async_trait]
pub trait SupportApi: Session {
    async fn ask_question(&self, question: QuestionCreate) -> ApiResult<Question>;

    async fn all_questions(&self) -> ApiResult<Vec<Question>>;

    async fn reply_question(&self, question_id: &str, answer: String) -> ApiResult<Question>;

    async fn my_questions(&self) -> ApiResult<Vec<Question>>;

    async fn chat(&self, message: String) -> ApiResult<ChatReply>;

    async fn chat_authenticated(&self, message: String) -> ApiResult<ChatReply>;

    async fn chat_history(&self, limit: u32) -> ApiResult<ChatHistory>;

    async fn clear_chat_history(&self) -> ApiResult<MessageResponse>;

    async fn chat_suggestions(&self) -> ApiResult<ChatSuggestions>;
}

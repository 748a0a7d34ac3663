//! # API Client
//!
//! Main HTTP client for bakery API communication.

use super::error::{extract_detail, ApiError};
use super::{auth, cart, chatbot, favourites, ingredients, orders, payments, products, questions, recipes, reviews};
use crate::config::ClientConfig;
use crate::core::service::{
    ApiResult, AuthApi, CartApi, CatalogApi, FavouritesApi, InventoryApi, OrderApi, ReviewApi, Session, SupportApi,
};
use parking_lot::RwLock;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    CanReview, CartAddResponse, CartItem, CartTotal, Category, ChangePasswordRequest, ChatHistory, ChatReply,
    ChatSuggestions, DeductResult, Favourite, FavouriteAddResponse, FavouriteCheck, Ingredient, IngredientCheck,
    IngredientDraft, IngredientUpdate, MessageResponse, Order, OrderCreate, OrderStats, OrderStatus, PaymentCheck,
    PaymentLink, PaymentStatusInfo, Product, ProductDraft, ProductQuery, ProductRating, ProductStory, ProductUpdate,
    Question, QuestionCreate, Recipe, RecipeCost, RecipeDraft, RecipeUpdate, RegisterRequest, Review, ReviewCreate,
    StockChange, StockLedgerEntry, TokenResponse, UpdateProfileRequest, UserInfo,
};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// HTTP client for communicating with the bakery API.
///
/// Cloning is cheap: clones share the connection pool and the bearer token,
/// so a login through one clone authenticates all of them.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a client for the configured API.
    ///
    /// Falls back to reqwest defaults if the tuned builder cannot be created.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Client for `base_url` with default settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(&ClientConfig {
            api_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Start a request to `/api{path}`, authenticated when a token is held.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(path));
        match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Start a request that never carries the bearer token (login, register).
    pub(crate) fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.endpoint(path))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        let path = response.url().path().to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(path = %path, error = %e, "Response parse error");
            ApiError::Parse(e.to_string())
        })
    }

    /// Like [`ApiClient::send`], mapping 404 to `None`.
    pub(crate) async fn send_optional<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        match self.send(builder).await {
            Err(e) if e.is_not_found() => Ok(None),
            other => other.map(Some),
        }
    }

    /// Send and ignore the body (204 answers, acknowledgements).
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute(builder).await.map(|_| ())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let mut request = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let authenticated = request.headers().contains_key(AUTHORIZATION);
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let request_id = Uuid::new_v4().to_string();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            request.headers_mut().insert("x-request-id", value);
        }

        let start = Instant::now();
        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %e,
                "Network error"
            );
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis() as u64;

        if status.is_success() {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = status.as_u16(),
                duration_ms,
                "API call completed"
            );
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED && authenticated {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                duration_ms,
                "Bearer token rejected"
            );
            return Err(ApiError::SessionExpired);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);

        tracing::warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            detail = detail.as_deref().unwrap_or(""),
            duration_ms,
            "API call failed"
        );

        Err(ApiError::Http {
            status: status.as_u16(),
            detail,
        })
    }
}

// Implement service traits for ApiClient

impl Session for ApiClient {
    fn token(&self) -> Option<String> {
        ApiClient::token(self)
    }

    fn set_token(&self, token: Option<String>) {
        ApiClient::set_token(self, token)
    }
}

#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: String, password: String) -> ApiResult<TokenResponse> {
        auth::login(self, email, password).await
    }

    async fn register(&self, request: RegisterRequest) -> ApiResult<TokenResponse> {
        auth::register(self, &request).await
    }

    async fn me(&self) -> ApiResult<UserInfo> {
        auth::me(self).await
    }

    async fn update_me(&self, request: UpdateProfileRequest) -> ApiResult<UserInfo> {
        auth::update_me(self, &request).await
    }

    async fn change_password(&self, request: ChangePasswordRequest) -> ApiResult<MessageResponse> {
        auth::change_password(self, &request).await
    }
}

#[async_trait::async_trait]
impl CatalogApi for ApiClient {
    async fn list_products(&self, query: ProductQuery) -> ApiResult<Vec<Product>> {
        products::list_products(self, &query).await
    }

    async fn product_count(&self, category: Option<String>) -> ApiResult<u64> {
        products::product_count(self, category.as_deref()).await
    }

    async fn categories(&self) -> ApiResult<Vec<Category>> {
        products::categories(self).await
    }

    async fn get_product(&self, id: &str) -> ApiResult<Product> {
        products::get_product(self, id).await
    }

    async fn create_product(&self, draft: ProductDraft) -> ApiResult<Product> {
        products::create_product(self, &draft).await
    }

    async fn update_product(&self, id: &str, update: ProductUpdate) -> ApiResult<Product> {
        products::update_product(self, id, &update).await
    }

    async fn delete_product(&self, id: &str) -> ApiResult<()> {
        products::delete_product(self, id).await
    }

    async fn check_product_ingredients(&self, id: &str, quantity: u32) -> ApiResult<IngredientCheck> {
        products::check_product_ingredients(self, id, quantity).await
    }
}

#[async_trait::async_trait]
impl CartApi for ApiClient {
    async fn get_cart(&self) -> ApiResult<Vec<CartItem>> {
        cart::get_cart(self).await
    }

    async fn get_cart_total(&self) -> ApiResult<CartTotal> {
        cart::get_cart_total(self).await
    }

    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> ApiResult<CartAddResponse> {
        cart::add_to_cart(self, product_id, quantity).await
    }

    async fn update_cart(&self, product_id: &str, quantity: u32) -> ApiResult<MessageResponse> {
        cart::update_cart(self, product_id, quantity).await
    }

    async fn remove_from_cart(&self, product_id: &str) -> ApiResult<MessageResponse> {
        cart::remove_from_cart(self, product_id).await
    }

    async fn clear_cart(&self) -> ApiResult<MessageResponse> {
        cart::clear_cart(self).await
    }
}

#[async_trait::async_trait]
impl FavouritesApi for ApiClient {
    async fn list_favourites(&self, skip: u32, limit: u32) -> ApiResult<Vec<Favourite>> {
        favourites::list_favourites(self, skip, limit).await
    }

    async fn favourites_count(&self) -> ApiResult<u64> {
        favourites::favourites_count(self).await
    }

    async fn check_favourite(&self, product_id: &str) -> ApiResult<FavouriteCheck> {
        favourites::check_favourite(self, product_id).await
    }

    async fn add_favourite(&self, product_id: &str) -> ApiResult<FavouriteAddResponse> {
        favourites::add_favourite(self, product_id).await
    }

    async fn remove_favourite(&self, product_id: &str) -> ApiResult<MessageResponse> {
        favourites::remove_favourite(self, product_id).await
    }

    async fn clear_favourites(&self) -> ApiResult<MessageResponse> {
        favourites::clear_favourites(self).await
    }
}

#[async_trait::async_trait]
impl OrderApi for ApiClient {
    async fn create_order(&self, order: OrderCreate) -> ApiResult<Order> {
        orders::create_order(self, &order).await
    }

    async fn my_orders(&self) -> ApiResult<Vec<Order>> {
        orders::my_orders(self).await
    }

    async fn get_order(&self, order_id: &str) -> ApiResult<Order> {
        orders::get_order(self, order_id).await
    }

    async fn cancel_order(&self, order_id: &str) -> ApiResult<Order> {
        orders::cancel_order(self, order_id).await
    }

    async fn delete_order(&self, order_id: &str) -> ApiResult<()> {
        orders::delete_order(self, order_id).await
    }

    async fn list_orders(&self, status: Option<OrderStatus>) -> ApiResult<Vec<Order>> {
        orders::list_orders(self, status).await
    }

    async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> ApiResult<Order> {
        orders::update_order_status(self, order_id, status).await
    }

    async fn order_stats(&self) -> ApiResult<OrderStats> {
        orders::order_stats(self).await
    }

    async fn create_payment_link(&self, order_id: &str) -> ApiResult<PaymentLink> {
        payments::create_payment_link(self, order_id).await
    }

    async fn check_payment(&self, order_id: &str) -> ApiResult<PaymentCheck> {
        payments::check_payment(self, order_id).await
    }

    async fn payment_status(&self, order_id: &str) -> ApiResult<PaymentStatusInfo> {
        payments::payment_status(self, order_id).await
    }
}

#[async_trait::async_trait]
impl InventoryApi for ApiClient {
    async fn list_ingredients(&self) -> ApiResult<Vec<Ingredient>> {
        ingredients::list_ingredients(self).await
    }

    async fn low_stock(&self) -> ApiResult<Vec<Ingredient>> {
        ingredients::low_stock(self).await
    }

    async fn get_ingredient(&self, id: &str) -> ApiResult<Ingredient> {
        ingredients::get_ingredient(self, id).await
    }

    async fn create_ingredient(&self, draft: IngredientDraft) -> ApiResult<Ingredient> {
        ingredients::create_ingredient(self, &draft).await
    }

    async fn update_ingredient(&self, id: &str, update: IngredientUpdate) -> ApiResult<Ingredient> {
        ingredients::update_ingredient(self, id, &update).await
    }

    async fn delete_ingredient(&self, id: &str) -> ApiResult<()> {
        ingredients::delete_ingredient(self, id).await
    }

    async fn import_stock(&self, id: &str, change: StockChange) -> ApiResult<Ingredient> {
        ingredients::import_stock(self, id, &change).await
    }

    async fn export_stock(&self, id: &str, change: StockChange) -> ApiResult<Ingredient> {
        ingredients::export_stock(self, id, &change).await
    }

    async fn stock_history(&self, id: &str) -> ApiResult<Vec<StockLedgerEntry>> {
        ingredients::stock_history(self, id).await
    }

    async fn recipe_for_product(&self, product_id: &str) -> ApiResult<Option<Recipe>> {
        recipes::recipe_for_product(self, product_id).await
    }

    async fn product_story(&self, product_id: &str) -> ApiResult<Option<ProductStory>> {
        recipes::product_story(self, product_id).await
    }

    async fn create_recipe(&self, draft: RecipeDraft) -> ApiResult<Recipe> {
        recipes::create_recipe(self, &draft).await
    }

    async fn update_recipe(&self, recipe_id: &str, update: RecipeUpdate) -> ApiResult<Recipe> {
        recipes::update_recipe(self, recipe_id, &update).await
    }

    async fn delete_recipe(&self, recipe_id: &str) -> ApiResult<()> {
        recipes::delete_recipe(self, recipe_id).await
    }

    async fn recipe_cost(&self, recipe_id: &str) -> ApiResult<RecipeCost> {
        recipes::recipe_cost(self, recipe_id).await
    }

    async fn deduct_ingredients(&self, product_id: &str, quantity: u32) -> ApiResult<DeductResult> {
        recipes::deduct_ingredients(self, product_id, quantity).await
    }
}

#[async_trait::async_trait]
impl ReviewApi for ApiClient {
    async fn create_review(&self, review: ReviewCreate) -> ApiResult<Review> {
        reviews::create_review(self, &review).await
    }

    async fn product_reviews(&self, product_id: &str) -> ApiResult<Vec<Review>> {
        reviews::product_reviews(self, product_id).await
    }

    async fn product_rating(&self, product_id: &str) -> ApiResult<ProductRating> {
        reviews::product_rating(self, product_id).await
    }

    async fn can_review(&self, product_id: &str) -> ApiResult<CanReview> {
        reviews::can_review(self, product_id).await
    }

    async fn my_reviews(&self) -> ApiResult<Vec<Review>> {
        reviews::my_reviews(self).await
    }

    async fn pending_reviews(&self) -> ApiResult<Vec<Review>> {
        reviews::pending_reviews(self).await
    }

    async fn all_reviews(&self) -> ApiResult<Vec<Review>> {
        reviews::all_reviews(self).await
    }

    async fn approve_review(&self, review_id: &str) -> ApiResult<Review> {
        reviews::approve_review(self, review_id).await
    }

    async fn hide_review(&self, review_id: &str) -> ApiResult<Review> {
        reviews::hide_review(self, review_id).await
    }

    async fn delete_review(&self, review_id: &str) -> ApiResult<()> {
        reviews::delete_review(self, review_id).await
    }
}

#[async_trait::async_trait]
impl SupportApi for ApiClient {
    async fn ask_question(&self, question: QuestionCreate) -> ApiResult<Question> {
        questions::ask_question(self, &question).await
    }

    async fn all_questions(&self) -> ApiResult<Vec<Question>> {
        questions::all_questions(self).await
    }

    async fn reply_question(&self, question_id: &str, answer: String) -> ApiResult<Question> {
        questions::reply_question(self, question_id, answer).await
    }

    async fn my_questions(&self) -> ApiResult<Vec<Question>> {
        questions::my_questions(self).await
    }

    async fn chat(&self, message: String) -> ApiResult<ChatReply> {
        chatbot::chat(self, message).await
    }

    async fn chat_authenticated(&self, message: String) -> ApiResult<ChatReply> {
        chatbot::chat_authenticated(self, message).await
    }

    async fn chat_history(&self, limit: u32) -> ApiResult<ChatHistory> {
        chatbot::chat_history(self, limit).await
    }

    async fn clear_chat_history(&self) -> ApiResult<MessageResponse> {
        chatbot::clear_chat_history(self).await
    }

    async fn chat_suggestions(&self) -> ApiResult<ChatSuggestions> {
        chatbot::chat_suggestions(self).await
    }
}

//! # Fake Bakery API
//!
//! An in-memory shop served by axum on an ephemeral port, so integration
//! tests drive the real reqwest client end to end.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use storefront::app::session::MemorySessionStore;
use storefront::config::ClientConfig;
use storefront::Storefront;

pub const CUSTOMER_EMAIL: &str = "alice@example.com";
pub const CUSTOMER_PASSWORD: &str = "secret1";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";

const TIMESTAMP: &str = "2024-05-01T09:00:00";

/// Products per category in the seeded catalog.
pub const SEEDED_CATEGORIES: [(&str, usize); 4] = [
    ("birthday-cakes", 6),
    ("bread-savory", 4),
    ("cookies-minicakes", 3),
    ("beverages", 2),
];

/// Seeded product that cannot be ordered.
pub const UNAVAILABLE_PRODUCT: &str = "p15";

type Failure = (StatusCode, Json<Value>);
type Reply = Result<Json<Value>, Failure>;
type Shared = Arc<Mutex<FakeState>>;

fn fail(status: StatusCode, detail: &str) -> Failure {
    (status, Json(json!({ "detail": detail })))
}

fn not_found(what: &str) -> Failure {
    fail(StatusCode::NOT_FOUND, &format!("{what} not found"))
}

pub struct FakeState {
    /// token -> is_admin
    pub sessions: HashMap<String, bool>,
    issued: u32,
    pub products: Vec<Value>,
    pub cart: Vec<(String, u32)>,
    pub orders: Vec<Value>,
    pub payment_checks: u32,
    /// Payment check on which the gateway reports PAID
    pub paid_after: u32,
    pub ingredients: Vec<Value>,
    pub ledger: HashMap<String, Vec<Value>>,
    pub reviews: Vec<Value>,
    pub chat_history: Vec<Value>,
    /// Favourite product ids, oldest first
    pub favourites: Vec<String>,
    /// Answer the order counters with a 500
    pub fail_stats: bool,
}

impl FakeState {
    fn seeded() -> Self {
        let mut products = Vec::new();
        for (category, count) in SEEDED_CATEGORIES {
            for n in 0..count {
                let id = format!("p{}", products.len() + 1);
                let available = id != UNAVAILABLE_PRODUCT;
                let badge = if n == 0 { Value::from("NEW") } else { Value::Null };
                let price = 4.5 + (products.len() as f64) * 2.0;
                products.push(json!({
                    "id": id,
                    "name": format!("{} {}", category.replace('-', " "), n + 1),
                    "category": category,
                    "price": price,
                    "description": "Baked this morning",
                    "image": format!("/images/{id}.jpg"),
                    "badge": badge,
                    "is_available": available,
                    "created_at": TIMESTAMP,
                    "updated_at": TIMESTAMP
                }));
            }
        }

        let ingredients = vec![
            ingredient("i1", "Flour", 25.0, 10.0, 1.2, "Mill Co"),
            ingredient("i2", "Butter", 12.0, 10.0, 8.5, "Dairy Farm"),
            ingredient("i3", "Sugar", 4.0, 5.0, 1.0, "Sweet Supply"),
        ];

        let reviews = vec![
            review("r1", false, true, "Lovely sponge"),
            review("r2", true, false, "Best bread in town"),
            review("r3", false, false, "Spam spam spam"),
        ];

        Self {
            sessions: HashMap::new(),
            issued: 0,
            products,
            cart: Vec::new(),
            orders: Vec::new(),
            payment_checks: 0,
            paid_after: 2,
            ingredients,
            ledger: HashMap::new(),
            reviews,
            chat_history: Vec::new(),
            favourites: Vec::new(),
            fail_stats: false,
        }
    }

    fn session(&self, headers: &HeaderMap) -> Result<bool, Failure> {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .and_then(|token| self.sessions.get(token).copied())
            .ok_or_else(|| fail(StatusCode::UNAUTHORIZED, "Could not validate credentials"))
    }

    fn admin(&self, headers: &HeaderMap) -> Result<(), Failure> {
        if self.session(headers)? {
            Ok(())
        } else {
            Err(fail(StatusCode::FORBIDDEN, "Not enough permissions"))
        }
    }

    fn product(&self, id: &str) -> Option<&Value> {
        self.products.iter().find(|p| p["id"] == id)
    }

    fn cart_lines(&self) -> Vec<Value> {
        self.cart
            .iter()
            .filter_map(|(product_id, quantity)| {
                let product = self.product(product_id)?;
                Some(json!({
                    "cart_id": format!("c-{product_id}"),
                    "quantity": quantity,
                    "added_at": TIMESTAMP,
                    "product": product
                }))
            })
            .collect()
    }

    fn cart_total(&self) -> Value {
        let (subtotal, items) = self.cart.iter().fold((0.0, 0), |(sum, count), (product_id, quantity)| {
            let price = self
                .product(product_id)
                .and_then(|p| p["price"].as_f64())
                .unwrap_or_default();
            (sum + price * f64::from(*quantity), count + quantity)
        });
        let shipping = if subtotal == 0.0 || subtotal >= 50.0 { 0.0 } else { 5.99 };
        json!({
            "subtotal": subtotal,
            "shipping": shipping,
            "total": ((subtotal + shipping) * 100.0).round() / 100.0,
            "total_items": items
        })
    }
}

fn user(is_admin: bool) -> Value {
    if is_admin {
        json!({
            "id": "u-admin",
            "email": ADMIN_EMAIL,
            "full_name": "Bakery Admin",
            "phone": "0909000000",
            "role": "admin",
            "is_active": true,
            "created_at": TIMESTAMP
        })
    } else {
        json!({
            "id": "u-alice",
            "email": CUSTOMER_EMAIL,
            "full_name": "Alice Baker",
            "phone": "0901234567",
            "role": "user",
            "is_active": true,
            "created_at": TIMESTAMP
        })
    }
}

fn ingredient(id: &str, name: &str, quantity: f64, min_quantity: f64, price: f64, supplier: &str) -> Value {
    let low = quantity < min_quantity;
    json!({
        "id": id,
        "name": name,
        "unit": "kg",
        "price_per_unit": price,
        "quantity": quantity,
        "min_quantity": min_quantity,
        "supplier": supplier,
        "is_active": true,
        "is_low_stock": low,
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

fn review(id: &str, approved: bool, pending: bool, comment: &str) -> Value {
    json!({
        "id": id,
        "user_id": "u-alice",
        "product_id": "p1",
        "rating": 5,
        "comment": comment,
        "is_approved": approved,
        "is_pending": pending,
        "created_at": TIMESTAMP,
        "user_name": "Alice Baker"
    })
}

/// Order placed by the customer for one loaf of `p7`.
pub fn order(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": "u-alice",
        "items": [{ "product_id": "p7", "name": "bread savory 1", "price": 16.5, "quantity": 1 }],
        "total_amount": 16.5,
        "shipping_address": "12 Baker Street",
        "phone": "0901234567",
        "note": null,
        "payment_method": "cod",
        "payment_status": if status == "paid" { "paid" } else { "unpaid" },
        "status": status,
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

const ORDER_STATUSES: [&str; 6] = ["pending", "paid", "confirmed", "shipping", "delivered", "cancelled"];

fn message(text: &str) -> Json<Value> {
    Json(json!({ "message": text }))
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let is_admin = match (body["email"].as_str(), body["password"].as_str()) {
        (Some(CUSTOMER_EMAIL), Some(CUSTOMER_PASSWORD)) => false,
        (Some(ADMIN_EMAIL), Some(ADMIN_PASSWORD)) => true,
        _ => return Err(fail(StatusCode::UNAUTHORIZED, "Incorrect email or password")),
    };
    let mut state = state.lock();
    state.issued += 1;
    let token = format!("token-{}", state.issued);
    state.sessions.insert(token.clone(), is_admin);
    Ok(Json(json!({
        "access_token": token,
        "token_type": "bearer",
        "user": user(is_admin)
    })))
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let is_admin = state.lock().session(&headers)?;
    Ok(Json(user(is_admin)))
}

async fn list_products(State(state): State<Shared>) -> Json<Value> {
    Json(Value::from(state.lock().products.clone()))
}

async fn get_product(State(state): State<Shared>, Path(id): Path<String>) -> Reply {
    state
        .lock()
        .product(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Product"))
}

async fn get_cart(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let state = state.lock();
    state.session(&headers)?;
    Ok(Json(Value::from(state.cart_lines())))
}

async fn get_cart_total(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let state = state.lock();
    state.session(&headers)?;
    Ok(Json(state.cart_total()))
}

async fn add_to_cart(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    let product = state.product(&product_id).ok_or_else(|| not_found("Product"))?;
    if product["is_available"] == false {
        return Err(fail(StatusCode::BAD_REQUEST, "Product is not available"));
    }

    let quantity = body["quantity"].as_u64().unwrap_or(1) as u32;
    let total = match state.cart.iter_mut().find(|(id, _)| *id == product_id) {
        Some((_, existing)) => {
            *existing += quantity;
            *existing
        }
        None => {
            state.cart.push((product_id.clone(), quantity));
            quantity
        }
    };
    Ok(Json(json!({
        "message": "Added to cart",
        "cart_id": format!("c-{product_id}"),
        "quantity": total
    })))
}

async fn update_cart(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    let quantity = body["quantity"].as_u64().unwrap_or(0) as u32;
    let position = state
        .cart
        .iter()
        .position(|(id, _)| *id == product_id)
        .ok_or_else(|| not_found("Cart item"))?;
    if quantity == 0 {
        state.cart.remove(position);
    } else {
        state.cart[position].1 = quantity;
    }
    Ok(message("Cart updated"))
}

async fn remove_from_cart(State(state): State<Shared>, headers: HeaderMap, Path(product_id): Path<String>) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    let before = state.cart.len();
    state.cart.retain(|(id, _)| *id != product_id);
    if state.cart.len() == before {
        return Err(not_found("Cart item"));
    }
    Ok(message("Removed from cart"))
}

async fn clear_cart(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    state.cart.clear();
    Ok(message("Cart cleared"))
}

async fn create_order(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    let items = body["items"].as_array().cloned().unwrap_or_default();
    if items.is_empty() {
        return Err(fail(StatusCode::BAD_REQUEST, "Order has no items"));
    }
    let total: f64 = items
        .iter()
        .map(|item| item["price"].as_f64().unwrap_or_default() * item["quantity"].as_f64().unwrap_or_default())
        .sum();

    let order = json!({
        "id": format!("o{}", state.orders.len() + 1),
        "user_id": "u-alice",
        "items": items,
        "total_amount": total,
        "shipping_address": body["shipping_address"],
        "phone": body["phone"],
        "note": body["note"],
        "payment_method": body["payment_method"],
        "payment_status": "unpaid",
        "status": "pending",
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    });
    state.orders.push(order.clone());
    Ok(Json(order))
}

async fn my_orders(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let state = state.lock();
    state.session(&headers)?;
    Ok(Json(Value::from(state.orders.clone())))
}

async fn get_order(State(state): State<Shared>, headers: HeaderMap, Path(order_id): Path<String>) -> Reply {
    let state = state.lock();
    state.session(&headers)?;
    state
        .orders
        .iter()
        .find(|o| o["id"] == order_id.as_str())
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Order"))
}

async fn cancel_order(State(state): State<Shared>, headers: HeaderMap, Path(order_id): Path<String>) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    let order = state
        .orders
        .iter_mut()
        .find(|o| o["id"] == order_id.as_str())
        .ok_or_else(|| not_found("Order"))?;
    if order["status"] != "pending" && order["status"] != "paid" {
        return Err(fail(StatusCode::BAD_REQUEST, "Order can no longer be cancelled"));
    }
    order["status"] = Value::from("cancelled");
    Ok(Json(order.clone()))
}

async fn list_orders(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let state = state.lock();
    state.admin(&headers)?;
    let orders: Vec<Value> = state
        .orders
        .iter()
        .filter(|o| params.get("status").map_or(true, |status| o["status"] == status.as_str()))
        .cloned()
        .collect();
    Ok(Json(Value::from(orders)))
}

async fn update_order_status(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let mut state = state.lock();
    state.admin(&headers)?;
    let status = body["status"].as_str().unwrap_or_default().to_string();
    if !ORDER_STATUSES.contains(&status.as_str()) {
        return Err(fail(StatusCode::BAD_REQUEST, "Invalid status"));
    }
    let order = state
        .orders
        .iter_mut()
        .find(|o| o["id"] == order_id.as_str())
        .ok_or_else(|| not_found("Order"))?;
    order["status"] = Value::from(status);
    Ok(Json(order.clone()))
}

async fn order_stats(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let state = state.lock();
    state.admin(&headers)?;
    if state.fail_stats {
        return Err(fail(StatusCode::INTERNAL_SERVER_ERROR, "stats offline"));
    }
    let mut stats = json!({ "total": state.orders.len() });
    for status in ORDER_STATUSES {
        stats[status] = Value::from(state.orders.iter().filter(|o| o["status"] == status).count());
    }
    Ok(Json(stats))
}

async fn create_payment_link(State(state): State<Shared>, headers: HeaderMap, Path(order_id): Path<String>) -> Reply {
    let state = state.lock();
    state.session(&headers)?;
    let order = state
        .orders
        .iter()
        .find(|o| o["id"] == order_id.as_str())
        .ok_or_else(|| not_found("Order"))?;
    Ok(Json(json!({
        "order_id": order_id,
        "order_code": 100_000 + state.orders.len(),
        "payment_url": format!("https://pay.example.com/{order_id}"),
        "qr_code": "00020101021238570010A000000727",
        "amount": order["total_amount"]
    })))
}

async fn check_payment(State(state): State<Shared>, headers: HeaderMap, Path(order_id): Path<String>) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    state.payment_checks += 1;
    let paid = state.payment_checks >= state.paid_after;
    let order = state
        .orders
        .iter_mut()
        .find(|o| o["id"] == order_id.as_str())
        .ok_or_else(|| not_found("Order"))?;
    if paid {
        order["payment_status"] = Value::from("paid");
        order["status"] = Value::from("paid");
    }
    let payos_status = if paid { "PAID" } else { "PENDING" };
    Ok(Json(json!({
        "order_id": order_id,
        "payment_status": order["payment_status"],
        "payos_status": payos_status
    })))
}

async fn list_ingredients(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let state = state.lock();
    state.admin(&headers)?;
    Ok(Json(Value::from(state.ingredients.clone())))
}

async fn move_stock(
    state: Shared,
    headers: HeaderMap,
    id: String,
    body: Value,
    movement: &str,
) -> Reply {
    let mut state = state.lock();
    state.admin(&headers)?;
    let quantity = body["quantity"].as_f64().unwrap_or_default();
    let note = body["note"].as_str().unwrap_or_default().to_string();

    let ingredient = state
        .ingredients
        .iter_mut()
        .find(|i| i["id"] == id.as_str())
        .ok_or_else(|| not_found("Ingredient"))?;
    let before = ingredient["quantity"].as_f64().unwrap_or_default();
    let after = if movement == "import" { before + quantity } else { before - quantity };
    if after < 0.0 {
        return Err(fail(StatusCode::BAD_REQUEST, "Not enough stock"));
    }
    let min_quantity = ingredient["min_quantity"].as_f64().unwrap_or_default();
    ingredient["quantity"] = Value::from(after);
    ingredient["is_low_stock"] = Value::from(after < min_quantity);
    let updated = ingredient.clone();

    let entries = state.ledger.entry(id).or_default();
    entries.push(json!({
        "id": format!("l{}", entries.len() + 1),
        "type": movement,
        "quantity": quantity,
        "before": before,
        "after": after,
        "note": note,
        "created_at": TIMESTAMP
    }));
    Ok(Json(updated))
}

async fn import_stock(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    move_stock(state, headers, id, body, "import").await
}

async fn export_stock(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    move_stock(state, headers, id, body, "export").await
}

async fn stock_history(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let state = state.lock();
    state.admin(&headers)?;
    let mut entries = state.ledger.get(&id).cloned().unwrap_or_default();
    entries.reverse();
    Ok(Json(Value::from(entries)))
}

async fn pending_reviews(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let state = state.lock();
    state.admin(&headers)?;
    let pending: Vec<Value> = state
        .reviews
        .iter()
        .filter(|r| r["is_pending"] == true)
        .cloned()
        .collect();
    Ok(Json(Value::from(pending)))
}

async fn all_reviews(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let state = state.lock();
    state.admin(&headers)?;
    Ok(Json(Value::from(state.reviews.clone())))
}

async fn approve_review(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    let mut state = state.lock();
    state.admin(&headers)?;
    let review = state
        .reviews
        .iter_mut()
        .find(|r| r["id"] == id.as_str())
        .ok_or_else(|| not_found("Review"))?;
    review["is_approved"] = Value::from(true);
    review["is_pending"] = Value::from(false);
    Ok(Json(review.clone()))
}

async fn list_favourites(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let state = state.lock();
    state.session(&headers)?;
    let skip = params.get("skip").and_then(|s| s.parse::<usize>().ok()).unwrap_or(0);
    let limit = params.get("limit").and_then(|l| l.parse::<usize>().ok()).unwrap_or(20);
    let favourites: Vec<Value> = state
        .favourites
        .iter()
        .skip(skip)
        .take(limit)
        .filter_map(|product_id| {
            let product = state.product(product_id)?;
            Some(json!({
                "favourite_id": format!("f-{product_id}"),
                "added_at": TIMESTAMP,
                "product": product
            }))
        })
        .collect();
    Ok(Json(Value::from(favourites)))
}

async fn favourites_count(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let state = state.lock();
    state.session(&headers)?;
    Ok(Json(json!({ "count": state.favourites.len() })))
}

async fn check_favourite(State(state): State<Shared>, headers: HeaderMap, Path(product_id): Path<String>) -> Reply {
    let state = state.lock();
    state.session(&headers)?;
    let is_favourite = state.favourites.contains(&product_id);
    Ok(Json(json!({ "product_id": product_id, "is_favourite": is_favourite })))
}

async fn add_favourite(State(state): State<Shared>, headers: HeaderMap, Path(product_id): Path<String>) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    state.product(&product_id).ok_or_else(|| not_found("Product"))?;
    if state.favourites.contains(&product_id) {
        return Err(fail(StatusCode::BAD_REQUEST, "Product already in favourites"));
    }
    state.favourites.push(product_id.clone());
    Ok(Json(json!({
        "message": "Added to favourites",
        "product_id": product_id,
        "is_favourite": true
    })))
}

async fn remove_favourite(State(state): State<Shared>, headers: HeaderMap, Path(product_id): Path<String>) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    let before = state.favourites.len();
    state.favourites.retain(|id| *id != product_id);
    if state.favourites.len() == before {
        return Err(not_found("Favourite"));
    }
    Ok(message("Removed from favourites"))
}

async fn clear_favourites(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    state.favourites.clear();
    Ok(message("Favourites cleared"))
}

fn assistant_reply(text: &str) -> Reply {
    if text.contains("fail") {
        return Err(fail(StatusCode::INTERNAL_SERVER_ERROR, "assistant offline"));
    }
    Ok(Json(json!({
        "response": format!("You asked about: {text}"),
        "intent": "general",
        "source": "rules"
    })))
}

async fn chat(Json(body): Json<Value>) -> Reply {
    assistant_reply(body["message"].as_str().unwrap_or_default())
}

async fn chat_authenticated(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    let text = body["message"].as_str().unwrap_or_default();
    let reply = assistant_reply(text)?;
    state
        .chat_history
        .push(json!({ "role": "user", "content": text, "timestamp": TIMESTAMP }));
    state
        .chat_history
        .push(json!({ "role": "assistant", "content": reply.0["response"], "timestamp": TIMESTAMP }));
    Ok(reply)
}

async fn chat_history(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let state = state.lock();
    state.session(&headers)?;
    let limit = params
        .get("limit")
        .and_then(|l| l.parse::<usize>().ok())
        .unwrap_or(10);
    let skip = state.chat_history.len().saturating_sub(limit);
    Ok(Json(json!({ "messages": state.chat_history[skip..].to_vec() })))
}

async fn clear_chat_history(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let mut state = state.lock();
    state.session(&headers)?;
    state.chat_history.clear();
    Ok(message("Chat history cleared"))
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/products", get(list_products))
        .route("/api/products/{id}", get(get_product))
        .route("/api/cart", get(get_cart).delete(clear_cart))
        .route("/api/cart/total", get(get_cart_total))
        .route(
            "/api/cart/{product_id}",
            post(add_to_cart).put(update_cart).delete(remove_from_cart),
        )
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/me", get(my_orders))
        .route("/api/orders/stats/count", get(order_stats))
        .route("/api/orders/{order_id}", get(get_order))
        .route("/api/orders/{order_id}/status", put(update_order_status))
        .route("/api/orders/{order_id}/cancel", post(cancel_order))
        .route("/api/payments/payos/{order_id}", post(create_payment_link))
        .route("/api/payments/payos/check/{order_id}", get(check_payment))
        .route("/api/ingredients", get(list_ingredients))
        .route("/api/ingredients/{id}/import", post(import_stock))
        .route("/api/ingredients/{id}/export", post(export_stock))
        .route("/api/ingredients/{id}/history", get(stock_history))
        .route("/api/favourites", get(list_favourites).delete(clear_favourites))
        .route("/api/favourites/count", get(favourites_count))
        .route("/api/favourites/check/{product_id}", get(check_favourite))
        .route("/api/favourites/{product_id}", post(add_favourite).delete(remove_favourite))
        .route("/api/reviews/pending", get(pending_reviews))
        .route("/api/reviews/all", get(all_reviews))
        .route("/api/reviews/{id}/approve", post(approve_review))
        .route("/api/chatbot/chat", post(chat))
        .route("/api/chatbot/chat/auth", post(chat_authenticated))
        .route("/api/chatbot/history", get(chat_history).delete(clear_chat_history))
        .with_state(state)
}

/// Running fake API.
pub struct FakeBackend {
    pub addr: SocketAddr,
    pub state: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(FakeState::seeded()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind should succeed in test");
        let addr = listener.local_addr().expect("local addr should succeed in test");

        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake backend should keep serving");
        });

        Self { addr, state }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            api_url: format!("http://{}", self.addr),
            timeout_secs: 5,
            payment_poll_secs: 1,
            ..ClientConfig::default()
        }
    }

    /// Storefront with an empty in-memory session.
    pub fn storefront(&self) -> Storefront {
        Storefront::new(self.config(), Arc::new(MemorySessionStore::new()))
    }

    /// Storefront logged in as the customer.
    pub async fn customer(&self) -> Storefront {
        let app = self.storefront();
        app.start().await;
        app.login(CUSTOMER_EMAIL, CUSTOMER_PASSWORD)
            .await
            .expect("customer login should succeed in test");
        app.toasts.drain();
        app
    }

    /// Storefront logged in as the administrator.
    pub async fn admin(&self) -> Storefront {
        let app = self.storefront();
        app.start().await;
        app.login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("admin login should succeed in test");
        app.toasts.drain();
        app
    }

    /// Forget every issued token, as a server restart with a new secret would.
    pub fn expire_sessions(&self) {
        self.state.lock().sessions.clear();
    }
}

//! In-process fake of the storefront API for integration tests.
//!
//! Serves the same routes and JSON shapes as the real backend from a small
//! fixed catalog. Every request is counted by path, and individual requests
//! can be delayed (keyed by path, or path plus query) to stage races.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use techstore_sdk::client::StoreClient;
use techstore_sdk::storefront::Storefront;

pub const PASSWORD: &str = "secret";
pub const TAKEN_EMAIL: &str = "taken@example.com";

#[derive(Default)]
pub struct Shared {
    hits: Mutex<HashMap<String, usize>>,
    delays: Mutex<HashMap<String, Duration>>,
    reply_delays: Mutex<HashMap<String, Duration>>,
    logged_in: AtomicBool,
    omit_cart_total: AtomicBool,
    fail_chat: AtomicBool,
    cart: Mutex<BTreeMap<u64, u32>>,
    wishlist: Mutex<BTreeSet<u64>>,
    orders: Mutex<Vec<Value>>,
}

pub struct FakeApi {
    pub base_url: String,
    shared: Arc<Shared>,
}

impl FakeApi {
    pub async fn start() -> Self {
        let shared = Arc::new(Shared::default());
        let app = router(shared.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://{}", addr),
            shared,
        }
    }

    pub fn client(&self) -> StoreClient {
        StoreClient::builder().base_url(&self.base_url).build().unwrap()
    }

    pub fn storefront(&self) -> Storefront {
        Storefront::new(self.client())
    }

    /// Requests seen for `path` (query string excluded).
    pub fn hits(&self, path: &str) -> usize {
        self.shared.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.shared.hits.lock().unwrap().values().sum()
    }

    pub fn reset_hits(&self) {
        self.shared.hits.lock().unwrap().clear();
    }

    /// Hold requests to `key` (a path, or path plus query) for `delay`.
    pub fn delay(&self, key: &str, delay: Duration) {
        self.shared.delays.lock().unwrap().insert(key.to_string(), delay);
    }

    /// Answer requests to `key` immediately but hold the response for
    /// `delay`, so the reply reflects server state from before the wait.
    pub fn delay_reply(&self, key: &str, delay: Duration) {
        self.shared
            .reply_delays
            .lock()
            .unwrap()
            .insert(key.to_string(), delay);
    }

    /// Start a server-side session without going through login.
    pub fn set_logged_in(&self, logged_in: bool) {
        self.shared.logged_in.store(logged_in, Ordering::SeqCst);
    }

    pub fn omit_cart_total(&self) {
        self.shared.omit_cart_total.store(true, Ordering::SeqCst);
    }

    pub fn fail_chat(&self) {
        self.shared.fail_chat.store(true, Ordering::SeqCst);
    }

    pub fn seed_cart(&self, lines: &[(u64, u32)]) {
        let mut cart = self.shared.cart.lock().unwrap();
        for (id, qty) in lines {
            cart.insert(*id, *qty);
        }
    }

    pub fn seed_wishlist(&self, ids: &[u64]) {
        self.shared.wishlist.lock().unwrap().extend(ids.iter().copied());
    }

    pub fn wishlist_on_server(&self) -> BTreeSet<u64> {
        self.shared.wishlist.lock().unwrap().clone()
    }

    pub fn cart_on_server(&self) -> BTreeMap<u64, u32> {
        self.shared.cart.lock().unwrap().clone()
    }
}

/// Test log output, once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("techstore_sdk=debug")),
        )
        .with_test_writer()
        .try_init();
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

pub fn catalog() -> Vec<Value> {
    vec![
        json!({
            "id": 1, "name": "Galaxy S24", "category": "Smartphones", "price": 74999,
            "description": "Flagship phone with a 6.2 inch display", "image": "s24.png",
            "on_sale": 1, "specs": {"ram": "8GB", "battery_mah": 4000}, "stock": 12
        }),
        json!({
            "id": 2, "name": "Pixel 8", "category": "Smartphones", "price": 59999,
            "description": "Clean Android", "image": "pixel8.png", "on_sale": 0
        }),
        json!({
            "id": 3, "name": "MacBook Air", "category": "Laptops", "price": 114900,
            "description": "Thin and light", "image": "mba.png", "on_sale": 1
        }),
        json!({
            "id": 5, "name": "Sony WH-1000XM5", "category": "Audio", "price": 29990,
            "description": "Noise cancelling headphones", "image": null, "on_sale": 0
        }),
        json!({
            "id": 42, "name": "USB-C Cable", "category": "Accessories", "price": 499,
            "description": "1m braided cable", "image": "cable.png", "on_sale": 0
        }),
    ]
}

fn product(id: u64) -> Option<Value> {
    catalog().into_iter().find(|p| p["id"].as_u64() == Some(id))
}

fn price_of(id: u64) -> i64 {
    product(id).and_then(|p| p["price"].as_i64()).unwrap_or(0)
}

// ─── Router ──────────────────────────────────────────────────────────────────

fn router(shared: Arc<Shared>) -> Router {
    Router::new()
        .route("/api/auth/check", get(check))
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/update-profile", post(update_profile))
        .route("/api/products", get(all_products))
        .route("/api/products/search", get(search))
        .route("/api/products/category/{category}", get(by_category))
        .route("/api/products/{id}", get(one_product))
        .route("/api/deals", get(deals))
        .route("/api/cart", get(cart_items))
        .route("/api/cart/add/{id}", post(cart_add))
        .route("/api/cart/remove/{id}", post(cart_remove))
        .route("/api/cart/update/{id}", post(cart_update))
        .route("/api/cart/clear", post(cart_clear))
        .route("/api/wishlist", get(wishlist_items))
        .route("/api/wishlist/add/{id}", post(wishlist_add))
        .route("/api/wishlist/remove/{id}", post(wishlist_remove))
        .route("/api/orders", get(orders).post(place_order))
        .route("/api/orders/{id}", get(order_detail))
        .route("/api/chatbot", post(chatbot))
        .layer(middleware::from_fn_with_state(shared.clone(), record))
        .with_state(shared)
}

async fn record(State(shared): State<Arc<Shared>>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let full = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());
    *shared.hits.lock().unwrap().entry(path.clone()).or_default() += 1;

    let delay = {
        let delays = shared.delays.lock().unwrap();
        delays.get(&full).or_else(|| delays.get(&path)).copied()
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let reply_delay = {
        let delays = shared.reply_delays.lock().unwrap();
        delays.get(&full).or_else(|| delays.get(&path)).copied()
    };
    let response = next.run(req).await;
    if let Some(delay) = reply_delay {
        tokio::time::sleep(delay).await;
    }
    response
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn login_required(shared: &Shared) -> Result<(), Response> {
    if shared.logged_in.load(Ordering::SeqCst) {
        Ok(())
    } else {
        Err(error(StatusCode::UNAUTHORIZED, "Please login first"))
    }
}

fn user() -> Value {
    json!({
        "id": 1, "name": "Asha Rao", "email": "asha@example.com",
        "phone": "9876543210", "address": "12 MG Road", "pincode": "560001"
    })
}

fn counts(shared: &Shared) -> (usize, usize) {
    (
        shared.cart.lock().unwrap().len(),
        shared.wishlist.lock().unwrap().len(),
    )
}

// ─── Auth ────────────────────────────────────────────────────────────────────

async fn check(State(shared): State<Arc<Shared>>) -> Json<Value> {
    if !shared.logged_in.load(Ordering::SeqCst) {
        return Json(json!({ "logged_in": false }));
    }
    let (cart, wishlist) = counts(&shared);
    let mut user = user();
    user.as_object_mut().unwrap().remove("id");
    Json(json!({
        "logged_in": true, "user": user,
        "cart_count": cart, "wishlist_count": wishlist
    }))
}

#[derive(Deserialize)]
struct LoginBody {
    identifier: String,
    password: String,
}

async fn login(State(shared): State<Arc<Shared>>, Json(body): Json<LoginBody>) -> Response {
    if body.password != PASSWORD || body.identifier.is_empty() {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    shared.logged_in.store(true, Ordering::SeqCst);
    let (cart, wishlist) = counts(&shared);
    Json(json!({
        "success": true, "user": user(),
        "cart_count": cart, "wishlist_count": wishlist
    }))
    .into_response()
}

async fn register(State(shared): State<Arc<Shared>>, Json(body): Json<Value>) -> Response {
    if body["email"] == TAKEN_EMAIL {
        return error(StatusCode::BAD_REQUEST, "Email already registered");
    }
    shared.logged_in.store(true, Ordering::SeqCst);
    Json(json!({
        "success": true,
        "user": {
            "id": 2, "full_name": body["full_name"], "email": body["email"],
            "phone": body["phone"], "address": body["address"], "pincode": body["pincode"]
        }
    }))
    .into_response()
}

async fn logout(State(shared): State<Arc<Shared>>) -> Json<Value> {
    shared.logged_in.store(false, Ordering::SeqCst);
    Json(json!({ "success": true }))
}

async fn update_profile(State(shared): State<Arc<Shared>>, Json(_body): Json<Value>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    Json(json!({ "success": true })).into_response()
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

async fn all_products() -> Json<Value> {
    Json(Value::Array(catalog()))
}

async fn one_product(Path(id): Path<u64>) -> Response {
    match product(id) {
        Some(p) => Json(p).into_response(),
        None => error(StatusCode::NOT_FOUND, "Product not found"),
    }
}

async fn by_category(Path(category): Path<String>) -> Json<Value> {
    let products: Vec<Value> = catalog()
        .into_iter()
        .filter(|p| p["category"] == category.as_str())
        .collect();
    Json(Value::Array(products))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let q = params.get("q").map(|q| q.to_lowercase()).unwrap_or_default();
    let products: Vec<Value> = catalog()
        .into_iter()
        .filter(|p| {
            p["name"]
                .as_str()
                .map(|name| name.to_lowercase().contains(&q))
                .unwrap_or(false)
        })
        .collect();
    Json(Value::Array(products))
}

async fn deals() -> Json<Value> {
    let products: Vec<Value> = catalog()
        .into_iter()
        .filter(|p| p["on_sale"] == 1)
        .collect();
    Json(Value::Array(products))
}

// ─── Cart ────────────────────────────────────────────────────────────────────

fn cart_rows(shared: &Shared) -> Vec<Value> {
    shared
        .cart
        .lock()
        .unwrap()
        .iter()
        .filter_map(|(id, qty)| {
            let p = product(*id)?;
            Some(json!({
                "id": id, "product_id": id, "name": p["name"], "category": p["category"],
                "price": p["price"], "quantity": qty, "image": p["image"]
            }))
        })
        .collect()
}

fn cart_snapshot(shared: &Shared) -> Json<Value> {
    let items = cart_rows(shared);
    let subtotal: i64 = shared
        .cart
        .lock()
        .unwrap()
        .iter()
        .map(|(id, qty)| price_of(*id) * i64::from(*qty))
        .sum();
    let mut body = json!({
        "success": true,
        "cart_count": items.len(),
        "cart_items": items,
    });
    if !shared.omit_cart_total.load(Ordering::SeqCst) {
        let shipping = if subtotal > 0 { 99 } else { 0 };
        body["cart_total"] = json!(subtotal + shipping);
    }
    Json(body)
}

async fn cart_items(State(shared): State<Arc<Shared>>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    Json(Value::Array(cart_rows(&shared))).into_response()
}

async fn cart_add(State(shared): State<Arc<Shared>>, Path(id): Path<u64>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    if product(id).is_none() {
        return error(StatusCode::NOT_FOUND, "Product not found");
    }
    let count = {
        let mut cart = shared.cart.lock().unwrap();
        *cart.entry(id).or_insert(0) += 1;
        cart.len()
    };
    Json(json!({ "success": true, "message": "Added to cart", "cart_count": count })).into_response()
}

async fn cart_remove(State(shared): State<Arc<Shared>>, Path(id): Path<u64>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    shared.cart.lock().unwrap().remove(&id);
    cart_snapshot(&shared).into_response()
}

#[derive(Deserialize)]
struct QuantityBody {
    quantity: u32,
}

async fn cart_update(
    State(shared): State<Arc<Shared>>,
    Path(id): Path<u64>,
    Json(body): Json<QuantityBody>,
) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    {
        let mut cart = shared.cart.lock().unwrap();
        if body.quantity == 0 {
            cart.remove(&id);
        } else {
            cart.insert(id, body.quantity);
        }
    }
    cart_snapshot(&shared).into_response()
}

async fn cart_clear(State(shared): State<Arc<Shared>>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    shared.cart.lock().unwrap().clear();
    cart_snapshot(&shared).into_response()
}

// ─── Wishlist ────────────────────────────────────────────────────────────────

async fn wishlist_items(State(shared): State<Arc<Shared>>) -> Json<Value> {
    if !shared.logged_in.load(Ordering::SeqCst) {
        return Json(json!([]));
    }
    let products: Vec<Value> = shared
        .wishlist
        .lock()
        .unwrap()
        .iter()
        .filter_map(|id| product(*id))
        .collect();
    Json(Value::Array(products))
}

async fn wishlist_add(State(shared): State<Arc<Shared>>, Path(id): Path<u64>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    let count = {
        let mut wishlist = shared.wishlist.lock().unwrap();
        wishlist.insert(id);
        wishlist.len()
    };
    Json(json!({ "success": true, "wishlist_count": count })).into_response()
}

async fn wishlist_remove(State(shared): State<Arc<Shared>>, Path(id): Path<u64>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    let count = {
        let mut wishlist = shared.wishlist.lock().unwrap();
        wishlist.remove(&id);
        wishlist.len()
    };
    Json(json!({ "success": true, "wishlist_count": count })).into_response()
}

// ─── Orders ──────────────────────────────────────────────────────────────────

async fn orders(State(shared): State<Arc<Shared>>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    let rows = shared.orders.lock().unwrap().clone();
    Json(Value::Array(rows)).into_response()
}

#[derive(Deserialize)]
struct PlaceOrderBody {
    payment_method: String,
}

async fn place_order(State(shared): State<Arc<Shared>>, Json(body): Json<PlaceOrderBody>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    let lines: Vec<Value> = {
        let cart = shared.cart.lock().unwrap();
        cart.iter()
            .filter_map(|(id, qty)| {
                let p = product(*id)?;
                Some(json!({ "name": p["name"], "quantity": qty, "price": p["price"] }))
            })
            .collect()
    };
    if lines.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Cart is empty");
    }
    let total: i64 = shared
        .cart
        .lock()
        .unwrap()
        .iter()
        .map(|(id, qty)| price_of(*id) * i64::from(*qty))
        .sum::<i64>()
        + 99;

    let order_id = {
        let mut orders = shared.orders.lock().unwrap();
        let row_id = orders.len() + 1;
        let order_id = format!("ORD{:04}", row_id);
        orders.insert(
            0,
            json!({
                "id": row_id,
                "order_id": order_id,
                "products": Value::Array(lines).to_string(),
                "total_amount": total,
                "payment_method": body.payment_method,
                "status": "Processing",
                "created_at": "2026-10-19 10:30:00"
            }),
        );
        order_id
    };
    shared.cart.lock().unwrap().clear();
    Json(json!({ "success": true, "order_id": order_id, "cart_count": 0 })).into_response()
}

async fn order_detail(State(shared): State<Arc<Shared>>, Path(id): Path<u64>) -> Response {
    if let Err(resp) = login_required(&shared) {
        return resp;
    }
    let orders = shared.orders.lock().unwrap();
    let Some(order) = orders.iter().find(|o| o["id"].as_u64() == Some(id)).cloned() else {
        return error(StatusCode::NOT_FOUND, "Order not found");
    };
    let items: Vec<Value> = order["products"]
        .as_str()
        .and_then(|s| serde_json::from_str::<Vec<Value>>(s).ok())
        .unwrap_or_default();
    Json(json!({ "order": order, "items": items })).into_response()
}

// ─── Chat ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChatBody {
    message: String,
}

async fn chatbot(State(shared): State<Arc<Shared>>, Json(body): Json<ChatBody>) -> Response {
    if shared.fail_chat.load(Ordering::SeqCst) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "assistant unavailable");
    }
    Json(json!({ "response": format!("You asked about: {}", body.message) })).into_response()
}

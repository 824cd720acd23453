//! `StoreClient` sub-clients against the fake API.

mod common;

use common::{FakeApi, PASSWORD};

use techstore_sdk::domain::order::{OrderStatus, PaymentMethod};
use techstore_sdk::error::{AuthError, HttpError, StoreError};
use techstore_sdk::shared::{Category, ProductId};

#[tokio::test]
async fn test_catalog_reads() {
    let api = FakeApi::start().await;
    let client = api.client();

    let all = client.catalog().all().await.unwrap();
    assert_eq!(all.len(), 5);

    let phone = client.catalog().get(ProductId::new(1)).await.unwrap();
    assert_eq!(phone.name, "Galaxy S24");
    assert!(phone.on_sale);
    assert_eq!(phone.stock, Some(12));
    assert_eq!(phone.image_url(), "/static/images/products/s24.png");

    let headphones = client.catalog().get(ProductId::new(5)).await.unwrap();
    assert_eq!(headphones.image_url(), "/static/images/products/default.png");

    let laptops = client
        .catalog()
        .by_category(&Category::from("Laptops"))
        .await
        .unwrap();
    assert_eq!(laptops.len(), 1);

    let found = client.catalog().search("  usb-c ").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, ProductId::new(42));
}

#[tokio::test]
async fn test_missing_product_is_api_error() {
    let api = FakeApi::start().await;
    let err = api
        .client()
        .catalog()
        .get(ProductId::new(404))
        .await
        .unwrap_err();
    match err {
        StoreError::Http(HttpError::Api { status, ref message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_cart_requires_session() {
    let api = FakeApi::start().await;
    let err = api.client().cart().items().await.unwrap_err();
    assert_eq!(err.user_message("fallback"), "Please login first");
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_session_lifecycle() {
    let api = FakeApi::start().await;
    let client = api.client();

    assert!(client.auth().check_session().await.unwrap().is_none());

    let session = client.auth().login("asha@example.com", PASSWORD).await.unwrap();
    assert_eq!(session.user.id, Some(1));
    assert_eq!(session.cart_count, 0);

    let probe = client.auth().check_session().await.unwrap().unwrap();
    assert_eq!(probe.user.email, "asha@example.com");
    assert_eq!(probe.user.id, None);

    client.auth().logout().await.unwrap();
    assert!(client.auth().check_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_cart_mutations() {
    let api = FakeApi::start().await;
    api.set_logged_in(true);
    let client = api.client();
    let cart = client.cart();

    let update = cart.add(ProductId::new(42)).await.unwrap();
    assert_eq!(update.cart_count, 1);
    assert!(update.snapshot.is_none());

    let update = cart.update_quantity(ProductId::new(42), 4).await.unwrap();
    let snapshot = update.snapshot.unwrap();
    assert_eq!(snapshot.items[0].quantity, 4);
    assert_eq!(snapshot.items[0].product_id, ProductId::new(42));
    assert_eq!(snapshot.server_total, Some(rust_decimal::Decimal::new(4 * 499 + 99, 0)));

    let update = cart.update_quantity(ProductId::new(42), 0).await.unwrap();
    assert_eq!(update.cart_count, 0);
    assert_eq!(api.hits("/api/cart/remove/42"), 1);
}

#[tokio::test]
async fn test_orders_round_trip() {
    let api = FakeApi::start().await;
    api.set_logged_in(true);
    api.seed_cart(&[(3, 1)]);
    let client = api.client();

    let placed = client.orders().place(PaymentMethod::NetBanking).await.unwrap();
    assert_eq!(placed.order_id, "ORD0001");
    assert_eq!(placed.cart_count, 0);

    let history = client.orders().list().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, OrderStatus::Processing);
    assert_eq!(history[0].payment_method.as_deref(), Some("netbanking"));

    let detail = client.orders().get(1).await.unwrap();
    assert_eq!(detail.lines.len(), 1);
    assert_eq!(detail.lines[0].name, "MacBook Air");

    let err = client.orders().place(PaymentMethod::Cod).await.unwrap_err();
    assert_eq!(err.user_message("Payment failed"), "Cart is empty");
}

#[tokio::test]
async fn test_logout_error_kinds() {
    let err = StoreError::from(AuthError::LogoutRejected);
    assert_eq!(err.user_message("Logout failed"), "Logout failed");
}

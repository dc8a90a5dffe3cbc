//! End-to-end server tests
//!
//! Drive the assembled application (middleware + routes) through the
//! actix-web test harness against an in-memory database.

use crate::auth::AuthService;
use crate::config::Config;
use crate::server::handlers::health_check;
use crate::server::middleware::AuthMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::LogNotifier;
use crate::storage::StorageLayer;
use actix_web::{App, test, web};
use std::sync::Arc;

const SECRET: &str = "Server-Test-Secret-With-32-Chars-OK1";

async fn test_state() -> AppState {
    let mut config = Config::default();
    config.app.auth.jwt_secret = SECRET.to_string();
    config.app.storage.database.url = "sqlite::memory:".to_string();
    config.app.storage.database.max_connections = 1;

    let storage = Arc::new(StorageLayer::new(&config.app.storage).await.unwrap());
    storage.migrate().await.unwrap();

    let auth = AuthService::new(&config.app.auth, storage.clone());
    let notifier = Arc::new(LogNotifier::new(config.app.auth.reset_link_base.clone()));

    AppState::new(config, auth, storage, notifier)
}

macro_rules! full_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .wrap(AuthMiddleware)
                .route("/health", web::get().to(health_check))
                .configure(routes::inventory::configure_routes)
                .configure(routes::account::configure_routes),
        )
        .await
    };
}

/// Register an account and log in, yielding the issued token
macro_rules! register_and_login {
    ($app:expr, $username:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/create-account")
            .set_json(serde_json::json!({
                "username": $username,
                "email": $email,
                "password": "StrongPass123!"
            }))
            .to_request();
        let res = test::call_service($app, req).await;
        assert_eq!(res.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({
                "username": $username,
                "password": "StrongPass123!"
            }))
            .to_request();
        let res = test::call_service($app, req).await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        body["data"]["token"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_health_is_open() {
    let app = full_app!(test_state().await);

    let req = test::TestRequest::get().uri("/health").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 200);
}

#[actix_web::test]
async fn test_account_lifecycle() {
    let app = full_app!(test_state().await);

    let token = register_and_login!(&app, "alice", "alice@example.com");

    // The token authenticates the auth check endpoint
    let req = test::TestRequest::get()
        .uri("/api/check-auth")
        .insert_header(("token", token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["email"], "alice@example.com");

    // Without a token the same endpoint rejects
    let req = test::TestRequest::get().uri("/api/check-auth").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 401);
}

#[actix_web::test]
async fn test_login_rejects_wrong_password() {
    let app = full_app!(test_state().await);

    register_and_login!(&app, "alice", "alice@example.com");

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(serde_json::json!({
            "username": "alice",
            "password": "WrongPass123!"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 401);
}

#[actix_web::test]
async fn test_duplicate_username_rejected() {
    let app = full_app!(test_state().await);

    register_and_login!(&app, "alice", "alice@example.com");

    let req = test::TestRequest::post()
        .uri("/api/create-account")
        .set_json(serde_json::json!({
            "username": "alice",
            "email": "second@example.com",
            "password": "StrongPass123!"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 400);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Username already exists");
}

#[actix_web::test]
async fn test_forgot_password_unknown_email() {
    let app = full_app!(test_state().await);

    let req = test::TestRequest::post()
        .uri("/api/forgot-password")
        .set_json(serde_json::json!({ "email": "nobody@example.com" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 400);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Email not found");
}

#[actix_web::test]
async fn test_inventory_flow_scoped_per_user() {
    let app = full_app!(test_state().await);

    let alice = register_and_login!(&app, "alice", "alice@example.com");
    let bob = register_and_login!(&app, "bob", "bob@example.com");

    // Alice creates a category and a tag
    let req = test::TestRequest::post()
        .uri("/api/inventory/create-category")
        .insert_header(("token", alice.clone()))
        .set_json(serde_json::json!({ "name": "Bundles" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = test::read_body_json(res).await;
    let category_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/inventory/create-tag")
        .insert_header(("token", alice.clone()))
        .set_json(serde_json::json!({
            "name": "fragile",
            "img": "https://img.example.com/fragile.png"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = test::read_body_json(res).await;
    let tag_id = body["data"]["id"].as_i64().unwrap();

    // Alice creates an item referencing both
    let req = test::TestRequest::post()
        .uri("/api/inventory/create-item")
        .insert_header(("token", alice.clone()))
        .set_json(serde_json::json!({
            "sku": "ETSY-FOREST",
            "name": "Etsy Bundle Pack",
            "category": category_id,
            "tags": [tag_id],
            "in_stock": 100,
            "available_stock": 88
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    // Alice sees her item, with category and tags embedded
    let req = test::TestRequest::get()
        .uri("/api/inventory/list")
        .insert_header(("token", alice.clone()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = test::read_body_json(res).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["sku"], "ETSY-FOREST");
    assert_eq!(items[0]["category"]["name"], "Bundles");
    assert_eq!(items[0]["tags"][0]["name"], "fragile");

    // Bob's listing does not contain Alice's item
    let req = test::TestRequest::get()
        .uri("/api/inventory/list")
        .insert_header(("token", bob))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["pagination"]["total"], 0);
}

#[actix_web::test]
async fn test_create_item_rejects_negative_stock() {
    let app = full_app!(test_state().await);
    let token = register_and_login!(&app, "alice", "alice@example.com");

    let req = test::TestRequest::post()
        .uri("/api/inventory/create-item")
        .insert_header(("token", token))
        .set_json(serde_json::json!({
            "sku": "NEG-1",
            "name": "Negative",
            "category": 1,
            "tags": [],
            "in_stock": -5,
            "available_stock": 0
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 400);
}

#[actix_web::test]
async fn test_inventory_requires_token() {
    let app = full_app!(test_state().await);

    let req = test::TestRequest::get()
        .uri("/api/inventory/list")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 401);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["code"], 401);
    assert_eq!(body["message"], "Please provide Token");
}

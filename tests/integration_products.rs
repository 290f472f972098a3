mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{auth_token_for, create_test_user, generate_unique_email, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn post_json(uri: &str, token: Option<&str>, payload: &serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_product_requires_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .oneshot(post_json(
            "/api/products",
            None,
            &json!({"name": "Widget", "price": 9.99}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Unauthorized");
    assert_eq!(body["message"], "Invalid or missing token");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_product_rejects_garbage_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .oneshot(post_json(
            "/api/products",
            Some("not-a-jwt"),
            &json!({"name": "Widget", "price": 9.99}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_product_empty_body_reports_both_fields(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "Password123!").await;
    let token = auth_token_for(user.id, &user.email);

    let app = setup_test_app(pool);
    let response = app
        .oneshot(post_json("/api/products", Some(&token), &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["error"], "Bad Request");

    let issues = body["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["field"], "name");
    assert_eq!(issues[1]["field"], "price");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_product_rejects_wrong_primitive_kinds(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "Password123!").await;
    let token = auth_token_for(user.id, &user.email);

    let app = setup_test_app(pool);
    let response = app
        .oneshot(post_json(
            "/api/products",
            Some(&token),
            &json!({"name": 42, "price": "free"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;

    let issues = body["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["message"], "name must be a string");
    assert_eq!(issues[1]["message"], "price must be a number");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_product_success(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "Password123!").await;
    let token = auth_token_for(user.id, &user.email);

    let app = setup_test_app(pool);
    let response = app
        .oneshot(post_json(
            "/api/products",
            Some(&token),
            &json!({"name": "A new awesome product", "price": 150.5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;

    assert_eq!(body["name"], "A new awesome product");
    assert_eq!(body["price"], 150.5);
    assert_eq!(body["ownerId"], user.id);
    assert_eq!(body["content"], serde_json::Value::Null);
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
    assert!(body.get("owner_id").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_product_for_deleted_owner_is_404(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "Password123!").await;
    let token = auth_token_for(user.id, &user.email);

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool);
    let response = app
        .oneshot(post_json(
            "/api/products",
            Some(&token),
            &json!({"name": "Orphan", "price": 1.0}),
        ))
        .await
        .unwrap();

    // Foreign-key violation: the referenced owner no longer exists.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not Found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_products(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "Password123!").await;
    let token = auth_token_for(user.id, &user.email);

    let app = setup_test_app(pool.clone());
    app.oneshot(post_json(
        "/api/products",
        Some(&token),
        &json!({"name": "Widget", "price": 9.99, "content": "A widget"}),
    ))
    .await
    .unwrap();

    let app = setup_test_app(pool);
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Widget");
    assert_eq!(products[0]["content"], "A widget");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_product_by_id(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "Password123!").await;
    let token = auth_token_for(user.id, &user.email);

    let app = setup_test_app(pool.clone());
    let created = app
        .oneshot(post_json(
            "/api/products",
            Some(&token),
            &json!({"name": "Widget", "price": 9.99}),
        ))
        .await
        .unwrap();
    let created = body_json(created).await;
    let id = created["id"].as_i64().unwrap();

    let app = setup_test_app(pool);
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/products/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Widget");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_missing_product_is_404(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/products/999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Resource not found");
}

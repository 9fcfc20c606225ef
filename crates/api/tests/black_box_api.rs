use chrono::Duration;
use reqwest::StatusCode;
use serde_json::json;

use wishkeep_api::app::{AppConfig, build_app};
use wishkeep_auth::{PasswordHasher, TokenService};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with_validity(Duration::hours(1)).await
    }

    /// Build the app (same router as prod) on an ephemeral port, with
    /// in-memory stores and the minimum bcrypt cost.
    async fn spawn_with_validity(validity: Duration) -> Self {
        let config = AppConfig {
            jwt_secret: "test-secret".to_string(),
            token_validity: validity,
            database_url: None,
            password_hasher: PasswordHasher::with_cost(4),
        };
        let app = build_app(config).await;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn register(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    email: &str,
    password: &str,
) -> (StatusCode, serde_json::Value) {
    let res = client
        .post(format!("{base_url}/api/auth/register"))
        .json(&json!({
            "name": name,
            "gender": "OTHER",
            "email": email,
            "password": password,
        }))
        .send()
        .await
        .unwrap();

    let status = res.status();
    (status, res.json().await.unwrap())
}

async fn register_ok(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    email: &str,
    password: &str,
) -> String {
    let (status, body) = register(client, base_url, name, email, password).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn wishlist_requires_an_established_identity() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/wishlist", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "missing_token");

    let res = client
        .get(format!("{}/api/whoami", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn registration_returns_a_usable_token() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let token = register_ok(&client, &srv.base_url, "A", "a@x.com", "p1").await;

    let res = client
        .get(format!("{}/api/whoami", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["subject"], "a@x.com");
    assert_eq!(body["authorities"], json!(["USER"]));
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register_ok(&client, &srv.base_url, "A", "a@x.com", "p1").await;

    let (status, body) = register(&client, &srv.base_url, "A2", "a@x.com", "p2").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "duplicate_email");
}

#[tokio::test]
async fn authenticate_verifies_credentials() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register_ok(&client, &srv.base_url, "A", "a@x.com", "p1").await;

    let res = client
        .post(format!("{}/api/auth/authenticate", srv.base_url))
        .json(&json!({ "email": "a@x.com", "password": "p1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["token"].as_str().is_some());

    for (email, password) in [("a@x.com", "wrong"), ("nobody@x.com", "p1")] {
        let res = client
            .post(format!("{}/api/auth/authenticate", srv.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invalid_credentials");
    }
}

#[tokio::test]
async fn full_wishlist_scenario() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let token_a = register_ok(&client, &srv.base_url, "A", "a@x.com", "p1").await;
    let token_b = register_ok(&client, &srv.base_url, "B", "b@x.com", "p2").await;

    // A adds one item.
    let res = client
        .post(format!("{}/api/wishlist/add", srv.base_url))
        .bearer_auth(&token_a)
        .json(&json!({ "item_name": "Book" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    let item_id = created["id"].as_str().unwrap().to_string();

    // A sees exactly that item.
    let res = client
        .get(format!("{}/api/wishlist", srv.base_url))
        .bearer_auth(&token_a)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed: serde_json::Value = res.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["item_name"], "Book");

    // B may not delete A's item.
    let res = client
        .delete(format!("{}/api/wishlist/delete/{item_id}", srv.base_url))
        .bearer_auth(&token_b)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unauthorized_delete");

    // Unknown ids and malformed ids are their own failures.
    let res = client
        .delete(format!(
            "{}/api/wishlist/delete/{}",
            srv.base_url,
            uuid::Uuid::now_v7()
        ))
        .bearer_auth(&token_a)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "item_not_found");

    let res = client
        .delete(format!("{}/api/wishlist/delete/not-a-uuid", srv.base_url))
        .bearer_auth(&token_a)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // A deletes the item; the wishlist then reports empty as an error.
    let res = client
        .delete(format!("{}/api/wishlist/delete/{item_id}", srv.base_url))
        .bearer_auth(&token_a)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/api/wishlist", srv.base_url))
        .bearer_auth(&token_a)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "empty_wishlist");
}

#[tokio::test]
async fn expired_token_is_unauthenticated_not_an_error() {
    // A validity window entirely in the past: every token is born expired.
    let srv = TestServer::spawn_with_validity(Duration::hours(-1)).await;
    let client = reqwest::Client::new();

    let token = register_ok(&client, &srv.base_url, "A", "a@x.com", "p1").await;

    let res = client
        .get(format!("{}/api/wishlist", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "missing_token");
}

#[tokio::test]
async fn foreign_signed_token_is_unauthenticated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register_ok(&client, &srv.base_url, "A", "a@x.com", "p1").await;

    // Valid structure, real subject, wrong signing key.
    let forged = TokenService::new(b"other-secret", Duration::hours(1))
        .issue("a@x.com")
        .unwrap();

    let res = client
        .get(format!("{}/api/wishlist", srv.base_url))
        .bearer_auth(&forged)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "missing_token");
}

#[tokio::test]
async fn malformed_authorization_headers_are_unauthenticated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for header in ["Bearer garbage", "Bearer ", "Token abc", "abc"] {
        let res = client
            .get(format!("{}/api/wishlist", srv.base_url))
            .header(reqwest::header::AUTHORIZATION, header)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "header: {header}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "missing_token");
    }
}

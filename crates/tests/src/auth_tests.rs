use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn register_creates_user_and_returns_tokens() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&serde_json::json!({
            "name": "Alice",
            "email": "alice@test.com",
            "password": "password123",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 201);

    let json: Value = resp.json().await.unwrap();
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["name"], "Alice");
    assert_eq!(json["user"]["email"], "alice@test.com");
    assert_eq!(json["user"]["role"], "USER");
    assert_eq!(json["user"]["plan"], "FREE");
}

#[tokio::test]
async fn register_with_duplicate_email_conflicts() {
    let app = TestApp::spawn().await;
    app.register_user("Bob", "bob@test.com", "password123").await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&serde_json::json!({
            "name": "Bob Again",
            "email": "bob@test.com",
            "password": "password123",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 409);
}

#[tokio::test]
async fn register_rejects_short_password() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&serde_json::json!({
            "name": "Carol",
            "email": "carol@test.com",
            "password": "12345",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::spawn().await;
    app.register_user("Dave", "dave@test.com", "password123").await;

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({
            "email": "dave@test.com",
            "password": "wrong-password",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test]
async fn me_returns_current_user() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Eve", "eve@test.com", "password123").await;

    let resp = app
        .auth_get("/api/auth/me", &user.access_token)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["id"], user.id);
    assert_eq!(json["email"], "eve@test.com");
}

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    // Fresh client with no cookies and no auth header
    let resp = reqwest::Client::new()
        .get(app.url("/api/auth/me"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test]
async fn login_sets_cookie_usable_without_header() {
    let app = TestApp::spawn().await;
    app.register_user("Frank", "frank@test.com", "password123").await;

    // The fixture client stores cookies, so a plain GET rides the
    // access_token cookie set by login.
    let resp = app.client.get(app.url("/api/auth/me")).send().await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["email"], "frank@test.com");
}

#[tokio::test]
async fn refresh_issues_new_tokens() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Grace", "grace@test.com", "password123").await;

    let resp = app
        .client
        .post(app.url("/api/auth/refresh"))
        .json(&serde_json::json!({ "refresh_token": user.refresh_token }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["email"], "grace@test.com");
}

#[tokio::test]
async fn refresh_rejects_access_token() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Heidi", "heidi@test.com", "password123").await;

    let resp = app
        .client
        .post(app.url("/api/auth/refresh"))
        .json(&serde_json::json!({ "refresh_token": user.access_token }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_clears_cookie() {
    let app = TestApp::spawn().await;
    app.register_user("Ivan", "ivan@test.com", "password123").await;

    let resp = app
        .client
        .post(app.url("/api/auth/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    // Cookie is gone; no header either
    let resp = app.client.get(app.url("/api/auth/me")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 401);
}

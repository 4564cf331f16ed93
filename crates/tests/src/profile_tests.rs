use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn profile_includes_invitation_count() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Budi", "budi@test.com", "password123").await;
    app.create_invitation(&user.access_token, "Budi", "Ani", false)
        .await;

    let resp = app
        .auth_get("/api/profile", &user.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["name"], "Budi");
    assert_eq!(json["invitation_count"], 1);
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn update_changes_name_and_email() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Cici", "cici@test.com", "password123").await;

    let resp = app
        .auth_put("/api/profile", &user.access_token)
        .json(&serde_json::json!({
            "name": "Cici Baru",
            "email": "cici.baru@test.com",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .auth_get("/api/profile", &user.access_token)
        .send()
        .await
        .unwrap();
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["name"], "Cici Baru");
    assert_eq!(json["email"], "cici.baru@test.com");
}

#[tokio::test]
async fn photo_only_update_leaves_the_rest_alone() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Dian", "dian@test.com", "password123").await;

    let resp = app
        .auth_put("/api/profile", &user.access_token)
        .json(&serde_json::json!({ "profile_image": "/uploads/me.jpg" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .auth_get("/api/profile", &user.access_token)
        .send()
        .await
        .unwrap();
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["profile_image"], "/uploads/me.jpg");
    assert_eq!(json["name"], "Dian");
    assert_eq!(json["email"], "dian@test.com");
}

#[tokio::test]
async fn update_without_name_or_email_is_rejected() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Eka", "eka@test.com", "password123").await;

    let resp = app
        .auth_put("/api/profile", &user.access_token)
        .json(&serde_json::json!({ "name": "", "email": "eka@test.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn email_collision_is_rejected() {
    let app = TestApp::spawn().await;
    app.register_user("First", "first@test.com", "password123").await;
    let second = app.register_user("Second", "second@test.com", "password123").await;

    let resp = app
        .auth_put("/api/profile", &second.access_token)
        .json(&serde_json::json!({
            "name": "Second",
            "email": "first@test.com",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn password_change_requires_the_current_password() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Fafa", "fafa@test.com", "password123").await;

    // Missing current password
    let resp = app
        .auth_put("/api/profile", &user.access_token)
        .json(&serde_json::json!({
            "name": "Fafa",
            "email": "fafa@test.com",
            "new_password": "newpassword",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    // Wrong current password
    let resp = app
        .auth_put("/api/profile", &user.access_token)
        .json(&serde_json::json!({
            "name": "Fafa",
            "email": "fafa@test.com",
            "current_password": "not-it",
            "new_password": "newpassword",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn password_change_rejects_short_replacement() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Gogo", "gogo@test.com", "password123").await;

    let resp = app
        .auth_put("/api/profile", &user.access_token)
        .json(&serde_json::json!({
            "name": "Gogo",
            "email": "gogo@test.com",
            "current_password": "password123",
            "new_password": "short",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn changed_password_works_on_next_login() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Hani", "hani@test.com", "password123").await;

    let resp = app
        .auth_put("/api/profile", &user.access_token)
        .json(&serde_json::json!({
            "name": "Hani",
            "email": "hani@test.com",
            "current_password": "password123",
            "new_password": "newpassword456",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&serde_json::json!({
            "email": "hani@test.com",
            "password": "password123",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    app.login_user("hani@test.com", "newpassword456").await;
}

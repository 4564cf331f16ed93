use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn non_admin_is_forbidden() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Plain", "plain@test.com", "password123").await;

    let resp = app
        .auth_get("/api/admin/user", &user.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);

    let resp = app
        .auth_put(&format!("/api/admin/user/{}", user.id), &user.access_token)
        .json(&serde_json::json!({ "plan": "PREMIUM" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);
}

#[tokio::test]
async fn admin_lists_users_with_invitation_counts() {
    let app = TestApp::spawn().await;
    let admin = app.register_user("Root", "root@test.com", "password123").await;
    app.make_admin(&admin.id).await;

    let member = app.register_user("Member", "member@test.com", "password123").await;
    app.create_invitation(&member.access_token, "Member", "Partner", false)
        .await;

    let resp = app
        .auth_get("/api/admin/user", &admin.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let users: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(users.len(), 2);

    let member_row = users
        .iter()
        .find(|u| u["email"] == "member@test.com")
        .unwrap();
    assert_eq!(member_row["invitation_count"], 1);
    assert_eq!(member_row["plan"], "FREE");
}

#[tokio::test]
async fn admin_upgrades_a_users_plan() {
    let app = TestApp::spawn().await;
    let admin = app.register_user("Root", "root@test.com", "password123").await;
    app.make_admin(&admin.id).await;
    let member = app.register_user("Member", "member@test.com", "password123").await;

    let resp = app
        .auth_put(&format!("/api/admin/user/{}", member.id), &admin.access_token)
        .json(&serde_json::json!({ "plan": "PREMIUM" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["plan"], "PREMIUM");
    assert_eq!(json["role"], "USER");
}

#[tokio::test]
async fn admin_promotes_and_demotion_takes_effect_immediately() {
    let app = TestApp::spawn().await;
    let admin = app.register_user("Root", "root@test.com", "password123").await;
    app.make_admin(&admin.id).await;
    let member = app.register_user("Member", "member@test.com", "password123").await;

    let resp = app
        .auth_put(&format!("/api/admin/user/{}", member.id), &admin.access_token)
        .json(&serde_json::json!({ "role": "ADMIN" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    // The promoted user's existing token now carries admin powers,
    // since the role is read from the row
    let resp = app
        .auth_get("/api/admin/user", &member.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    // Demote again; the same token loses access without a re-login
    let resp = app
        .auth_put(&format!("/api/admin/user/{}", member.id), &admin.access_token)
        .json(&serde_json::json!({ "role": "USER" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .auth_get("/api/admin/user", &member.access_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);
}

#[tokio::test]
async fn admin_cannot_demote_themselves() {
    let app = TestApp::spawn().await;
    let admin = app.register_user("Root", "root@test.com", "password123").await;
    app.make_admin(&admin.id).await;

    let resp = app
        .auth_put(&format!("/api/admin/user/{}", admin.id), &admin.access_token)
        .json(&serde_json::json!({ "role": "USER" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn update_with_unknown_user_is_not_found() {
    let app = TestApp::spawn().await;
    let admin = app.register_user("Root", "root@test.com", "password123").await;
    app.make_admin(&admin.id).await;

    let resp = app
        .auth_put(
            &format!("/api/admin/user/{}", bson::oid::ObjectId::new().to_hex()),
            &admin.access_token,
        )
        .json(&serde_json::json!({ "plan": "PREMIUM" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

use crate::fixtures::test_app::TestApp;
use bson::doc;
use serde_json::Value;

#[tokio::test]
async fn published_invitation_resolves_by_slug() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Budi", "budi@test.com", "password123").await;
    app.create_invitation(&user.access_token, "Budi", "Ani", true)
        .await;

    let resp = app
        .client
        .get(app.url("/api/public/budi-ani"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["invitation"]["slug"], "budi-ani");
    assert_eq!(json["invitation"]["groom_name"], "Budi");
    assert_eq!(json["guest_name"], "");
    assert_eq!(json["is_free_plan"], true);
    assert!(json["wishes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unpublished_invitation_is_not_found() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Cika", "cika@test.com", "password123").await;
    let inv = app
        .create_invitation(&user.access_token, "Cika", "Dede", false)
        .await;

    let resp = app
        .client
        .get(app.url("/api/public/cika-dede"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    // A miss never counts a view
    let oid = bson::oid::ObjectId::parse_str(inv["id"].as_str().unwrap()).unwrap();
    let doc = app
        .db
        .collection::<bson::Document>("invitations")
        .find_one(doc! { "_id": oid })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(doc.get_i64("view_count").unwrap(), 0);
}

#[tokio::test]
async fn every_fetch_counts_a_view() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Eko", "eko@test.com", "password123").await;
    let inv = app
        .create_invitation(&user.access_token, "Eko", "Fani", true)
        .await;

    for _ in 0..3 {
        let resp = app
            .client
            .get(app.url("/api/public/eko-fani"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
    }

    let oid = bson::oid::ObjectId::parse_str(inv["id"].as_str().unwrap()).unwrap();
    let doc = app
        .db
        .collection::<bson::Document>("invitations")
        .find_one(doc! { "_id": oid })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(doc.get_i64("view_count").unwrap(), 3);
}

#[tokio::test]
async fn guest_name_is_echoed_from_query() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Gani", "gani@test.com", "password123").await;
    app.create_invitation(&user.access_token, "Gani", "Hesti", true)
        .await;

    let resp = app
        .client
        .get(app.url("/api/public/gani-hesti?to=Pak%20Joko"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["guest_name"], "Pak Joko");
}

#[tokio::test]
async fn premium_owner_clears_free_plan_flag() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Ina", "ina@test.com", "password123").await;
    app.create_invitation(&user.access_token, "Ina", "Jaka", true)
        .await;

    let uid = bson::oid::ObjectId::parse_str(&user.id).unwrap();
    app.db
        .collection::<bson::Document>("users")
        .update_one(doc! { "_id": uid }, doc! { "$set": { "plan": "PREMIUM" } })
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url("/api/public/ina-jaka"))
        .send()
        .await
        .unwrap();
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["is_free_plan"], false);
}

#[tokio::test]
async fn public_view_shows_newest_wishes_first() {
    let app = TestApp::spawn().await;
    let user = app.register_user("Koko", "koko@test.com", "password123").await;
    let inv = app
        .create_invitation(&user.access_token, "Koko", "Lani", true)
        .await;
    let inv_id = inv["id"].as_str().unwrap();

    for msg in ["first", "second", "third"] {
        let resp = app
            .client
            .post(app.url("/api/wish"))
            .json(&serde_json::json!({
                "invitation_id": inv_id,
                "guest_name": "Guest",
                "message": msg,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 201);
        // Distinct timestamps so the sort is deterministic
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let resp = app
        .client
        .get(app.url("/api/public/koko-lani"))
        .send()
        .await
        .unwrap();
    let json: Value = resp.json().await.unwrap();
    let wishes = json["wishes"].as_array().unwrap();
    assert_eq!(wishes.len(), 3);
    assert_eq!(wishes[0]["message"], "third");
    assert_eq!(wishes[2]["message"], "first");
}

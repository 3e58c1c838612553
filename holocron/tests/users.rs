mod common;

use common::{create_user, setup};
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_and_get_user() {
    let (app, pool) = setup().await;

    app.post("/users")
        .json(&json!({
            "username": "obiwan",
            "email": "ben@jundland.wastes",
            "password": "hello-there",
        }))
        .send()
        .await
        .assert_ok()
        .assert_json(json!({ "id": 1, "username": "obiwan", "email": "ben@jundland.wastes" }));

    app.get("/users/1")
        .send()
        .await
        .assert_ok()
        .assert_json(json!({ "id": 1, "username": "obiwan", "email": "ben@jundland.wastes" }));

    let stored: String = sqlx::query_scalar(r#"SELECT password FROM "user" WHERE id = 1"#)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(stored.starts_with("$argon2"));
    assert!(!stored.contains("hello-there"));
}

#[tokio::test]
async fn test_list_users_never_exposes_password() {
    let (app, _pool) = setup().await;
    create_user(&app, "han", "han@falcon.space").await;
    create_user(&app, "chewie", "chewie@falcon.space").await;

    let resp = app.get("/users").send().await.assert_ok();
    let users: Vec<Value> = resp.json();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1]["username"], "chewie");
    assert!(users.iter().all(|u| u.get("password").is_none()));
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let (app, _pool) = setup().await;

    app.get("/users/7")
        .send()
        .await
        .assert_not_found()
        .assert_json(json!({ "error": "User not found" }));
    app.get("/users/7/favorites")
        .send()
        .await
        .assert_not_found()
        .assert_json(json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let (app, _pool) = setup().await;
    create_user(&app, "lando", "lando@bespin.gov").await;

    app.post("/users")
        .json(&json!({
            "username": "baron",
            "email": "lando@bespin.gov",
            "password": "cloud-city",
        }))
        .send()
        .await
        .assert_bad_request()
        .assert_json(json!({ "error": "Email already registered" }));
}

#[tokio::test]
async fn test_empty_username_is_rejected() {
    let (app, _pool) = setup().await;

    let resp = app
        .post("/users")
        .json(&json!({ "username": "", "email": "nobody@void", "password": "x" }))
        .send()
        .await
        .assert_bad_request();
    let body: Value = resp.json();
    assert!(body["error"].as_str().unwrap().contains("username"));

    app.get("/users")
        .send()
        .await
        .assert_ok()
        .assert_json(json!([]));
}

#[tokio::test]
async fn test_user_favorites_are_grouped_by_kind() {
    let (app, _pool) = setup().await;
    let yoda = create_user(&app, "yoda", "yoda@dagobah.swamp").await;

    app.post("/favorite/character/1").send().await.assert_ok();
    app.post(&format!("/favorite/character/5?user_id={yoda}"))
        .send()
        .await
        .assert_ok();
    app.post(&format!("/favorite/vehicle/4?user_id={yoda}"))
        .send()
        .await
        .assert_ok();

    app.get(&format!("/users/{yoda}/favorites"))
        .send()
        .await
        .assert_ok()
        .assert_json(json!({
            "characters": [{ "id": 2, "character_id": 5, "user_id": yoda }],
            "planets": [],
            "vehicles": [{ "id": 1, "vehicle_id": 4, "user_id": yoda }],
        }));
}

#[tokio::test]
async fn test_malformed_user_body_is_rejected() {
    let (app, _pool) = setup().await;

    let resp = app
        .post("/users")
        .json(&json!({ "username": "x" }))
        .send()
        .await
        .assert_bad_request();
    let body: Value = resp.json();
    assert!(
        body["error"].as_str().unwrap().contains("missing field `email`"),
        "{body}"
    );

    let resp = app
        .post("/users")
        .body("username=x")
        .send()
        .await
        .assert_bad_request();
    assert!(resp.json::<Value>()["error"].is_string());

    let resp = app.get("/users/luke").send().await.assert_bad_request();
    assert!(resp.json::<Value>()["error"].is_string());
}

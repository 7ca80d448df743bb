use std::net::SocketAddr;

use api::{AppState, build_router};
use reqwest::StatusCode;
use rosary_core::time::fixed_now;
use serde_json::{Value, json};
use services::{AppServices, Clock};

async fn spawn_app() -> (SocketAddr, AppServices) {
    let services = AppServices::in_memory(Clock::fixed(fixed_now()));
    let app = build_router(AppState::from_services(&services));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    (addr, services)
}

fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}{path}")
}

async fn register(client: &reqwest::Client, addr: SocketAddr, name: &str) -> u64 {
    let resp = client
        .post(url(addr, "/api/auth/register"))
        .json(&json!({ "username": name, "password": "ave" }))
        .send()
        .await
        .expect("register");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json");
    body["user"]["id"].as_u64().expect("user id")
}

#[tokio::test]
async fn duplicate_registration_is_rejected_without_new_row() {
    let (addr, services) = spawn_app().await;
    let client = reqwest::Client::new();
    let id = register(&client, addr, "maria").await;
    assert_eq!(id, 1);

    let resp = client
        .post(url(addr, "/api/auth/register"))
        .json(&json!({ "username": "maria", "password": "other" }))
        .send()
        .await
        .expect("register again");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body["message"], "Username already exists");

    // still only the first account can log in
    let err = services.auth().login("maria", "other").await;
    assert!(err.is_err());
    let resp = client
        .post(url(addr, "/api/auth/login"))
        .json(&json!({ "username": "maria", "password": "ave" }))
        .send()
        .await
        .expect("login");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body, json!({ "user": { "id": 1, "username": "maria" } }));
}

#[tokio::test]
async fn login_mismatch_is_unauthorized() {
    let (addr, _) = spawn_app().await;
    let client = reqwest::Client::new();
    register(&client, addr, "jose").await;

    let resp = client
        .post(url(addr, "/api/auth/login"))
        .json(&json!({ "username": "jose", "password": "wrong" }))
        .send()
        .await
        .expect("login");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn prayers_create_list_and_complete() {
    let (addr, _) = spawn_app().await;
    let client = reqwest::Client::new();
    let user_id = register(&client, addr, "ana").await;

    let resp = client
        .post(url(addr, "/api/prayers"))
        .json(&json!({ "userId": user_id, "section": "gaudiosa", "completed": false }))
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = resp.json().await.expect("json");
    assert_eq!(created["section"], "gaudiosa");
    assert_eq!(created["completedAt"], Value::Null);
    let prayer_id = created["id"].as_u64().expect("prayer id");

    let resp = client
        .patch(url(addr, &format!("/api/prayers/{prayer_id}")))
        .json(&json!({ "completed": true }))
        .send()
        .await
        .expect("patch");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("json");
    assert_eq!(updated["completed"], true);
    assert!(updated["completedAt"].is_string());

    let listed: Value = client
        .get(url(addr, &format!("/api/prayers/{user_id}")))
        .send()
        .await
        .expect("list")
        .json()
        .await
        .expect("json");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let resp = client
        .patch(url(addr, "/api/prayers/999"))
        .json(&json!({ "completed": true }))
        .send()
        .await
        .expect("patch missing");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .post(url(addr, "/api/prayers"))
        .json(&json!({ "userId": user_id, "section": "lucis" }))
        .send()
        .await
        .expect("bad section");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_someone_elses_intention_is_not_found() {
    let (addr, _) = spawn_app().await;
    let client = reqwest::Client::new();
    let owner = register(&client, addr, "clara").await;
    let other = register(&client, addr, "luis").await;

    let created: Value = client
        .post(url(addr, "/api/intentions"))
        .json(&json!({ "userId": owner, "text": "  for the sick " }))
        .send()
        .await
        .expect("create")
        .json()
        .await
        .expect("json");
    assert_eq!(created["text"], "for the sick");
    assert_eq!(created["isActive"], true);
    let intention_id = created["id"].as_u64().expect("intention id");

    let resp = client
        .delete(url(addr, &format!("/api/intentions/{intention_id}")))
        .json(&json!({ "userId": other }))
        .send()
        .await
        .expect("delete as other");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body["message"], "Intention not found");

    let listed: Value = client
        .get(url(addr, &format!("/api/intentions/{owner}")))
        .send()
        .await
        .expect("list")
        .json()
        .await
        .expect("json");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let resp = client
        .delete(url(addr, &format!("/api/intentions/{intention_id}")))
        .json(&json!({ "userId": owner }))
        .send()
        .await
        .expect("delete as owner");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn blank_intention_text_is_bad_request() {
    let (addr, _) = spawn_app().await;
    let client = reqwest::Client::new();
    let owner = register(&client, addr, "pio").await;

    let resp = client
        .post(url(addr, "/api/intentions"))
        .json(&json!({ "userId": owner, "text": "   " }))
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn preflight_and_unknown_routes() {
    let (addr, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .request(reqwest::Method::OPTIONS, url(addr, "/api/auth/login"))
        .send()
        .await
        .expect("preflight");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let resp = client
        .get(url(addr, "/api/nowhere"))
        .send()
        .await
        .expect("unknown");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key("access-control-allow-methods"));
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body, json!({ "message": "Not Found" }));
}

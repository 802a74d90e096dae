//! Full-roundtrip tests for the pet API.
//!
//! Starts an axum server on a random port and exercises it with reqwest.
//! Each test gets its own server, so ids always start at 0.

use std::sync::Arc;

use serde_json::json;

use pethappy::api::{self, AppState};
use pethappy::InMemoryPetStore;

/// Bind to port 0 and return the base URL.
async fn start_server() -> String {
    let state = Arc::new(AppState::new(InMemoryPetStore::new()));
    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn create_pet(
    client: &reqwest::Client,
    base: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let resp = client
        .post(format!("{base}/pets"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn health_check() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["pets"], 0);
}

#[tokio::test]
async fn list_starts_empty() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/pets")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "pets": [], "count": 0 }));
}

#[tokio::test]
async fn create_assigns_sequential_ids() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let rex = create_pet(&client, &base, json!({ "nome": "Rex", "raca": "Labrador" })).await;
    let mia = create_pet(&client, &base, json!({ "nome": "Mia", "raca": "Siamese" })).await;

    assert_eq!(rex, json!({ "id": 0, "nome": "Rex", "raca": "Labrador" }));
    assert_eq!(mia, json!({ "id": 1, "nome": "Mia", "raca": "Siamese" }));
}

#[tokio::test]
async fn create_honors_an_explicit_id() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let rex = create_pet(
        &client,
        &base,
        json!({ "id": 42, "nome": "Rex", "raca": "Labrador" }),
    )
    .await;
    assert_eq!(rex["id"], 42);

    // The explicit id did not advance the sequence.
    let mia = create_pet(&client, &base, json!({ "nome": "Mia", "raca": "Siamese" })).await;
    assert_eq!(mia["id"], 0);
}

#[tokio::test]
async fn list_filters_by_breed() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    create_pet(&client, &base, json!({ "nome": "Rex", "raca": "Labrador" })).await;
    create_pet(&client, &base, json!({ "nome": "Mia", "raca": "Siamese" })).await;
    create_pet(&client, &base, json!({ "nome": "Bob", "raca": "Labrador" })).await;

    let resp = client
        .get(format!("{base}/pets?raca=Labrador"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 2);
    assert_eq!(body["pets"][0]["nome"], "Rex");
    assert_eq!(body["pets"][1]["nome"], "Bob");
}

#[tokio::test]
async fn get_pet_by_id() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    create_pet(&client, &base, json!({ "nome": "Rex", "raca": "Labrador" })).await;

    let resp = client.get(format!("{base}/pets/0")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": 0, "nome": "Rex", "raca": "Labrador" }));
}

#[tokio::test]
async fn get_missing_pet_returns_404() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/pets/99")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "pet 99 not found" }));
}

#[tokio::test]
async fn update_merges_named_fields() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    create_pet(&client, &base, json!({ "nome": "Rex", "raca": "Labrador" })).await;

    let resp = client
        .put(format!("{base}/pets/0"))
        .json(&json!({ "raca": "Golden Retriever" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // The name survived the merge.
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "id": 0, "nome": "Rex", "raca": "Golden Retriever" })
    );
}

#[tokio::test]
async fn update_missing_pet_returns_404() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/pets/99"))
        .json(&json!({ "nome": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn update_can_move_a_pet_to_a_new_id() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    create_pet(&client, &base, json!({ "nome": "Rex", "raca": "Labrador" })).await;

    let resp = client
        .put(format!("{base}/pets/0"))
        .json(&json!({ "id": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 9);

    // The old id no longer resolves; the new one does.
    let resp = client.get(format!("{base}/pets/0")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let resp = client.get(format!("{base}/pets/9")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn delete_returns_204_with_no_body() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    create_pet(&client, &base, json!({ "nome": "Rex", "raca": "Labrador" })).await;

    let resp = client
        .delete(format!("{base}/pets/0"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_pet_still_returns_204() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/pets/99"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn deleted_pet_stops_resolving() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    create_pet(&client, &base, json!({ "nome": "Rex", "raca": "Labrador" })).await;
    create_pet(&client, &base, json!({ "nome": "Mia", "raca": "Siamese" })).await;

    let resp = client
        .delete(format!("{base}/pets/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client.get(format!("{base}/pets/1")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    // The other pet is untouched.
    let resp = client.get(format!("{base}/pets")).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["pets"][0]["nome"], "Rex");
}

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use tally_api::app::services::AppServices;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = tally_api::app::build_app(Arc::new(AppServices::in_memory()));
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

fn target_receipt() -> serde_json::Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "Klarbrunn 12PK 12 FL OZ", "price": "12.00" }
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> serde_json::Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}

async fn submit(client: &reqwest::Client, base_url: &str, receipt: &serde_json::Value) -> String {
    let res = client
        .post(format!("{}/receipts/process", base_url))
        .json(receipt)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: serde_json::Value = res.json().await.unwrap();
    body["id"].as_str().expect("response should carry an id").to_string()
}

async fn points(client: &reqwest::Client, base_url: &str, id: &str) -> reqwest::Response {
    client
        .get(format!("{}/receipts/{}/points", base_url, id))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn ping_returns_pong() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/ping", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "pong");
}

#[tokio::test]
async fn reference_receipts_round_trip() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (receipt, expected) in [(target_receipt(), 25), (corner_market_receipt(), 109)] {
        let id = submit(&client, &srv.base_url, &receipt).await;

        let res = points(&client, &srv.base_url, &id).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "points": expected }));
    }
}

#[tokio::test]
async fn content_type_header_is_optional() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/receipts/process", srv.base_url))
        .body(corner_market_receipt().to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn identical_receipts_get_distinct_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let a = submit(&client, &srv.base_url, &target_receipt()).await;
    let b = submit(&client, &srv.base_url, &target_receipt()).await;
    assert_ne!(a, b);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/receipts/process", srv.base_url))
        .header("content-type", "application/json")
        .body("{ \"retailer\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "malformed_receipt");
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn wrongly_typed_price_is_malformed() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut receipt = corner_market_receipt();
    receipt["items"][0]["price"] = json!(2.25);

    let res = client
        .post(format!("{}/receipts/process", srv.base_url))
        .json(&receipt)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "malformed_receipt");
}

#[tokio::test]
async fn invalid_receipts_are_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mutations: Vec<(&str, fn(&mut serde_json::Value))> = vec![
        ("missing retailer", |r| {
            r.as_object_mut().unwrap().remove("retailer");
        }),
        ("null items", |r| r["items"] = serde_json::Value::Null),
        ("empty items", |r| r["items"] = json!([])),
        ("negative total", |r| r["total"] = json!("-9.00")),
        ("bad date", |r| r["purchaseDate"] = json!("2022-02-30")),
        ("bad time", |r| r["purchaseTime"] = json!("25:00")),
        ("empty description", |r| r["items"][1]["shortDescription"] = json!("")),
        ("negative price", |r| r["items"][2]["price"] = json!("-2.25")),
    ];

    for (name, mutate) in mutations {
        let mut receipt = corner_market_receipt();
        mutate(&mut receipt);

        let res = client
            .post(format!("{}/receipts/process", srv.base_url))
            .json(&receipt)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{name}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invalid_receipt", "{name}");
        assert!(body.get("id").is_none(), "{name}");
    }
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Well-formed but never minted, not an id at all, and empty.
    for id in ["0191e3c4-5b6a-7c8d-9e0f-123456789abc", "nope", ""] {
        let res = points(&client, &srv.base_url, id).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{id}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "not_found");
    }
}

#[tokio::test]
async fn unknown_routes_get_json_not_found() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/receipts", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn huge_prices_do_not_break_scoring() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let huge = "9".repeat(300);
    let receipt = json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "abc", "price": &huge },
            { "shortDescription": "xyz", "price": &huge }
        ],
        "total": &huge
    });

    let id = submit(&client, &srv.base_url, &receipt).await;
    let res = points(&client, &srv.base_url, &id).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["points"].as_u64(), Some(u64::MAX));
}

#[tokio::test]
async fn concurrent_submissions_are_all_retrievable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let client = client.clone();
            let base_url = srv.base_url.clone();
            tokio::spawn(async move { submit(&client, &base_url, &corner_market_receipt()).await })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap());
    }

    for id in &ids {
        let res = points(&client, &srv.base_url, id).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["points"], 109);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}

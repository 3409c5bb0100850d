mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};

async fn generate(body: Value) -> (StatusCode, Value) {
    send_json(app(), post_json("/checklist/generate_mock", &body.to_string())).await
}

fn ids(body: &Value) -> Vec<u64> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn no_risks_returns_default_checklist() {
    let (status, body) = generate(json!({ "risks": [], "inputPrice": 200000000 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=9).collect::<Vec<_>>());
    assert_eq!(body["items"][0]["category"], "registry");
    assert_eq!(body["items"][2]["category"], "pre_contract");
    assert_eq!(body["items"][8]["category"], "contract");
}

#[tokio::test]
async fn missing_risks_defaults_to_empty() {
    let (status, body) = generate(json!({ "inputPrice": 1 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).len(), 9);
}

#[tokio::test]
async fn risks_return_generated_items() {
    let (status, body) = generate(json!({
        "risks": [
            { "code": "HIGH_RATIO", "msg": "전세가율이 높습니다.", "severity": "DANGER" },
            { "code": "TRUST", "msg": "신탁 등기가 있습니다." }
        ],
        "inputPrice": 350000000
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
    let categories: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, ["registry", "pre_contract", "site", "contract"]);
    assert!(body["items"]
        .as_array()
        .unwrap()
        .iter()
        .all(|item| item["title"].as_str().unwrap().starts_with("MOCK:")));
}

#[tokio::test]
async fn unknown_risk_code_is_rejected() {
    let (status, body) = generate(json!({
        "risks": [{ "code": "NOT_A_CODE", "msg": "?" }],
        "inputPrice": 1000
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn missing_price_is_rejected() {
    let (status, _) = generate(json!({ "risks": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_positive_price_is_rejected() {
    for price in [0, -1] {
        let (status, body) = generate(json!({ "risks": [], "inputPrice": price })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "inputPrice는 양의 정수여야 합니다." }));
    }
}

#[tokio::test]
async fn wrong_method_is_not_found() {
    let (status, body) = send_json(app(), get("/checklist/generate_mock")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/checklist/generate_mock");
}

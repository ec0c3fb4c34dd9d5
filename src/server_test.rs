//! Tests for `server` routes, driven through the router without a socket.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::server::app;
use crate::types::ParseReport;

async fn post_parse(payload: Value) -> (StatusCode, Vec<u8>) {
  let request = Request::builder()
    .method("POST")
    .uri("/pipelines/parse")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(payload.to_string()))
    .unwrap();
  let response = app().oneshot(request).await.unwrap();
  let status = response.status();
  let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
  (status, body)
}

#[tokio::test]
async fn parse_reports_counts_and_verdict() {
  let (status, body) = post_parse(json!({
    "nodes": [
      {"id": "a", "type": "input"},
      {"id": "b", "type": "output"}
    ],
    "edges": [
      {"id": "e", "source": "a", "target": "b"}
    ]
  }))
  .await;
  assert_eq!(status, StatusCode::OK);
  let report: ParseReport = serde_json::from_slice(&body).unwrap();
  assert_eq!(report.num_nodes, 2);
  assert_eq!(report.num_edges, 1);
  assert!(report.is_dag);
}

#[tokio::test]
async fn parse_flags_a_cycle() {
  let (status, body) = post_parse(json!({
    "nodes": [
      {"id": "a", "type": "llm"},
      {"id": "b", "type": "llm"}
    ],
    "edges": [
      {"id": "e1", "source": "a", "target": "b"},
      {"id": "e2", "source": "b", "target": "a"}
    ]
  }))
  .await;
  assert_eq!(status, StatusCode::OK);
  let report: ParseReport = serde_json::from_slice(&body).unwrap();
  assert!(!report.is_dag);
}

#[tokio::test]
async fn parse_empty_pipeline_is_a_dag() {
  let (status, body) = post_parse(json!({ "nodes": [], "edges": [] })).await;
  assert_eq!(status, StatusCode::OK);
  let report: ParseReport = serde_json::from_slice(&body).unwrap();
  assert_eq!(report.num_nodes, 0);
  assert_eq!(report.num_edges, 0);
  assert!(report.is_dag);
}

#[tokio::test]
async fn malformed_body_is_a_client_error_not_a_report() {
  let request = Request::builder()
    .method("POST")
    .uri("/pipelines/parse")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from("{not json"))
    .unwrap();
  let response = app().oneshot(request).await.unwrap();
  assert!(response.status().is_client_error());
}

#[tokio::test]
async fn root_greets() {
  let request = Request::builder().uri("/").body(Body::empty()).unwrap();
  let response = app().oneshot(request).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let body = response.into_body().collect().await.unwrap().to_bytes();
  let value: Value = serde_json::from_slice(&body).unwrap();
  assert!(value["message"].as_str().unwrap().contains("nodeflow"));
}

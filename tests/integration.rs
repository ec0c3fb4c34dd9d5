//! End-to-end: build a pipeline through the public API, snapshot it, and
//! submit the snapshot to the parse route exactly the way the editor does.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use nodeflow::{ParseReport, Pipeline, catalog, server};
use tower::ServiceExt;

async fn submit(pipeline: &Pipeline) -> ParseReport {
  let payload = serde_json::to_string(pipeline).unwrap();
  let request = Request::builder()
    .method("POST")
    .uri("/pipelines/parse")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(payload))
    .unwrap();
  let response = server::app().oneshot(request).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let body = response.into_body().collect().await.unwrap().to_bytes();
  serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn editing_session_round_trip() {
  let mut pipeline = Pipeline::new();

  // One node of every palette kind, chained input -> ... -> output.
  let ids: Vec<String> = catalog()
    .iter()
    .map(|t| pipeline.add_node(t.kind))
    .collect();
  for pair in ids.windows(2) {
    pipeline.connect(&pair[0], &pair[1]);
  }

  let report = submit(&pipeline).await;
  assert_eq!(report.num_nodes, 9);
  assert_eq!(report.num_edges, 8);
  assert!(report.is_dag);

  // Close the chain into a ring: no longer a DAG.
  let back = pipeline.connect(&ids[ids.len() - 1], &ids[0]);
  let report = submit(&pipeline).await;
  assert!(!report.is_dag);

  // Undo the bad connection, then rip a middle node out; its edges go too.
  pipeline.disconnect(&back);
  pipeline.remove_node(&ids[4]);
  let report = submit(&pipeline).await;
  assert_eq!(report.num_nodes, 8);
  assert_eq!(report.num_edges, 6);
  assert!(report.is_dag);
}

#[tokio::test]
async fn text_node_session_grows_handles_without_affecting_the_verdict() {
  let mut pipeline = Pipeline::new();
  let text = pipeline.add_node("text");
  let out = pipeline.add_node("output");
  pipeline.connect(&text, &out);

  pipeline.set_text(&text, "Dear {{name}}, {{greeting}}");
  let handles = pipeline.input_handles(&text);
  let labels: Vec<&str> = handles.iter().map(|h| h.label.as_str()).collect();
  assert_eq!(labels, vec!["text in", "name", "greeting"]);

  // Dynamic handles are display-only; the submitted graph is unchanged.
  let report = submit(&pipeline).await;
  assert_eq!(report.num_nodes, 2);
  assert_eq!(report.num_edges, 1);
  assert!(report.is_dag);

  // Re-derivation follows the text with no stale state.
  pipeline.set_text(&text, "plain again");
  assert_eq!(pipeline.input_handles(&text).len(), 1);
}

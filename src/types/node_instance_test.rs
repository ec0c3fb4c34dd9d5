//! Tests for `NodeInstance`.

use super::NodeInstance;

#[test]
fn kind_round_trips_as_type() {
  let json = r#"{"id":"n1","type":"llm"}"#;
  let node: NodeInstance = serde_json::from_str(json).unwrap();
  assert_eq!(node.kind, "llm");
  assert!(node.text.is_none());
  assert_eq!(serde_json::to_string(&node).unwrap(), json);
}

#[test]
fn text_is_optional_and_preserved() {
  let node: NodeInstance =
    serde_json::from_str(r#"{"id":"n2","type":"text","text":"{{a}}"}"#).unwrap();
  assert_eq!(node.text_or_empty(), "{{a}}");
}

#[test]
fn text_or_empty_defaults_to_empty() {
  let node = NodeInstance::new("n3", "math");
  assert_eq!(node.text_or_empty(), "");
}

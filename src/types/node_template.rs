//! Static blueprint for a kind of pipeline node.

use serde::Serialize;

use super::Handle;

/// Static blueprint for a kind of pipeline node.
///
/// One template exists per kind tag; the set is closed at process start and
/// never mutated (see `library`). The input/output handle sequences are
/// authoritative for static handles; `text`-kind nodes additionally gain
/// dynamic input handles derived from their content (see `variables`).
#[derive(Debug, Clone, Serialize)]
pub struct NodeTemplate {
  /// Kind tag, e.g. `llm`. Serialized as `type` to match the editor wire shape.
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub title: &'static str,
  pub icon: &'static str,
  /// Accent color for the node header, CSS hex.
  pub accent: &'static str,
  pub description: &'static str,
  pub inputs: Vec<Handle>,
  pub outputs: Vec<Handle>,
  /// One-line hint rendered in the node body, if any.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body_hint: Option<&'static str>,
}

//! A placed node in the working pipeline graph.

use serde::{Deserialize, Serialize};

/// A placed node in the working pipeline graph.
///
/// `kind` is a lookup key into the template library, not an ownership
/// pointer; it may reference a kind the library does not know, and callers
/// must treat that as "skip this node's static handles", never as fatal.
/// `text` is freeform content, only meaningful for `text`-kind nodes but
/// structurally permitted on any node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInstance {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
}

impl NodeInstance {
  pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      kind: kind.into(),
      text: None,
    }
  }

  /// Node text, or `""` when absent.
  pub fn text_or_empty(&self) -> &str {
    self.text.as_deref().unwrap_or("")
  }
}

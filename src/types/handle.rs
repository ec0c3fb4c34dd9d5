//! A named attachment point on a pipeline node.

use serde::{Deserialize, Serialize};

/// Which face of the node a handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleSide {
  Input,
  Output,
}

/// A named attachment point on a pipeline node, either input or output side.
///
/// `tone` is a presentational hint (`"muted"`, `"info"`) and carries no
/// validation semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handle {
  pub id: String,
  pub label: String,
  pub side: HandleSide,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tone: Option<String>,
}

impl Handle {
  pub fn input(id: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      label: label.into(),
      side: HandleSide::Input,
      tone: None,
    }
  }

  pub fn output(id: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      label: label.into(),
      side: HandleSide::Output,
      tone: None,
    }
  }

  pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
    self.tone = Some(tone.into());
    self
  }
}

//! A directed connection between two pipeline nodes.

use serde::{Deserialize, Serialize};

/// A directed connection between two pipeline nodes.
///
/// `source` and `target` are node ids. Neither is required to exist in the
/// node set at validation time; the DAG check treats dangling references
/// defensively (see `dag`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
  pub id: String,
  pub source: String,
  pub target: String,
}

impl Edge {
  pub fn new(
    id: impl Into<String>,
    source: impl Into<String>,
    target: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      source: source.into(),
      target: target.into(),
    }
  }
}

//! Statistics returned by the parse endpoint.

use serde::{Deserialize, Serialize};

/// Statistics returned by `POST /pipelines/parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
  pub num_nodes: usize,
  pub num_edges: usize,
  pub is_dag: bool,
}

//! Cycle detection for the working graph (Kahn's topological sort).

use std::collections::{HashMap, VecDeque};

use tracing::instrument;

use crate::types::{Edge, NodeInstance};

/// Returns true when the graph formed by `nodes` and `edges` has no directed
/// cycle.
///
/// Dangling references are tolerated, never fatal: an edge whose source is
/// not a known node is dropped outright, and an edge whose target is not a
/// known node still contributes to in-degree bookkeeping but the ghost target
/// is never dequeued or counted. Stale edges left over from a removed node
/// therefore cannot corrupt the verdict.
///
/// Duplicate node ids violate the caller's uniqueness contract; here they
/// collapse into one id-keyed entry (last write wins) and the verdict counts
/// distinct ids.
#[instrument(level = "trace", skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn is_dag(nodes: &[NodeInstance], edges: &[Edge]) -> bool {
  let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
  let mut indegree: HashMap<&str, usize> = HashMap::new();
  for node in nodes {
    adjacency.insert(&node.id, Vec::new());
    indegree.insert(&node.id, 0);
  }
  let known = adjacency.len();

  for edge in edges {
    let Some(targets) = adjacency.get_mut(edge.source.as_str()) else {
      continue;
    };
    targets.push(&edge.target);
    *indegree.entry(&edge.target).or_insert(0) += 1;
  }

  // Isolated nodes and sources both start at in-degree 0.
  let mut queue: VecDeque<&str> = adjacency
    .keys()
    .filter(|id| indegree.get(**id) == Some(&0))
    .copied()
    .collect();

  let mut visited = 0usize;
  while let Some(current) = queue.pop_front() {
    visited += 1;
    let Some(targets) = adjacency.get(current) else {
      continue;
    };
    for &target in targets {
      if let Some(deg) = indegree.get_mut(target) {
        *deg -= 1;
        // Ghost targets stay inert: tracked above, never dequeued.
        if *deg == 0 && adjacency.contains_key(target) {
          queue.push_back(target);
        }
      }
    }
  }

  visited == known
}

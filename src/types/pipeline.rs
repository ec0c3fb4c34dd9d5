//! The working pipeline graph: node list + edge list, plus the lifecycle
//! operations of a single editing session.

use serde::{Deserialize, Serialize};

use super::{Edge, Handle, NodeInstance, ParseReport};
use crate::dag::is_dag;
use crate::ids::make_id;
use crate::library::{self, TEXT_KIND};
use crate::variables::dynamic_handles;

/// The working pipeline graph.
///
/// Nodes and edges keep insertion order, which keeps palette/canvas listings
/// deterministic. Serializes as `{ "nodes": [...], "edges": [...] }`, the
/// exact snapshot shape the editor submits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pipeline {
  #[serde(default)]
  nodes: Vec<NodeInstance>,
  #[serde(default)]
  edges: Vec<Edge>,
}

impl Pipeline {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn nodes(&self) -> &[NodeInstance] {
    &self.nodes
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn node(&self, node_id: &str) -> Option<&NodeInstance> {
    self.nodes.iter().find(|n| n.id == node_id)
  }

  /// Places a new node of the given kind and returns its fresh id.
  ///
  /// The kind is not checked against the library: an unknown kind is a legal
  /// node that simply has no static handles.
  pub fn add_node(&mut self, kind: &str) -> String {
    let id = make_id(kind);
    self.nodes.push(NodeInstance::new(id.clone(), kind));
    id
  }

  /// Replaces the text content of `node_id`. Returns false if no such node.
  pub fn set_text(&mut self, node_id: &str, text: impl Into<String>) -> bool {
    match self.nodes.iter_mut().find(|n| n.id == node_id) {
      Some(node) => {
        node.text = Some(text.into());
        true
      }
      None => false,
    }
  }

  /// Removes a node and every edge touching it, so no dangling edge survives
  /// the removal. Returns false if no such node.
  pub fn remove_node(&mut self, node_id: &str) -> bool {
    let before = self.nodes.len();
    self.nodes.retain(|n| n.id != node_id);
    if self.nodes.len() == before {
      return false;
    }
    self.edges.retain(|e| e.source != node_id && e.target != node_id);
    true
  }

  /// Connects `source` to `target` and returns the fresh edge id.
  ///
  /// Endpoint existence and self-loop prevention are the caller's concern;
  /// the DAG check handles both defensively.
  pub fn connect(&mut self, source: &str, target: &str) -> String {
    let id = make_id("edge");
    self.edges.push(Edge::new(id.clone(), source, target));
    id
  }

  /// Removes a single edge by id. Returns false if no such edge.
  pub fn disconnect(&mut self, edge_id: &str) -> bool {
    let before = self.edges.len();
    self.edges.retain(|e| e.id != edge_id);
    self.edges.len() != before
  }

  /// Whether the current graph is a directed acyclic graph.
  pub fn is_dag(&self) -> bool {
    is_dag(&self.nodes, &self.edges)
  }

  /// The input handles `node_id` shows right now: the template's static
  /// inputs (none when the kind is unknown), then for `text`-kind nodes the
  /// dynamic handles derived from current content. Recomputed on every call;
  /// never cached, so it cannot drift from the text it derives from.
  pub fn input_handles(&self, node_id: &str) -> Vec<Handle> {
    let Some(node) = self.node(node_id) else {
      return Vec::new();
    };
    let mut handles = match library::lookup(&node.kind) {
      Some(template) => template.inputs.clone(),
      None => Vec::new(),
    };
    if node.kind == TEXT_KIND {
      handles.extend(dynamic_handles(node.text_or_empty()));
    }
    handles
  }

  /// The statistics the parse endpoint reports for this graph.
  pub fn report(&self) -> ParseReport {
    ParseReport {
      num_nodes: self.nodes.len(),
      num_edges: self.edges.len(),
      is_dag: self.is_dag(),
    }
  }
}

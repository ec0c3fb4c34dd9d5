//! # nodeflow
//!
//! Core of the node-flow visual pipeline editor: the node template catalog,
//! `{{variable}}` extraction for text nodes, and DAG validation of the
//! user-built graph, plus the HTTP parse endpoint the editor submits to.
//!
//! ## Architecture
//!
//! Three pure leaf components (`library`, `variables`, `dag`) composed by
//! the `Pipeline` document in `types`. The `server` module wraps the whole
//! thing in the `POST /pipelines/parse` endpoint. Everything in the core is
//! synchronous, side-effect-free, and safe to recompute on every edit.

pub mod dag;
pub mod ids;
pub mod library;
pub mod server;
#[cfg(test)]
mod server_test;
pub mod types;
pub mod variables;

pub use dag::is_dag;
pub use library::{catalog, lookup};
pub use types::{Edge, Handle, HandleSide, NodeInstance, NodeTemplate, ParseReport, Pipeline};
pub use variables::{dynamic_handles, extract_variables};

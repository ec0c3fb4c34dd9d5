//! Pipeline editor core types.
//!
//! One type per file. `NodeInstance` and `Edge` are the wire shapes the
//! editor submits; `NodeTemplate`/`Handle` are the static catalog shapes.

mod edge;
mod handle;
mod node_instance;
#[cfg(test)]
mod node_instance_test;
mod node_template;
mod parse_report;
mod pipeline;

pub use edge::Edge;
pub use handle::{Handle, HandleSide};
pub use node_instance::NodeInstance;
pub use node_template::NodeTemplate;
pub use parse_report::ParseReport;
pub use pipeline::Pipeline;

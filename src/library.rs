//! The node template catalog.
//!
//! All node kinds live here; add new ones by pushing to the library in
//! `build_library`. The catalog is built once at first use and never
//! mutated afterwards, so there is no runtime path that can desynchronize
//! the palette from the lookup table.

use once_cell::sync::Lazy;

use crate::types::{Handle, NodeTemplate};

/// Kind tag of the freeform text node, the one kind that grows dynamic
/// input handles from `{{variable}}` placeholders in its content.
pub const TEXT_KIND: &str = "text";

static NODE_LIBRARY: Lazy<Vec<NodeTemplate>> = Lazy::new(build_library);

/// The full catalog, in declaration order. Order is stable so the palette
/// renders deterministically.
pub fn catalog() -> &'static [NodeTemplate] {
  &NODE_LIBRARY
}

/// Looks up a template by kind tag. Unknown kinds yield `None`; callers
/// skip that node's static handles and move on, never fail.
pub fn lookup(kind: &str) -> Option<&'static NodeTemplate> {
  NODE_LIBRARY.iter().find(|t| t.kind == kind)
}

fn build_library() -> Vec<NodeTemplate> {
  vec![
    NodeTemplate {
      kind: "input",
      title: "User Input",
      icon: "🟢",
      accent: "#22c55e",
      description: "Pipeline entry. Produces user-provided data.",
      inputs: vec![],
      outputs: vec![Handle::output("out", "value")],
      body_hint: None,
    },
    NodeTemplate {
      kind: "output",
      title: "Output",
      icon: "🏁",
      accent: "#f97316",
      description: "Pipeline sink. Collects final results.",
      inputs: vec![Handle::input("in", "result")],
      outputs: vec![],
      body_hint: None,
    },
    NodeTemplate {
      kind: "llm",
      title: "LLM",
      icon: "🤖",
      accent: "#6366f1",
      description: "Large language model call with prompt + params.",
      inputs: vec![
        Handle::input("prompt", "prompt"),
        Handle::input("context", "context").with_tone("muted"),
      ],
      outputs: vec![Handle::output("response", "text")],
      body_hint: Some("Model: gpt-4o-mini • Temperature: 0.7"),
    },
    NodeTemplate {
      kind: TEXT_KIND,
      title: "Text",
      icon: "📝",
      accent: "#f59e0b",
      description: "Freeform text. Use {{variable}} to add inputs.",
      inputs: vec![Handle::input("in", "text in")],
      outputs: vec![Handle::output("out", "text out")],
      body_hint: None,
    },
    NodeTemplate {
      kind: "http",
      title: "HTTP Request",
      icon: "🌐",
      accent: "#06b6d4",
      description: "Fetch data from an external API.",
      inputs: vec![
        Handle::input("url", "url"),
        Handle::input("body", "body").with_tone("muted"),
      ],
      outputs: vec![
        Handle::output("json", "json"),
        Handle::output("status", "status").with_tone("muted"),
      ],
      body_hint: Some("GET / POST with headers & query params"),
    },
    NodeTemplate {
      kind: "math",
      title: "Math",
      icon: "➗",
      accent: "#8b5cf6",
      description: "Lightweight arithmetic & expressions.",
      inputs: vec![Handle::input("a", "a"), Handle::input("b", "b")],
      outputs: vec![Handle::output("result", "result")],
      body_hint: Some("Supports +, -, *, /, ^"),
    },
    NodeTemplate {
      kind: "branch",
      title: "Branch",
      icon: "🪢",
      accent: "#14b8a6",
      description: "Route based on a condition.",
      inputs: vec![Handle::input("condition", "if")],
      outputs: vec![
        Handle::output("true", "true"),
        Handle::output("false", "false"),
      ],
      body_hint: Some("Truthy check or custom predicate"),
    },
    NodeTemplate {
      kind: "vector",
      title: "Vector Store",
      icon: "🧠",
      accent: "#e11d48",
      description: "Embed & search semantic vectors.",
      inputs: vec![
        Handle::input("docs", "docs"),
        Handle::input("query", "query").with_tone("muted"),
      ],
      outputs: vec![Handle::output("matches", "matches")],
      body_hint: Some("Top-k similarity with filters"),
    },
    NodeTemplate {
      kind: "tool",
      title: "Tool Executor",
      icon: "🛠️",
      accent: "#0ea5e9",
      description: "Invoke custom tools/scripts.",
      inputs: vec![Handle::input("args", "args")],
      outputs: vec![
        Handle::output("result", "result"),
        Handle::output("logs", "logs").with_tone("muted"),
      ],
      body_hint: Some("Shell-safe, sandboxed execution"),
    },
  ]
}

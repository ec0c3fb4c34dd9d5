//! `{{variable}}` extraction for text nodes.
//!
//! Text-kind nodes grow one extra input handle per distinct placeholder in
//! their content. The handle list is a pure function of the text, recomputed
//! on every read, so it can never drift out of sync with what the user typed.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::instrument;

use crate::types::Handle;

/// `{{ name }}` with optional whitespace inside the braces. The identifier
/// grammar matches the editor's: leading letter/underscore/dollar, then
/// letters, digits, underscore, dollar.
static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"\{\{\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\}\}").expect("variable pattern is valid")
});

/// Extracts the distinct placeholder names referenced by `text`, in order of
/// first occurrence. Malformed braces and invalid identifiers are simply not
/// matches; empty or placeholder-free text yields an empty vec.
#[instrument(level = "trace", skip(text))]
pub fn extract_variables(text: &str) -> Vec<String> {
  let mut seen = HashSet::new();
  let mut names = Vec::new();
  for caps in VARIABLE_RE.captures_iter(text) {
    let name = &caps[1];
    if seen.insert(name.to_string()) {
      names.push(name.to_string());
    }
  }
  names
}

/// The dynamic input handles `text` implies: one per extracted name `v`,
/// id `var-{v}`, appended after the template's static inputs in extraction
/// order.
pub fn dynamic_handles(text: &str) -> Vec<Handle> {
  extract_variables(text)
    .into_iter()
    .map(|name| Handle::input(format!("var-{name}"), name).with_tone("info"))
    .collect()
}

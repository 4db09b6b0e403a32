//! Readers for the line-oriented map list files.
//!
//! A node row is `name` or `name: attribute`; an edge row is `src, dst` or
//! `src, dst: attribute`. Blank rows and rows starting with `#` are skipped,
//! every captured part is trimmed and lower-cased, and a duplicate name or
//! pair keeps its last row.

use crate::types::{EdgeData, NodeData};
use std::path::Path;
use tracing::instrument;

/// Default filename for the node list under a map directory.
pub const NODE_LIST_FILENAME: &str = "graph-node-list.txt";

/// Default filename for the edge list under a map directory.
pub const EDGE_LIST_FILENAME: &str = "graph-edge-list.txt";

/// Splits a declaration row into its subject and attribute parts. A row
/// without `:` is a declaration with an empty attribute.
fn split_attribute(row: &str) -> (&str, &str) {
  row.split_once(':').unwrap_or((row, ""))
}

/// Declaration rows of a list file: trimmed, comments and blanks dropped.
fn declaration_rows(contents: &str) -> impl Iterator<Item = &str> {
  contents
    .lines()
    .map(str::trim)
    .filter(|row| !row.is_empty() && !row.starts_with('#'))
}

/// Interprets one node row as a `(name, attribute)` entry.
pub(crate) fn interpret_node_row(row: &str) -> (String, String) {
  let (name, attribute) = split_attribute(row);
  (
    name.trim().to_lowercase(),
    attribute.trim().to_lowercase(),
  )
}

/// Interprets one edge row as a `((src, dst), attribute)` entry. A missing
/// destination is kept as the empty name rather than rejected.
pub(crate) fn interpret_edge_row(row: &str) -> ((String, String), String) {
  let (pair, attribute) = split_attribute(row);
  let (src, dst) = pair.split_once(',').unwrap_or((pair, ""));
  (
    (src.trim().to_lowercase(), dst.trim().to_lowercase()),
    attribute.trim().to_lowercase(),
  )
}

/// Reads a node list file into node → attribute data.
#[instrument(level = "trace", skip(path))]
pub fn read_node_file(path: &Path) -> Result<NodeData, std::io::Error> {
  let contents = std::fs::read_to_string(path)?;
  Ok(declaration_rows(&contents).map(interpret_node_row).collect())
}

/// Reads an edge list file into (src, dst) → attribute data.
#[instrument(level = "trace", skip(path))]
pub fn read_edge_file(path: &Path) -> Result<EdgeData, std::io::Error> {
  let contents = std::fs::read_to_string(path)?;
  Ok(declaration_rows(&contents).map(interpret_edge_row).collect())
}

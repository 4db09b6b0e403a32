//! Compile annotated map data into a PDDL problem for `exploration-game`.
//!
//! `feed` turns node and edge attributes into statements and merges their
//! object declarations and facts into two accumulator sets; `digest`
//! registers the start and goal locations and serializes the problem text.

use crate::attribute_parser::{parse_edge_attribute, parse_node_attribute};
use crate::object_name::to_object_name;
use crate::types::{CompileError, EdgeData, NodeData, Statement};
use std::collections::BTreeSet;
use tracing::{debug, error, info, instrument};

/// Accumulates object declarations and facts across one or more maps and
/// serializes them as a single PDDL problem.
///
/// Both accumulators are ordered sets: duplicate declarations collapse and
/// the serialized problem lists declarations in lexicographic order, so the
/// same map data always produces the same bytes.
#[derive(Debug, Default)]
pub struct ProblemCompiler {
  objects: BTreeSet<String>,
  facts: BTreeSet<String>,
}

impl ProblemCompiler {
  /// Creates a compiler with empty accumulators.
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of distinct object declarations accumulated so far.
  pub fn object_count(&self) -> usize {
    self.objects.len()
  }

  /// Number of distinct facts accumulated so far.
  pub fn fact_count(&self) -> usize {
    self.facts.len()
  }

  /// Parses every node and edge attribute and merges the resulting
  /// statements into the accumulators.
  ///
  /// May be called repeatedly; feeding the same data twice changes nothing.
  /// A statement whose requirements exceed the supported predicate arities
  /// aborts the call and contributes nothing.
  #[instrument(level = "trace", skip(self, node_data, edge_data))]
  pub fn feed(&mut self, node_data: &NodeData, edge_data: &EdgeData) -> Result<(), CompileError> {
    info!(
      node_count = node_data.len(),
      edge_count = edge_data.len(),
      "feeding map data"
    );

    for (node, attribute) in node_data {
      for statement in parse_node_attribute(node, attribute) {
        if let Err(e) = self.merge(statement) {
          error!(node = %node, attribute = %attribute, error = %e, "rejecting node attribute");
          return Err(e);
        }
      }
    }

    for ((src, dst), attribute) in edge_data {
      for statement in parse_edge_attribute(src, dst, attribute) {
        if let Err(e) = self.merge(statement) {
          error!(src = %src, dst = %dst, attribute = %attribute, error = %e, "rejecting edge attribute");
          return Err(e);
        }
      }
    }

    Ok(())
  }

  /// Merges one statement; its facts are computed first so a failing
  /// statement leaves both accumulators untouched.
  fn merge(&mut self, statement: Statement) -> Result<(), CompileError> {
    let facts = statement.facts()?;
    debug!(?statement, "accepted statement");
    self.objects.extend(statement.objects());
    self.facts.extend(facts);
    Ok(())
  }

  /// Serializes the accumulated problem, with the player starting at
  /// `start` and the goal of reaching `goal`.
  ///
  /// Both boundary locations are normalized and registered as objects, so
  /// they need not appear in any fed map data.
  #[instrument(level = "trace", skip(self))]
  pub fn digest(&mut self, start: &str, goal: &str) -> String {
    let start = to_object_name(start);
    let goal = to_object_name(goal);
    self.objects.insert(format!("{} - location", start));
    self.objects.insert(format!("{} - location", goal));

    info!(
      objects = self.objects.len(),
      facts = self.facts.len(),
      "serializing problem"
    );

    let objects = join_declarations(&self.objects);
    let facts = join_declarations(&self.facts);

    let mut problem = String::new();
    problem.push_str("(define (problem map) (:domain exploration-game)\n");
    problem.push_str("    (:objects\n");
    problem.push_str("        p - player\n");
    problem.push_str("        ");
    problem.push_str(&objects);
    problem.push_str("\n    )\n\n");
    problem.push_str("    (:init\n");
    problem.push_str("        (is_at p ");
    problem.push_str(&start);
    problem.push_str(")\n");
    problem.push_str("        ");
    problem.push_str(&facts);
    problem.push_str("\n    )\n\n");
    problem.push_str("    (:goal (and\n");
    problem.push_str("        (is_at p ");
    problem.push_str(&goal);
    problem.push_str(")\n");
    problem.push_str("    ))\n");
    problem.push_str(")\n");
    problem
  }
}

/// Joins declarations one per line at the problem body's indentation.
fn join_declarations(declarations: &BTreeSet<String>) -> String {
  declarations.iter().cloned().collect::<Vec<_>>().join("\n        ")
}

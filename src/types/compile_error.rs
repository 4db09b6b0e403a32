//! Fatal compilation errors.

use thiserror::Error;

/// Conditions that abort a compilation run.
///
/// The generated problem relies on fixed-arity predicates, so a statement
/// whose requirement list exceeds the supported arity cannot be emitted at
/// all; a truncated predicate would silently corrupt the planner input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
  /// Collecting an item supports at most two required items
  /// (`possible_collect_if_2`).
  #[error("expected 0, 1, or 2 required items to collect {item} at {location}: got {count}")]
  TooManyCollectRequirements {
    location: String,
    item: String,
    count: usize,
  },

  /// A connection supports at most one required item (`connected_if`).
  #[error("expected 0 or 1 required item for the connection {src} -> {dst}: got {count}")]
  TooManyEdgeRequirements {
    src: String,
    dst: String,
    count: usize,
  },
}

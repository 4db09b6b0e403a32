//! Typed statements extracted from node and edge attributes.

use super::CompileError;

/// Synthetic identifier for the pick-exactly-one decision point at `location`.
pub(crate) fn choice_name(location: &str) -> String {
  format!("choice_{}", location)
}

/// A fully parsed unit of map semantics.
///
/// Each variant owns the normalized identifiers it references and knows how
/// to declare its objects and assert its facts in the generated problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
  /// At `location` there is nothing to collect.
  EmptyNode { location: String },
  /// At `location` the player can collect `item` once every item of
  /// `required_items` is held. At most two required items are supported.
  ItemCollect {
    location: String,
    item: String,
    required_items: Vec<String>,
  },
  /// At `location` the player can collect exactly one of `available_items`.
  ItemUniqueChoice {
    location: String,
    available_items: Vec<String>,
  },
  /// `dst` is reachable from `src`, optionally gated on one required item.
  EdgeConnection {
    src: String,
    dst: String,
    required_items: Vec<String>,
  },
}

impl Statement {
  /// Object declarations (`<identifier> - <kind>`) this statement requires
  /// to exist: the location first, then every item or choice identifier it
  /// references. Facts only ever name identifiers declared here, so the
  /// problem can never contain a dangling reference.
  pub fn objects(&self) -> Vec<String> {
    match self {
      Statement::EmptyNode { location } => vec![format!("{} - location", location)],
      Statement::ItemCollect {
        location,
        item,
        required_items,
      } => {
        let mut objects = vec![
          format!("{} - location", location),
          format!("{} - item", item),
        ];
        objects.extend(required_items.iter().map(|req| format!("{} - item", req)));
        objects
      }
      Statement::ItemUniqueChoice {
        location,
        available_items,
      } => {
        let mut objects = vec![
          format!("{} - location", location),
          format!("{} - choice", choice_name(location)),
        ];
        objects.extend(available_items.iter().map(|item| format!("{} - item", item)));
        objects
      }
      Statement::EdgeConnection {
        src,
        dst,
        required_items,
      } => {
        let mut objects = vec![
          format!("{} - location", src),
          format!("{} - location", dst),
        ];
        objects.extend(required_items.iter().map(|req| format!("{} - item", req)));
        objects
      }
    }
  }

  /// Facts this statement asserts in the problem's initial state.
  ///
  /// The predicate is selected by requirement count because the downstream
  /// domain defines one fixed-arity predicate per count; a requirement list
  /// beyond the supported arities is a fatal format violation.
  pub fn facts(&self) -> Result<Vec<String>, CompileError> {
    match self {
      Statement::EmptyNode { .. } => Ok(Vec::new()),
      Statement::ItemCollect {
        location,
        item,
        required_items,
      } => match required_items.as_slice() {
        [] => Ok(vec![format!("(possible_collect {} {})", location, item)]),
        [req] => Ok(vec![format!(
          "(possible_collect_if {} {} {})",
          location, item, req
        )]),
        [first, second] => Ok(vec![format!(
          "(possible_collect_if_2 {} {} {} {})",
          location, item, first, second
        )]),
        _ => Err(CompileError::TooManyCollectRequirements {
          location: location.clone(),
          item: item.clone(),
          count: required_items.len(),
        }),
      },
      Statement::ItemUniqueChoice {
        location,
        available_items,
      } => {
        let choice = choice_name(location);
        let mut facts = vec![format!("(possible_choice {} {})", location, choice)];
        facts.extend(
          available_items
            .iter()
            .map(|item| format!("(offers {} {})", choice, item)),
        );
        Ok(facts)
      }
      Statement::EdgeConnection {
        src,
        dst,
        required_items,
      } => match required_items.as_slice() {
        [] => Ok(vec![format!("(connected {} {})", src, dst)]),
        [req] => Ok(vec![format!("(connected_if {} {} {})", src, dst, req)]),
        _ => Err(CompileError::TooManyEdgeRequirements {
          src: src.clone(),
          dst: dst.clone(),
          count: required_items.len(),
        }),
      },
    }
  }
}

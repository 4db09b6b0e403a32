//! Parser for the node and edge attribute grammar.
//!
//! A node attribute is empty (nothing to collect), a collect such as
//! `?sword&shield|bow=>+treasure`, or a unique choice such as
//! `+sword^bow^staff`. An edge attribute is empty or a requirement such as
//! `?key|crowbar`. An attribute contributes the statements of every form it
//! matches.

use crate::object_name::to_object_name;
use crate::types::Statement;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::instrument;

/// Collect form: optional `?requirement =>` prefix, then `+` and the items.
static COLLECT_ATTRIBUTE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\A(?:\?.+?\s*=>\s*)?\+.+\z").expect("collect pattern compiles"));

/// Unique-choice form: `+`, then at least one `^` separating the items.
static CHOICE_ATTRIBUTE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\A\+[^\^]*\^.*\z").expect("choice pattern compiles"));

/// Drops the leading marker character (`?` or `+`) from an attribute part.
fn drop_marker(part: &str) -> &str {
  let mut chars = part.chars();
  chars.next();
  chars.as_str()
}

/// Parses a node attribute into the statements of every form it matches.
#[instrument(level = "trace")]
pub fn parse_node_attribute(node: &str, attribute: &str) -> Vec<Statement> {
  let mut statements = empty_node_statements(node, attribute);
  statements.extend(item_collect_statements(node, attribute));
  statements.extend(unique_choice_statements(node, attribute));
  statements
}

/// Yields one `EmptyNode` statement when the attribute is the empty string.
pub(crate) fn empty_node_statements(node: &str, attribute: &str) -> Vec<Statement> {
  if attribute.is_empty() {
    vec![Statement::EmptyNode {
      location: to_object_name(node),
    }]
  } else {
    Vec::new()
  }
}

/// Yields the `ItemCollect` statements of a collect attribute.
///
/// The requirement side is a disjunction of `&`-conjunctions; the item side
/// is an `&`-list. Every (conjunction, item) pair becomes one statement, so
/// `?a|b=>+x&y` expands to four. An item side still holding `|` or `^` after
/// the split cannot be told apart from requirement syntax, so the whole
/// attribute yields nothing.
pub(crate) fn item_collect_statements(node: &str, attribute: &str) -> Vec<Statement> {
  if !COLLECT_ATTRIBUTE.is_match(attribute) {
    return Vec::new();
  }
  let location = to_object_name(node);

  let (requirement, item_part) = match attribute.split_once("=>") {
    Some((requirement, items)) => (Some(requirement), items),
    None => (None, attribute),
  };

  let requirement_dnf: Vec<Vec<String>> = match requirement {
    None => vec![Vec::new()],
    Some(requirement) => drop_marker(requirement.trim())
      .split('|')
      .map(|conjunction| conjunction.split('&').map(to_object_name).collect())
      .collect(),
  };

  let items = drop_marker(item_part.trim());
  if items.contains('|') || items.contains('^') {
    return Vec::new();
  }

  let mut statements = Vec::new();
  for required_items in &requirement_dnf {
    for item in items.split('&') {
      statements.push(Statement::ItemCollect {
        location: location.clone(),
        item: to_object_name(item),
        required_items: required_items.clone(),
      });
    }
  }
  statements
}

/// Yields one `ItemUniqueChoice` statement when the attribute is a choice.
pub(crate) fn unique_choice_statements(node: &str, attribute: &str) -> Vec<Statement> {
  if !CHOICE_ATTRIBUTE.is_match(attribute) {
    return Vec::new();
  }
  vec![Statement::ItemUniqueChoice {
    location: to_object_name(node),
    available_items: drop_marker(attribute).split('^').map(to_object_name).collect(),
  }]
}

/// Parses an edge attribute into its connection statements.
///
/// A `?`-prefixed attribute opens one connection per `|`-separated
/// alternative; any other attribute, empty or not, opens a single
/// unconditional connection.
#[instrument(level = "trace")]
pub fn parse_edge_attribute(src: &str, dst: &str, attribute: &str) -> Vec<Statement> {
  let src = to_object_name(src);
  let dst = to_object_name(dst);
  match attribute.strip_prefix('?') {
    Some(requirement) => requirement
      .split('|')
      .map(|conjunction| Statement::EdgeConnection {
        src: src.clone(),
        dst: dst.clone(),
        required_items: conjunction.split('&').map(to_object_name).collect(),
      })
      .collect(),
    None => vec![Statement::EdgeConnection {
      src,
      dst,
      required_items: Vec::new(),
    }],
  }
}

//! Object-name normalization for PDDL identifiers.

/// Normalizes free-form map text into a PDDL-safe object identifier.
///
/// Trims surrounding whitespace, then remaps the characters the planner
/// cannot digest: spaces and apostrophes become `_`, accented vowels lose
/// their accent (`é`/`è` → `e`, `à` → `a`). Every other character passes
/// through unchanged. Total function; normalizing an already-normalized
/// name is a no-op.
pub fn to_object_name(raw: &str) -> String {
  raw
    .trim()
    .chars()
    .map(|c| match c {
      ' ' | '\'' => '_',
      'é' | 'è' => 'e',
      'à' => 'a',
      other => other,
    })
    .collect()
}

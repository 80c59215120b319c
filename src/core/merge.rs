//! Merge of default translations into a user override file.
//!
//! User lines are authoritative. The merge only ever:
//! - inserts default keys the user file lacks, disabled and with their context,
//! - refreshes disabled entries whose value differs from the current default.
//!
//! Enabled user lines are never rewritten.

use std::collections::HashSet;

use super::index::{DefaultIndex, context_start, find_key, key_positions};
use super::normalize::normalize_blank_lines;
use super::parser::{ParsedLine, disable_line, disabled_entry, parse_line, parse_lines};

/// Result of merging defaults into a user file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeOutput {
    pub lines: Vec<String>,
    /// Number of default keys inserted as disabled entries.
    pub added_count: usize,
    /// Number of disabled entries rewritten to the current default value.
    pub updated_count: usize,
}

impl MergeOutput {
    /// True when the user file needs to be rewritten.
    pub fn has_changes(&self) -> bool {
        self.added_count + self.updated_count > 0
    }
}

/// Generate a starting override file with every default line disabled.
pub fn generate_override<S: AsRef<str>>(default_lines: &[S]) -> Vec<String> {
    let disabled: Vec<String> = default_lines
        .iter()
        .map(|line| disable_line(line.as_ref()))
        .collect();
    normalize_blank_lines(&disabled)
}

pub fn merge<D, U>(default_lines: &[D], user_lines: &[U]) -> MergeOutput
where
    D: AsRef<str>,
    U: AsRef<str>,
{
    let default_parsed = parse_lines(default_lines);
    let defaults = DefaultIndex::build(&default_parsed);

    let user_keys: HashSet<&str> = key_positions(&parse_lines(user_lines))
        .into_keys()
        .collect();
    let new_keys: Vec<&str> = defaults
        .order
        .iter()
        .copied()
        .filter(|key| !user_keys.contains(key))
        .collect();

    let mut result: Vec<String> = user_lines
        .iter()
        .map(|line| line.as_ref().to_string())
        .collect();

    for key in &new_keys {
        let Some(entry) = defaults.entries.get(key) else {
            continue;
        };
        // Anchor against the document as amended by all earlier insertions.
        let insert_at = insert_position(key, &defaults, &parse_lines(&result));
        let block = entry
            .preceding_context
            .iter()
            .chain(std::iter::once(&entry.active_line))
            .map(|line| disable_line(line));
        result.splice(insert_at..insert_at, block);
    }

    let updated_count = refresh_stale_entries(&mut result, &defaults);

    MergeOutput {
        lines: normalize_blank_lines(&result),
        added_count: new_keys.len(),
        updated_count,
    }
}

/// Where to insert `key`: after its previous sibling, else before the context
/// block of its next sibling, else at the end.
fn insert_position(key: &str, defaults: &DefaultIndex<'_>, parsed: &[ParsedLine<'_>]) -> usize {
    let (prev, next) = defaults.siblings(key);

    if let Some(index) = prev.and_then(|prev| find_key(parsed, prev)) {
        return index + 1;
    }
    if let Some(index) = next.and_then(|next| find_key(parsed, next)) {
        return context_start(parsed, index);
    }
    parsed.len()
}

/// Rewrite disabled entries whose value differs from the default, in document order.
fn refresh_stale_entries(lines: &mut [String], defaults: &DefaultIndex<'_>) -> usize {
    let mut updated = 0;
    for line in lines.iter_mut() {
        let replacement = match parse_line(line.as_str()) {
            ParsedLine::Comment {
                pair: Some(pair), ..
            } => defaults
                .values
                .get(pair.key)
                .filter(|value| **value != pair.value)
                .map(|value| disabled_entry(pair.key, value)),
            _ => None,
        };
        if let Some(replacement) = replacement {
            *line = replacement;
            updated += 1;
        }
    }
    updated
}

//! Key lookups derived from a parsed line sequence.
//!
//! Order and positions follow the first occurrence of a key. Entries and
//! values follow the last active occurrence.

use std::collections::{HashMap, HashSet};

use super::parser::ParsedLine;

/// An active default line together with the blank/comment lines directly above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry<'a> {
    pub active_line: &'a str,
    pub preceding_context: Vec<&'a str>,
}

/// Keys of active lines in document order.
pub fn key_order<'a>(parsed: &[ParsedLine<'a>]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    parsed
        .iter()
        .filter_map(|line| match line {
            ParsedLine::Active { pair, .. } => Some(pair.key),
            _ => None,
        })
        .filter(|key| seen.insert(*key))
        .collect()
}

/// Index of the first line carrying each key, enabled or disabled.
pub fn key_positions<'a>(parsed: &[ParsedLine<'a>]) -> HashMap<&'a str, usize> {
    let mut positions = HashMap::new();
    for (index, line) in parsed.iter().enumerate() {
        if let Some(key) = line.key() {
            positions.entry(key).or_insert(index);
        }
    }
    positions
}

/// Active line and context for each key. A duplicate key replaces the earlier entry.
pub fn entry_map<'a>(parsed: &[ParsedLine<'a>]) -> HashMap<&'a str, TranslationEntry<'a>> {
    let mut entries = HashMap::new();
    let mut context = Vec::new();

    for line in parsed {
        match *line {
            ParsedLine::Active { raw, pair } => {
                let preceding_context = std::mem::take(&mut context);
                entries.insert(
                    pair.key,
                    TranslationEntry {
                        active_line: raw,
                        preceding_context,
                    },
                );
            }
            other => context.push(other.raw()),
        }
    }
    entries
}

/// Value of each active key; the last occurrence wins.
pub fn values_map<'a>(parsed: &[ParsedLine<'a>]) -> HashMap<&'a str, &'a str> {
    let mut values = HashMap::new();
    for line in parsed {
        if let ParsedLine::Active { pair, .. } = line {
            values.insert(pair.key, pair.value);
        }
    }
    values
}

/// Start of the contiguous blank/comment block directly above `index`.
pub fn context_start(parsed: &[ParsedLine<'_>], index: usize) -> usize {
    let mut start = index;
    while start > 0 && parsed[start - 1].is_context() {
        start -= 1;
    }
    start
}

/// Index of the first line carrying `key`.
pub fn find_key(parsed: &[ParsedLine<'_>], key: &str) -> Option<usize> {
    parsed.iter().position(|line| line.key() == Some(key))
}

/// All lookups over the default sequence, built once per merge.
#[derive(Debug)]
pub struct DefaultIndex<'a> {
    pub order: Vec<&'a str>,
    pub entries: HashMap<&'a str, TranslationEntry<'a>>,
    pub values: HashMap<&'a str, &'a str>,
    order_positions: HashMap<&'a str, usize>,
}

impl<'a> DefaultIndex<'a> {
    pub fn build(parsed: &[ParsedLine<'a>]) -> Self {
        let order = key_order(parsed);
        let order_positions = order
            .iter()
            .enumerate()
            .map(|(index, key)| (*key, index))
            .collect();
        Self {
            order,
            entries: entry_map(parsed),
            values: values_map(parsed),
            order_positions,
        }
    }

    /// Keys immediately before and after `key` in default order.
    pub fn siblings(&self, key: &str) -> (Option<&'a str>, Option<&'a str>) {
        let Some(&position) = self.order_positions.get(key) else {
            return (None, None);
        };
        let prev = position
            .checked_sub(1)
            .and_then(|i| self.order.get(i))
            .copied();
        let next = self.order.get(position + 1).copied();
        (prev, next)
    }
}

//! Line classification for `.lang` files.
//!
//! Every raw line is classified as blank, comment or active `key=value`.
//! The raw text is kept verbatim so unchanged lines round-trip byte for byte.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix used when disabling a line.
pub const DISABLED_PREFIX: &str = "# ";

/// Keys recovered from comments must be ASCII word characters and dots.
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.]+$").expect("valid key regex"));

/// A key/value pair borrowed from a raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Empty or whitespace-only line.
    Blank(&'a str),
    /// `#`-prefixed line, or any line that is neither blank nor `key=value`.
    ///
    /// `pair` is set when the comment is a disabled entry such as `# Key.One=Value`.
    Comment {
        raw: &'a str,
        pair: Option<KeyValue<'a>>,
    },
    /// Enabled `key=value` line.
    Active { raw: &'a str, pair: KeyValue<'a> },
}

impl<'a> ParsedLine<'a> {
    pub fn raw(&self) -> &'a str {
        match *self {
            ParsedLine::Blank(raw) => raw,
            ParsedLine::Comment { raw, .. } | ParsedLine::Active { raw, .. } => raw,
        }
    }

    /// The key this line carries, enabled or disabled.
    pub fn key(&self) -> Option<&'a str> {
        match *self {
            ParsedLine::Blank(_) => None,
            ParsedLine::Comment { pair, .. } => pair.map(|p| p.key),
            ParsedLine::Active { pair, .. } => Some(pair.key),
        }
    }

    /// Blank and comment lines form the context block above an entry.
    pub fn is_context(&self) -> bool {
        !matches!(self, ParsedLine::Active { .. })
    }
}

pub fn parse_line(raw: &str) -> ParsedLine<'_> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return ParsedLine::Blank(raw);
    }

    if let Some(rest) = trimmed.strip_prefix('#') {
        return ParsedLine::Comment {
            raw,
            pair: disabled_pair(rest),
        };
    }

    match trimmed.find('=') {
        Some(eq) if eq > 0 => ParsedLine::Active {
            raw,
            pair: KeyValue {
                key: trimmed[..eq].trim(),
                value: &trimmed[eq + 1..],
            },
        },
        _ => ParsedLine::Comment { raw, pair: None },
    }
}

pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<ParsedLine<'_>> {
    lines.iter().map(|line| parse_line(line.as_ref())).collect()
}

/// Extract `key=value` from the remainder of a comment (after the `#`).
fn disabled_pair(rest: &str) -> Option<KeyValue<'_>> {
    let stripped = rest.trim_start();
    let eq = stripped.find('=').filter(|&eq| eq > 0)?;
    let key = stripped[..eq].trim();
    if !KEY_PATTERN.is_match(key) {
        return None;
    }
    Some(KeyValue {
        key,
        value: &stripped[eq + 1..],
    })
}

/// Disable a line by prefixing it with `# `.
///
/// Blank lines and lines that already start with `#` are returned unchanged.
pub fn disable_line(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        raw.to_string()
    } else {
        format!("{}{}", DISABLED_PREFIX, raw)
    }
}

/// Format a disabled entry, e.g. `# Key.One=Value one`.
pub fn disabled_entry(key: &str, value: &str) -> String {
    format!("{}{}={}", DISABLED_PREFIX, key, value)
}

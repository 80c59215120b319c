//! Pure merge engine for `.lang` override files.
//!
//! Operates on in-memory line sequences only; file access lives in [`crate::sync`].
//!
//! ```text
//! default lines + user lines
//!     ↓ parser     (Blank / Comment / Active)
//!     ↓ index      (key order, positions, entries, values)
//!     ↓ merge      (insert missing keys disabled, refresh stale disabled values)
//!     ↓ normalize  (collapse blank runs, strip trailing blanks)
//! MergeOutput { lines, added_count, updated_count }
//! ```

pub mod index;
pub mod merge;
pub mod normalize;
pub mod parser;

pub use index::{DefaultIndex, TranslationEntry};
pub use merge::{MergeOutput, generate_override, merge};
pub use normalize::normalize_blank_lines;
pub use parser::{KeyValue, ParsedLine, disable_line, parse_line, parse_lines};

//! langsync - keep user `.lang` override files in sync with their defaults
//!
//! An override file is a copy of a default `.lang` file in which the user
//! enables the entries they want to change and leaves the rest disabled as
//! `# key=value` comments. langsync inserts newly added default keys as
//! disabled entries next to their neighbours and refreshes disabled entries
//! whose default value changed. Enabled entries are never touched.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `context`: Resolved roots and targets for one run
//! - `core`: Pure line-level merge engine
//! - `mcp`: Model Context Protocol server implementation
//! - `resources`: Where default files are loaded from
//! - `sync`: Per-file sync with atomic writes, target planning, legacy migration

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod mcp;
pub mod resources;
pub mod sync;

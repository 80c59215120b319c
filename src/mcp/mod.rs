//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the sync operations to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool definitions and the stdio entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{LangsyncMcpServer, run_server};

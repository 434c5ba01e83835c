//! MCP surface: server handler, tool catalog and result rendering.

pub mod output;
pub mod server;
pub mod tools;

pub use server::{LyMcpServer, call_tool_once, serve_stdio};

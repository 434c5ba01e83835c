pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → MCP → Core → API)
pub mod cli; // Command-line interface
pub mod core; // Business logic
pub mod mcp; // MCP server and tool catalog
pub mod storage; // Configuration persistence

/// Support modules (used across layers)
pub mod api; // Legislative Yuan API client
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;

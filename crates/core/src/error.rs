//! Error types for the Voyagent domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.
//!
//! Booking failures (payment not configured, unknown id) and empty search
//! results are deliberately *not* errors — they are structured results the
//! agent runtime can reason over. Only malformed input, missing datasets,
//! and internal faults surface here.

use thiserror::Error;

/// The top-level error type for all Voyagent operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Dataset errors ---
    #[error("Dataset error: {0}")]
    Data(#[from] DataError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures loading or validating the static dataset collections.
///
/// These are fatal at startup and surfaced to the operator; tools never see
/// them at call time because the store loads eagerly.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Dataset unavailable: {collection}: {reason}")]
    Unavailable { collection: String, reason: String },

    #[error("Dataset malformed: {collection}: {reason}")]
    Malformed { collection: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool execution failed in {tool_name}: {reason}")]
    ExecutionFailed { tool_name: String, reason: String },
}

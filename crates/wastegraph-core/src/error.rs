//! Error types and exit codes for wastegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, malformed graph, missing saved graph)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, malformed graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for WasteGraphError {
    fn from(err: rusqlite::Error) -> Self {
        WasteGraphError::db_operation("query database", err)
    }
}

/// Errors that can occur during wastegraph operations
#[derive(Error, Debug)]
pub enum WasteGraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("malformed graph: {}", problems.join("; "))]
    MalformedGraph { problems: Vec<String> },

    #[error("graph not found: {id}")]
    GraphNotFound { id: i64 },

    #[error("database not found at {path:?} (run `wastegraph init` first)")]
    DatabaseNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl WasteGraphError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        WasteGraphError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed transaction operation
    pub fn transaction(operation: &str, error: impl std::fmt::Display) -> Self {
        WasteGraphError::FailedOperation {
            operation: format!("{} transaction", operation),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WasteGraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node identifier missing from the graph
    pub fn node_not_found(id: impl Into<String>) -> Self {
        WasteGraphError::NodeNotFound { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WasteGraphError::UnknownFormat(_)
            | WasteGraphError::DuplicateFormat
            | WasteGraphError::UsageError(_)
            | WasteGraphError::InvalidValue { .. } => ExitCode::Usage,

            WasteGraphError::NodeNotFound { .. }
            | WasteGraphError::MalformedGraph { .. }
            | WasteGraphError::GraphNotFound { .. }
            | WasteGraphError::DatabaseNotFound { .. } => ExitCode::Data,

            WasteGraphError::Io(_)
            | WasteGraphError::Json(_)
            | WasteGraphError::Toml(_)
            | WasteGraphError::FailedOperation { .. }
            | WasteGraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WasteGraphError::UnknownFormat(_) => "unknown_format",
            WasteGraphError::DuplicateFormat => "duplicate_format",
            WasteGraphError::UsageError(_) => "usage_error",
            WasteGraphError::InvalidValue { .. } => "invalid_value",
            WasteGraphError::NodeNotFound { .. } => "node_not_found",
            WasteGraphError::MalformedGraph { .. } => "malformed_graph",
            WasteGraphError::GraphNotFound { .. } => "graph_not_found",
            WasteGraphError::DatabaseNotFound { .. } => "database_not_found",
            WasteGraphError::Io(_) => "io_error",
            WasteGraphError::Json(_) => "json_error",
            WasteGraphError::Toml(_) => "toml_error",
            WasteGraphError::FailedOperation { .. } => "failed_operation",
            WasteGraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            WasteGraphError::NodeNotFound { id } => {
                error_obj["node"] = serde_json::json!(id);
            }
            WasteGraphError::MalformedGraph { problems } => {
                error_obj["problems"] = serde_json::json!(problems);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for wastegraph operations
pub type Result<T> = std::result::Result<T, WasteGraphError>;

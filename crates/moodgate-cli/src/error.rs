//! Error types for CLI commands
//!
//! # Exit Codes
//!
//! | Code | Meaning | Description |
//! |------|---------|-------------|
//! | 0 | Success | Command completed |
//! | 1 | General Error | IO or unspecified failure |
//! | 3 | Contract Violation | Engine invariant breached |
//! | 4 | Invalid Input | Malformed input, flags or configuration |

use moodgate_engine::EngineError;
use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERAL_ERROR: i32 = 1;
pub const EXIT_CONTRACT_VIOLATION: i32 = 3;
pub const EXIT_INVALID_INPUT: i32 = 4;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed flags or input file contents
    /// Exit code: 4
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or failed validation
    /// Exit code: 4
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    /// Exit code: 4
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Engine invariant breached
    /// Exit code: 3
    #[error("Contract violation: {0}")]
    Contract(String),

    /// IO operation failed
    /// Exit code: 1
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Convert to process exit code.
    #[inline]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Contract(_) => EXIT_CONTRACT_VIOLATION,
            Self::InvalidInput(_) | Self::Config(_) | Self::Serialization(_) => EXIT_INVALID_INPUT,
            Self::Io(_) => EXIT_GENERAL_ERROR,
        }
    }

    /// Error code string (e.g., "ERR_CONTRACT")
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "ERR_INVALID_INPUT",
            Self::Config(_) => "ERR_CONFIG",
            Self::Serialization(_) => "ERR_SERIALIZATION",
            Self::Contract(_) => "ERR_CONTRACT",
            Self::Io(_) => "ERR_IO",
        }
    }

    /// Structured JSON error for script consumption.
    pub fn to_json_error(&self) -> serde_json::Value {
        serde_json::json!({
            "error": true,
            "code": self.error_code(),
            "exit_code": self.exit_code(),
            "message": self.to_string(),
        })
    }

    #[inline]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<EngineError> for CliError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Contract(violation) => Self::Contract(violation.to_string()),
            EngineError::Config(msg) => Self::Config(msg),
            EngineError::Io(e) => Self::Io(e),
            other @ (EngineError::InvalidParameter { .. } | EngineError::Serialization(_)) => {
                Self::InvalidInput(other.to_string())
            }
        }
    }
}

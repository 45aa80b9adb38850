//! Error handling for the voting core
//!
//! The original persistence layer surfaced raw I/O and parse failures as-is.
//! This crate classifies them instead so callers can distinguish a full disk
//! from a repeat voter without string matching.

/// Result type alias for the voting core
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the voting core
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Storage I/O errors (permission denied, disk full); fatal for the
    /// operation that hit them, no retry
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Repeat submission by a voter while repeat voting is disabled
    #[error("Voter {voter_id} has already voted")]
    DuplicateVote { voter_id: String },

    /// Invalid session transition
    #[error("Session error: {message}")]
    Session { message: String },

    /// Wrong admin password; user-visible, never halts the process
    #[error("Incorrect admin password")]
    AdminAuth,

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create a new session error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Convenience macro for creating session errors
#[macro_export]
macro_rules! session_error {
    ($msg:expr) => {
        $crate::Error::session($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::session(format!($fmt, $($arg)*))
    };
}

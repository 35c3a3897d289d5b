// SPDX-FileCopyrightText: 2026 Hivelink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by all Hivelink integration adapters.

use thiserror::Error;

/// The primary error type used across adapter traits and operation handlers.
///
/// Every failure surfaces to the host's per-item error handling; nothing is
/// swallowed inside the adapter.
#[derive(Debug, Error)]
pub enum HivelinkError {
    /// Configuration errors (missing credentials, invalid TOML, bad header values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote API failures (connection errors, non-success status codes).
    #[error("API request failed: {message}")]
    Api {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed caller-supplied input, tied to the offending item index.
    #[error("invalid input for item {item}: {message}")]
    InvalidInput { message: String, item: usize },

    /// The resource/operation combination has no handler.
    #[error("unknown operation \"{operation}\" for resource \"{resource}\"")]
    UnknownOperation { resource: String, operation: String },

    /// A bounded wait was exhausted before the remote reported completion.
    #[error("operation did not complete within {waited:?}")]
    Timeout { waited: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl HivelinkError {
    /// Convenience constructor for input errors.
    pub fn invalid_input(message: impl Into<String>, item: usize) -> Self {
        HivelinkError::InvalidInput {
            message: message.into(),
            item,
        }
    }
}

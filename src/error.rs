//! Unified error types for chatstats.
//!
//! This module provides a single [`AnalysisError`] enum that covers every
//! fatal failure the pipeline can hit. Only three things abort a run:
//! unreadable input / unwritable output, bytes that are not valid JSON, and
//! valid JSON whose top level is not the expected archive shape. Everything
//! below the top level (a conversation without a `mapping`, a node without
//! `message.content.parts`) is skipped silently and never reaches this
//! module.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
///
/// fn my_function() -> Result<Vec<String>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// The error type for all chatstats operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error. A run that fails with any of these leaves no
/// partial report file behind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist or can't be read
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes are not valid JSON.
    ///
    /// Contains the underlying decode error and optionally the file path.
    #[error("Failed to parse conversation archive{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The underlying JSON decode error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The document is valid JSON but not shaped like a conversation archive.
    ///
    /// An archive is an array of conversation objects. A top-level object,
    /// string, or an array containing non-objects all land here. Kept
    /// distinct from [`Parse`](AnalysisError::Parse) so callers can tell
    /// malformed JSON from wrong-shape JSON.
    #[error("Invalid JSON format: {message}")]
    InvalidFormat {
        /// Description of what's wrong with the shape
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl AnalysisError {
    /// Creates a parse error, optionally tagged with the offending file.
    pub fn parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        AnalysisError::Parse { source, path }
    }

    /// Creates an invalid format (wrong top-level shape) error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        AnalysisError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, AnalysisError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, AnalysisError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, AnalysisError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

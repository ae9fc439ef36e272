//! Error types for parameter editing.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

/// Committed text could not be interpreted as a real number.
///
/// This is a recoverable, user-facing condition: the editor that produced it
/// has kept its previous valid value, and the host only needs the error to
/// drive UI feedback (an "N/A" display, a red border). It never propagates
/// as a fatal fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse '{text}' as a number")]
pub struct ParseError {
    /// The rejected input, trimmed.
    pub text: String,
}

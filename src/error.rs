//! Error types used by the stanzaflow batch runtime.
//!
//! This module defines two error enums:
//!
//! - [`ReadError`] — failures raised while fetching a stanza from a source.
//! - [`WriteError`] — failures raised by the standalone write primitive.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging
//! and assertions. Read failures are the only failure kind that flows through
//! a batch: how far one travels is decided by the request's
//! [`ErrorPolicy`](crate::ErrorPolicy), not by the error itself.

use std::io;

use thiserror::Error;

/// # Errors produced while fetching a stanza.
///
/// A failed fetch never aborts the process: under
/// [`ErrorPolicy::Ignore`](crate::ErrorPolicy::Ignore) it is swallowed at the
/// point of resolution, under
/// [`ErrorPolicy::Propagate`](crate::ErrorPolicy::Propagate) the first one is
/// carried in the batch outcome.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ReadError {
    /// The underlying filesystem read errored (missing file, permissions, ...).
    #[error("read failed for {path}: {source}")]
    Failed {
        /// Path of the stanza whose read failed.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl ReadError {
    /// Returns a short stable label (snake_case) for use in logs/assertions.
    ///
    /// # Example
    /// ```
    /// use stanzaflow::ReadError;
    ///
    /// let err = ReadError::Failed {
    ///     path: "stanza-01.txt".into(),
    ///     source: std::io::Error::other("boom"),
    /// };
    /// assert_eq!(err.as_label(), "read_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ReadError::Failed { .. } => "read_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ReadError::Failed { path, source } => format!("read of {path} failed: {source}"),
        }
    }

    /// Path of the stanza whose read failed.
    pub fn path(&self) -> &str {
        match self {
            ReadError::Failed { path, .. } => path,
        }
    }
}

/// # Errors produced by the standalone write primitive.
///
/// Write failures never reach a batch outcome: [`write_text`](crate::write_text)
/// is independent of the sequencer's data flow.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum WriteError {
    /// The underlying filesystem write errored.
    #[error("write failed for {path}: {source}")]
    Failed {
        /// Path of the file whose write failed.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl WriteError {
    /// Returns a short stable label (snake_case) for use in logs/assertions.
    pub fn as_label(&self) -> &'static str {
        match self {
            WriteError::Failed { .. } => "write_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            WriteError::Failed { path, source } => format!("write of {path} failed: {source}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(path: &str) -> ReadError {
        ReadError::Failed {
            path: path.into(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        }
    }

    #[test]
    fn read_error_label_and_message() {
        let err = missing("stanza-05.txt");
        assert_eq!(err.as_label(), "read_failed");
        assert_eq!(err.path(), "stanza-05.txt");
        assert!(err.as_message().contains("stanza-05.txt"));
    }

    #[test]
    fn write_error_label() {
        let err = WriteError::Failed {
            path: "out.txt".into(),
            source: io::Error::other("disk full"),
        };
        assert_eq!(err.as_label(), "write_failed");
        assert!(err.to_string().contains("out.txt"));
    }
}

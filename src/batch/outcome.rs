//! # Terminal signal of one batch.
//!
//! [`BatchOutcome`] is produced exactly once per [`Sequencer::run`](crate::Sequencer::run):
//! either every requested stanza was processed, or the first read failure
//! encountered under [`ErrorPolicy::Propagate`](crate::ErrorPolicy::Propagate)
//! is carried with the identifier it belongs to.
//!
//! Under [`ErrorPolicy::Ignore`](crate::ErrorPolicy::Ignore) the outcome is
//! always `Completed` — swallowed failures are invisible end to end.

use crate::error::ReadError;

use super::stanza::StanzaId;

/// Result of running one [`BatchRequest`](crate::BatchRequest).
#[derive(Debug)]
pub enum BatchOutcome {
    /// Every read the policy allowed was processed and the batch finished.
    Completed,

    /// The first read failure surfaced under `ErrorPolicy::Propagate`.
    ///
    /// In series mode no read was issued past `id`; in parallel mode later
    /// reads were already in flight and settled unobserved.
    Failed {
        /// Identifier whose read failed.
        id: StanzaId,
        /// The failure cause.
        error: ReadError,
    },
}

impl BatchOutcome {
    /// True if the batch finished without a surfaced failure.
    pub fn is_completed(&self) -> bool {
        matches!(self, BatchOutcome::Completed)
    }

    /// True if a failure was surfaced.
    pub fn is_failed(&self) -> bool {
        !self.is_completed()
    }

    /// The surfaced failure, if any.
    pub fn failure(&self) -> Option<(&StanzaId, &ReadError)> {
        match self {
            BatchOutcome::Completed => None,
            BatchOutcome::Failed { id, error } => Some((id, error)),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/assertions.
    pub fn as_label(&self) -> &'static str {
        match self {
            BatchOutcome::Completed => "batch_completed",
            BatchOutcome::Failed { .. } => "batch_failed",
        }
    }
}

//! # Issuance modes for batch reads.
//!
//! [`Mode`] determines when each read of a batch is started relative to the
//! others. Issuance is distinct from completion: a parallel batch *starts*
//! every read before awaiting any of them, but their completions interleave
//! however the underlying I/O resolves.
//!
//! ## Choosing the right mode
//!
//! **Ordered presentation** (stanzas must appear in input order):
//! ```text
//! Mode::Series       → read i+1 is not issued until read i has settled;
//!                      wall clock ≈ sum of the individual delays
//! ```
//!
//! **Fastest overall completion** (order of appearance does not matter):
//! ```text
//! Mode::Parallel     → all reads issued before any is awaited;
//!                      wall clock ≈ the slowest single read
//! ```

/// Policy controlling when the reads of a batch are issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// All reads are issued concurrently, before any is awaited.
    ///
    /// No ordering of completions is guaranteed; emission order depends on
    /// the request's [`ErrorPolicy`](crate::ErrorPolicy).
    Parallel,
    /// Reads are issued one at a time, each gated on the previous read's
    /// settlement (default).
    Series,
}

impl Default for Mode {
    /// Returns [`Mode::Series`].
    fn default() -> Self {
        Mode::Series
    }
}

//! # Error policies for batch reads.
//!
//! [`ErrorPolicy`] determines what an individual [`ReadError`](crate::ReadError)
//! does to the rest of its batch.
//!
//! - [`ErrorPolicy::Ignore`] the failure is swallowed where it resolves; the
//!   sink never sees the item, the batch carries on and completes normally.
//! - [`ErrorPolicy::Propagate`] the first failure becomes the batch outcome;
//!   under [`Mode::Series`](crate::Mode::Series) no further read is issued.
//!
//! Either way the sink's completion signal fires exactly once: a propagated
//! failure is *handled*, not fatal to the caller.

/// Policy controlling how read failures affect the batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Swallow individual failures silently (default).
    ///
    /// The failed item is never emitted and never reported; every identifier
    /// in the request still gets its read issued.
    Ignore,
    /// Surface the first failure as the batch outcome.
    ///
    /// Emission stops at the failing item. In series mode, issuance stops
    /// there too; in parallel mode every read has already been issued and
    /// in-flight reads simply settle unobserved.
    Propagate,
}

impl Default for ErrorPolicy {
    /// Returns [`ErrorPolicy::Ignore`].
    fn default() -> Self {
        ErrorPolicy::Ignore
    }
}

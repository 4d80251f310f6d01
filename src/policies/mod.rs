//! Batch policies.
//!
//! This module groups the knobs that control **when** reads are issued,
//! **what** happens when one fails, and **how long** a simulated read takes.
//!
//! ## Contents
//! - [`Mode`] issuance order of a batch (series / parallel)
//! - [`ErrorPolicy`] what a read failure does to the batch (ignore / propagate)
//! - [`DelayPolicy`] simulated per-read scheduling latency (none / fixed / uniform)
//!
//! ## Quick wiring
//! ```text
//! BatchRequest { ids, mode: Mode, policy: ErrorPolicy }
//!      └─► Sequencer::run uses:
//!           - mode to decide issuance (gated loop vs. all-at-once)
//!           - policy to decide failure handling (swallow vs. short-circuit)
//! FsSource { delay: DelayPolicy }
//!      └─► DelayPolicy::wait() before each filesystem read
//! ```
//!
//! ## Defaults
//! - `Mode::Series` (deterministic emission order).
//! - `ErrorPolicy::Ignore` (individual failures stay invisible).
//! - `DelayPolicy::Uniform { max: 200ms }` — visibly shuffles completion
//!   order under `Mode::Parallel`; use `None` for deterministic tests.

mod delay;
mod failure;
mod mode;

pub use delay::DelayPolicy;
pub use failure::ErrorPolicy;
pub use mode::Mode;

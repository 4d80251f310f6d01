//! Presentation sinks.
//!
//! This module provides the [`Sink`] trait and built-in implementations for
//! consuming the stanzas a batch produces.
//!
//! ## Architecture
//! ```text
//! Stanza flow:
//!   Sequencer ── on_stanza(&Stanza) ──► Sink          (per success, in the
//!             ── on_complete(&BatchOutcome) ──►        policy-defined order;
//!                                                      completion exactly once)
//!                  ┌─────────┬──────────┐
//!                  ▼         ▼          ▼
//!              ConsoleSink  Recorder  Fanout ──► [inner sinks, in order]
//! ```
//!
//! ## Implementing custom sinks
//! ```rust
//! use async_trait::async_trait;
//! use stanzaflow::{BatchOutcome, Sink, Stanza};
//!
//! struct Counter(std::sync::atomic::AtomicUsize);
//!
//! #[async_trait]
//! impl Sink for Counter {
//!     async fn on_stanza(&self, _stanza: &Stanza) {
//!         self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
//!     }
//!     async fn on_complete(&self, _outcome: &BatchOutcome) {}
//! }
//! ```

mod fanout;
mod recorder;
mod sink;

#[cfg(feature = "logging")]
mod console;

pub use fanout::Fanout;
pub use recorder::Recorder;
pub use sink::{Sink, SinkRef};

#[cfg(feature = "logging")]
pub use console::ConsoleSink;

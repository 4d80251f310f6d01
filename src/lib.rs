//! # stanzaflow
//!
//! **Stanzaflow** is a small batch file-reading orchestration library for Rust.
//!
//! It reads an ordered set of text fragments ("stanzas") and forwards each
//! one to a presentation sink, with configurable issuance modes (all reads at
//! once vs. one gated on the previous) and error policies (swallow individual
//! failures vs. stop at the first one). The crate is designed as a building
//! block for pipelines that consume many small files and care about the
//! order and failure semantics of the whole batch rather than any single read.
//!
//! ## Architecture
//! ```text
//!   BatchRequest { ids, mode, policy }
//!        │
//!        ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Sequencer                                                   │
//! │  - Mode::Series   → read i+1 issued after read i settles     │
//! │  - Mode::Parallel → all reads issued before any is awaited   │
//! │  - ErrorPolicy    → Ignore (swallow) | Propagate (stop)      │
//! └──────┬──────────────────────────────────────┬────────────────┘
//!        ▼                                      ▼
//!   Source::fetch(id)                      Sink::on_stanza(stanza)
//!   (FsSource: DelayPolicy::wait,          (per success, in the
//!    then tokio::fs — or SourceFn)          policy-defined order)
//!                                          Sink::on_complete(outcome)
//!                                          (exactly once per batch)
//! ```
//!
//! ## Behavior matrix
//! | Mode | Policy | Issuance | Emission order | On failure |
//! |------|--------|----------|----------------|------------|
//! | `Parallel` | `Ignore` | all up front | completion order | dropped silently |
//! | `Parallel` | `Propagate` | all up front | input order (prefix) | first failure surfaced, in-flight reads settle |
//! | `Series` | `Ignore` | one at a time | input order | dropped silently, sequencing continues |
//! | `Series` | `Propagate` | one at a time | input order (prefix) | no further reads issued, first failure surfaced |
//!
//! Whatever the combination, the sink's completion signal fires exactly once
//! per batch.
//!
//! ## Features
//! | Area | Description | Key types / traits |
//! |------|-------------|--------------------|
//! | **Sources** | Where stanza text comes from (filesystem, functions). | [`Source`], [`FsSource`], [`SourceFn`] |
//! | **Sinks** | Where stanza text goes (console, recorder, composites). | [`Sink`], [`Recorder`], [`Fanout`] |
//! | **Policies** | Issuance mode, failure handling, simulated latency. | [`Mode`], [`ErrorPolicy`], [`DelayPolicy`] |
//! | **Batches** | Request/outcome model and the sequencer itself. | [`BatchRequest`], [`BatchOutcome`], [`Sequencer`] |
//! | **Errors** | Typed read/write failures. | [`ReadError`], [`WriteError`] |
//!
//! ## Optional features
//! - `logging`: exports the built-in stdout [`ConsoleSink`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use stanzaflow::{
//!     BatchRequest, ErrorPolicy, Mode, ReadError, Recorder, Sequencer, SourceFn, StanzaId,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // A source that serves stanza text from memory (no filesystem, no delay).
//!     let source = SourceFn::arc(|id: StanzaId| async move {
//!         Ok::<String, ReadError>(format!("text of {id}"))
//!     });
//!
//!     let sink = Arc::new(Recorder::new());
//!     let sequencer = Sequencer::new(source, sink.clone());
//!
//!     let ids: Vec<StanzaId> = ["stanza-01.txt", "stanza-02.txt"]
//!         .into_iter()
//!         .map(StanzaId::from)
//!         .collect();
//!     let outcome = sequencer
//!         .run(BatchRequest::new(ids, Mode::Series, ErrorPolicy::Propagate))
//!         .await;
//!
//!     assert!(outcome.is_completed());
//!     assert_eq!(sink.texts(), vec!["text of stanza-01.txt", "text of stanza-02.txt"]);
//!     assert_eq!(sink.completions(), 1);
//! }
//! ```
mod batch;
mod config;
mod error;
mod policies;
mod sinks;
mod sources;
mod write;

// ---- Public re-exports ----

pub use batch::{BatchOutcome, BatchRequest, Sequencer, Stanza, StanzaId};
pub use config::Config;
pub use error::{ReadError, WriteError};
pub use policies::{DelayPolicy, ErrorPolicy, Mode};
pub use sinks::{Fanout, Recorder, Sink, SinkRef};
pub use sources::{FsSource, Source, SourceFn, SourceRef};
pub use write::write_text;

// Optional: expose a simple built-in console sink (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use sinks::ConsoleSink;

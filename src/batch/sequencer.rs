//! # Run one batch of reads against a source, driving a sink.
//!
//! Executes every read of a [`BatchRequest`] per its [`Mode`] and
//! [`ErrorPolicy`], forwards each produced [`Stanza`] to the [`Sink`], and
//! settles into a single [`BatchOutcome`].
//!
//! ## Flow
//! ```text
//! Series:
//!   fetch(id[0]) → settle → emit/skip → fetch(id[1]) → ...
//!                          └─ Propagate + Err → stop issuing, outcome Failed
//!
//! Parallel + Ignore:
//!   fetch(id[0..n]) all issued → drain in completion order → emit successes
//!
//! Parallel + Propagate:
//!   fetch(id[0..n]) all issued → drain in input order → emit until first Err
//!
//! Always:
//!   sink.on_complete(&outcome)   (exactly once, after draining)
//! ```
//!
//! ## Rules
//! - The sink's completion signal fires **exactly one** time per run,
//!   whatever the mode, policy, or number of failures.
//! - Under `Ignore`, a failed read is invisible: not emitted, not reported,
//!   and never the batch outcome.
//! - Under `Propagate`, exactly one failure is surfaced — the first in
//!   issuance order — and it is *handled*: completion still fires after it.
//! - Once issued, a read always settles; nothing here cancels in-flight I/O.
//! - Reads are multiplexed on the calling task. Parallelism means overlapped
//!   I/O suspension, not threads.

use futures::future;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::policies::{ErrorPolicy, Mode};
use crate::sinks::SinkRef;
use crate::sources::SourceRef;

use super::outcome::BatchOutcome;
use super::request::BatchRequest;
use super::stanza::Stanza;

/// Issues the reads of a batch and drives the presentation sink.
///
/// Holds the two collaborators every batch needs: the [`Source`](crate::Source)
/// reads are fetched from and the [`Sink`](crate::Sink) stanzas are emitted
/// to. One sequencer can run any number of batches.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use stanzaflow::{
///     BatchRequest, ErrorPolicy, Mode, ReadError, Recorder, Sequencer, SourceFn, StanzaId,
/// };
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = SourceFn::arc(|id: StanzaId| async move {
///     Ok::<String, ReadError>(format!("<{id}>"))
/// });
/// let sink = Arc::new(Recorder::new());
///
/// let sequencer = Sequencer::new(source, sink.clone());
/// let ids = vec![StanzaId::from("one"), StanzaId::from("two")];
/// let outcome = sequencer
///     .run(BatchRequest::new(ids, Mode::Parallel, ErrorPolicy::Ignore))
///     .await;
///
/// assert!(outcome.is_completed());
/// assert_eq!(sink.completions(), 1);
/// # }
/// ```
pub struct Sequencer {
    source: SourceRef,
    sink: SinkRef,
}

impl Sequencer {
    /// Creates a sequencer over the given source and sink.
    pub fn new(source: SourceRef, sink: SinkRef) -> Self {
        Self { source, sink }
    }

    /// Runs one batch to its outcome.
    ///
    /// Emits every produced stanza to the sink in the order defined by the
    /// request's mode and policy, then emits the completion signal and
    /// returns the same outcome to the caller.
    pub async fn run(&self, request: BatchRequest) -> BatchOutcome {
        let outcome = match (request.mode(), request.policy()) {
            (Mode::Series, _) => self.series(&request).await,
            (Mode::Parallel, ErrorPolicy::Ignore) => self.parallel_ignore(&request).await,
            (Mode::Parallel, ErrorPolicy::Propagate) => self.parallel_propagate(&request).await,
        };
        self.sink.on_complete(&outcome).await;
        outcome
    }

    /// One read at a time, each issued only after the previous settles.
    ///
    /// Handles both policies: `Ignore` skips failed items and keeps going,
    /// `Propagate` returns at the first failure without issuing further reads.
    async fn series(&self, request: &BatchRequest) -> BatchOutcome {
        for id in request.ids() {
            match self.source.fetch(id).await {
                Ok(text) => {
                    let stanza = Stanza {
                        id: id.clone(),
                        text,
                    };
                    self.sink.on_stanza(&stanza).await;
                }
                Err(error) => match request.policy() {
                    ErrorPolicy::Ignore => {}
                    ErrorPolicy::Propagate => {
                        return BatchOutcome::Failed {
                            id: id.clone(),
                            error,
                        };
                    }
                },
            }
        }
        BatchOutcome::Completed
    }

    /// All reads issued up front, successes emitted in completion order.
    async fn parallel_ignore(&self, request: &BatchRequest) -> BatchOutcome {
        let source = &self.source;
        let mut pending: FuturesUnordered<_> = request
            .ids()
            .iter()
            .map(|id| async move { (id.clone(), source.fetch(id).await) })
            .collect();

        while let Some((id, result)) = pending.next().await {
            if let Ok(text) = result {
                self.sink.on_stanza(&Stanza { id, text }).await;
            }
        }
        BatchOutcome::Completed
    }

    /// All reads issued up front, results drained in input order.
    ///
    /// Emission stops at the first failing index. Reads past it were already
    /// issued and settle unobserved; they are awaited, never cancelled.
    async fn parallel_propagate(&self, request: &BatchRequest) -> BatchOutcome {
        let results = future::join_all(request.ids().iter().map(|id| self.source.fetch(id))).await;

        for (id, result) in request.ids().iter().zip(results) {
            match result {
                Ok(text) => {
                    let stanza = Stanza {
                        id: id.clone(),
                        text,
                    };
                    self.sink.on_stanza(&stanza).await;
                }
                Err(error) => {
                    return BatchOutcome::Failed {
                        id: id.clone(),
                        error,
                    };
                }
            }
        }
        BatchOutcome::Completed
    }
}

//! # Core sink trait.
//!
//! `Sink` is the extension point for consuming batch output. The sequencer
//! awaits every call, so delivery order is exactly the emission order the
//! request's policy defines, and the completion signal arrives exactly once
//! per batch after the last stanza.
//!
//! ## Contract
//! - [`Sink::on_stanza`] is called once per successfully produced item.
//!   Failed reads never reach the sink.
//! - [`Sink::on_complete`] is called exactly once per batch, after
//!   emission has finished, carrying the surfaced failure if there was one.

use async_trait::async_trait;

use crate::batch::{BatchOutcome, Stanza};

/// # Shared handle to a sink object.
///
/// This is the type consumed by [`Sequencer::new`](crate::Sequencer::new).
pub type SinkRef = std::sync::Arc<dyn Sink>;

/// Contract for batch output consumers.
///
/// Called from the sequencer's task; implementations should avoid blocking
/// the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Sink: Send + Sync + 'static {
    /// Consumes one successfully produced stanza.
    async fn on_stanza(&self, stanza: &Stanza);

    /// Consumes the batch's terminal signal.
    ///
    /// A failed outcome is a *handled* failure: it always arrives through
    /// this same, final call — never as an extra completion.
    async fn on_complete(&self, outcome: &BatchOutcome);

    /// Human-readable name (for diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

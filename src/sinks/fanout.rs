//! # Ordered fan-out over several sinks.
//!
//! [`Fanout`] forwards every call to each inner sink, awaited in the order
//! they were registered. Delivery is synchronous with the batch: the
//! sequencer's ordering and exactly-once guarantees hold for every inner
//! sink, at the cost of the slowest one pacing the rest.

use async_trait::async_trait;

use crate::batch::{BatchOutcome, Stanza};

use super::sink::{Sink, SinkRef};

/// Composite sink delivering to every inner sink, in registration order.
pub struct Fanout {
    sinks: Vec<SinkRef>,
}

impl Fanout {
    /// Creates a fan-out over the given sinks.
    pub fn new(sinks: Vec<SinkRef>) -> Self {
        Self { sinks }
    }

    /// Number of inner sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// True if there are no inner sinks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[async_trait]
impl Sink for Fanout {
    async fn on_stanza(&self, stanza: &Stanza) {
        for sink in &self.sinks {
            sink.on_stanza(stanza).await;
        }
    }

    async fn on_complete(&self, outcome: &BatchOutcome) {
        for sink in &self.sinks {
            sink.on_complete(outcome).await;
        }
    }

    fn name(&self) -> &'static str {
        "fanout"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::Recorder;
    use crate::StanzaId;
    use std::sync::Arc;

    #[tokio::test]
    async fn every_inner_sink_sees_every_call() {
        let first = Arc::new(Recorder::new());
        let second = Arc::new(Recorder::new());
        let fanout = Fanout::new(vec![first.clone() as SinkRef, second.clone() as SinkRef]);
        assert_eq!(fanout.len(), 2);

        fanout
            .on_stanza(&Stanza {
                id: StanzaId::from("s.txt"),
                text: "verse".into(),
            })
            .await;
        fanout.on_complete(&BatchOutcome::Completed).await;

        for recorder in [first, second] {
            assert_eq!(recorder.texts(), vec!["verse"]);
            assert_eq!(recorder.completions(), 1);
        }
    }
}

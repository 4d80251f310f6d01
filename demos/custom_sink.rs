//! # Demo: custom_sink
//!
//! Implementing [`Sink`] by hand: a sink that prints each stanza under a
//! numbered heading and reports the batch outcome label at the end.
//!
//! Demonstrates how to:
//! - Implement the [`Sink`] trait for your own type.
//! - Serve stanza text from memory with [`SourceFn`] (no filesystem).
//!
//! ## Run
//! ```bash
//! cargo run --example custom_sink
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use stanzaflow::{
    BatchOutcome, BatchRequest, ErrorPolicy, Mode, ReadError, Sequencer, Sink, SourceFn, Stanza,
    StanzaId,
};

/// Prints stanzas under numbered headings.
struct Headings {
    count: AtomicUsize,
}

#[async_trait]
impl Sink for Headings {
    async fn on_stanza(&self, stanza: &Stanza) {
        let n = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        println!("== {n}. {} ==", stanza.id);
        println!("{}", stanza.text);
    }

    async fn on_complete(&self, outcome: &BatchOutcome) {
        println!("-- {} --", outcome.as_label());
    }

    fn name(&self) -> &'static str {
        "headings"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // An in-memory source: each id resolves to a couplet derived from it.
    let source = SourceFn::arc(|id: StanzaId| async move {
        Ok::<String, ReadError>(format!("A verse for {id},\nmade of nothing but its name."))
    });

    let sink = Arc::new(Headings {
        count: AtomicUsize::new(0),
    });

    let ids: Vec<StanzaId> = (1..=3)
        .map(|n| StanzaId::from(format!("verse-{n:02}")))
        .collect();

    Sequencer::new(source, sink)
        .run(BatchRequest::new(ids, Mode::Series, ErrorPolicy::Propagate))
        .await;
}

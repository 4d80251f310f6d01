//! # Stateful recording sink.
//!
//! [`Recorder`] accumulates everything a batch emits: the stanzas in arrival
//! order, the messages of surfaced failures, and a completion counter. It is
//! the fixture the crate's own tests assert against, and works the same for
//! downstream test suites.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::batch::{BatchOutcome, Stanza};

use super::sink::Sink;

/// Records emitted stanzas, surfaced failures, and completion signals.
///
/// Cheap to share (`Arc<Recorder>`): keep a clone of the handle you pass to
/// the sequencer and inspect it after `run` returns.
#[derive(Debug, Default)]
pub struct Recorder {
    stanzas: Mutex<Vec<Stanza>>,
    failures: Mutex<Vec<String>>,
    completions: AtomicUsize,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stanzas received so far, in arrival order.
    pub fn stanzas(&self) -> Vec<Stanza> {
        self.stanzas.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Snapshot of the received stanza texts, in arrival order.
    pub fn texts(&self) -> Vec<String> {
        self.stanzas
            .lock()
            .map(|g| g.iter().map(|s| s.text.clone()).collect())
            .unwrap_or_default()
    }

    /// Messages of the failures surfaced through completion signals.
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Number of completion signals received.
    pub fn completions(&self) -> usize {
        self.completions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Sink for Recorder {
    async fn on_stanza(&self, stanza: &Stanza) {
        if let Ok(mut stanzas) = self.stanzas.lock() {
            stanzas.push(stanza.clone());
        }
    }

    async fn on_complete(&self, outcome: &BatchOutcome) {
        if let Some((id, error)) = outcome.failure() {
            if let Ok(mut failures) = self.failures.lock() {
                failures.push(format!("{id}: {error}"));
            }
        }
        self.completions.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::StanzaId;
    use crate::error::ReadError;

    #[tokio::test]
    async fn records_stanzas_in_arrival_order() {
        let recorder = Recorder::new();
        for n in 1..=3 {
            recorder
                .on_stanza(&Stanza {
                    id: StanzaId::from(format!("stanza-{n:02}.txt")),
                    text: format!("verse {n}"),
                })
                .await;
        }
        assert_eq!(recorder.texts(), vec!["verse 1", "verse 2", "verse 3"]);
        assert_eq!(recorder.completions(), 0);
    }

    #[tokio::test]
    async fn counts_completions_and_keeps_failure_messages() {
        let recorder = Recorder::new();
        recorder.on_complete(&BatchOutcome::Completed).await;
        recorder
            .on_complete(&BatchOutcome::Failed {
                id: StanzaId::from("gone.txt"),
                error: ReadError::Failed {
                    path: "gone.txt".into(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                },
            })
            .await;

        assert_eq!(recorder.completions(), 2);
        let failures = recorder.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("gone.txt:"));
    }
}

//! # Simple console sink for debugging and demos.
//!
//! [`ConsoleSink`] prints batch output to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! <stanza text, verbatim>
//!
//! [failed] stanza=wrong-stanza-03.txt err="read failed for ..."
//! done
//! ```
//!
//! Stanza text is printed as-is; only the terminal lines are decorated. A
//! batch that surfaced no failure prints just `done`.

use async_trait::async_trait;

use crate::batch::{BatchOutcome, Stanza};

use super::sink::Sink;

/// Stdout sink, enabled via the `logging` feature.
///
/// Not intended for production use - implement a custom [`Sink`] for
/// structured output or persistence.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

#[async_trait]
impl Sink for ConsoleSink {
    async fn on_stanza(&self, stanza: &Stanza) {
        println!("{}", stanza.text);
    }

    async fn on_complete(&self, outcome: &BatchOutcome) {
        if let Some((id, error)) = outcome.failure() {
            eprintln!("[failed] stanza={id} err={:?}", error.to_string());
        }
        println!("done");
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

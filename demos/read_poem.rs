//! # Demo: read_poem
//!
//! Reads the stanzas of a short poem from disk and prints them through the
//! console sink, one scenario per process argument.
//!
//! Demonstrates how to:
//! - Stage a poem as one file per stanza.
//! - Run the same identifiers under every mode × policy combination.
//! - Inject a failure by corrupting one identifier at batch-construction time.
//!
//! ## Scenarios
//! ```text
//! parallel  → Mode::Parallel + ErrorPolicy::Ignore   (any order, then done)
//! series    → Mode::Series   + ErrorPolicy::Ignore   (in order, then done)
//! faulty    → Mode::Series   + ErrorPolicy::Propagate
//!             (one random identifier is corrupted; stanzas before it print,
//!              the failure prints once, done still prints)
//! write     → the standalone deferred write primitive
//! ```
//!
//! Scenario names are case-insensitive; unrecognized names are ignored.
//!
//! ## Run
//! ```bash
//! cargo run --example read_poem --features logging -- series faulty
//! ```

use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use stanzaflow::{
    BatchRequest, Config, ConsoleSink, DelayPolicy, ErrorPolicy, FsSource, Mode, Sequencer,
    StanzaId, write_text,
};

/// "The Tyger" (William Blake, 1794), one entry per stanza.
const POEM: [&str; 6] = [
    "Tyger Tyger, burning bright,\nIn the forests of the night;\nWhat immortal hand or eye,\nCould frame thy fearful symmetry?",
    "In what distant deeps or skies.\nBurnt the fire of thine eyes?\nOn what wings dare he aspire?\nWhat the hand, dare seize the fire?",
    "And what shoulder, & what art,\nCould twist the sinews of thy heart?\nAnd when thy heart began to beat,\nWhat dread hand? & what dread feet?",
    "What the hammer? what the chain,\nIn what furnace was thy brain?\nWhat the anvil? what dread grasp,\nDare its deadly terrors clasp!",
    "When the stars threw down their spears\nAnd water'd heaven with their tears:\nDid he smile his work to see?\nDid he who made the Lamb make thee?",
    "Tyger Tyger burning bright,\nIn the forests of the night:\nWhat immortal hand or eye,\nDare frame thy fearful symmetry?",
];

/// Writes one file per stanza and returns their ids in poem order.
fn stage_poem(dir: &Path) -> std::io::Result<Vec<StanzaId>> {
    let mut ids = Vec::with_capacity(POEM.len());
    for (i, text) in POEM.iter().enumerate() {
        let path = dir.join(format!("stanza-{:02}.txt", i + 1));
        std::fs::write(&path, format!("{text}\n"))?;
        ids.push(StanzaId::from(path.to_string_lossy().into_owned()));
    }
    Ok(ids)
}

fn sequencer() -> Sequencer {
    // Default delay (uniform 0-200ms) keeps the parallel scenario's output
    // order fresh across runs.
    Sequencer::new(FsSource::arc(DelayPolicy::default()), Arc::new(ConsoleSink))
}

/// Log every stanza in any order, then `done` (reads overlap).
async fn parallel(ids: Vec<StanzaId>) {
    println!("-- parallel --");
    sequencer()
        .run(BatchRequest::new(ids, Mode::Parallel, ErrorPolicy::Ignore))
        .await;
}

/// Log every stanza in poem order, then `done` (reads one at a time).
async fn series(ids: Vec<StanzaId>) {
    println!("-- series --");
    sequencer()
        .run(BatchRequest::with_defaults(ids, &Config::default()))
        .await;
}

/// Corrupt one identifier, chosen at batch-construction time, and surface
/// the failure: stanzas before it print, the failure prints once, `done`
/// still prints, and nothing past the corrupt index is ever read.
async fn faulty(mut ids: Vec<StanzaId>) {
    println!("-- faulty --");
    let k = rand::rng().random_range(0..ids.len());
    ids[k] = StanzaId::from(format!("wrong-stanza-{:02}.txt", k + 1));
    sequencer()
        .run(BatchRequest::new(ids, Mode::Series, ErrorPolicy::Propagate))
        .await;
}

/// The standalone write primitive: resolves with the written text.
async fn write(dir: &Path) {
    println!("-- write --");
    let path = dir.join("stanza-99.txt");
    match write_text(&path, "What the hand, dare seize the fire?\n").await {
        Ok(echoed) => print!("wrote {}: {echoed}", path.display()),
        Err(err) => eprintln!("[failed] err={:?}", err.to_string()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Stage the poem in a scratch directory
    let dir = tempfile::tempdir()?;
    let ids = stage_poem(dir.path())?;

    // 2. Run every scenario named on the command line, in the given order
    let scenarios: Vec<String> = std::env::args()
        .skip(1)
        .map(|arg| arg.to_lowercase())
        .collect();
    if scenarios.is_empty() {
        eprintln!("usage: read_poem [parallel|series|faulty|write]...");
    }

    for scenario in &scenarios {
        match scenario.as_str() {
            "parallel" => parallel(ids.clone()).await,
            "series" => series(ids.clone()).await,
            "faulty" => faulty(ids.clone()).await,
            "write" => write(dir.path()).await,
            // unrecognized scenario names are ignored
            _ => {}
        }
    }
    Ok(())
}

//! Batch data model and the sequencer.
//!
//! ## Contents
//! - [`StanzaId`], [`Stanza`] identifier and produced item
//! - [`BatchRequest`] ordered ids + mode + error policy
//! - [`BatchOutcome`] terminal signal of one batch
//! - [`Sequencer`] issues the reads and drives the sink
//!
//! See `sequencer.rs` for the mode × policy behavior table.

mod outcome;
mod request;
mod sequencer;
mod stanza;

pub use outcome::BatchOutcome;
pub use request::BatchRequest;
pub use sequencer::Sequencer;
pub use stanza::{Stanza, StanzaId};

//! Stanza sources.
//!
//! This module provides the reader side of the pipeline:
//! - [`Source`] - trait for async stanza readers
//! - [`SourceRef`] - shared reference to a source (`Arc<dyn Source>`)
//! - [`FsSource`] - filesystem reader with simulated scheduling delay
//! - [`SourceFn`] - function-backed source for fixtures and adapters

mod fs;
mod source;
mod source_fn;

pub use fs::FsSource;
pub use source::{Source, SourceRef};
pub use source_fn::SourceFn;

//! # Source abstraction.
//!
//! A [`Source`] resolves a [`StanzaId`] to its text, asynchronously, exactly
//! once per call. The returned future *is* the deferred value: it settles
//! with the text or with the single [`ReadError`] failure kind, and the
//! sequencer decides how far a failure travels.
//!
//! The common handle type is [`SourceRef`], an `Arc<dyn Source>` suitable for
//! sharing across batches.

use async_trait::async_trait;

use crate::batch::StanzaId;
use crate::error::ReadError;

/// # Shared handle to a source object.
///
/// This is the type consumed by [`Sequencer::new`](crate::Sequencer::new).
pub type SourceRef = std::sync::Arc<dyn Source>;

/// # Asynchronous stanza reader.
///
/// Implementations should be safe to call concurrently: parallel batches
/// fetch several ids through the same `&self` at once.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use stanzaflow::{ReadError, Source, StanzaId};
///
/// struct Upper;
///
/// #[async_trait]
/// impl Source for Upper {
///     async fn fetch(&self, id: &StanzaId) -> Result<String, ReadError> {
///         Ok(id.as_str().to_uppercase())
///     }
/// }
/// ```
#[async_trait]
pub trait Source: Send + Sync + 'static {
    /// Resolves one identifier to its text, or the failure cause.
    ///
    /// Settles exactly once; the sequencer never retries a fetch.
    async fn fetch(&self, id: &StanzaId) -> Result<String, ReadError>;
}

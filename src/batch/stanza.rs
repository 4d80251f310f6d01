//! # Stanza identifiers and produced items.
//!
//! A [`StanzaId`] names one text fragment, usually by file path. Ids are
//! cheap to clone (`Arc<str>` inside) because every read, event, and outcome
//! carries one. A [`Stanza`] is the successful result of a read: the id plus
//! the text it produced.

use std::fmt;
use std::sync::Arc;

/// Identifier of a single stanza, usually a file path.
///
/// The order of ids inside a [`BatchRequest`](crate::BatchRequest) is
/// significant: series mode issues and emits in exactly this order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StanzaId(Arc<str>);

impl StanzaId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StanzaId {
    fn from(value: &str) -> Self {
        StanzaId(Arc::from(value))
    }
}

impl From<String> for StanzaId {
    fn from(value: String) -> Self {
        StanzaId(Arc::from(value))
    }
}

impl AsRef<str> for StanzaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StanzaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One successfully produced text fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stanza {
    /// Identifier the text was read from.
    pub id: StanzaId,
    /// The text itself.
    pub text: String,
}

//! # Filesystem source with simulated scheduling delay.
//!
//! [`FsSource`] resolves a [`StanzaId`] as a file path: it pauses per its
//! [`DelayPolicy`], then reads the file with `tokio::fs`. The delay models
//! variable I/O latency so that parallel batches complete in visibly
//! non-deterministic order; construct with [`DelayPolicy::None`] for
//! deterministic reads.

use std::path::Path;

use async_trait::async_trait;

use crate::batch::StanzaId;
use crate::error::ReadError;
use crate::policies::DelayPolicy;

use super::source::{Source, SourceRef};

/// Reads stanza text from the filesystem after a policy-driven pause.
///
/// # Example
/// ```no_run
/// use stanzaflow::{DelayPolicy, FsSource, SourceRef};
///
/// // Deterministic reads:
/// let fast: SourceRef = FsSource::arc(DelayPolicy::None);
/// // Simulated slow disk (default, 0-200ms per read):
/// let slow = FsSource::default();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSource {
    delay: DelayPolicy,
}

impl FsSource {
    /// Creates a filesystem source with the given delay policy.
    pub fn new(delay: DelayPolicy) -> Self {
        Self { delay }
    }

    /// Creates the source and returns it as a shared handle (`Arc<dyn Source>`).
    pub fn arc(delay: DelayPolicy) -> SourceRef {
        std::sync::Arc::new(Self::new(delay))
    }

    /// Returns the configured delay policy.
    pub fn delay(&self) -> DelayPolicy {
        self.delay
    }
}

#[async_trait]
impl Source for FsSource {
    async fn fetch(&self, id: &StanzaId) -> Result<String, ReadError> {
        self.delay.wait().await;
        tokio::fs::read_to_string(Path::new(id.as_str()))
            .await
            .map_err(|source| ReadError::Failed {
                path: id.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn reads_an_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("stanza-01.txt");
        fs::write(&path, "Tyger Tyger, burning bright").expect("write fixture");

        let source = FsSource::new(DelayPolicy::None);
        let id = StanzaId::from(path.to_string_lossy().into_owned());
        let text = source.fetch(&id).await.expect("fetch succeeds");
        assert_eq!(text, "Tyger Tyger, burning bright");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wrong-file-name.txt");

        let source = FsSource::new(DelayPolicy::None);
        let id = StanzaId::from(path.to_string_lossy().into_owned());
        let err = source.fetch(&id).await.expect_err("fetch fails");
        assert_eq!(err.as_label(), "read_failed");
        assert!(err.as_message().contains("wrong-file-name.txt"));
    }
}

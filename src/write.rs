//! # Deferred single-file write primitive.
//!
//! [`write_text`] wraps one filesystem write into the same deferred-value
//! contract the sources use: the returned future settles exactly once, with
//! the written text on success or a [`WriteError`] on failure. It is a
//! standalone utility - nothing in the batch pipeline depends on it.

use std::path::Path;

use crate::error::WriteError;

/// Writes `text` to `path`, resolving with the written text.
///
/// # Example
/// ```no_run
/// use stanzaflow::write_text;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), stanzaflow::WriteError> {
/// let echoed = write_text("stanza-09.txt", "And when thy heart began to beat").await?;
/// assert_eq!(echoed, "And when thy heart began to beat");
/// # Ok(())
/// # }
/// ```
pub async fn write_text(
    path: impl AsRef<Path>,
    text: impl Into<String>,
) -> Result<String, WriteError> {
    let path = path.as_ref();
    let text = text.into();
    tokio::fs::write(path, text.as_bytes())
        .await
        .map_err(|source| WriteError::Failed {
            path: path.display().to_string(),
            source,
        })?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_with_the_written_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.txt");

        let echoed = write_text(&path, "In what distant deeps or skies")
            .await
            .expect("write succeeds");
        assert_eq!(echoed, "In what distant deeps or skies");
        assert_eq!(
            std::fs::read_to_string(&path).expect("file exists"),
            "In what distant deeps or skies"
        );
    }

    #[tokio::test]
    async fn unwritable_path_is_a_write_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join("out.txt");

        let err = write_text(&path, "lost verse").await.expect_err("write fails");
        assert_eq!(err.as_label(), "write_failed");
    }
}

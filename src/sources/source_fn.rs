//! # Function-backed source implementation.
//!
//! [`SourceFn`] wraps a closure `Fnc: FnMut(StanzaId) -> Fut` into a
//! [`Source`]. The closure is protected by a [`Mutex`] to allow calling
//! `fetch(&self, ...)` concurrently even though the closure is `FnMut`.
//! Use [`SourceFn::arc`] for a one-liner that returns a [`SourceRef`].
//!
//! ### Concurrency semantics
//! The mutex is held ONLY while the closure creates the future, not during
//! its execution, so parallel batches still overlap their reads. State the
//! closure captures and touches *inside* the returned future needs its own
//! synchronization (`Arc<Mutex<_>>`, etc.).

use std::{future::Future, sync::Mutex};

use async_trait::async_trait;

use crate::batch::StanzaId;
use crate::error::ReadError;

use super::source::{Source, SourceRef};

/// Closure-backed [`Source`], the fixture seam for tests and adapters.
///
/// # Example
/// ```
/// use stanzaflow::{ReadError, SourceFn, SourceRef, StanzaId};
///
/// let s: SourceRef = SourceFn::arc(|id: StanzaId| async move {
///     Ok::<String, ReadError>(format!("stub text for {id}"))
/// });
/// ```
#[derive(Debug)]
pub struct SourceFn<Fnc, Fut>
where
    Fnc: FnMut(StanzaId) -> Fut + Send + 'static,
    Fut: Future<Output = Result<String, ReadError>> + Send + 'static,
{
    /// Underlying function (guarded by a mutex to allow `FnMut` with `&self`).
    func: Mutex<Fnc>,
}

impl<Fnc, Fut> SourceFn<Fnc, Fut>
where
    Fnc: FnMut(StanzaId) -> Fut + Send + 'static,
    Fut: Future<Output = Result<String, ReadError>> + Send + 'static,
{
    /// Creates a new function-backed source.
    ///
    /// Prefer [`SourceFn::arc`] when you immediately need a [`SourceRef`].
    pub fn new(func: Fnc) -> Self {
        Self {
            func: Mutex::new(func),
        }
    }

    /// Creates the source and returns it as a shared handle (`Arc<dyn Source>`).
    pub fn arc(func: Fnc) -> SourceRef {
        std::sync::Arc::new(Self::new(func))
    }
}

#[async_trait]
impl<Fnc, Fut> Source for SourceFn<Fnc, Fut>
where
    Fnc: FnMut(StanzaId) -> Fut + Send + 'static,
    Fut: Future<Output = Result<String, ReadError>> + Send + 'static,
{
    async fn fetch(&self, id: &StanzaId) -> Result<String, ReadError> {
        let fut = {
            let mut f = self.func.lock().map_err(|_| ReadError::Failed {
                path: id.to_string(),
                source: std::io::Error::other("source closure mutex poisoned"),
            })?;
            (f)(id.clone())
        };
        fut.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn closure_state_persists_across_fetches() {
        let mut calls = 0u32;
        let source = SourceFn::new(move |id: StanzaId| {
            calls += 1;
            let n = calls;
            async move { Ok::<String, ReadError>(format!("{id} #{n}")) }
        });

        let id = StanzaId::from("s.txt");
        assert_eq!(source.fetch(&id).await.unwrap(), "s.txt #1");
        assert_eq!(source.fetch(&id).await.unwrap(), "s.txt #2");
    }

    #[tokio::test]
    async fn errors_pass_through_unchanged() {
        let source = SourceFn::new(|id: StanzaId| async move {
            Err::<String, _>(ReadError::Failed {
                path: id.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        });

        let err = source
            .fetch(&StanzaId::from("gone.txt"))
            .await
            .expect_err("fetch fails");
        assert_eq!(err.as_label(), "read_failed");
        assert_eq!(err.path(), "gone.txt");
    }
}

//! # Batch request specification.
//!
//! Defines [`BatchRequest`], a configuration bundle describing one batch: the
//! ordered stanza identifiers, the issuance [`Mode`], and the [`ErrorPolicy`].
//!
//! A request can be created:
//! - **Explicitly** with [`BatchRequest::new`] (full control)
//! - **From config** with [`BatchRequest::with_defaults`] (inherit defaults)
//!
//! ## Rules
//! - The request is consumed by [`Sequencer::run`](crate::Sequencer::run);
//!   batches are single-shot and requests are not reused.

use crate::config::Config;
use crate::policies::{ErrorPolicy, Mode};

use super::stanza::StanzaId;

/// Specification for running one batch of reads.
///
/// Bundles together:
/// - The ordered identifiers to read
/// - Issuance mode ([`Mode`])
/// - Error policy ([`ErrorPolicy`])
///
/// ## Example
/// ```rust
/// use stanzaflow::{BatchRequest, Config, ErrorPolicy, Mode, StanzaId};
///
/// let ids: Vec<StanzaId> = (1..=8)
///     .map(|n| StanzaId::from(format!("stanza-{n:02}.txt")))
///     .collect();
///
/// // Explicit configuration:
/// let request = BatchRequest::new(ids.clone(), Mode::Parallel, ErrorPolicy::Ignore);
/// assert_eq!(request.len(), 8);
///
/// // Inherit from global config, then override the mode:
/// let cfg = Config::default();
/// let request = BatchRequest::with_defaults(ids, &cfg).with_mode(Mode::Parallel);
/// assert_eq!(request.mode(), Mode::Parallel);
/// assert_eq!(request.policy(), ErrorPolicy::Ignore);
/// ```
#[derive(Clone, Debug)]
pub struct BatchRequest {
    ids: Vec<StanzaId>,
    mode: Mode,
    policy: ErrorPolicy,
}

impl BatchRequest {
    /// Creates a new request with explicit parameters.
    ///
    /// ### Parameters
    /// - `ids`: Identifiers to read, in presentation order
    /// - `mode`: When to issue each read (series/parallel)
    /// - `policy`: What an individual failure does to the batch
    pub fn new(ids: Vec<StanzaId>, mode: Mode, policy: ErrorPolicy) -> Self {
        Self { ids, mode, policy }
    }

    /// Creates a request inheriting mode and policy from global config.
    pub fn with_defaults(ids: Vec<StanzaId>, cfg: &Config) -> Self {
        Self {
            ids,
            mode: cfg.mode,
            policy: cfg.policy,
        }
    }

    /// Returns the ordered identifiers.
    pub fn ids(&self) -> &[StanzaId] {
        &self.ids
    }

    /// Returns the issuance mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Number of identifiers in the request.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if the request names no identifiers.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns a new request with an updated mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a new request with an updated error policy.
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }
}

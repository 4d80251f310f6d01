//! # Global batch configuration.
//!
//! Provides [`Config`], centralized defaults for building batch requests and
//! filesystem sources.
//!
//! Config is used in two ways:
//! 1. **Request defaults**: `BatchRequest::with_defaults(ids, &config)`
//! 2. **Source defaults**: `FsSource::new(config.delay)`

use crate::policies::{DelayPolicy, ErrorPolicy, Mode};

/// Default knobs for batches and sources.
///
/// Defines:
/// - **Issuance mode**: series vs. parallel
/// - **Error policy**: ignore individual failures vs. stop at the first
/// - **Scheduling delay**: simulated I/O latency applied by [`FsSource`](crate::FsSource)
///
/// All fields are public for flexibility; per-request overrides go through
/// [`BatchRequest::with_mode`](crate::BatchRequest::with_mode) and
/// [`BatchRequest::with_policy`](crate::BatchRequest::with_policy).
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Default issuance mode for batches.
    ///
    /// Used by `BatchRequest::with_defaults()`. Can be overridden per-request.
    pub mode: Mode,

    /// Default error policy for batches.
    ///
    /// Used by `BatchRequest::with_defaults()`. Can be overridden per-request.
    pub policy: ErrorPolicy,

    /// Default scheduling delay for filesystem sources.
    ///
    /// [`DelayPolicy::None`] makes reads deterministic (tests); the default
    /// uniform delay makes completion order visibly non-deterministic under
    /// [`Mode::Parallel`].
    pub delay: DelayPolicy,
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `mode = Mode::Series` (deterministic emission order)
    /// - `policy = ErrorPolicy::Ignore` (individual failures are invisible)
    /// - `delay = DelayPolicy::default()` (uniform 0–200ms per read)
    fn default() -> Self {
        Self {
            mode: Mode::Series,
            policy: ErrorPolicy::Ignore,
            delay: DelayPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_config_is_series_ignore() {
        let cfg = Config::default();
        assert_eq!(cfg.mode, Mode::Series);
        assert_eq!(cfg.policy, ErrorPolicy::Ignore);
        assert_eq!(
            cfg.delay,
            DelayPolicy::Uniform {
                max: Duration::from_millis(200)
            }
        );
    }
}

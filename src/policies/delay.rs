//! # Delay policy for simulated read latency.
//!
//! [`DelayPolicy`] adds a scheduling pause before a read resolves, simulating
//! variable I/O latency. With many small files on a local disk every read
//! would otherwise complete near-instantly and parallel batches would emit in
//! what looks like input order; a uniform delay makes the completion
//! interleaving visible.
//!
//! - [`DelayPolicy::None`] — no pause, deterministic (tests)
//! - [`DelayPolicy::Fixed`] — constant pause per read
//! - [`DelayPolicy::Uniform`] — random pause in `[0, max]` per read

use std::time::Duration;

use rand::Rng;
use tokio::time;

/// Policy controlling the simulated scheduling delay of a single read.
///
/// The delay is drawn (for [`Uniform`](DelayPolicy::Uniform)) independently
/// per read, so two reads of the same batch resolve in unpredictable order
/// under [`Mode::Parallel`](crate::Mode::Parallel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelayPolicy {
    /// No delay: the read resolves as fast as the filesystem allows.
    ///
    /// Use for deterministic tests and latency-sensitive callers.
    None,

    /// Constant delay before every read.
    ///
    /// Useful for making completion order deterministic while still
    /// exercising the suspension points of the sequencer.
    Fixed(Duration),

    /// Random delay drawn uniformly from `[0, max]` before every read.
    ///
    /// The default, with `max = 200ms`, mirrors a slow spinning disk and
    /// shuffles completion order across runs.
    Uniform {
        /// Upper bound of the drawn delay.
        max: Duration,
    },
}

impl Default for DelayPolicy {
    /// Returns `Uniform { max: 200ms }`.
    fn default() -> Self {
        DelayPolicy::Uniform {
            max: Duration::from_millis(200),
        }
    }
}

impl DelayPolicy {
    /// Pauses the current read according to the policy.
    ///
    /// `None` and zero-length delays return without yielding to the runtime.
    pub async fn wait(&self) {
        match self {
            DelayPolicy::None => {}
            DelayPolicy::Fixed(dur) => {
                if *dur > Duration::ZERO {
                    time::sleep(*dur).await;
                }
            }
            DelayPolicy::Uniform { max } => {
                let bound = max.as_millis().min(u128::from(u64::MAX)) as u64;
                if bound == 0 {
                    return;
                }
                let drawn = rand::rng().random_range(0..=bound);
                if drawn > 0 {
                    time::sleep(Duration::from_millis(drawn)).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn none_does_not_advance_time() {
        let start = time::Instant::now();
        DelayPolicy::None.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_advances_time_by_exactly_the_delay() {
        let start = time::Instant::now();
        DelayPolicy::Fixed(Duration::from_millis(150)).wait().await;
        assert_eq!(start.elapsed(), Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn uniform_is_bounded_by_max() {
        let max = Duration::from_millis(50);
        for _ in 0..20 {
            let start = time::Instant::now();
            DelayPolicy::Uniform { max }.wait().await;
            assert!(start.elapsed() <= max, "drawn delay exceeded max");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_uniform_never_sleeps() {
        let start = time::Instant::now();
        DelayPolicy::Uniform {
            max: Duration::ZERO,
        }
        .wait()
        .await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

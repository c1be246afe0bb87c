//! Optional retry for document and listing GETs.
//!
//! Off unless `[retry] max_attempts` is above 1. Requests run one at a time,
//! so there is no per-host budget: a failure is either worth repeating or not
//! (see `FetchError::is_retryable`), and the wait doubles each time.

mod error;
mod run;

pub use error::FetchError;
pub use run::run_with_retry;

use std::time::Duration;

/// How many times to try a GET and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total tries including the first. 1 = no retry.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Wait before the try that follows failed try number `attempt` (1-based),
    /// or `None` once the attempts are used up.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }
        let doublings = attempt.saturating_sub(1).min(16);
        Some(
            self.base_delay
                .saturating_mul(1u32 << doublings)
                .min(self.max_delay),
        )
    }
}

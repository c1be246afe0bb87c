//! Retry loop around a fallible GET.

use super::error::FetchError;
use super::RetryPolicy;

/// Calls `f` until it succeeds, fails with a final error, or the policy's
/// attempts run out. Sleeps the policy's delay between tries.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut f: F) -> Result<T, FetchError>
where
    F: FnMut() -> Result<T, FetchError>,
{
    let mut attempt = 1u32;
    loop {
        let err = match f() {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };
        let delay = match policy.delay_after(attempt) {
            Some(d) if err.is_retryable() => d,
            _ => return Err(err),
        };
        tracing::debug!(attempt, error = %err, delay_ms = delay.as_millis() as u64, "retrying");
        std::thread::sleep(delay);
        attempt += 1;
    }
}

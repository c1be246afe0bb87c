//! Error type for a single HTTP GET.

use thiserror::Error;

/// Failure of one GET: the transfer itself failed, or the server answered with
/// a status other than 200.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, timeout, etc.).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// Response status was not 200.
    #[error("HTTP {0}")]
    Http(u32),
}

impl FetchError {
    /// Whether trying the same URL again could succeed: network faults,
    /// timeouts, 429 and 5xx. 404 and friends are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Http(code) => *code == 429 || (500..=599).contains(code),
            FetchError::Transport(e) => {
                e.is_operation_timedout()
                    || e.is_couldnt_connect()
                    || e.is_couldnt_resolve_host()
                    || e.is_recv_error()
                    || e.is_send_error()
                    || e.is_got_nothing()
                    || e.is_partial_file()
            }
        }
    }
}

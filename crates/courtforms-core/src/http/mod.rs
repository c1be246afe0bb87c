//! Blocking HTTP GET.
//!
//! Uses the curl crate (libcurl easy interface). One handle per request,
//! redirects followed, no custom headers. Timeouts are only set when
//! configured; otherwise a stalled server blocks the caller indefinitely.

use crate::config::FormsConfig;
use crate::retry::{run_with_retry, FetchError, RetryPolicy};
use std::time::Duration;

/// Redirect cap, matching what common HTTP clients default to.
const MAX_REDIRECTS: u32 = 30;

/// Status and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Per-request knobs. `Default` = no timeouts, single attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub retry: RetryPolicy,
}

impl HttpOptions {
    pub fn from_config(cfg: &FormsConfig) -> Self {
        Self {
            connect_timeout: cfg.http.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.http.timeout_secs.map(Duration::from_secs),
            retry: cfg.retry_policy(),
        }
    }
}

/// Sequential GET client. Runs in the current thread.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    opts: HttpOptions,
}

impl HttpClient {
    pub fn new(opts: HttpOptions) -> Self {
        Self { opts }
    }

    /// Performs a single GET and returns whatever status the server sent.
    pub fn get(&self, url: &str) -> Result<HttpResponse, curl::Error> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        if let Some(t) = self.opts.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.opts.timeout {
            easy.timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET complete");
        Ok(HttpResponse { status, body })
    }

    /// GET that only accepts status 200, retried per the configured policy.
    /// Returns the body on success; `FetchError::Http` carries any other status.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        run_with_retry(&self.opts.retry, || {
            let resp = self.get(url)?;
            if resp.status != 200 {
                return Err(FetchError::Http(resp.status));
            }
            Ok(resp.body)
        })
    }
}

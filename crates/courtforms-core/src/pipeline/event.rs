//! Progress events emitted while a run executes, and their console wording.

use std::fmt;
use std::path::PathBuf;

/// One observable step of a run, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    FetchingPage { url: String },
    /// Listing page answered with a status other than 200. Run halts.
    PageRejected { status: u32 },
    /// Listing page could not be fetched at all. Run ends with an error.
    PageUnreachable { url: String, error: String },
    /// No link matched the extension filter. Run halts normally.
    NoLinks { extension: String },
    LinksFound { count: usize },
    Downloading { filename: String, url: String },
    Saved { path: PathBuf },
    DownloadFailed { url: String, status: u32 },
    /// Transfer-level fault on a single document (connect, DNS, timeout).
    DownloadErrored { url: String, error: String },
    /// Derived filename was empty, `.` or `..`.
    Skipped { url: String },
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineEvent::FetchingPage { url } => write!(f, "Fetching forms page: {}", url),
            PipelineEvent::PageRejected { status } => {
                write!(f, "Error fetching the page: status code {}", status)
            }
            PipelineEvent::PageUnreachable { url, error } => {
                write!(f, "Error fetching the page {}: {}", url, error)
            }
            PipelineEvent::NoLinks { extension } => write!(
                f,
                "No {} links found on the page.",
                extension.trim_start_matches('.').to_uppercase()
            ),
            PipelineEvent::LinksFound { count } => write!(f, "Found {} document link(s).", count),
            PipelineEvent::Downloading { filename, url } => {
                write!(f, "Downloading {} from {}...", filename, url)
            }
            PipelineEvent::Saved { path } => write!(f, "Saved to {}", path.display()),
            PipelineEvent::DownloadFailed { url, status } => {
                write!(f, "Failed to download {} (status code {})", url, status)
            }
            PipelineEvent::DownloadErrored { url, error } => {
                write!(f, "Failed to download {} ({})", url, error)
            }
            PipelineEvent::Skipped { url } => {
                write!(f, "Skipping {}: no filename in URL path", url)
            }
        }
    }
}

/// Receives events as they happen.
pub trait Reporter {
    fn report(&mut self, event: &PipelineEvent);
}

impl<F> Reporter for F
where
    F: FnMut(&PipelineEvent),
{
    fn report(&mut self, event: &PipelineEvent) {
        self(event)
    }
}

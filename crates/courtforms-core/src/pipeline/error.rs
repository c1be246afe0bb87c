//! Errors that end a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Faults the pipeline does not recover from. Per-link download failures are
/// not here; they are reported and skipped.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The listing page could not be fetched at all (DNS, connect, timeout).
    #[error("failed to fetch listing page {url}: {source}")]
    ListingTransport {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

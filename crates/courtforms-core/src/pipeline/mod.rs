//! The fetch → extract → download run.
//!
//! Strictly sequential: the listing page is fetched once, every matching link
//! is extracted, then each document is downloaded in turn. A failed document
//! is reported and skipped; only listing-page transport faults and filesystem
//! errors end the run with `Err`.

mod error;
mod event;

pub use error::PipelineError;
pub use event::{PipelineEvent, Reporter};

use crate::config::FormsConfig;
use crate::extract::{HtmlLinkExtractor, LinkExtractor};
use crate::http::{HttpClient, HttpOptions};
use crate::retry::FetchError;
use crate::storage;
use crate::url_model::{derive_filename, resolve_link};
use std::path::PathBuf;

/// Result of fetching and scanning the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Listing page returned this non-200 status.
    Rejected(u32),
    /// Raw hrefs in document order; may be empty.
    Links(Vec<String>),
}

/// How a run ended. All three are normal terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    PageRejected(u32),
    NoLinks,
    Completed,
}

/// What a run did. Counts are informational; they never change the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Paths written, in download order (a path repeats if a later link overwrote it).
    pub saved: Vec<PathBuf>,
    /// Resolved URLs whose download failed.
    pub failed: Vec<String>,
    /// Resolved URLs with no usable filename.
    pub skipped: Vec<String>,
}

impl RunReport {
    fn new(outcome: RunOutcome) -> Self {
        Self {
            outcome,
            saved: Vec::new(),
            failed: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Fetches the listing page and extracts candidate links.
pub fn fetch_listing(
    cfg: &FormsConfig,
    client: &HttpClient,
    extractor: &dyn LinkExtractor,
    reporter: &mut dyn Reporter,
) -> Result<Listing, PipelineError> {
    reporter.report(&PipelineEvent::FetchingPage {
        url: cfg.listing_url.clone(),
    });
    let body = match client.fetch(&cfg.listing_url) {
        Ok(body) => body,
        Err(FetchError::Http(status)) => {
            tracing::warn!(url = %cfg.listing_url, status, "listing page rejected");
            reporter.report(&PipelineEvent::PageRejected { status });
            return Ok(Listing::Rejected(status));
        }
        Err(FetchError::Transport(source)) => {
            tracing::error!(url = %cfg.listing_url, error = %source, "listing page unreachable");
            reporter.report(&PipelineEvent::PageUnreachable {
                url: cfg.listing_url.clone(),
                error: source.to_string(),
            });
            return Err(PipelineError::ListingTransport {
                url: cfg.listing_url.clone(),
                source,
            });
        }
    };

    let html = String::from_utf8_lossy(&body);
    let links = extractor.extract(&html);
    tracing::debug!(count = links.len(), "extracted document links");
    if links.is_empty() {
        reporter.report(&PipelineEvent::NoLinks {
            extension: cfg.file_extension_filter.clone(),
        });
    } else {
        reporter.report(&PipelineEvent::LinksFound { count: links.len() });
    }
    Ok(Listing::Links(links))
}

/// Downloads each link in order into `cfg.output_dir`.
///
/// The output directory is created just before the first successful write, so
/// a run where every download fails leaves no directory behind.
pub fn download_all(
    cfg: &FormsConfig,
    client: &HttpClient,
    links: &[String],
    reporter: &mut dyn Reporter,
) -> Result<RunReport, PipelineError> {
    let mut report = RunReport::new(RunOutcome::Completed);

    for href in links {
        let url = resolve_link(&cfg.site_origin, href);
        let Some(filename) = derive_filename(&url) else {
            tracing::warn!(%url, "no filename in URL path; skipping");
            reporter.report(&PipelineEvent::Skipped { url: url.clone() });
            report.skipped.push(url);
            continue;
        };

        reporter.report(&PipelineEvent::Downloading {
            filename: filename.to_string(),
            url: url.clone(),
        });
        match client.fetch(&url) {
            Ok(bytes) => {
                storage::ensure_output_dir(&cfg.output_dir)?;
                let path = storage::write_document(&cfg.output_dir, filename, &bytes)?;
                tracing::info!(%url, path = %path.display(), bytes = bytes.len(), "saved");
                reporter.report(&PipelineEvent::Saved { path: path.clone() });
                report.saved.push(path);
            }
            Err(FetchError::Http(status)) => {
                tracing::warn!(%url, status, "download failed");
                reporter.report(&PipelineEvent::DownloadFailed {
                    url: url.clone(),
                    status,
                });
                report.failed.push(url);
            }
            Err(FetchError::Transport(e)) => {
                tracing::warn!(%url, error = %e, "download failed");
                reporter.report(&PipelineEvent::DownloadErrored {
                    url: url.clone(),
                    error: e.to_string(),
                });
                report.failed.push(url);
            }
        }
    }

    Ok(report)
}

/// Runs the whole pipeline with explicit collaborators.
pub fn run_with(
    cfg: &FormsConfig,
    client: &HttpClient,
    extractor: &dyn LinkExtractor,
    reporter: &mut dyn Reporter,
) -> Result<RunReport, PipelineError> {
    let links = match fetch_listing(cfg, client, extractor, reporter)? {
        Listing::Rejected(status) => {
            return Ok(RunReport::new(RunOutcome::PageRejected(status)))
        }
        Listing::Links(links) if links.is_empty() => {
            return Ok(RunReport::new(RunOutcome::NoLinks))
        }
        Listing::Links(links) => links,
    };

    let report = download_all(cfg, client, &links, reporter)?;
    tracing::info!(
        saved = report.saved.len(),
        failed = report.failed.len(),
        skipped = report.skipped.len(),
        "run finished"
    );
    Ok(report)
}

/// Runs the pipeline with the curl client and HTML extractor built from `cfg`.
pub fn run(cfg: &FormsConfig, reporter: &mut dyn Reporter) -> Result<RunReport, PipelineError> {
    let client = HttpClient::new(HttpOptions::from_config(cfg));
    let extractor = HtmlLinkExtractor::new(cfg.file_extension_filter.clone());
    run_with(cfg, &client, &extractor, reporter)
}

/// Resolved document URLs on the listing page, without downloading anything.
pub fn list_links(
    cfg: &FormsConfig,
    reporter: &mut dyn Reporter,
) -> Result<Listing, PipelineError> {
    let client = HttpClient::new(HttpOptions::from_config(cfg));
    let extractor = HtmlLinkExtractor::new(cfg.file_extension_filter.clone());
    Ok(match fetch_listing(cfg, &client, &extractor, reporter)? {
        Listing::Links(links) => Listing::Links(
            links
                .iter()
                .map(|href| resolve_link(&cfg.site_origin, href))
                .collect(),
        ),
        rejected => rejected,
    })
}

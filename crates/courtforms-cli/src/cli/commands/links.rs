//! `courtforms links` – list resolved document URLs (dry run).

use anyhow::Result;
use courtforms_core::config::FormsConfig;
use courtforms_core::pipeline::{self, Listing, PipelineEvent};

pub fn run_links(cfg: &FormsConfig) -> Result<()> {
    // Progress lines go to the log; stdout gets the URLs (or the halt message).
    let listing = pipeline::list_links(cfg, &mut |e: &PipelineEvent| match e {
        PipelineEvent::PageRejected { .. }
        | PipelineEvent::PageUnreachable { .. }
        | PipelineEvent::NoLinks { .. } => println!("{e}"),
        _ => tracing::debug!("{e}"),
    })?;
    if let Listing::Links(urls) = listing {
        for url in urls {
            println!("{url}");
        }
    }
    Ok(())
}

//! `courtforms run` – fetch, extract, and download.

use anyhow::Result;
use courtforms_core::config::FormsConfig;
use courtforms_core::pipeline::{self, PipelineEvent, RunOutcome};

/// Runs the pipeline, printing each event to stdout as it happens.
/// Per-document failures never make this return `Err`.
pub fn run_pipeline(cfg: &FormsConfig) -> Result<()> {
    let report = pipeline::run(cfg, &mut |e: &PipelineEvent| println!("{e}"))?;
    if report.outcome == RunOutcome::Completed {
        println!(
            "Done: {} saved, {} failed, {} skipped.",
            report.saved.len(),
            report.failed.len(),
            report.skipped.len()
        );
    }
    Ok(())
}

//! CLI for the courtforms document downloader.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use courtforms_core::config::{self, FormsConfig};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_config, run_links, run_pipeline};

/// Top-level CLI. With no subcommand, behaves like `run`.
#[derive(Debug, Parser)]
#[command(name = "courtforms")]
#[command(
    about = "Download every PDF linked from the California courts forms listing",
    long_about = None
)]
pub struct Cli {
    /// Config file to load instead of ~/.config/courtforms/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Per-invocation overrides of config.toml values.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Listing page to scrape.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
    /// Directory to save documents into.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
    /// Link suffix to match, case-insensitive (e.g. ".pdf").
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
    /// Origin prepended to links that start with "/".
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,
    /// Per-request timeout in seconds (default: none).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Overrides {
    pub fn apply(&self, cfg: &mut FormsConfig) {
        if let Some(url) = &self.url {
            cfg.listing_url = url.clone();
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if let Some(ext) = &self.extension {
            cfg.file_extension_filter = ext.clone();
        }
        if let Some(origin) = &self.origin {
            cfg.site_origin = origin.clone();
        }
        if let Some(secs) = self.timeout {
            cfg.http.timeout_secs = Some(secs);
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the listing page and download every matching document.
    Run {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print the resolved document URLs without downloading them.
    Links {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print the effective configuration as TOML.
    Config {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.dispatch()
    }

    fn dispatch(self) -> Result<()> {
        let command = self.command.unwrap_or(CliCommand::Run {
            overrides: Overrides::default(),
        });
        let config_path = self.config.as_deref();

        match command {
            CliCommand::Run { overrides } => run_pipeline(&configure(config_path, &overrides)?),
            CliCommand::Links { overrides } => run_links(&configure(config_path, &overrides)?),
            CliCommand::Config { overrides } => run_config(&configure(config_path, &overrides)?),
            CliCommand::Completions { shell } => run_completions(shell),
        }
    }
}

/// Loads config and applies overrides. An explicit `--config` must load; the
/// default location falls back to built-in values when it cannot be read or created.
fn configure(path: Option<&Path>, overrides: &Overrides) -> Result<FormsConfig> {
    configure_with(path, overrides, config::load_or_init)
}

fn configure_with(
    path: Option<&Path>,
    overrides: &Overrides,
    load_default: impl FnOnce() -> Result<FormsConfig>,
) -> Result<FormsConfig> {
    let mut cfg = match path {
        Some(p) => config::load_from_path(p)?,
        None => match load_default() {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!("using built-in config: {:#}", err);
                FormsConfig::default()
            }
        },
    };
    overrides.apply(&mut cfg);
    tracing::debug!("effective config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;

//! `courtforms config` – print the effective configuration.

use anyhow::Result;
use courtforms_core::config::FormsConfig;

pub fn run_config(cfg: &FormsConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}

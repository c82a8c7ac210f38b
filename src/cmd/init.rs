use crate::data::QuoteSettings;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    write_init(&dir, &mut std::io::stdout())
}

/// Initializes `dir` and reports it on `out`. Auto-init passes stderr so
/// that stdout carries nothing but command output.
pub(crate) fn write_init<W: Write>(dir: &Path, out: &mut W) -> Result<()> {
    run_in_dir(dir)?;
    writeln!(out, "Config initialized in {}.", dir.display())?;
    Ok(())
}

/// Writes the default config.yaml into `dir`, replacing any existing one.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    QuoteSettings::default().save_to(dir)?;
    tracing::info!(dir = %dir.display(), "wrote default config.yaml");
    Ok(())
}

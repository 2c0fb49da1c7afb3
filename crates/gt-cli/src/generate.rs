//! # Generate-States Subcommand
//!
//! Writes every generated state, lanes included, to `{out}/{slug}.json`.
//! Output is deterministic: the same content always produces byte-identical
//! files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use gt_content::Catalog;

#[derive(Args, Debug)]
pub struct GenerateStatesArgs {
    /// Directory to write the state JSON files into. Created if missing.
    #[arg(long)]
    pub out: PathBuf,
}

/// Execute the generate-states subcommand.
pub fn run_generate_states(args: &GenerateStatesArgs, catalog: &Catalog) -> Result<u8> {
    let written = write_states(catalog, &args.out)?;
    let lanes: usize = catalog.states().iter().map(|s| s.lanes.len()).sum();

    println!("  states:      {}", written.len());
    println!("  lanes:       {lanes}");
    println!("  fingerprint: {}", catalog.fingerprint());
    println!("  output:      {}", args.out.display());
    Ok(0)
}

/// Write one pretty-printed JSON file per state and return their paths.
pub fn write_states(catalog: &Catalog, out: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory: {}", out.display()))?;

    let mut written = Vec::with_capacity(catalog.states().len());
    for state in catalog.states().iter() {
        let path = out.join(format!("{}.json", state.slug));
        let mut json = serde_json::to_string_pretty(state)
            .with_context(|| format!("failed to serialize state {}", state.slug))?;
        json.push('\n');
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), lanes = state.lanes.len(), "wrote state");
        written.push(path);
    }
    Ok(written)
}

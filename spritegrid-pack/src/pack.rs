use std::io;

use anyhow::{Context, Result, ensure};
use log::warn;

pub fn run_packing(args: &crate::cli::Cli) -> Result<()> {
    ensure!(!args.inputs.is_empty(), "Provide at least one input image");

    let config = args.to_config();
    let packed = spritegrid::pack_files(&config, &args.inputs).with_context(|| {
        format!(
            "Failed to write sprite sheet for {}",
            config.output.display()
        )
    })?;

    if !packed.failures.is_empty() {
        warn!(
            "Skipped {} of {} inputs",
            packed.failures.len(),
            args.inputs.len()
        );
    }

    packed
        .sheet
        .mapping()
        .write_json(io::stdout().lock())
        .context("Failed to write mapping to stdout")?;
    Ok(())
}

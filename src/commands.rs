use std::path::PathBuf;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::composer;

pub fn run(cli: &Cli) -> Result<PathBuf> {
    if !cli.input.exists() {
        bail!("File not found: {}", cli.input.display());
    }

    let output_path = composer::compose(&cli.input, &cli.output_dir)?;
    let hash = composer::file_hash(&output_path)?;

    println!(
        "{} Created app icon: {}",
        "✓".green(),
        output_path.display()
    );
    println!("  blake3: {}...", &hash[..16]);
    println!(
        "{} Place this file in Assets.xcassets/AppIcon.appiconset/",
        "!".yellow()
    );

    Ok(output_path)
}

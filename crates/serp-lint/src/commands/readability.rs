//! Readability command — description readability scoring.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use serp_lint_core::readability;

use super::{band_colored, read_input_file, read_product_file};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to score: a product JSON export, or raw description HTML.
    pub file: Utf8PathBuf,

    /// Minimum acceptable score (0-100).
    #[arg(long)]
    pub min: Option<u8>,
}

/// Score the readability of a product description.
///
/// A `.json` input is treated as a catalog export and its description is
/// scored; any other file is scored as raw HTML.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_min: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min = ?args.min, "executing readability command");

    let html = if args.file.extension() == Some("json") {
        read_product_file(&args.file, max_input_bytes)?.description_html
    } else {
        read_input_file(&args.file, max_input_bytes)?
    };
    let min = args.min.or(config_min);

    let report = readability::score_readability(&html);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} readability score {} ({}/{} checks)",
        args.file.bold(),
        band_colored(report.percentage),
        report.pass_count,
        report.total_count,
    );
    for check in report.failed() {
        println!("  {} {}: {}", "FAIL:".red(), check.label, check.message);
    }

    if let Some(min) = min
        && report.percentage < min
    {
        bail!(
            "{} scores {}% (minimum: {}%). Fix the failing checks above.",
            args.file,
            report.percentage,
            min,
        );
    }

    Ok(())
}

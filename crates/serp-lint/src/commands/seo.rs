//! Seo command — on-page SEO scoring for one product.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use serp_lint_core::seo;

use super::{band_colored, read_product_file};

/// Arguments for the `seo` subcommand.
#[derive(Args, Debug)]
pub struct SeoArgs {
    /// Product JSON file to score.
    pub file: Utf8PathBuf,

    /// Minimum acceptable score (0-100).
    #[arg(long)]
    pub min: Option<u8>,
}

/// Score a product's on-page SEO.
#[instrument(name = "cmd_seo", skip_all, fields(file = %args.file))]
pub fn cmd_seo(
    args: SeoArgs,
    global_json: bool,
    config_min: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min = ?args.min, "executing seo command");

    let product = read_product_file(&args.file, max_input_bytes)?;
    let min = args.min.or(config_min);

    let report = seo::score_seo(&product);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} SEO score {} ({}/{} checks)",
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

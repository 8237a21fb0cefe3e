//! Score command — both scorers with partitioned problem/good-result lists.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use serp_lint_core::{ScoreReport, readability, seo};

use super::{band_colored, read_product_file};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Product JSON file to score.
    pub file: Utf8PathBuf,

    /// Minimum acceptable SEO score (0-100).
    #[arg(long)]
    pub min_seo: Option<u8>,

    /// Minimum acceptable readability score (0-100).
    #[arg(long)]
    pub min_readability: Option<u8>,
}

/// Combined output of both scorers for JSON mode.
#[derive(Serialize)]
struct CombinedReport {
    seo: ScoreReport,
    readability: ScoreReport,
}

/// Run both scorers against one product.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_min_seo: Option<u8>,
    config_min_readability: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing score command");

    let product = read_product_file(&args.file, max_input_bytes)?;
    let min_seo = args.min_seo.or(config_min_seo);
    let min_readability = args.min_readability.or(config_min_readability);

    let seo_report = seo::score_seo(&product);
    let readability_report = readability::score_readability(&product.description_html);

    if global_json {
        let combined = CombinedReport {
            seo: seo_report,
            readability: readability_report,
        };
        println!("{}", serde_json::to_string_pretty(&combined)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    print_section("SEO", &seo_report);
    print_section("Readability", &readability_report);

    let mut failures = Vec::new();
    if let Some(min) = min_seo
        && seo_report.percentage < min
    {
        failures.push(format!(
            "SEO score {}% is below minimum {}%",
            seo_report.percentage, min
        ));
    }
    if let Some(min) = min_readability
        && readability_report.percentage < min
    {
        failures.push(format!(
            "readability score {}% is below minimum {}%",
            readability_report.percentage, min
        ));
    }
    if !failures.is_empty() {
        bail!("{}: {}", args.file, failures.join("; "));
    }

    Ok(())
}

/// Print one scorer's section: percentage, then problems, then good results.
fn print_section(name: &str, report: &ScoreReport) {
    println!(
        "\n  {} {} ({}/{} checks)",
        format!("{name}:").cyan(),
        band_colored(report.percentage),
        report.pass_count,
        report.total_count,
    );

    if report.failed().next().is_some() {
        println!("  {}", "Problems".bold());
        for check in report.failed() {
            println!("    {} {}: {}", "FAIL:".red(), check.label, check.message);
        }
    }
    if report.passed().next().is_some() {
        println!("  {}", "Good results".bold());
        for check in report.passed() {
            println!("    {} {}: {}", "PASS:".green(), check.label, check.message);
        }
    }
}

//! Lint command — rule-driven quality gates for a product or catalog.
//!
//! Matches each product's slug against configured `rules` in the config
//! file, resolves which checks apply, and runs them all. This is the
//! CLI counterpart of the `lint_product` MCP tool.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use serp_lint_core::config::Config;
use serp_lint_core::lint::{self, LintReport};
use serp_lint_core::rules::RuleSet;
use serp_lint_core::{ProductContent, ScoreReport};

use super::{band_colored, read_input_file};

/// Catalogs larger than this get a progress bar in text mode.
const PROGRESS_THRESHOLD: usize = 50;

/// Arguments for the `lint` subcommand.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Product or catalog JSON file to lint.
    pub file: Utf8PathBuf,
}

/// Lint a product or catalog export according to project rules.
#[instrument(name = "cmd_lint", skip_all, fields(file = %args.file))]
pub fn cmd_lint(
    args: LintArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing lint command");

    let rules = match config.rules {
        Some(ref rules) => rules,
        None => {
            if !global_json {
                println!("{} no rules configured", "SKIP:".dimmed());
            }
            return Ok(());
        }
    };

    let rule_set = RuleSet::compile(rules);
    let content = read_input_file(&args.file, max_input_bytes)?;
    let products = ProductContent::from_json_catalog(&content)
        .with_context(|| format!("failed to parse {}", args.file))?;

    let progress = (!global_json && products.len() > PROGRESS_THRESHOLD)
        .then(|| ProgressBar::new(products.len() as u64));

    let mut reports: Vec<LintReport> = Vec::new();
    let mut skipped = 0usize;
    for product in &products {
        let resolved = rule_set.resolve(&product.slug);
        if resolved.is_empty() {
            debug!(slug = %product.slug, "no rules match this product");
            skipped += 1;
        } else {
            reports.push(lint::run_lint(product, &resolved, config));
        }
        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        if skipped > 0 {
            println!("{} {skipped} product(s) matched no rules", "SKIP:".dimmed());
        }
        for report in &reports {
            print_report(report);
        }
    }

    let failed = reports.iter().filter(|r| !r.pass).count();
    if failed > 0 {
        bail!("{failed} of {} product(s) failed lint checks", reports.len());
    }

    Ok(())
}

/// Print one product's lint result.
fn print_report(report: &LintReport) {
    let status = if report.pass {
        "PASS".green().to_string()
    } else {
        "FAIL".red().to_string()
    };
    println!("{} {}", status, report.slug.bold());

    if let Some(ref seo) = report.seo {
        print_check_line("seo", seo);
    }
    if let Some(ref readability) = report.readability {
        print_check_line("readability", readability);
    }
}

fn print_check_line(name: &str, report: &ScoreReport) {
    println!(
        "  {} {} ({}/{} checks)",
        format!("{name}:").cyan(),
        band_colored(report.percentage),
        report.pass_count,
        report.total_count,
    );
}

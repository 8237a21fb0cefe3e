//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use serp_lint_core::ProductContent;

pub mod info;
pub mod lint;
pub mod readability;
pub mod score;
pub mod seo;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps that every scoring
/// command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read and parse a single product from a catalog-export JSON file.
pub fn read_product_file(
    path: &Utf8Path,
    max_bytes: Option<usize>,
) -> anyhow::Result<ProductContent> {
    let content = read_input_file(path, max_bytes)?;
    ProductContent::from_json(&content).with_context(|| format!("failed to parse {path}"))
}

/// Format a percentage with its band color: green, yellow, or red.
///
/// Every command renders scores through this one helper so list output
/// and detail output always agree on thresholds.
pub fn band_colored(percentage: u8) -> String {
    use owo_colors::OwoColorize;
    use serp_lint_core::ScoreBand;

    let text = format!("{percentage}%");
    match ScoreBand::from_percentage(percentage) {
        ScoreBand::Good => text.green().to_string(),
        ScoreBand::Warning => text.yellow().to_string(),
        ScoreBand::Poor => text.red().to_string(),
    }
}

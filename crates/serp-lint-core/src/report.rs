//! Score report types shared by the SEO and readability scorers.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of a single scoring rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    /// Stable rule identifier (kebab-case).
    pub id: String,
    /// Human-readable rule name.
    pub label: String,
    /// Whether the rule passed.
    pub pass: bool,
    /// Explanation of the outcome.
    pub message: String,
}

impl CheckResult {
    /// Build a check result.
    pub fn new(id: &str, label: &str, pass: bool, message: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            pass,
            message: message.into(),
        }
    }
}

/// Aggregated result of running a scorer's full rule set.
///
/// `checks` preserves the scorer's fixed rule order; consumers rely on
/// stable ordering for list rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreReport {
    /// Individual rule outcomes, in fixed rule order.
    pub checks: Vec<CheckResult>,
    /// Number of passing rules.
    pub pass_count: usize,
    /// Total number of rules evaluated.
    pub total_count: usize,
    /// Rounded percentage of passing rules, always in [0, 100].
    pub percentage: u8,
}

impl ScoreReport {
    /// Aggregate individual check results into a report.
    pub fn from_checks(checks: Vec<CheckResult>) -> Self {
        let total_count = checks.len();
        let pass_count = checks.iter().filter(|c| c.pass).count();
        let percentage = if total_count == 0 {
            0
        } else {
            ((pass_count as f64 / total_count as f64) * 100.0).round() as u8
        };
        Self {
            checks,
            pass_count,
            total_count,
            percentage,
        }
    }

    /// Passing checks, in rule order.
    pub fn passed(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| c.pass)
    }

    /// Failing checks, in rule order.
    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.pass)
    }

    /// The color band this report's percentage falls into.
    pub const fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage)
    }
}

/// Color band for rendering a score percentage.
///
/// Shared by every presentation site so list badges and detail panels
/// always agree on the same thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Score of 70 or above.
    Good,
    /// Score of 40 to 69.
    Warning,
    /// Score below 40.
    Poor,
}

impl ScoreBand {
    /// Classify a percentage into its band.
    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage >= 70 {
            Self::Good
        } else if percentage >= 40 {
            Self::Warning
        } else {
            Self::Poor
        }
    }

    /// Returns the band as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

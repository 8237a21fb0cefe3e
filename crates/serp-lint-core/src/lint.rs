//! Lint execution engine.
//!
//! Runs the checks specified by [`ResolvedChecks`] against one product,
//! applying project-wide config defaults where rule-level settings are
//! absent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::content::ProductContent;
use crate::readability;
use crate::report::ScoreReport;
use crate::rules::ResolvedChecks;
use crate::seo;

/// Combined results from all checks run by the lint engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LintReport {
    /// The slug of the product that was linted.
    pub slug: String,
    /// SEO score report, if `seo` was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<ScoreReport>,
    /// Readability score report, if `readability` was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ScoreReport>,
    /// Overall pass/fail. `true` only if every check meets its minimum.
    pub pass: bool,
}

/// Run all checks specified by `resolved` against `content`.
///
/// Settings cascade: rule-level minimums override config-level defaults.
/// A check with no minimum configured anywhere still runs and reports,
/// but cannot fail the product.
pub fn run_lint(content: &ProductContent, resolved: &ResolvedChecks, config: &Config) -> LintReport {
    let mut pass = true;

    let seo_report = resolved.seo.as_ref().map(|sc| {
        let report = seo::score_seo(content);
        let min = sc.min_score.or(config.min_seo_score);
        if min.is_some_and(|min| report.percentage < min) {
            pass = false;
        }
        report
    });

    let readability_report = resolved.readability.as_ref().map(|rc| {
        let report = readability::score_readability(&content.description_html);
        let min = rc.min_score.or(config.min_readability_score);
        if min.is_some_and(|min| report.percentage < min) {
            pass = false;
        }
        report
    });

    LintReport {
        slug: content.slug.clone(),
        seo: seo_report,
        readability: readability_report,
        pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ReadabilityRuleConfig, SeoRuleConfig};
    use crate::rules::ResolvedChecks;

    fn product() -> ProductContent {
        ProductContent {
            title: "The Sea".to_string(),
            slug: "books/the-sea".to_string(),
            description_html: "<p>A short description.</p>".to_string(),
            ..ProductContent::default()
        }
    }

    #[test]
    fn empty_resolved_checks_produces_empty_report() {
        let report = run_lint(&product(), &ResolvedChecks::default(), &Config::default());
        assert!(report.pass);
        assert!(report.seo.is_none());
        assert!(report.readability.is_none());
    }

    #[test]
    fn configured_checks_run() {
        let resolved = ResolvedChecks {
            seo: Some(SeoRuleConfig::default()),
            readability: Some(ReadabilityRuleConfig::default()),
        };
        let report = run_lint(&product(), &resolved, &Config::default());
        assert!(report.seo.is_some());
        assert!(report.readability.is_some());
        // No minimums configured: reports can't fail the product
        assert!(report.pass);
    }

    #[test]
    fn rule_minimum_gates_the_product() {
        let resolved = ResolvedChecks {
            seo: Some(SeoRuleConfig {
                min_score: Some(100),
            }),
            readability: None,
        };
        let report = run_lint(&product(), &resolved, &Config::default());
        assert!(!report.pass);
    }

    #[test]
    fn config_defaults_cascade() {
        let config = Config {
            min_readability_score: Some(100),
            ..Default::default()
        };
        let resolved = ResolvedChecks {
            seo: None,
            readability: Some(ReadabilityRuleConfig::default()),
        };
        let report = run_lint(&product(), &resolved, &config);
        assert!(!report.pass);
    }

    #[test]
    fn rule_minimum_overrides_config_default() {
        let config = Config {
            min_seo_score: Some(100),
            ..Default::default()
        };
        let resolved = ResolvedChecks {
            seo: Some(SeoRuleConfig { min_score: Some(0) }),
            readability: None,
        };
        let report = run_lint(&product(), &resolved, &config);
        assert!(report.pass);
    }

    #[test]
    fn report_carries_slug() {
        let resolved = ResolvedChecks {
            seo: Some(SeoRuleConfig::default()),
            readability: None,
        };
        let report = run_lint(&product(), &resolved, &Config::default());
        assert_eq!(report.slug, "books/the-sea");
    }
}

//! Rule resolution engine.
//!
//! Matches product slugs against configured glob rules and accumulates
//! check configurations. When multiple rules match, all contribute
//! their checks. Conflicts (same check in multiple rules) are resolved
//! by specificity: the pattern with more literal (non-wildcard) slug
//! segments wins. Ties go to the earlier rule.

use globset::{Glob, GlobMatcher};

use crate::config::{ReadabilityRuleConfig, Rule, RuleChecks, SeoRuleConfig};

/// Compiled rule set for efficient matching.
pub struct RuleSet {
    compiled: Vec<CompiledRule>,
}

/// A single rule with pre-compiled glob matchers.
struct CompiledRule {
    matchers: Vec<(GlobMatcher, usize)>, // (matcher, specificity)
    checks: RuleChecks,
}

/// Accumulated check configurations after rule resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolvedChecks {
    /// Resolved SEO check configuration.
    pub seo: Option<SeoRuleConfig>,
    /// Resolved readability check configuration.
    pub readability: Option<ReadabilityRuleConfig>,
}

impl ResolvedChecks {
    /// Returns `true` if no checks are configured.
    pub const fn is_empty(&self) -> bool {
        self.seo.is_none() && self.readability.is_none()
    }
}

/// Count literal (non-wildcard) slug segments in a glob pattern.
///
/// `books/fiction/*` → 2 (`books`, `fiction`)
/// `books/**` → 1 (`books`)
/// `**` → 0
fn specificity(pattern: &str) -> usize {
    pattern
        .split('/')
        .filter(|seg| !seg.contains('*') && !seg.contains('?') && !seg.contains('['))
        .count()
}

impl RuleSet {
    /// Compile a list of rules into a `RuleSet`.
    ///
    /// Invalid glob patterns are silently skipped with a tracing warning.
    pub fn compile(rules: &[Rule]) -> Self {
        let compiled = rules
            .iter()
            .filter_map(|rule| {
                let matchers: Vec<(GlobMatcher, usize)> = rule
                    .slugs
                    .iter()
                    .filter_map(|pattern| {
                        match Glob::new(pattern) {
                            Ok(glob) => Some((glob.compile_matcher(), specificity(pattern))),
                            Err(e) => {
                                tracing::warn!(pattern, error = %e, "skipping invalid glob pattern");
                                None
                            }
                        }
                    })
                    .collect();
                if matchers.is_empty() {
                    None
                } else {
                    Some(CompiledRule {
                        matchers,
                        checks: rule.checks.clone(),
                    })
                }
            })
            .collect();
        Self { compiled }
    }

    /// Resolve which checks apply to a product slug.
    ///
    /// All matching rules contribute. When two rules configure the same
    /// check type, the one matched by the higher-specificity pattern wins.
    /// Ties go to the earlier rule (lower index).
    pub fn resolve(&self, slug: &str) -> ResolvedChecks {
        let mut result = ResolvedChecks::default();

        // Track the specificity of the winning rule for each check type.
        let mut seo_spec: Option<usize> = None;
        let mut readability_spec: Option<usize> = None;

        for rule in &self.compiled {
            let max_spec = rule
                .matchers
                .iter()
                .filter(|(m, _)| m.is_match(slug))
                .map(|(_, s)| *s)
                .max();

            let Some(spec) = max_spec else {
                continue;
            };

            if rule.checks.seo.is_some() && seo_spec.is_none_or(|prev| spec > prev) {
                result.seo = rule.checks.seo.clone();
                seo_spec = Some(spec);
            }
            if rule.checks.readability.is_some()
                && readability_spec.is_none_or(|prev| spec > prev)
            {
                result.readability = rule.checks.readability.clone();
                readability_spec = Some(spec);
            }
        }

        result
    }
}

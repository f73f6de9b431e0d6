//! TOML-driven triage rule engine.
//!
//! `RuleEngine` holds a validated `RuleSet` and implements the
//! `TriageEvaluator` trait from carefinder-core.
//!
//! Evaluation algorithm:
//!
//! 1. Iterate rules in declaration order.
//! 2. Return the recommendation of the first rule whose condition matches.
//! 3. If no rule matched, return the rule set's fallback.

use std::path::Path;

use tracing::debug;

use carefinder_contracts::{
    assessment::{Decision, FALLBACK_RULE_ID},
    error::{CareFinderError, CareFinderResult},
    report::SymptomReport,
};
use carefinder_core::traits::TriageEvaluator;

use crate::rule::RuleSet;

/// The standard rules as shipped in `policies/triage.toml`.
pub const STANDARD_RULES_TOML: &str = include_str!("../policies/triage.toml");

/// A `TriageEvaluator` backed by an ordered, validated rule set.
///
/// ```rust,ignore
/// use carefinder_rules::RuleEngine;
///
/// let engine = RuleEngine::from_file(Path::new("policies/triage.toml"))?;
/// ```
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Validate `rules` and build an engine from them.
    ///
    /// Returns `CareFinderError::ConfigError` if validation fails.
    pub fn new(rules: RuleSet) -> CareFinderResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// The built-in standard rules. Always valid.
    pub fn standard() -> Self {
        Self {
            rules: RuleSet::standard(),
        }
    }

    /// Parse `s` as a TOML rule file and build a `RuleEngine`.
    ///
    /// Returns `CareFinderError::ConfigError` if the TOML is malformed, does
    /// not match the `RuleSet` schema, or fails validation.
    pub fn from_toml_str(s: &str) -> CareFinderResult<Self> {
        let rules: RuleSet = toml::from_str(s).map_err(|e| CareFinderError::ConfigError {
            reason: format!("failed to parse rule TOML: {}", e),
        })?;
        Self::new(rules)
    }

    /// Read the file at `path` and parse it as a TOML rule file.
    pub fn from_file(path: &Path) -> CareFinderResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CareFinderError::ConfigError {
            reason: format!("failed to read rule file '{}': {}", path.display(), e),
        })?;
        debug!(path = %path.display(), "loading triage rules");
        Self::from_toml_str(&contents)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl TriageEvaluator for RuleEngine {
    /// Return the decision of the first matching rule, or the fallback.
    fn decide(&self, report: &SymptomReport) -> Decision {
        for rule in &self.rules.rules {
            if !rule.when.matches(report) {
                continue;
            }

            debug!(
                rule_id = %rule.id,
                recommendation = %rule.recommend,
                "rule matched"
            );

            return Decision {
                recommendation: rule.recommend,
                rule_id: rule.id.clone(),
            };
        }

        debug!(recommendation = %self.rules.fallback, "no rule matched; using fallback");

        Decision {
            recommendation: self.rules.fallback,
            rule_id: FALLBACK_RULE_ID.to_string(),
        }
    }
}

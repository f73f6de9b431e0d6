//! Triage rule types and rule-file schema.
//!
//! A `RuleSet` is an ordered list of `TriageRule`s plus a fallback pathway.
//! Rules are evaluated in declaration order and the first matching rule
//! wins. If none matches, the fallback applies, so every report gets exactly
//! one recommendation.

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use carefinder_contracts::{
    assessment::FALLBACK_RULE_ID,
    error::{CareFinderError, CareFinderResult},
    recommendation::Recommendation,
    report::{Duration, RedFlag, Severity, SymptomReport},
};

/// A predicate over a `SymptomReport`.
///
/// Written in TOML as an inline table tagged by `kind`:
/// ```toml
/// when = { kind = "any-red-flag" }
/// when = { kind = "red-flag", flag = "seizures" }
/// when = { kind = "severity", is = "severe" }
/// when = { kind = "duration", is = "more-than-three-days" }
/// when = { kind = "all", of = [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Condition {
    /// At least one red flag is present.
    AnyRedFlag,

    /// A specific red flag is present.
    #[serde(rename = "red-flag")]
    HasRedFlag { flag: RedFlag },

    #[serde(rename = "severity")]
    SeverityIs { is: Severity },

    #[serde(rename = "duration")]
    DurationIs { is: Duration },

    /// Every nested condition holds. An empty list always matches.
    All { of: Vec<Condition> },
}

impl Condition {
    pub fn matches(&self, report: &SymptomReport) -> bool {
        match self {
            Condition::AnyRedFlag => report.red_flags.any(),
            Condition::HasRedFlag { flag } => report.red_flags.contains(*flag),
            Condition::SeverityIs { is } => report.severity == *is,
            Condition::DurationIs { is } => report.duration == *is,
            Condition::All { of } => of.iter().all(|c| c.matches(report)),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::AnyRedFlag => f.write_str("any red flag"),
            Condition::HasRedFlag { flag } => write!(f, "red flag {}", flag),
            Condition::SeverityIs { is } => write!(f, "severity is {}", is),
            Condition::DurationIs { is } => write!(f, "duration is {}", is),
            Condition::All { of } if of.is_empty() => f.write_str("always"),
            Condition::All { of } => {
                let parts: Vec<String> = of.iter().map(|c| c.to_string()).collect();
                write!(f, "{}", parts.join(" and "))
            }
        }
    }
}

/// One ordered `condition → recommendation` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRule {
    /// Stable identifier, reported with every decision this rule makes.
    pub id: String,

    /// Human-readable explanation of the rule.
    pub description: String,

    pub when: Condition,

    /// The pathway produced when `when` matches.
    pub recommend: Recommendation,
}

impl TriageRule {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        when: Condition,
        recommend: Recommendation,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            when,
            recommend,
        }
    }

    /// Return true if this is the rule that sends any red flag to A&E.
    pub fn is_red_flag_rule(&self) -> bool {
        self.when == Condition::AnyRedFlag && self.recommend == Recommendation::EmergencyCare
    }
}

/// The top-level structure deserialized from a TOML rule file.
///
/// ```toml
/// fallback = "pharmacy"
///
/// [[rules]]
/// id = "red-flag"
/// description = "Any emergency symptom needs A&E"
/// when = { kind = "any-red-flag" }
/// recommend = "emergency-care"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Ordered list of rules. First match wins.
    #[serde(default)]
    pub rules: Vec<TriageRule>,

    /// Applied when no rule matches.
    pub fallback: Recommendation,
}

impl RuleSet {
    /// The CareFinder triage rules:
    ///
    /// 1. any red flag → A&E
    /// 2. severe → GP
    /// 3. moderate and more than three days → GP
    /// 4. otherwise → pharmacy
    pub fn standard() -> Self {
        Self {
            rules: vec![
                TriageRule::new(
                    "red-flag",
                    "Any emergency symptom needs A&E",
                    Condition::AnyRedFlag,
                    Recommendation::EmergencyCare,
                ),
                TriageRule::new(
                    "severe-symptoms",
                    "Severe symptoms should be checked by a GP",
                    Condition::SeverityIs {
                        is: Severity::Severe,
                    },
                    Recommendation::GpAppointment,
                ),
                TriageRule::new(
                    "persistent-moderate",
                    "Moderate symptoms lasting more than three days should be checked by a GP",
                    Condition::All {
                        of: vec![
                            Condition::SeverityIs {
                                is: Severity::Moderate,
                            },
                            Condition::DurationIs {
                                is: Duration::MoreThanThreeDays,
                            },
                        ],
                    },
                    Recommendation::GpAppointment,
                ),
            ],
            fallback: Recommendation::Pharmacy,
        }
    }

    /// Check the rule set is safe to evaluate with.
    ///
    /// - every rule id is non-empty, unique, and not the reserved fallback id
    /// - the first rule sends any red flag to A&E, so nothing outranks it
    pub fn validate(&self) -> CareFinderResult<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.id.trim().is_empty() {
                return Err(config_error("rule id must not be empty".to_string()));
            }
            if rule.id == FALLBACK_RULE_ID {
                return Err(config_error(format!(
                    "rule id '{}' is reserved",
                    FALLBACK_RULE_ID
                )));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(config_error(format!("duplicate rule id '{}'", rule.id)));
            }
        }

        match self.rules.first() {
            Some(first) if first.is_red_flag_rule() => Ok(()),
            Some(first) => Err(config_error(format!(
                "first rule must send any red flag to emergency-care, found '{}'",
                first.id
            ))),
            None => Err(config_error(
                "rule set must start with a red-flag rule sending any red flag to emergency-care"
                    .to_string(),
            )),
        }
    }
}

fn config_error(reason: String) -> CareFinderError {
    CareFinderError::ConfigError { reason }
}

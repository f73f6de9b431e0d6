//! Symptom report types.
//!
//! A `SymptomReport` is the fully answered questionnaire: which emergency
//! symptoms are present, how severe the main symptom is, and how long it has
//! lasted. It is built once per submission and dropped after evaluation.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CareFinderError, CareFinderResult};

// ── Red flags ─────────────────────────────────────────────────────────────────

/// An emergency symptom. Any one of these routes straight to A&E.
///
/// Variants are declared in questionnaire order, which is also their `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedFlag {
    ChestPain,
    Breathing,
    Stroke,
    Bleeding,
    HeadInjury,
    Seizures,
}

impl RedFlag {
    /// Every red flag, in questionnaire order.
    pub const ALL: [RedFlag; 6] = [
        RedFlag::ChestPain,
        RedFlag::Breathing,
        RedFlag::Stroke,
        RedFlag::Bleeding,
        RedFlag::HeadInjury,
        RedFlag::Seizures,
    ];

    /// Stable identifier used in rule files, JSON and CLI arguments.
    pub fn id(self) -> &'static str {
        match self {
            RedFlag::ChestPain => "chest-pain",
            RedFlag::Breathing => "breathing",
            RedFlag::Stroke => "stroke",
            RedFlag::Bleeding => "bleeding",
            RedFlag::HeadInjury => "head-injury",
            RedFlag::Seizures => "seizures",
        }
    }

    /// Checkbox label shown on the questionnaire.
    pub fn label(self) -> &'static str {
        match self {
            RedFlag::ChestPain => "Severe chest pain or pressure",
            RedFlag::Breathing => "Severe difficulty breathing",
            RedFlag::Stroke => "Signs of a stroke (e.g., face drooping, arm weakness)",
            RedFlag::Bleeding => "Heavy bleeding that won't stop",
            RedFlag::HeadInjury => "Severe head injury",
            RedFlag::Seizures => "Seizures or fits",
        }
    }
}

impl fmt::Display for RedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RedFlag {
    type Err = CareFinderError;

    fn from_str(s: &str) -> CareFinderResult<Self> {
        parse_choice("red_flags", s, &RedFlag::ALL, RedFlag::id, RedFlag::label)
    }
}

/// The set of red flags the user ticked.
///
/// Serializes as a list of ids, e.g. `["chest-pain", "seizures"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedFlagSet {
    inner: BTreeSet<RedFlag>,
}

impl RedFlagSet {
    /// An empty set: no emergency symptoms reported.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: RedFlag) {
        self.inner.insert(flag);
    }

    pub fn remove(&mut self, flag: RedFlag) {
        self.inner.remove(&flag);
    }

    /// Flip one checkbox.
    pub fn toggle(&mut self, flag: RedFlag) {
        if !self.inner.remove(&flag) {
            self.inner.insert(flag);
        }
    }

    pub fn contains(&self, flag: RedFlag) -> bool {
        self.inner.contains(&flag)
    }

    /// Return true if at least one red flag is present.
    pub fn any(&self) -> bool {
        !self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate the present flags in questionnaire order.
    pub fn iter(&self) -> impl Iterator<Item = RedFlag> + '_ {
        self.inner.iter().copied()
    }
}

impl FromIterator<RedFlag> for RedFlagSet {
    fn from_iter<I: IntoIterator<Item = RedFlag>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

// ── Severity ──────────────────────────────────────────────────────────────────

/// How severe the main symptom is. Ordered from mildest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn id(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Severity {
    type Err = CareFinderError;

    fn from_str(s: &str) -> CareFinderResult<Self> {
        parse_choice("severity", s, &Severity::ALL, Severity::id, Severity::label)
    }
}

// ── Duration ──────────────────────────────────────────────────────────────────

/// How long the main symptom has lasted. Ordered by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Duration {
    LessThanADay,
    OneToThreeDays,
    MoreThanThreeDays,
}

impl Duration {
    pub const ALL: [Duration; 3] = [
        Duration::LessThanADay,
        Duration::OneToThreeDays,
        Duration::MoreThanThreeDays,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Duration::LessThanADay => "less-than-a-day",
            Duration::OneToThreeDays => "one-to-three-days",
            Duration::MoreThanThreeDays => "more-than-three-days",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Duration::LessThanADay => "Less than a day",
            Duration::OneToThreeDays => "A few days (1-3)",
            Duration::MoreThanThreeDays => "More than 3 days",
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Duration {
    type Err = CareFinderError;

    fn from_str(s: &str) -> CareFinderResult<Self> {
        parse_choice("duration", s, &Duration::ALL, Duration::id, Duration::label)
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// A fully answered questionnaire, ready for evaluation.
///
/// Every field is required; an incomplete form never becomes a
/// `SymptomReport` (see `SymptomForm::submit`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymptomReport {
    /// Emergency symptoms reported present. Required in JSON, even when empty.
    pub red_flags: RedFlagSet,
    pub severity: Severity,
    pub duration: Duration,
}

impl SymptomReport {
    pub fn new(red_flags: RedFlagSet, severity: Severity, duration: Duration) -> Self {
        Self {
            red_flags,
            severity,
            duration,
        }
    }
}

/// Match `s` against each choice's id or label, ignoring case and
/// surrounding whitespace.
fn parse_choice<T: Copy>(
    field: &str,
    s: &str,
    choices: &[T],
    id: fn(T) -> &'static str,
    label: fn(T) -> &'static str,
) -> CareFinderResult<T> {
    let wanted = s.trim();
    choices
        .iter()
        .copied()
        .find(|c| id(*c).eq_ignore_ascii_case(wanted) || label(*c).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CareFinderError::InvalidReport {
            field: field.to_string(),
            reason: format!(
                "'{}' is not one of: {}",
                wanted,
                choices.iter().map(|c| id(*c)).collect::<Vec<_>>().join(", ")
            ),
        })
}

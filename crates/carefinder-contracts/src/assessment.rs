//! Evaluation results handed back to front ends.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{recommendation::Recommendation, report::SymptomReport};

/// Rule id reported when no ordered rule matched and the fallback applied.
pub const FALLBACK_RULE_ID: &str = "fallback";

/// Correlates the log lines of one form submission. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub uuid::Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The outcome of evaluating one report: the pathway and the rule that chose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub recommendation: Recommendation,
    /// Id of the matching rule, or `FALLBACK_RULE_ID`.
    pub rule_id: String,
}

/// A completed triage for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub submission_id: SubmissionId,
    pub report: SymptomReport,
    pub recommendation: Recommendation,
    pub rule_id: String,
    pub assessed_at: DateTime<Utc>,
}

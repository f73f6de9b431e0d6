//! The in-progress questionnaire.
//!
//! `SymptomForm` holds whatever the user has answered so far. It only becomes
//! a `SymptomReport` through `submit()`, which refuses to fill in a missing
//! severity or duration: guessing either could downgrade an emergency.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CareFinderError, CareFinderResult},
    report::{Duration, RedFlag, RedFlagSet, Severity, SymptomReport},
};

/// Answers collected from one questionnaire, possibly incomplete.
///
/// In JSON, `severity` and `duration` may be absent, so a partial draft
/// parses and is rejected later by `submit()` with a precise field name.
/// `red_flags` must be present (an empty list when nothing applies), and any
/// unrecognised key is an error: a misspelled `red_flags` must never read as
/// "no emergency symptoms".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymptomForm {
    pub red_flags: RedFlagSet,
    pub severity: Option<Severity>,
    pub duration: Option<Duration>,
}

impl SymptomForm {
    /// An empty draft: no flags ticked, no severity or duration chosen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_red_flag(&mut self, flag: RedFlag) {
        self.red_flags.toggle(flag);
    }

    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = Some(severity);
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }

    /// Reset every answer.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Return true when every required answer is present.
    pub fn is_complete(&self) -> bool {
        self.severity.is_some() && self.duration.is_some()
    }

    /// Validate the draft into a `SymptomReport`.
    ///
    /// Returns `CareFinderError::InvalidReport` naming the first missing
    /// field, checked in questionnaire order (`severity`, then `duration`).
    pub fn submit(&self) -> CareFinderResult<SymptomReport> {
        let severity = self.severity.ok_or_else(|| CareFinderError::missing("severity"))?;
        let duration = self.duration.ok_or_else(|| CareFinderError::missing("duration"))?;
        Ok(SymptomReport::new(self.red_flags.clone(), severity, duration))
    }
}

//! The evaluator seam.
//!
//! Anything that can turn a complete `SymptomReport` into a `Decision`
//! implements `TriageEvaluator`. The rule engine in `carefinder-rules` is the
//! production implementation; tests substitute their own.

use carefinder_contracts::{
    assessment::Decision, recommendation::Recommendation, report::SymptomReport,
};

/// A total, deterministic mapping from symptom report to care pathway.
///
/// Implementations must not fail, must not perform I/O, and must return the
/// same `Decision` for the same report every time. They are shared across
/// threads, so they carry no mutable state.
pub trait TriageEvaluator: Send + Sync {
    /// Decide the pathway for `report` and name the rule that chose it.
    fn decide(&self, report: &SymptomReport) -> Decision;

    /// Decide the pathway for `report`, discarding which rule fired.
    fn evaluate(&self, report: &SymptomReport) -> Recommendation {
        self.decide(report).recommendation
    }
}

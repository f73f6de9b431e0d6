//! The assessor: validate a submitted form, then evaluate it.
//!
//!   SymptomForm → submit() → SymptomReport → TriageEvaluator::decide → Assessment
//!
//! The evaluator is never reached with an incomplete form. A missing answer
//! is returned to the caller as `InvalidReport` so the front end can
//! re-prompt.

use chrono::Utc;
use tracing::{debug, info, warn};

use carefinder_contracts::{
    assessment::{Assessment, SubmissionId},
    error::CareFinderResult,
    form::SymptomForm,
    report::SymptomReport,
};

use crate::traits::TriageEvaluator;

/// Runs one evaluation per submitted questionnaire.
///
/// Holds no per-submission state; one assessor can serve any number of
/// submissions.
pub struct Assessor {
    evaluator: Box<dyn TriageEvaluator>,
}

impl Assessor {
    pub fn new(evaluator: Box<dyn TriageEvaluator>) -> Self {
        Self { evaluator }
    }

    /// Validate `form` and evaluate it.
    ///
    /// # Errors
    ///
    /// Returns `CareFinderError::InvalidReport` if severity or duration is
    /// unanswered. The evaluator is not called in that case.
    pub fn assess(&self, form: &SymptomForm) -> CareFinderResult<Assessment> {
        let submission_id = SubmissionId::new();

        let report = match form.submit() {
            Ok(report) => report,
            Err(e) => {
                warn!(
                    submission_id = %submission_id,
                    error = %e,
                    "submission rejected before evaluation"
                );
                return Err(e);
            }
        };

        Ok(self.evaluate_report(submission_id, report))
    }

    /// Evaluate an already validated report.
    pub fn assess_report(&self, report: SymptomReport) -> Assessment {
        self.evaluate_report(SubmissionId::new(), report)
    }

    fn evaluate_report(&self, submission_id: SubmissionId, report: SymptomReport) -> Assessment {
        debug!(
            submission_id = %submission_id,
            red_flags = report.red_flags.len(),
            severity = %report.severity,
            duration = %report.duration,
            "evaluating symptom report"
        );

        let decision = self.evaluator.decide(&report);

        info!(
            submission_id = %submission_id,
            recommendation = %decision.recommendation,
            rule_id = %decision.rule_id,
            "triage complete"
        );

        Assessment {
            submission_id,
            report,
            recommendation: decision.recommendation,
            rule_id: decision.rule_id,
            assessed_at: Utc::now(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use carefinder_contracts::{
        assessment::Decision,
        error::CareFinderError,
        recommendation::Recommendation,
        report::{Duration, RedFlag, Severity},
    };

    use super::*;

    // ── Test doubles ─────────────────────────────────────────────────────────

    /// An evaluator that always returns the same pathway and counts calls.
    struct MockEvaluator {
        calls: Arc<Mutex<u32>>,
        recommendation: Recommendation,
    }

    impl MockEvaluator {
        fn new(recommendation: Recommendation) -> (Self, Arc<Mutex<u32>>) {
            let calls = Arc::new(Mutex::new(0));
            let evaluator = Self {
                calls: Arc::clone(&calls),
                recommendation,
            };
            (evaluator, calls)
        }
    }

    impl TriageEvaluator for MockEvaluator {
        fn decide(&self, _report: &SymptomReport) -> Decision {
            *self.calls.lock().unwrap() += 1;
            Decision {
                recommendation: self.recommendation,
                rule_id: "mock".to_string(),
            }
        }
    }

    fn complete_form() -> SymptomForm {
        let mut form = SymptomForm::new();
        form.set_severity(Severity::Moderate);
        form.set_duration(Duration::OneToThreeDays);
        form
    }

    // ── Tests ────────────────────────────────────────────────────────────────

    #[test]
    fn complete_form_is_evaluated_once() {
        let (evaluator, calls) = MockEvaluator::new(Recommendation::Pharmacy);
        let assessor = Assessor::new(Box::new(evaluator));

        let assessment = assessor.assess(&complete_form()).unwrap();

        assert_eq!(assessment.recommendation, Recommendation::Pharmacy);
        assert_eq!(assessment.rule_id, "mock");
        assert_eq!(assessment.report.severity, Severity::Moderate);
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    /// An incomplete form must never reach the evaluator.
    #[test]
    fn incomplete_form_blocks_evaluation() {
        let (evaluator, calls) = MockEvaluator::new(Recommendation::Pharmacy);
        let assessor = Assessor::new(Box::new(evaluator));

        let mut form = SymptomForm::new();
        form.toggle_red_flag(RedFlag::ChestPain);
        form.set_severity(Severity::Severe);

        match assessor.assess(&form) {
            Err(CareFinderError::InvalidReport { field, .. }) => assert_eq!(field, "duration"),
            other => panic!("expected InvalidReport, got {:?}", other),
        }
        assert_eq!(*calls.lock().unwrap(), 0, "evaluator must not be called");
    }

    #[test]
    fn each_submission_gets_a_fresh_id() {
        let (evaluator, _calls) = MockEvaluator::new(Recommendation::GpAppointment);
        let assessor = Assessor::new(Box::new(evaluator));

        let a = assessor.assess(&complete_form()).unwrap();
        let b = assessor.assess(&complete_form()).unwrap();

        assert_ne!(a.submission_id, b.submission_id);
        assert_eq!(a.recommendation, b.recommendation);
    }

    #[test]
    fn provided_evaluate_returns_decided_pathway() {
        let (evaluator, calls) = MockEvaluator::new(Recommendation::EmergencyCare);
        let report = complete_form().submit().unwrap();

        assert_eq!(evaluator.evaluate(&report), Recommendation::EmergencyCare);
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn assess_report_skips_validation() {
        let (evaluator, _calls) = MockEvaluator::new(Recommendation::Pharmacy);
        let assessor = Assessor::new(Box::new(evaluator));
        let report = complete_form().submit().unwrap();

        let assessment = assessor.assess_report(report.clone());
        assert_eq!(assessment.report, report);
    }
}

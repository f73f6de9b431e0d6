//! # carefinder-rules
//!
//! The ordered triage rule set for CareFinder.
//!
//! ## Overview
//!
//! This crate provides [`RuleEngine`], which implements the
//! [`TriageEvaluator`](carefinder_core::traits::TriageEvaluator) trait.
//! Rules are `condition → recommendation` pairs evaluated in order; the first
//! match wins and a fallback covers everything else.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use carefinder_rules::evaluate;
//!
//! let recommendation = evaluate(&report);
//! ```
//!
//! Custom rule files can be loaded with [`RuleEngine::from_file`]; they must
//! keep the red-flag rule first.

pub mod engine;
pub mod rule;

pub use engine::{RuleEngine, STANDARD_RULES_TOML};
pub use rule::{Condition, RuleSet, TriageRule};

use carefinder_contracts::{recommendation::Recommendation, report::SymptomReport};
use carefinder_core::traits::TriageEvaluator;

/// Evaluate `report` against the standard rules.
pub fn evaluate(report: &SymptomReport) -> Recommendation {
    RuleEngine::standard().evaluate(report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

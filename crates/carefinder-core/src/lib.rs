//! # carefinder-core
//!
//! The evaluation pipeline and presentation state for CareFinder.
//!
//! This crate provides:
//! - The `TriageEvaluator` trait
//! - The `Assessor`, which validates a submitted form before evaluating it
//! - `Page` and `Router`, the explicit navigation state front ends pass around
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carefinder_core::{Assessor, traits::TriageEvaluator};
//! use carefinder_rules::RuleEngine;
//!
//! let assessor = Assessor::new(Box::new(RuleEngine::standard()));
//! let assessment = assessor.assess(&form)?;
//! ```

pub mod assessor;
pub mod navigation;
pub mod traits;

pub use assessor::Assessor;
pub use navigation::{Page, Router};

//! # carefinder-contracts
//!
//! Shared types, static advisory text, and error types for CareFinder.
//!
//! Every crate in the workspace imports from here. The only logic that lives
//! in this crate is parsing and validating questionnaire answers; the triage
//! rules themselves live in `carefinder-rules`.

pub mod assessment;
pub mod error;
pub mod form;
pub mod guidance;
pub mod recommendation;
pub mod report;

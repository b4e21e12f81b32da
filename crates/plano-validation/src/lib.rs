//! # plano-validation
//!
//! The checklist engine: inspects a teaching-plan document and derives
//! per-section completion/validity status plus an aggregate summary.
//!
//! ## Shape
//! - **Predicates** — blank/minimum-length checks, the only primitives.
//! - **Rules** — table-driven field rules for the scalar-field sections.
//! - **Sections** — twelve validators, one per plan section, fixed order.
//! - **Engine** — `validate_plan` runs all twelve, `calculate_checklist_summary`
//!   reduces the list into one completion summary.
//!
//! Everything here is a pure function of the plan document: no I/O, no
//! hidden state, no errors. Missing required data and rule violations are
//! reported as data, never as panics or `Err`.

pub mod engine;
pub mod predicates;
pub mod rules;
pub mod sections;

pub use engine::{calculate_checklist_summary, validate_plan, ChecklistEngine};

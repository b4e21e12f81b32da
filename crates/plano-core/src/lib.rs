//! # plano-core
//!
//! Foundation crate for the plano teaching-plan system.
//! Defines the plan document model, the checklist result model,
//! errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod plan;

// Re-export the most commonly used types at the crate root.
pub use config::ChecklistConfig;
pub use errors::{PlanoError, PlanoResult};
pub use models::{ChecklistSummary, FieldStatus, SectionId, SectionStatus, Validity};
pub use plan::{PlanData, TeachingPlan};

//! Result models produced by the checklist engine and consumed by the UI.

mod checklist;

pub use checklist::{ChecklistSummary, FieldStatus, SectionId, SectionStatus, Validity};

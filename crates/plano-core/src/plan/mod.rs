//! The teaching-plan document model.
//!
//! Serialized as camelCase JSON — the wire format of the documents the
//! browser client stores. Every struct is `#[serde(default)]` so a sparse
//! or partially malformed stored document deserializes to empty fields
//! instead of failing; validators then report the gaps as incomplete data.

mod document;
mod sections;

pub use document::{PlanData, TeachingPlan};
pub use sections::{
    Activity, Bibliography, ContentSection, Extension, Identification, PeriodContent,
    SchedulePeriod, Signatures, Visit,
};

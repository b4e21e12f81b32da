//! Section validators, one per plan section.
//!
//! Each takes its slice of the plan and returns a [`SectionStatus`];
//! the engine runs them in fixed UI order. Validators never fail: any
//! problem is reported inside the returned status.

pub mod bibliography;
pub mod content;
pub mod extension;
pub mod identification;
pub mod narrative;
pub mod schedule;
pub mod signatures;
pub mod visits;

pub use plano_core::models::SectionStatus;

//! # plano-storage
//!
//! SQLite persistence for teaching plans. Plans are stored as JSON documents
//! in a single `plans` table keyed by plan id and owner id, so the document
//! shape can evolve without schema churn.
//!
//! Also provides [`SessionCache`], an explicit owner-scoped cache with an
//! injected clock and a time-based staleness window, used by hosting layers
//! to avoid refetching a user's plan list on every navigation.

pub mod cache;
pub mod schema;
pub mod store;

pub use cache::{Clock, SessionCache, SystemClock};
pub use store::{PlanStore, PlanSummary};

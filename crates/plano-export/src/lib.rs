//! # plano-export
//!
//! Plain-text rendering of a teaching plan in the institutional document
//! order: twelve numbered sections, blank narrative fields replaced by a
//! "Não informado" marker. Rendering is infallible — any plan, however
//! sparse, produces a document.

mod text;

pub use text::{render_plan_text, render_plan_text_now};

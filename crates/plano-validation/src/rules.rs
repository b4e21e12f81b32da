//! Table-driven field rules for the scalar-field sections.
//!
//! A section declares its fields as a list of [`FieldRule`] entries; the
//! evaluator turns each into a [`FieldStatus`] and the section derives its
//! own completion/validity as an AND-reduction over the required fields.

use plano_core::models::{FieldStatus, Validity};

use crate::predicates::{has_minimum_length, is_blank};

/// How a single field value is judged.
#[derive(Debug, Clone, Copy)]
pub enum FieldCheck {
    /// Complete and valid iff the value is not blank.
    NonEmpty { message: &'static str },
    /// Complete iff not blank; valid iff the trimmed length reaches `min`.
    /// A blank value is judged Invalid, not Unevaluated: these fields sit
    /// inside multi-field sections where the form shows the rule up front.
    MinLength { min: usize, message: &'static str },
    /// Informational field, always valid regardless of content.
    AlwaysValid,
}

/// Declarative rule for one field of a section.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub id: &'static str,
    pub name: &'static str,
    pub required: bool,
    pub check: FieldCheck,
}

impl FieldRule {
    /// Judge a field value against this rule.
    pub fn evaluate(&self, value: &str) -> FieldStatus {
        let is_complete = !is_blank(value);
        let (validity, validation_message) = match self.check {
            FieldCheck::NonEmpty { message } => {
                let ok = is_complete;
                (
                    Validity::from_flag(ok),
                    (!ok).then(|| message.to_string()),
                )
            }
            FieldCheck::MinLength { min, message } => {
                let ok = has_minimum_length(value, min);
                (
                    Validity::from_flag(ok),
                    (!ok).then(|| message.to_string()),
                )
            }
            FieldCheck::AlwaysValid => (Validity::Valid, None),
        };

        FieldStatus {
            id: self.id.to_string(),
            name: self.name.to_string(),
            is_complete,
            is_required: self.required,
            validity,
            validation_message,
        }
    }
}

/// Evaluate a rule table against its values, pairwise.
pub fn evaluate_rules(rules: &[FieldRule], values: &[&str]) -> Vec<FieldStatus> {
    debug_assert_eq!(rules.len(), values.len());
    rules
        .iter()
        .zip(values)
        .map(|(rule, value)| rule.evaluate(value))
        .collect()
}

/// AND-reduction of completeness over the required fields.
pub fn required_complete(fields: &[FieldStatus]) -> bool {
    fields
        .iter()
        .filter(|f| f.is_required)
        .all(|f| f.is_complete)
}

/// AND-reduction of validity over the required fields.
pub fn required_valid(fields: &[FieldStatus]) -> bool {
    fields
        .iter()
        .filter(|f| f.is_required)
        .all(|f| f.validity.is_valid())
}

//! The five narrative sections: one free-text blob judged by a minimum
//! trimmed length. While the blob is blank the length rule is left
//! unevaluated; once text exists it is judged Valid or Invalid.

use plano_core::constants::{NARRATIVE_MIN_CHARS, SHORT_TEXT_MIN_CHARS};
use plano_core::models::{FieldStatus, SectionId, SectionStatus, Validity};

use crate::predicates::{has_minimum_length, is_blank};

fn narrative_section(
    id: SectionId,
    field_id: &str,
    field_name: &str,
    text: &str,
    min: usize,
    is_required: bool,
    message: &str,
) -> SectionStatus {
    let is_complete = !is_blank(text);
    let meets_minimum = has_minimum_length(text, min);
    let validity = if is_complete {
        Validity::from_flag(meets_minimum)
    } else {
        Validity::Unevaluated
    };
    let validation_message = (!meets_minimum).then(|| message.to_string());

    let field = FieldStatus {
        id: field_id.to_string(),
        name: field_name.to_string(),
        is_complete,
        is_required,
        validity,
        validation_message: validation_message.clone(),
    };

    SectionStatus {
        id,
        title: id.title().to_string(),
        is_complete,
        is_required,
        validity,
        validation_message,
        fields: vec![field],
    }
}

pub fn validate_syllabus(syllabus: &str) -> SectionStatus {
    narrative_section(
        SectionId::Syllabus,
        "content",
        "Conteúdo da Ementa",
        syllabus,
        NARRATIVE_MIN_CHARS,
        true,
        "A ementa deve ter pelo menos 30 caracteres",
    )
}

pub fn validate_objectives(objectives: &str) -> SectionStatus {
    narrative_section(
        SectionId::Objectives,
        "content",
        "Conteúdo dos Objetivos",
        objectives,
        NARRATIVE_MIN_CHARS,
        true,
        "Os objetivos devem ter pelo menos 30 caracteres",
    )
}

/// Justification shares the 30-character rule with the other narrative
/// sections but does not block completion by default. `is_required` comes
/// from config so campuses that mandate it can flip the flag.
pub fn validate_justification(justification: &str, is_required: bool) -> SectionStatus {
    narrative_section(
        SectionId::Justification,
        "content",
        "Conteúdo da Justificativa",
        justification,
        NARRATIVE_MIN_CHARS,
        is_required,
        "A justificativa deve ter pelo menos 30 caracteres",
    )
}

pub fn validate_methodology(methodology: &str) -> SectionStatus {
    narrative_section(
        SectionId::Methodology,
        "content",
        "Procedimentos Metodológicos",
        methodology,
        NARRATIVE_MIN_CHARS,
        true,
        "A metodologia deve ter pelo menos 30 caracteres",
    )
}

pub fn validate_resources(resources: &str) -> SectionStatus {
    narrative_section(
        SectionId::Resources,
        "content",
        "Recursos e Infraestrutura",
        resources,
        SHORT_TEXT_MIN_CHARS,
        true,
        "Os recursos devem ter pelo menos 10 caracteres",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_syllabus_is_unevaluated() {
        let status = validate_syllabus("   ");
        assert!(!status.is_complete);
        assert_eq!(status.validity, Validity::Unevaluated);
        assert!(status.validation_message.is_some());
    }

    #[test]
    fn twenty_nine_chars_is_complete_but_invalid() {
        let text = "a".repeat(29);
        let status = validate_syllabus(&text);
        assert!(status.is_complete);
        assert_eq!(status.validity, Validity::Invalid);
        assert!(status.validation_message.is_some());
    }

    #[test]
    fn thirty_chars_is_valid() {
        let text = "a".repeat(30);
        let status = validate_syllabus(&text);
        assert!(status.is_complete);
        assert_eq!(status.validity, Validity::Valid);
        assert!(status.validation_message.is_none());
    }

    #[test]
    fn resources_uses_the_short_threshold() {
        assert_eq!(validate_resources("Projetor").validity, Validity::Invalid);
        assert_eq!(
            validate_resources("Projetor e laboratório").validity,
            Validity::Valid
        );
    }

    #[test]
    fn justification_requiredness_comes_from_caller() {
        assert!(!validate_justification("", false).is_required);
        assert!(validate_justification("", true).is_required);
    }
}

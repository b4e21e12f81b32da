//! Curricular extension section.
//!
//! A plan without extension activities is a valid terminal state, not an
//! incomplete one; the detail rules only apply when the flag is set.

use plano_core::constants::SHORT_TEXT_MIN_CHARS;
use plano_core::models::{FieldStatus, SectionId, SectionStatus, Validity};
use plano_core::plan::Extension;

use crate::rules::{evaluate_rules, required_complete, required_valid, FieldCheck, FieldRule};

const RULES: [FieldRule; 3] = [
    FieldRule {
        id: "type",
        name: "Tipo de Atividade",
        required: true,
        check: FieldCheck::NonEmpty {
            message: "O tipo de atividade é obrigatório quando há extensão",
        },
    },
    FieldRule {
        id: "summary",
        name: "Resumo",
        required: true,
        check: FieldCheck::MinLength {
            min: SHORT_TEXT_MIN_CHARS,
            message: "O resumo deve ter pelo menos 10 caracteres",
        },
    },
    FieldRule {
        id: "objectives",
        name: "Objetivos",
        required: true,
        check: FieldCheck::MinLength {
            min: SHORT_TEXT_MIN_CHARS,
            message: "Os objetivos devem ter pelo menos 10 caracteres",
        },
    },
];

pub fn validate(extension: &Extension) -> SectionStatus {
    let (fields, is_complete, validity) = if extension.has_extension {
        let fields = evaluate_rules(
            &RULES,
            &[
                extension.kind.as_str(),
                extension.summary.as_str(),
                extension.objectives.as_str(),
            ],
        );
        let is_complete = required_complete(&fields);
        let validity = Validity::from_flag(required_valid(&fields));
        (fields, is_complete, validity)
    } else {
        let field = FieldStatus {
            id: "hasExtension".to_string(),
            name: "Possui Extensão".to_string(),
            is_complete: true,
            is_required: false,
            validity: Validity::Valid,
            validation_message: None,
        };
        (vec![field], true, Validity::Valid)
    };

    SectionStatus {
        id: SectionId::Extension,
        title: SectionId::Extension.title().to_string(),
        is_complete,
        is_required: false,
        validity,
        validation_message: None,
        fields,
    }
}

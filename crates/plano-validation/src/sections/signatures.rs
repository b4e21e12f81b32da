//! Signatures section: professor signature and date/year are required,
//! the coordinator signs later and never blocks the professor's flow.

use plano_core::models::{SectionId, SectionStatus, Validity};
use plano_core::plan::Signatures;

use crate::rules::{evaluate_rules, required_complete, required_valid, FieldCheck, FieldRule};

const RULES: [FieldRule; 3] = [
    FieldRule {
        id: "professorSignature",
        name: "Assinatura do Professor",
        required: true,
        check: FieldCheck::NonEmpty {
            message: "A assinatura do professor é obrigatória",
        },
    },
    FieldRule {
        id: "coordinatorSignature",
        name: "Assinatura do Coordenador",
        required: false,
        check: FieldCheck::AlwaysValid,
    },
    FieldRule {
        id: "date",
        name: "Data/Ano",
        required: true,
        check: FieldCheck::NonEmpty {
            message: "A data/ano é obrigatória",
        },
    },
];

pub fn validate(signatures: &Signatures) -> SectionStatus {
    let fields = evaluate_rules(
        &RULES,
        &[
            signatures.professor_signature.as_str(),
            signatures.coordinator_signature.as_str(),
            signatures.date.as_str(),
        ],
    );

    let is_complete = required_complete(&fields);
    let is_valid = required_valid(&fields);

    SectionStatus {
        id: SectionId::Signatures,
        title: SectionId::Signatures.title().to_string(),
        is_complete,
        is_required: true,
        validity: Validity::from_flag(is_valid),
        validation_message: (!is_valid)
            .then(|| "Informações de assinatura incompletas".to_string()),
        fields,
    }
}

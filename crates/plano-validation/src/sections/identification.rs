//! Identification section: course/professor names and hour counts.

use plano_core::constants::NAME_MIN_CHARS;
use plano_core::models::{SectionId, SectionStatus, Validity};
use plano_core::plan::Identification;

use crate::rules::{evaluate_rules, required_complete, required_valid, FieldCheck, FieldRule};

const RULES: [FieldRule; 5] = [
    FieldRule {
        id: "courseName",
        name: "Nome do Componente",
        required: true,
        check: FieldCheck::MinLength {
            min: NAME_MIN_CHARS,
            message: "O nome do componente deve ter pelo menos 3 caracteres",
        },
    },
    FieldRule {
        id: "professorName",
        name: "Nome do Professor",
        required: true,
        check: FieldCheck::MinLength {
            min: NAME_MIN_CHARS,
            message: "O nome do professor deve ter pelo menos 3 caracteres",
        },
    },
    FieldRule {
        id: "totalHours",
        name: "Carga Horária Total",
        required: true,
        check: FieldCheck::NonEmpty {
            message: "A carga horária total é obrigatória",
        },
    },
    FieldRule {
        id: "weeklyHours",
        name: "Carga Horária Semanal",
        required: true,
        check: FieldCheck::NonEmpty {
            message: "A carga horária semanal é obrigatória",
        },
    },
    FieldRule {
        id: "eixo",
        name: "Eixo",
        required: false,
        check: FieldCheck::AlwaysValid,
    },
];

pub fn validate(identification: &Identification) -> SectionStatus {
    let fields = evaluate_rules(
        &RULES,
        &[
            identification.course_name.as_str(),
            identification.professor_name.as_str(),
            identification.total_hours.as_str(),
            identification.weekly_hours.as_str(),
            identification.eixo.as_str(),
        ],
    );

    let is_complete = required_complete(&fields);
    let validity = Validity::from_flag(required_valid(&fields));

    SectionStatus {
        id: SectionId::Identification,
        title: SectionId::Identification.title().to_string(),
        is_complete,
        is_required: true,
        validity,
        validation_message: None,
        fields,
    }
}

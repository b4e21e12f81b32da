//! Bibliography section. Only the basic bibliography blocks completion;
//! the length rule stays unevaluated while it is blank.

use plano_core::constants::SHORT_TEXT_MIN_CHARS;
use plano_core::models::{FieldStatus, SectionId, SectionStatus, Validity};
use plano_core::plan::Bibliography;

use crate::predicates::{has_minimum_length, is_blank};

pub fn validate(bibliography: &Bibliography) -> SectionStatus {
    let has_basic = !is_blank(&bibliography.basic);
    let meets_minimum = has_minimum_length(&bibliography.basic, SHORT_TEXT_MIN_CHARS);
    let basic_ok = has_basic && meets_minimum;

    let basic = FieldStatus {
        id: "basic".to_string(),
        name: "Bibliografia Básica".to_string(),
        is_complete: has_basic,
        is_required: true,
        validity: if has_basic {
            Validity::from_flag(meets_minimum)
        } else {
            Validity::Unevaluated
        },
        validation_message: (has_basic && !meets_minimum)
            .then(|| "A bibliografia básica deve ter pelo menos 10 caracteres".to_string()),
    };

    let complementary = FieldStatus {
        id: "complementary".to_string(),
        name: "Bibliografia Complementar".to_string(),
        is_complete: !is_blank(&bibliography.complementary),
        is_required: false,
        validity: Validity::Valid,
        validation_message: None,
    };

    SectionStatus {
        id: SectionId::Bibliography,
        title: SectionId::Bibliography.title().to_string(),
        is_complete: has_basic,
        is_required: true,
        validity: if has_basic {
            Validity::from_flag(basic_ok)
        } else {
            Validity::Unevaluated
        },
        validation_message: (!basic_ok).then(|| {
            "A bibliografia básica é obrigatória e deve ter conteúdo suficiente".to_string()
        }),
        fields: vec![basic, complementary],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_basic_is_unevaluated() {
        let status = validate(&Bibliography::default());
        assert!(!status.is_complete);
        assert_eq!(status.validity, Validity::Unevaluated);
        assert_eq!(status.fields[0].validity, Validity::Unevaluated);
        assert!(status.validation_message.is_some());
    }

    #[test]
    fn short_basic_is_complete_but_invalid() {
        let bib = Bibliography {
            basic: "Livro A".to_string(),
            ..Default::default()
        };
        let status = validate(&bib);
        assert!(status.is_complete);
        assert_eq!(status.validity, Validity::Invalid);
        assert!(status.fields[0].validation_message.is_some());
    }

    #[test]
    fn adequate_basic_is_valid_without_complementary() {
        let bib = Bibliography {
            basic: "SILVA, J. Programação Web. Editora X, 2024.".to_string(),
            ..Default::default()
        };
        let status = validate(&bib);
        assert_eq!(status.validity, Validity::Valid);
        assert!(status.validation_message.is_none());
        let comp = &status.fields[1];
        assert!(!comp.is_required);
        assert_eq!(comp.validity, Validity::Valid);
    }
}

//! Technical visits section.
//!
//! Visits are optional, but location and date are co-required per entry:
//! a wholly empty visit asserts nothing and is fine, while filling only
//! one of the pair is a data-entry error the checklist flags.

use plano_core::models::{FieldStatus, SectionId, SectionStatus, Validity};
use plano_core::plan::Visit;

use crate::predicates::is_blank;

fn pair_consistent(visit: &Visit) -> bool {
    is_blank(&visit.location) == is_blank(&visit.date)
}

pub fn validate(visits: &[Visit]) -> SectionStatus {
    let any_mismatch = visits.iter().any(|v| !pair_consistent(v));

    let fields: Vec<FieldStatus> = if visits.is_empty() {
        vec![FieldStatus {
            id: "no-visits".to_string(),
            name: "Sem Visitas".to_string(),
            is_complete: true,
            is_required: false,
            validity: Validity::Valid,
            validation_message: None,
        }]
    } else {
        visits
            .iter()
            .enumerate()
            .map(|(index, visit)| {
                let consistent = pair_consistent(visit);
                FieldStatus {
                    id: format!("visit-{index}"),
                    name: format!("Visita {}", index + 1),
                    is_complete: consistent,
                    is_required: false,
                    validity: Validity::from_flag(consistent),
                    validation_message: (!consistent).then(|| {
                        "Local e data devem ser ambos preenchidos ou ambos vazios".to_string()
                    }),
                }
            })
            .collect()
    };

    let is_complete = !any_mismatch;

    SectionStatus {
        id: SectionId::Visits,
        title: SectionId::Visits.title().to_string(),
        is_complete,
        is_required: false,
        validity: Validity::from_flag(is_complete),
        validation_message: any_mismatch
            .then(|| "Os dados das visitas estão incompletos".to_string()),
        fields,
    }
}

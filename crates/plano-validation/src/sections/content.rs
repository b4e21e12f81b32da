//! Program content section.
//!
//! One field per instructional period. Only the first period is required:
//! plans with a single period are common and extra periods may stay empty.
//! The section itself completes as soon as any period carries content.

use plano_core::models::{FieldStatus, SectionId, SectionStatus, Validity};
use plano_core::plan::ContentSection;

use crate::predicates::is_blank;

pub fn validate(content: &ContentSection) -> SectionStatus {
    let any_filled = content.by_period.iter().any(|p| !is_blank(&p.content));

    let fields: Vec<FieldStatus> = content
        .by_period
        .iter()
        .enumerate()
        .map(|(index, period)| {
            let filled = !is_blank(&period.content);
            let name = if is_blank(&period.period) {
                format!("Período {}", index + 1)
            } else {
                period.period.clone()
            };
            FieldStatus {
                id: format!("period-{index}"),
                name,
                is_complete: filled,
                is_required: index == 0,
                validity: Validity::from_flag(filled),
                validation_message: (!filled).then(|| "O conteúdo é obrigatório".to_string()),
            }
        })
        .collect();

    SectionStatus {
        id: SectionId::Content,
        title: SectionId::Content.title().to_string(),
        is_complete: any_filled,
        is_required: true,
        validity: Validity::from_flag(any_filled),
        validation_message: (!any_filled).then(|| {
            "É necessário incluir conteúdo para pelo menos um período".to_string()
        }),
        fields,
    }
}

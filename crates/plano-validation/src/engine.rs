//! ChecklistEngine — runs the twelve section validators in fixed UI order
//! and reduces the results into a completion summary.

use plano_core::config::ChecklistConfig;
use plano_core::models::{ChecklistSummary, SectionStatus};
use plano_core::TeachingPlan;

use crate::sections::{
    bibliography, content, extension, identification, narrative, schedule, signatures, visits,
};

/// The checklist engine.
///
/// Pure and synchronous: the hosting UI recomputes the whole checklist on
/// every plan mutation, which is cheap because plans are single-digit KB.
#[derive(Debug, Clone, Default)]
pub struct ChecklistEngine {
    config: ChecklistConfig,
}

impl ChecklistEngine {
    pub fn new(config: ChecklistConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    /// Validate every section of the plan.
    ///
    /// Always returns exactly twelve entries in UI navigation order;
    /// consumers rely on the array index. No short-circuiting.
    pub fn validate(&self, plan: &TeachingPlan) -> Vec<SectionStatus> {
        let data = &plan.data;
        let sections = vec![
            identification::validate(&data.identification),
            narrative::validate_syllabus(&data.syllabus),
            narrative::validate_objectives(&data.objectives),
            narrative::validate_justification(
                &data.justification,
                self.config.justification_required,
            ),
            extension::validate(&data.extension),
            content::validate(&data.content),
            narrative::validate_methodology(&data.methodology),
            narrative::validate_resources(&data.resources),
            visits::validate(&data.visits),
            schedule::validate(&data.schedule),
            bibliography::validate(&data.bibliography),
            signatures::validate(&data.signatures),
        ];
        debug_assert_eq!(sections.len(), plano_core::constants::SECTION_COUNT);
        sections
    }

    /// Validate and summarize in one call.
    pub fn summarize(&self, plan: &TeachingPlan) -> ChecklistSummary {
        calculate_checklist_summary(&self.validate(plan))
    }
}

/// Validate a plan with the default configuration.
pub fn validate_plan(plan: &TeachingPlan) -> Vec<SectionStatus> {
    ChecklistEngine::default().validate(plan)
}

/// Reduce a section list into the aggregate completion summary.
///
/// The completion percentage is computed over *required* sections only;
/// optional sections neither help nor hurt the progress bar.
pub fn calculate_checklist_summary(sections: &[SectionStatus]) -> ChecklistSummary {
    let total_sections = sections.len();
    let completed_sections = sections.iter().filter(|s| s.is_complete).count();

    let required: Vec<&SectionStatus> = sections.iter().filter(|s| s.is_required).collect();
    let total_required_sections = required.len();
    let completed_required_sections = required.iter().filter(|s| s.is_complete).count();

    let is_valid = required.iter().all(|s| s.validity.is_valid());

    let completion_percentage = if total_required_sections > 0 {
        ((completed_required_sections as f64 / total_required_sections as f64) * 100.0).round()
            as u8
    } else {
        0
    };

    tracing::debug!(
        completed = completed_required_sections,
        required = total_required_sections,
        percentage = completion_percentage,
        valid = is_valid,
        "checklist summary computed"
    );

    ChecklistSummary {
        completed_sections,
        total_sections,
        completed_required_sections,
        total_required_sections,
        is_valid,
        completion_percentage,
    }
}

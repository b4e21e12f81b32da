use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SECTION_COUNT;

/// Stable key of a plan section. The order of [`SectionId::ORDERED`] is the
/// UI navigation order; checklist consumers rely on the array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    Identification,
    Syllabus,
    Objectives,
    Justification,
    Extension,
    Content,
    Methodology,
    Resources,
    Visits,
    Schedule,
    Bibliography,
    Signatures,
}

impl SectionId {
    /// All sections in fixed UI navigation order.
    pub const ORDERED: [SectionId; SECTION_COUNT] = [
        SectionId::Identification,
        SectionId::Syllabus,
        SectionId::Objectives,
        SectionId::Justification,
        SectionId::Extension,
        SectionId::Content,
        SectionId::Methodology,
        SectionId::Resources,
        SectionId::Visits,
        SectionId::Schedule,
        SectionId::Bibliography,
        SectionId::Signatures,
    ];

    /// Stable string key, as used by the checklist UI.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Identification => "identification",
            SectionId::Syllabus => "syllabus",
            SectionId::Objectives => "objectives",
            SectionId::Justification => "justification",
            SectionId::Extension => "extension",
            SectionId::Content => "content",
            SectionId::Methodology => "methodology",
            SectionId::Resources => "resources",
            SectionId::Visits => "visits",
            SectionId::Schedule => "schedule",
            SectionId::Bibliography => "bibliography",
            SectionId::Signatures => "signatures",
        }
    }

    /// Display title shown in the checklist panel and exported documents.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Identification => "Identificação",
            SectionId::Syllabus => "Ementa",
            SectionId::Objectives => "Objetivos",
            SectionId::Justification => "Justificativa",
            SectionId::Extension => "Atividades de Extensão",
            SectionId::Content => "Conteúdo Programático",
            SectionId::Methodology => "Metodologia",
            SectionId::Resources => "Recursos",
            SectionId::Visits => "Visitas Técnicas",
            SectionId::Schedule => "Cronograma",
            SectionId::Bibliography => "Bibliografia",
            SectionId::Signatures => "Assinaturas",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state validity judgment.
///
/// `Unevaluated` means the data is still incomplete, so no length rule has
/// been judged yet. Sections whose rules have no minimum-length component
/// never produce it: for those, completeness and validity coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    Unevaluated,
    Valid,
    Invalid,
}

impl Validity {
    /// Collapse a boolean judgment into Valid/Invalid.
    pub fn from_flag(ok: bool) -> Self {
        if ok {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    /// Whether this counts as a positive judgment. `Unevaluated` does not.
    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// Validation result for a single field inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatus {
    pub id: String,
    pub name: String,
    pub is_complete: bool,
    pub is_required: bool,
    pub validity: Validity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
}

/// Validation result for one plan section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStatus {
    pub id: SectionId,
    pub title: String,
    pub is_complete: bool,
    /// Whether this section blocks overall plan completion.
    pub is_required: bool,
    pub validity: Validity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
    pub fields: Vec<FieldStatus>,
}

/// Aggregate completion summary over all sections, driving the progress bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSummary {
    pub completed_sections: usize,
    pub total_sections: usize,
    pub completed_required_sections: usize,
    pub total_required_sections: usize,
    /// True iff every required section is `Validity::Valid`.
    pub is_valid: bool,
    /// Rounded percentage of completed required sections, 0–100.
    pub completion_percentage: u8,
}

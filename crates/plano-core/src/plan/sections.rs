use serde::{Deserialize, Serialize};

/// Identification block of a plan. All hour counts are free-text strings,
/// matching what the form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Identification {
    pub course_name: String,
    pub course_abbreviation: String,
    pub professor_name: String,
    /// SIAPE registry code of the professor.
    pub siape_code: String,
    pub total_hours: String,
    pub weekly_hours: String,
    pub theoretical_hours: String,
    pub practical_hours: String,
    pub in_person_hours: String,
    pub distance_hours: String,
    pub extension_hours: String,
    /// Curricular axis/track label. Informational only.
    pub eixo: String,
}

/// Curricular extension activities. The detail fields only matter when
/// `has_extension` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Extension {
    pub has_extension: bool,
    /// Kind of extension activity (project, course, event, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub summary: String,
    pub justification: String,
    pub objectives: String,
    pub community_involvement: String,
}

/// Program content for one instructional period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PeriodContent {
    /// Period label, e.g. "1º Bimestre".
    pub period: String,
    pub content: String,
    pub interdisciplinary_relations: String,
}

/// Program content section: ordered periods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentSection {
    pub by_period: Vec<PeriodContent>,
}

/// A planned technical visit. Location and date are co-required:
/// filling only one of them is a data-entry error the checklist flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Visit {
    pub location: String,
    pub date: String,
    pub materials: String,
}

/// One scheduled activity inside a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Activity {
    pub date: String,
    pub teacher_activities: String,
    pub student_activities: String,
}

/// Development schedule for one instructional period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulePeriod {
    pub period: String,
    pub activities: Vec<Activity>,
}

/// Bibliography block. Only the basic bibliography blocks completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bibliography {
    pub basic: String,
    pub complementary: String,
}

/// Signature block closing the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Signatures {
    pub professor_signature: String,
    pub coordinator_signature: String,
    pub component_name: String,
    pub course_name: String,
    /// Date/year the plan refers to.
    pub date: String,
}

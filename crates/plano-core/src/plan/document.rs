use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::sections::{
    Activity, Bibliography, ContentSection, Extension, Identification, PeriodContent,
    SchedulePeriod, Signatures, Visit,
};

/// The twelve section slices of a plan, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanData {
    pub identification: Identification,
    pub syllabus: String,
    pub objectives: String,
    pub justification: String,
    pub extension: Extension,
    pub content: ContentSection,
    pub methodology: String,
    pub resources: String,
    pub visits: Vec<Visit>,
    pub schedule: Vec<SchedulePeriod>,
    pub bibliography: Bibliography,
    pub signatures: Signatures,
}

/// A teaching-plan document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeachingPlan {
    pub id: String,
    pub title: String,
    pub last_updated: DateTime<Utc>,
    pub data: PlanData,
}

impl Default for TeachingPlan {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            last_updated: Utc::now(),
            data: PlanData::default(),
        }
    }
}

impl TeachingPlan {
    /// Create a starter document: all text fields empty, one seeded period
    /// in content and schedule, one empty activity, one empty visit.
    /// This is the state a fresh form session begins from.
    pub fn new(title: impl Into<String>) -> Self {
        let mut data = PlanData::default();
        data.content.by_period.push(PeriodContent {
            period: "1º Bimestre".to_string(),
            ..Default::default()
        });
        data.visits.push(Visit::default());
        data.schedule.push(SchedulePeriod {
            period: "1º Bimestre".to_string(),
            activities: vec![Activity::default()],
        });

        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            last_updated: Utc::now(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_plan_seeds_one_period_visit_and_activity() {
        let plan = TeachingPlan::new("Novo Plano de Ensino");
        assert_eq!(plan.data.content.by_period.len(), 1);
        assert_eq!(plan.data.content.by_period[0].period, "1º Bimestre");
        assert_eq!(plan.data.visits.len(), 1);
        assert_eq!(plan.data.schedule.len(), 1);
        assert_eq!(plan.data.schedule[0].activities.len(), 1);
        assert!(!plan.id.is_empty());
    }

    #[test]
    fn sparse_json_deserializes_to_empty_fields() {
        let plan: TeachingPlan = serde_json::from_str(r#"{"id":"p1","title":"t"}"#).unwrap();
        assert_eq!(plan.id, "p1");
        assert!(plan.data.syllabus.is_empty());
        assert!(plan.data.content.by_period.is_empty());
        assert!(plan.data.visits.is_empty());
        assert!(!plan.data.extension.has_extension);
    }

    #[test]
    fn extension_kind_round_trips_as_type() {
        let mut plan = TeachingPlan::new("t");
        plan.data.extension.kind = "Projeto".to_string();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["data"]["extension"]["type"], "Projeto");
    }
}

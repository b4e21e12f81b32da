//! Development schedule section.
//!
//! A period is satisfied when at least one of its activities has a date and
//! some teacher or student activity text. Only the first period is required,
//! mirroring the program content rule.

use plano_core::models::{FieldStatus, SectionId, SectionStatus, Validity};
use plano_core::plan::SchedulePeriod;

use crate::predicates::is_blank;
use crate::rules::required_complete;

fn period_satisfied(period: &SchedulePeriod) -> bool {
    period.activities.iter().any(|a| {
        !is_blank(&a.date) && (!is_blank(&a.teacher_activities) || !is_blank(&a.student_activities))
    })
}

pub fn validate(schedule: &[SchedulePeriod]) -> SectionStatus {
    let (fields, is_complete) = if schedule.is_empty() {
        let field = FieldStatus {
            id: "no-schedule".to_string(),
            name: "Cronograma".to_string(),
            is_complete: false,
            is_required: true,
            validity: Validity::Invalid,
            validation_message: Some(
                "É necessário incluir pelo menos um período com atividades".to_string(),
            ),
        };
        (vec![field], false)
    } else {
        let fields: Vec<FieldStatus> = schedule
            .iter()
            .enumerate()
            .map(|(index, period)| {
                let satisfied = period_satisfied(period);
                let name = if is_blank(&period.period) {
                    format!("Período {}", index + 1)
                } else {
                    period.period.clone()
                };
                FieldStatus {
                    id: format!("period-{index}"),
                    name,
                    is_complete: satisfied,
                    is_required: index == 0,
                    validity: Validity::from_flag(satisfied),
                    validation_message: (!satisfied).then(|| {
                        "É necessário incluir pelo menos uma atividade com data e conteúdo"
                            .to_string()
                    }),
                }
            })
            .collect();
        let is_complete = required_complete(&fields);
        (fields, is_complete)
    };

    SectionStatus {
        id: SectionId::Schedule,
        title: SectionId::Schedule.title().to_string(),
        is_complete,
        is_required: true,
        validity: Validity::from_flag(is_complete),
        validation_message: (!is_complete).then(|| {
            "É necessário incluir pelo menos um período com atividades válidas".to_string()
        }),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plano_core::plan::Activity;

    fn activity(date: &str, teacher: &str, student: &str) -> Activity {
        Activity {
            date: date.to_string(),
            teacher_activities: teacher.to_string(),
            student_activities: student.to_string(),
        }
    }

    fn period(label: &str, activities: Vec<Activity>) -> SchedulePeriod {
        SchedulePeriod {
            period: label.to_string(),
            activities,
        }
    }

    #[test]
    fn empty_schedule_gets_a_placeholder_field() {
        let status = validate(&[]);
        assert!(!status.is_complete);
        assert_eq!(status.validity, Validity::Invalid);
        assert_eq!(status.fields[0].id, "no-schedule");
        assert!(status.fields[0].is_required);
    }

    #[test]
    fn activity_needs_date_and_some_content() {
        let empty_date = period("1º Bimestre", vec![activity("", "Aula expositiva", "")]);
        assert!(!validate(std::slice::from_ref(&empty_date)).is_complete);

        let date_only = period("1º Bimestre", vec![activity("01/03", "", "")]);
        assert!(!validate(std::slice::from_ref(&date_only)).is_complete);

        let teacher_side = period("1º Bimestre", vec![activity("01/03", "Aula expositiva", "")]);
        assert!(validate(std::slice::from_ref(&teacher_side)).is_complete);

        let student_side = period("1º Bimestre", vec![activity("01/03", "", "Exercícios")]);
        assert!(validate(std::slice::from_ref(&student_side)).is_complete);
    }

    #[test]
    fn only_first_period_is_required() {
        let periods = vec![
            period("1º Bimestre", vec![activity("01/03", "Aula", "")]),
            period("2º Bimestre", vec![Activity::default()]),
        ];
        let status = validate(&periods);
        assert!(status.is_complete);
        assert_eq!(status.validity, Validity::Valid);
        assert!(!status.fields[1].is_complete);
        assert!(!status.fields[1].is_required);
    }

    #[test]
    fn unsatisfied_first_period_blocks_even_with_later_activity() {
        let periods = vec![
            period("1º Bimestre", vec![Activity::default()]),
            period("2º Bimestre", vec![activity("01/06", "Revisão", "")]),
        ];
        let status = validate(&periods);
        assert!(!status.is_complete);
        assert!(status.validation_message.is_some());
    }
}

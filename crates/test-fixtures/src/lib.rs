//! Plan builders and golden JSON fixtures shared by tests across crates.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use plano_core::plan::{Activity, PeriodContent, SchedulePeriod, Visit};
use plano_core::TeachingPlan;

/// Absolute path to a fixture file inside this crate's `fixtures/` directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The starter document a fresh form session begins from: all text fields
/// empty, one seeded period/visit/activity.
pub fn starter_plan() -> TeachingPlan {
    TeachingPlan::new("Novo Plano de Ensino")
}

/// A plan with every required section validly filled. Justification is
/// filled too; tests that need it blank clear it explicitly.
pub fn complete_plan() -> TeachingPlan {
    let mut plan = TeachingPlan::new("Plano de Ensino — Programação Web");
    let data = &mut plan.data;

    data.identification.course_name = "Programação Web".to_string();
    data.identification.course_abbreviation = "PW".to_string();
    data.identification.professor_name = "Maria Silva".to_string();
    data.identification.siape_code = "1234567".to_string();
    data.identification.total_hours = "80".to_string();
    data.identification.weekly_hours = "4".to_string();

    data.syllabus =
        "Fundamentos de HTML, CSS e JavaScript; desenvolvimento de aplicações web.".to_string();
    data.objectives =
        "Capacitar o estudante a projetar e construir aplicações web completas.".to_string();
    data.justification =
        "A disciplina consolida competências essenciais para o mercado regional.".to_string();
    data.methodology =
        "Aulas expositivas dialogadas, práticas em laboratório e projetos.".to_string();
    data.resources = "Laboratório de informática com acesso à internet.".to_string();

    data.content.by_period[0].content =
        "Introdução à web; HTML semântico; folhas de estilo.".to_string();

    data.schedule[0].activities[0] = Activity {
        date: "01/03".to_string(),
        teacher_activities: "Aula expositiva introdutória".to_string(),
        student_activities: "Exercícios guiados".to_string(),
    };

    data.bibliography.basic =
        "FLANAGAN, D. JavaScript: o guia definitivo. Bookman, 2014.".to_string();

    data.signatures.professor_signature = "Maria Silva".to_string();
    data.signatures.date = "2026".to_string();

    plan
}

/// A second instructional period with the given content, for multi-period
/// scenarios.
pub fn extra_period(label: &str, content: &str) -> PeriodContent {
    PeriodContent {
        period: label.to_string(),
        content: content.to_string(),
        ..Default::default()
    }
}

/// A schedule period with one satisfied activity.
pub fn satisfied_schedule_period(label: &str) -> SchedulePeriod {
    SchedulePeriod {
        period: label.to_string(),
        activities: vec![Activity {
            date: "01/06".to_string(),
            teacher_activities: "Revisão de conteúdo".to_string(),
            student_activities: String::new(),
        }],
    }
}

/// A visit with both co-required fields filled.
pub fn consistent_visit(location: &str, date: &str) -> Visit {
    Visit {
        location: location.to_string(),
        date: date.to_string(),
        materials: String::new(),
    }
}

//! Plain-text document renderer.

use std::fmt::Write;

use chrono::{NaiveDate, Utc};

use plano_core::TeachingPlan;

const RULE: &str = "----------------------------------";
const NOT_INFORMED: &str = "Não informado";

fn or_not_informed(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_INFORMED
    } else {
        value
    }
}

/// Render the plan as a plain-text document, stamped with today's date.
pub fn render_plan_text_now(plan: &TeachingPlan) -> String {
    render_plan_text(plan, Utc::now().date_naive())
}

/// Render the plan as a plain-text document.
///
/// `generated_on` is the date stamped in the footer; taking it as a
/// parameter keeps the renderer deterministic.
pub fn render_plan_text(plan: &TeachingPlan, generated_on: NaiveDate) -> String {
    let data = &plan.data;
    let mut out = String::new();

    // Writing to a String never fails, so the write results are dropped.
    let _ = writeln!(out, "PLANO DE ENSINO");
    let _ = writeln!(out, "==================================\n");

    let id = &data.identification;
    let _ = writeln!(out, "1. IDENTIFICAÇÃO DO COMPONENTE CURRICULAR");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Nome: {}", id.course_name);
    let _ = writeln!(out, "Abreviatura: {}", id.course_abbreviation);
    let _ = writeln!(out, "Professor: {}", id.professor_name);
    let _ = writeln!(out, "Matrícula SIAPE: {}", id.siape_code);
    let _ = writeln!(out, "Carga Horária Total: {}h", id.total_hours);
    let _ = writeln!(out, "Carga Horária Semanal: {}h", id.weekly_hours);
    let _ = writeln!(out, "Carga Horária Teórica: {}h", id.theoretical_hours);
    let _ = writeln!(out, "Carga Horária Prática: {}h", id.practical_hours);
    let _ = writeln!(out, "Carga Horária Presencial: {}h\n", id.in_person_hours);

    let _ = writeln!(out, "2. EMENTA");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}\n", or_not_informed(&data.syllabus));

    let _ = writeln!(out, "3. OBJETIVOS DO COMPONENTE CURRICULAR");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}\n", or_not_informed(&data.objectives));

    let _ = writeln!(out, "4. JUSTIFICATIVA DA MODALIDADE DE ENSINO");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}\n", or_not_informed(&data.justification));

    let _ = writeln!(out, "5. ATIVIDADES CURRICULARES DE EXTENSÃO");
    let _ = writeln!(out, "{RULE}");
    let extension = &data.extension;
    let _ = writeln!(
        out,
        "Possui atividades de extensão: {}",
        if extension.has_extension { "Sim" } else { "Não" }
    );
    if extension.has_extension {
        let _ = writeln!(out, "Tipo de Atividade: {}", extension.kind);
        let _ = writeln!(out, "Resumo: {}", extension.summary);
        let _ = writeln!(out, "Justificativa: {}", extension.justification);
        let _ = writeln!(out, "Objetivos: {}", extension.objectives);
        let _ = writeln!(
            out,
            "Envolvimento com a comunidade: {}",
            extension.community_involvement
        );
    }
    out.push('\n');

    let _ = writeln!(out, "6. CONTEÚDO PROGRAMÁTICO");
    let _ = writeln!(out, "{RULE}");
    for (index, period) in data.content.by_period.iter().enumerate() {
        let _ = writeln!(out, "{}:", period.period);
        let _ = writeln!(out, "Conteúdo: {}", period.content);
        let _ = writeln!(
            out,
            "Relações Interdisciplinares: {}",
            period.interdisciplinary_relations
        );
        if index < data.content.by_period.len() - 1 {
            out.push('\n');
        }
    }
    out.push('\n');

    let _ = writeln!(out, "7. PROCEDIMENTOS METODOLÓGICOS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}\n", or_not_informed(&data.methodology));

    let _ = writeln!(out, "8. RECURSOS E INFRAESTRUTURA");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}\n", or_not_informed(&data.resources));

    let _ = writeln!(out, "9. VISITAS TÉCNICAS E AULAS PRÁTICAS");
    let _ = writeln!(out, "{RULE}");
    let has_visits = data
        .visits
        .first()
        .is_some_and(|v| !v.location.trim().is_empty());
    if has_visits {
        for (index, visit) in data.visits.iter().enumerate() {
            let _ = writeln!(out, "Visita {}:", index + 1);
            let _ = writeln!(out, "Local: {}", visit.location);
            let _ = writeln!(out, "Data prevista: {}", visit.date);
            let _ = writeln!(out, "Materiais necessários: {}", visit.materials);
            if index < data.visits.len() - 1 {
                out.push('\n');
            }
        }
    } else {
        let _ = writeln!(out, "Não há visitas técnicas planejadas.");
    }
    out.push('\n');

    let _ = writeln!(out, "10. CRONOGRAMA DE DESENVOLVIMENTO");
    let _ = writeln!(out, "{RULE}");
    for (period_index, period) in data.schedule.iter().enumerate() {
        let _ = writeln!(out, "{}:", period.period);
        for (activity_index, activity) in period.activities.iter().enumerate() {
            let _ = writeln!(out, "Data: {}", activity.date);
            let _ = writeln!(out, "Atividades do docente: {}", activity.teacher_activities);
            let _ = writeln!(out, "Atividades do discente: {}", activity.student_activities);
            if activity_index < period.activities.len() - 1 {
                out.push('\n');
            }
        }
        if period_index < data.schedule.len() - 1 {
            out.push('\n');
        }
    }
    out.push('\n');

    let _ = writeln!(out, "11. BIBLIOGRAFIA");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Bibliografia Básica:\n{}\n",
        or_not_informed(&data.bibliography.basic)
    );
    let _ = writeln!(
        out,
        "Bibliografia Complementar:\n{}\n",
        or_not_informed(&data.bibliography.complementary)
    );

    let signatures = &data.signatures;
    let _ = writeln!(out, "12. ASSINATURAS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Professor: {}", signatures.professor_signature);
    let _ = writeln!(out, "Coordenador: {}", signatures.coordinator_signature);
    let _ = writeln!(out, "Componente Curricular: {}", signatures.component_name);
    let _ = writeln!(out, "Curso: {}", signatures.course_name);
    let _ = writeln!(out, "Data: {}\n", signatures.date);

    let _ = writeln!(
        out,
        "Documento gerado em: {}",
        generated_on.format("%d/%m/%Y")
    );

    out
}

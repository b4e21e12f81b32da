//! Tests for the plain-text renderer.

use chrono::NaiveDate;

use plano_export::render_plan_text;

fn stamp() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
}

#[test]
fn sections_appear_in_document_order() {
    let plan = test_fixtures::complete_plan();
    let doc = render_plan_text(&plan, stamp());

    let headings = [
        "1. IDENTIFICAÇÃO DO COMPONENTE CURRICULAR",
        "2. EMENTA",
        "3. OBJETIVOS DO COMPONENTE CURRICULAR",
        "4. JUSTIFICATIVA DA MODALIDADE DE ENSINO",
        "5. ATIVIDADES CURRICULARES DE EXTENSÃO",
        "6. CONTEÚDO PROGRAMÁTICO",
        "7. PROCEDIMENTOS METODOLÓGICOS",
        "8. RECURSOS E INFRAESTRUTURA",
        "9. VISITAS TÉCNICAS E AULAS PRÁTICAS",
        "10. CRONOGRAMA DE DESENVOLVIMENTO",
        "11. BIBLIOGRAFIA",
        "12. ASSINATURAS",
    ];
    let mut cursor = 0;
    for heading in headings {
        let position = doc[cursor..]
            .find(heading)
            .unwrap_or_else(|| panic!("missing heading: {heading}"));
        cursor += position + heading.len();
    }
}

#[test]
fn blank_narratives_render_as_not_informed() {
    let plan = test_fixtures::starter_plan();
    let doc = render_plan_text(&plan, stamp());
    assert!(doc.contains("Não informado"));
    assert!(doc.contains("Possui atividades de extensão: Não"));
    assert!(doc.contains("Não há visitas técnicas planejadas."));
}

#[test]
fn extension_details_render_only_when_flagged() {
    let mut plan = test_fixtures::complete_plan();
    plan.data.extension.has_extension = true;
    plan.data.extension.kind = "Projeto".to_string();
    let doc = render_plan_text(&plan, stamp());
    assert!(doc.contains("Possui atividades de extensão: Sim"));
    assert!(doc.contains("Tipo de Atividade: Projeto"));

    plan.data.extension.has_extension = false;
    let doc = render_plan_text(&plan, stamp());
    assert!(!doc.contains("Tipo de Atividade:"));
}

#[test]
fn visits_render_with_positional_labels() {
    let mut plan = test_fixtures::complete_plan();
    plan.data.visits = vec![
        test_fixtures::consistent_visit("Data center regional", "2026-05-15"),
        test_fixtures::consistent_visit("Fábrica de software", "2026-06-02"),
    ];
    let doc = render_plan_text(&plan, stamp());
    assert!(doc.contains("Visita 1:"));
    assert!(doc.contains("Visita 2:"));
    assert!(doc.contains("Local: Fábrica de software"));
}

#[test]
fn footer_carries_the_generation_date() {
    let plan = test_fixtures::starter_plan();
    let doc = render_plan_text(&plan, stamp());
    assert!(doc.ends_with("Documento gerado em: 10/02/2026\n"));
}

#[test]
fn rendering_is_deterministic() {
    let plan = test_fixtures::complete_plan();
    assert_eq!(
        render_plan_text(&plan, stamp()),
        render_plan_text(&plan, stamp())
    );
}

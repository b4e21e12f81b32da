//! Integration tests for the SQLite plan store.

use plano_core::errors::{PlanoError, StorageError};
use plano_storage::PlanStore;

const OWNER: &str = "user-1";

#[test]
fn round_trips_a_complete_plan() {
    let store = PlanStore::open_in_memory().unwrap();
    let mut plan = test_fixtures::complete_plan();
    store.save_plan(OWNER, &mut plan).unwrap();

    let loaded = store.get_plan(OWNER, &plan.id).unwrap().unwrap();
    assert_eq!(loaded.data, plan.data);
    assert_eq!(loaded.title, plan.title);
}

#[test]
fn save_stamps_last_updated() {
    let store = PlanStore::open_in_memory().unwrap();
    let mut plan = test_fixtures::starter_plan();
    let created_at = plan.last_updated;
    store.save_plan(OWNER, &mut plan).unwrap();
    assert!(plan.last_updated >= created_at);
}

#[test]
fn saving_twice_updates_in_place() {
    let store = PlanStore::open_in_memory().unwrap();
    let mut plan = test_fixtures::starter_plan();
    store.save_plan(OWNER, &mut plan).unwrap();

    plan.title = "Plano revisado".to_string();
    plan.data.syllabus = "Ementa revisada após reunião de colegiado.".to_string();
    store.save_plan(OWNER, &mut plan).unwrap();

    let plans = store.list_plans(OWNER).unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].title, "Plano revisado");

    let loaded = store.get_plan(OWNER, &plan.id).unwrap().unwrap();
    assert_eq!(loaded.data.syllabus, plan.data.syllabus);
}

#[test]
fn listing_orders_by_recency() {
    let store = PlanStore::open_in_memory().unwrap();
    let mut first = test_fixtures::starter_plan();
    let mut second = test_fixtures::starter_plan();
    second.title = "Mais recente".to_string();

    store.save_plan(OWNER, &mut first).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    store.save_plan(OWNER, &mut second).unwrap();

    let plans = store.list_plans(OWNER).unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].id, second.id);
}

#[test]
fn plans_are_scoped_by_owner() {
    let store = PlanStore::open_in_memory().unwrap();
    let mut plan = test_fixtures::starter_plan();
    store.save_plan(OWNER, &mut plan).unwrap();

    assert!(store.get_plan("user-2", &plan.id).unwrap().is_none());
    assert!(store.list_plans("user-2").unwrap().is_empty());
    assert!(!store.delete_plan("user-2", &plan.id).unwrap());
    // Still there for its real owner.
    assert!(store.get_plan(OWNER, &plan.id).unwrap().is_some());
}

#[test]
fn saving_under_a_foreign_plan_id_is_rejected() {
    let store = PlanStore::open_in_memory().unwrap();
    let mut plan = test_fixtures::starter_plan();
    store.save_plan(OWNER, &mut plan).unwrap();

    let mut stolen = plan.clone();
    stolen.title = "Cópia indevida".to_string();
    let err = store.save_plan("user-2", &mut stolen).unwrap_err();
    assert!(matches!(
        err,
        PlanoError::Storage(StorageError::OwnerMismatch { .. })
    ));

    // Nothing was written: the other owner still sees no plan and the
    // original row is untouched.
    assert!(store.get_plan("user-2", &plan.id).unwrap().is_none());
    let kept = store.get_plan(OWNER, &plan.id).unwrap().unwrap();
    assert_eq!(kept.title, plan.title);
}

#[test]
fn delete_reports_whether_a_row_was_removed() {
    let store = PlanStore::open_in_memory().unwrap();
    let mut plan = test_fixtures::starter_plan();
    store.save_plan(OWNER, &mut plan).unwrap();

    assert!(store.delete_plan(OWNER, &plan.id).unwrap());
    assert!(!store.delete_plan(OWNER, &plan.id).unwrap());
    assert!(store.get_plan(OWNER, &plan.id).unwrap().is_none());
}

#[test]
fn missing_plan_is_none_not_error() {
    let store = PlanStore::open_in_memory().unwrap();
    assert!(store.get_plan(OWNER, "nope").unwrap().is_none());
}

#[test]
fn persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plans.db");

    let mut plan = test_fixtures::complete_plan();
    {
        let store = PlanStore::open(&path).unwrap();
        store.save_plan(OWNER, &mut plan).unwrap();
    }

    let store = PlanStore::open(&path).unwrap();
    let loaded = store.get_plan(OWNER, &plan.id).unwrap().unwrap();
    assert_eq!(loaded.data, plan.data);
}

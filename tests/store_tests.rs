mod common;
use common::{scenario_dataset, temp_dataset, write_dataset};
use rtimesheet::data::{Dataset, DatasetStore, TimesheetMutations, TimesheetSource};
use rtimesheet::errors::AppError;
use rtimesheet::models::TimeEntryStatus;
use std::fs;
use std::path::Path;

fn status_of(store: &DatasetStore, id: &str) -> TimeEntryStatus {
    store
        .dataset()
        .time_entries
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.status)
        .expect("entry exists")
}

#[test]
fn test_approve_pending_entry() {
    let mut store = DatasetStore::in_memory(scenario_dataset());
    store.approve("e3").expect("approve");
    assert_eq!(status_of(&store, "e3"), TimeEntryStatus::Approved);
}

#[test]
fn test_reject_pending_entry() {
    let mut store = DatasetStore::in_memory(scenario_dataset());
    store.reject("e3").expect("reject");
    assert_eq!(status_of(&store, "e3"), TimeEntryStatus::Rejected);
}

#[test]
fn test_approved_entry_cannot_be_rejected() {
    let mut store = DatasetStore::in_memory(scenario_dataset());
    let err = store.reject("e1").unwrap_err();

    assert!(matches!(err, AppError::InvalidTransition { .. }));
    assert_eq!(status_of(&store, "e1"), TimeEntryStatus::Approved);
}

#[test]
fn test_batch_is_atomic() {
    let mut dataset = scenario_dataset();
    dataset.time_entries[1].status = TimeEntryStatus::Pending;
    let mut store = DatasetStore::in_memory(dataset);

    let ids = vec!["e2".to_string(), "e3".to_string(), "missing".to_string()];
    let err = store.batch_approve(&ids).unwrap_err();

    assert!(matches!(err, AppError::EntryNotFound(ref id) if id == "missing"));
    assert_eq!(status_of(&store, "e2"), TimeEntryStatus::Pending);
    assert_eq!(status_of(&store, "e3"), TimeEntryStatus::Pending);

    let count = store.batch_approve(&ids[..2]).expect("batch approve");
    assert_eq!(count, 2);
    assert_eq!(status_of(&store, "e2"), TimeEntryStatus::Approved);
}

#[test]
fn test_duplicate_ids_count_once() {
    let mut store = DatasetStore::in_memory(scenario_dataset());
    let ids = vec!["e3".to_string(), "e3".to_string()];
    assert_eq!(store.batch_reject(&ids).expect("reject"), 1);
}

#[test]
fn test_file_store_persists_successful_batch() {
    let path = write_dataset("store_persist", &scenario_dataset());

    let mut store = DatasetStore::open(Path::new(&path)).expect("open store");
    store.approve("e3").expect("approve");

    let reopened = DatasetStore::open(Path::new(&path)).expect("reopen store");
    assert_eq!(status_of(&reopened, "e3"), TimeEntryStatus::Approved);
    assert_eq!(reopened.time_entries().expect("entries").len(), 3);
}

#[test]
fn test_file_store_untouched_on_failure() {
    let path = write_dataset("store_failure", &scenario_dataset());
    let before = fs::read_to_string(&path).expect("read dataset");

    let mut store = DatasetStore::open(Path::new(&path)).expect("open store");
    assert!(store.approve("e1").is_err());

    assert_eq!(fs::read_to_string(&path).expect("read dataset"), before);
}

#[test]
fn test_missing_dataset_is_reported() {
    let path = temp_dataset("store_missing");
    let err = DatasetStore::open(Path::new(&path)).unwrap_err();
    assert!(err.to_string().contains("dataset not found"));
}

#[test]
fn test_dataset_accepts_loose_json() {
    let json = r#"{
        "employees": [{ "id": "1", "name": "James Wilson", "hourly_rate": 28 }],
        "time_entries": [
            { "id": "TS-001", "employee_id": "1", "job_id": null, "date": "2024-02-12",
              "clock_in": null, "clock_out": null, "total_hours": 8, "status": "Approved" },
            { "id": "TS-002", "employee_id": "1", "date": "2024-02-13",
              "total_hours": 4, "status": "aPProved" },
            { "id": "TS-003", "employee_id": "1", "date": "2024-02-14",
              "total_hours": 2, "status": " PENDING " }
        ]
    }"#;

    let dataset = Dataset::from_json(json).expect("parse dataset");
    assert!(dataset.jobs.is_empty());
    assert_eq!(dataset.time_entries[0].status, TimeEntryStatus::Approved);
    assert_eq!(dataset.time_entries[0].break_minutes, 0);
    assert_eq!(dataset.employees[0].hourly_rate, Some(28.0));
    assert_eq!(dataset.time_entries[1].status, TimeEntryStatus::Approved);
    assert_eq!(dataset.time_entries[2].status, TimeEntryStatus::Pending);

    let saved = serde_json::to_string(&dataset).expect("serialize dataset");
    assert!(saved.contains(r#""status":"approved""#));
}

#[test]
fn test_dataset_rejects_unknown_status() {
    let json = r#"{ "time_entries": [
        { "id": "TS-001", "employee_id": "1", "date": "2024-02-12", "status": "done" }
    ] }"#;

    let err = Dataset::from_json(json).unwrap_err();
    assert!(err.to_string().contains("Invalid status: done"));
}

use crate::support::{record, result_of, FakeBackend};
use buscadoc::backend::{SearchOutcome, UploadOutcome};
use buscadoc::models::{DataSource, DatasetStatus};
use buscadoc::ui::core::{Action, TaskManager};
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_status_refresh_reports_completion() {
    let backend = Arc::new(FakeBackend::new().with_status(DatasetStatus {
        has_data: true,
        record_count: 5,
        filename: Some("a.csv".to_string()),
        internal_records: None,
    }));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_status_refresh(backend.clone());
    assert_eq!(manager.task_count(), 1);

    match rx.recv().await {
        Some(Action::StatusLoaded(status)) => assert_eq!(status.record_count, 5),
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_status_failure_is_reported() {
    let backend = Arc::new(FakeBackend::new());
    *backend.status.lock().unwrap() = Err("refused".to_string());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_status_refresh(backend);
    assert!(matches!(rx.recv().await, Some(Action::StatusFailed(_))));
}

#[tokio::test]
async fn test_search_carries_its_token() {
    let backend = Arc::new(FakeBackend::new().with_search(
        "torque",
        Duration::ZERO,
        Ok(SearchOutcome::Found(result_of(vec![record(json!({"t": "Doc1"}))]))),
    ));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_search(backend.clone(), 7, "torque".to_string(), DataSource::Excel);

    match rx.recv().await {
        Some(Action::SearchCompleted { token, source, result }) => {
            assert_eq!(token, 7);
            assert_eq!(source, DataSource::Excel);
            assert_eq!(result.records.len(), 1);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(backend.calls(), vec!["search excel torque".to_string()]);
}

#[tokio::test]
async fn test_upload_of_unreadable_file_fails_without_request() {
    let backend = Arc::new(FakeBackend::new());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_upload(backend.clone(), "/definitely/not/here.xlsx".into());

    assert!(matches!(rx.recv().await, Some(Action::UploadFailed(_))));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_upload_outcomes_become_actions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.xlsx");
    std::fs::File::create(&path).unwrap().write_all(b"data").unwrap();

    let backend = Arc::new(FakeBackend::new().with_upload(Ok(UploadOutcome::Rejected("formato".to_string()))));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_upload(backend.clone(), path);
    match rx.recv().await {
        Some(Action::UploadRejected(message)) => assert_eq!(message, "formato"),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(backend.calls(), vec!["upload plan.xlsx".to_string()]);

    *backend.upload.lock().unwrap() = Ok(UploadOutcome::Declined);
    manager.spawn_upload(backend.clone(), dir.path().join("plan.xlsx"));
    assert!(matches!(rx.recv().await, Some(Action::UploadDeclined)));
}

#[tokio::test]
async fn test_finished_tasks_are_cleaned_up() {
    let backend = Arc::new(FakeBackend::new());
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_clear(backend);
    assert!(matches!(rx.recv().await, Some(Action::ClearCompleted)));

    // The task may still be finishing after sending
    for _ in 0..50 {
        if manager.task_count() == 0 {
            break;
        }
        manager.cleanup_finished_tasks();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let backend = Arc::new(FakeBackend::new().with_search(
        "lento",
        Duration::from_secs(30),
        Ok(SearchOutcome::Found(result_of(Vec::new()))),
    ));
    let (mut manager, _rx) = TaskManager::new();

    manager.spawn_search(backend, 1, "lento".to_string(), DataSource::Internal);
    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}

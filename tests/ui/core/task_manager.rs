use marketdesk::model::{EntityKind, Record};
use marketdesk::ui::core::{Action, TaskManager};
use std::time::Duration;

#[tokio::test]
async fn test_finished_saves_are_cleaned_up() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_save(
        EntityKind::Product,
        Record::new().with("id", "PROD042"),
        true,
        Duration::from_millis(0),
    );
    assert_eq!(manager.task_count(), 1);

    assert!(matches!(rx.recv().await, Some(Action::SaveCompleted { .. })));

    // The task may need a moment to finish after sending
    let mut finished = Vec::new();
    for _ in 0..50 {
        finished.extend(manager.cleanup_finished_tasks());
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(manager.task_count(), 0);
    assert!(!manager.is_saving());
    assert_eq!(finished.len(), 1);
    assert!(finished[0].1.starts_with("Save"));
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_save(
        EntityKind::Vendor,
        Record::new().with("id", "VEND042"),
        false,
        Duration::from_secs(60),
    );
    assert!(manager.is_saving());

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_only_save_tasks_count_as_saving() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_task_operation(
        || async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Action::None)
        },
        "Save-like description".to_string(),
    );
    assert_eq!(manager.task_count(), 1);
    assert!(!manager.is_saving());

    manager.cancel_all_tasks();
    assert!(rx.try_recv().is_err());
}

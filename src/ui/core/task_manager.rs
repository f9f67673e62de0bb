use super::actions::{Action, DialogType};
use crate::model::{EntityKind, Record};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
    pub is_save: bool,
}

/// Runs background work and reports back to the UI over an mpsc channel
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Simulate persisting `record`: wait `delay`, then hand the record back
    /// as `Action::SaveCompleted` so the UI thread applies it to the store.
    pub fn spawn_save(&mut self, kind: EntityKind, record: Record, is_new: bool, delay: Duration) -> TaskId {
        let description = format!("Save {} {}", kind.noun(), record.text(crate::model::ID_FIELD));
        self.spawn(
            move || async move {
                tokio::time::sleep(delay).await;
                Ok(Action::SaveCompleted { kind, record, is_new })
            },
            description,
            true,
        )
    }

    /// Spawn a background operation whose outcome is delivered as an action
    pub fn spawn_task_operation<F, Fut>(&mut self, operation: F, description: String) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<Action>> + Send + 'static,
    {
        self.spawn(operation, description, false)
    }

    fn spawn<F, Fut>(&mut self, operation: F, description: String, is_save: bool) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<Action>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = match operation().await {
                Ok(action) => action,
                Err(e) => Action::ShowDialog(DialogType::Error(format!("Operation failed: {}", e))),
            };
            let _ = action_sender.send(action);
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                handle,
                description,
                is_save,
            },
        );
        task_id
    }

    /// Drop finished tasks and return their descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.tasks.remove(&id).map(|task| (id, task.description)))
            .collect()
    }

    /// Whether a save is still in flight
    pub fn is_saving(&self) -> bool {
        self.tasks.values().any(|task| task.is_save)
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_reports_back_after_delay() {
        let (mut manager, mut rx) = TaskManager::new();
        let record = Record::new().with("id", "VEND009").with("name", "Acme");
        manager.spawn_save(EntityKind::Vendor, record, true, Duration::from_millis(5));
        assert!(manager.is_saving());

        match rx.recv().await {
            Some(Action::SaveCompleted { kind, record, is_new }) => {
                assert_eq!(kind, EntityKind::Vendor);
                assert_eq!(record.text("name"), "Acme");
                assert!(is_new);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_operation_shows_error_dialog() {
        let (mut manager, mut rx) = TaskManager::new();
        manager.spawn_task_operation(
            || async { Err(anyhow::anyhow!("boom")) },
            "Failing".to_string(),
        );
        match rx.recv().await {
            Some(Action::ShowDialog(DialogType::Error(message))) => assert!(message.contains("boom")),
            other => panic!("unexpected action: {:?}", other),
        }
    }
}

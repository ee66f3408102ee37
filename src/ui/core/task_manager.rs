use super::actions::Action;
use crate::backend::{SearchBackend, SearchOutcome, UploadFile, UploadOutcome};
use crate::models::DataSource;
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs server requests off the UI loop. Every task reports back exactly one
/// completion action over the channel returned by [`TaskManager::new`].
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

    fn spawn<Fut>(&mut self, description: String, operation: Fut) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = operation.await;
            // The receiver is gone only when the app is shutting down
            let _ = action_sender.send(action);
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Query the server-held dataset status
    pub fn spawn_status_refresh(&mut self, backend: Arc<dyn SearchBackend>) -> TaskId {
        self.spawn("Refresh status".to_string(), async move {
            match backend.status().await {
                Ok(status) => Action::StatusLoaded(status),
                Err(e) => Action::StatusFailed(e.to_string()),
            }
        })
    }

    /// Read a spreadsheet from disk and send it to the server
    pub fn spawn_upload(&mut self, backend: Arc<dyn SearchBackend>, path: PathBuf) -> TaskId {
        let description = format!("Upload {}", path.display());
        self.spawn(description, async move {
            let file = match UploadFile::read(&path).await {
                Ok(file) => file,
                Err(e) => return Action::UploadFailed(e.to_string()),
            };
            match backend.upload(file).await {
                Ok(UploadOutcome::Accepted { filename, records }) => Action::UploadAccepted { filename, records },
                Ok(UploadOutcome::Rejected(message)) => Action::UploadRejected(message),
                Ok(UploadOutcome::Declined) => Action::UploadDeclined,
                Err(e) => Action::UploadFailed(e.to_string()),
            }
        })
    }

    /// Ask the server to drop the uploaded dataset
    pub fn spawn_clear(&mut self, backend: Arc<dyn SearchBackend>) -> TaskId {
        self.spawn("Clear dataset".to_string(), async move {
            match backend.clear().await {
                Ok(()) => Action::ClearCompleted,
                Err(e) => Action::ClearFailed(e.to_string()),
            }
        })
    }

    /// Run one query; the completion carries `token` so stale replies can be dropped
    pub fn spawn_search(
        &mut self,
        backend: Arc<dyn SearchBackend>,
        token: u64,
        query: String,
        source: DataSource,
    ) -> TaskId {
        let description = format!("Search #{} '{}' in {}", token, query, source);
        self.spawn(description, async move {
            match backend.search(&query, source).await {
                Ok(SearchOutcome::Found(result)) => Action::SearchCompleted { token, source, result },
                Ok(SearchOutcome::Rejected(message)) => Action::SearchRejected { token, message },
                Err(e) => Action::SearchFailed {
                    token,
                    error: e.to_string(),
                },
            }
        })
    }

    /// Forget finished tasks, returning their descriptions
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

    /// Abort all running tasks
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

use super::actions::Action;
use crate::books::BookSource;
use crate::cover_colors::{resolve_edge_color, ColorExtractor};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
}

/// Runs the async collaborators off the UI loop. Results come back as
/// [`Action`]s on the channel returned by [`TaskManager::new`].
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

    /// Fetch the book catalogue once
    pub fn spawn_book_fetch(&mut self, source: Arc<dyn BookSource>) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match source.fetch_books().await {
                Ok(books) => {
                    let _ = action_sender.send(Action::BooksLoaded(books));
                }
                Err(e) => {
                    let _ = action_sender.send(Action::BooksFailed(e.to_string()));
                }
            }
        });

        self.register(handle, "Fetching books".to_string())
    }

    /// Extract the edge color of one cover. Never fails: errors resolve to the
    /// fallback color.
    pub fn spawn_color_extraction(&mut self, extractor: Arc<dyn ColorExtractor>, cover_ref: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Extracting edge color: {}", cover_ref);

        let handle = tokio::spawn(async move {
            let color = resolve_edge_color(extractor.as_ref(), &cover_ref).await;
            let _ = action_sender.send(Action::EdgeColorResolved { cover_ref, color });
        });

        self.register(handle, description)
    }

    fn register(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(task_id, BackgroundTask { handle, description });
        task_id
    }

    /// Drop finished tasks, returning their descriptions
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

// Task commands - the operation layer the front-end dispatches into.
// Create and update go through the form controller's submit; everything
// else lives here.

use serde::Serialize;

use crate::App;
use crate::filter::visibleTasks;
use crate::models::{Filter, Priority, Task};
use crate::notify::NotifyKind;

#[derive(Debug, Clone, Serialize)]
pub struct TaskInfo {
    pub id: String,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
    pub createdAt: i64,
    pub updatedAt: i64,
}

impl From<&Task> for TaskInfo {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id.clone(),
            text: t.text.clone(),
            priority: t.priority,
            completed: t.completed,
            createdAt: t.createdAt,
            updatedAt: t.updatedAt,
        }
    }
}

/// Visible tasks under the current filter and search query, newest first
pub fn getTasks(app: &App) -> Vec<TaskInfo> {
    let tasks = app.store.getAll();
    let session = app.store.getSession();
    visibleTasks(&tasks, session.currentFilter, &session.searchQuery)
        .into_iter()
        .map(TaskInfo::from)
        .collect()
}

/// Flip completion. Stale ids surface as an Err for the caller to log.
pub fn toggleTask(app: &App, id: &str) -> Result<TaskInfo, String> {
    println!("[toggleTask] Called with id: {}", id);
    let task = app.store.toggleComplete(id).map_err(|e| e.to_string())?;
    Ok(TaskInfo::from(&task))
}

/// Confirm-gated delete. Declining is a silent no-op. Returns whether a
/// task was removed.
pub fn deleteTask(app: &App, id: &str) -> bool {
    if !app.confirm.confirm("Are you sure you want to delete this task?") {
        println!("[deleteTask] Declined, nothing removed");
        return false;
    }

    let removed = app.store.deleteTask(id);
    if removed {
        app.notifier
            .notify("Task deleted successfully!", NotifyKind::Success);
    }
    removed
}

/// Confirm-gated clear-all. An empty collection short-circuits before the
/// prompt, matching the front-end's no-op on an empty list.
pub fn clearTasks(app: &App) -> bool {
    if app.store.getAll().is_empty() {
        return false;
    }
    if !app.confirm.confirm("Are you sure you want to clear all tasks?") {
        println!("[clearTasks] Declined");
        return false;
    }

    app.store.clearAll();
    app.notifier.notify("All tasks cleared!", NotifyKind::Success);
    true
}

pub fn setFilter(app: &App, filter: Filter) {
    println!("[setFilter] {}", filter.name());
    app.store.setFilter(filter);
}

pub fn setSearch(app: &App, query: &str) {
    app.store.setSearch(query);
}

pub fn setPriority(app: &App, priority: Priority) {
    println!("[setPriority] {}", priority.name());
    app.store.setPriority(priority);
}

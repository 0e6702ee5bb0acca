// Display projection for taskpad
// Stateless: the same collection and session always render the same output

use chrono::TimeZone;
use serde::Serialize;

use crate::filter::visibleTasks;
use crate::models::Task;
use crate::store::Store;

/// Why the task list area is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyState {
    /// Nothing exists yet
    NoTasks,
    /// Tasks exist but the filter or search excludes them all
    NoMatches,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoTasks => "No tasks yet. Create one to get started!",
            Self::NoMatches => "No tasks found",
        }
    }
}

/// One display row per task. Action affordances (toggle, edit, delete) are
/// dispatched by the front-end on action name + id, not bound here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub id: String,
    pub text: String,
    pub formattedDate: String,
    pub formattedTime: String,
    pub priorityLabel: String,
    pub completed: bool,
}

impl From<&Task> for TaskView {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id.clone(),
            text: t.text.clone(),
            formattedDate: formatDate(t.createdAt),
            formattedTime: formatTime(t.createdAt),
            priorityLabel: t.priority.label().to_string(),
            completed: t.completed,
        }
    }
}

/// Full display state handed to the front-end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Display {
    pub items: Vec<TaskView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyState>,
    pub stats: String,
}

/// Project the store into a display. Invoked after every mutation and on
/// every filter or search change.
pub fn renderTasks(store: &Store) -> Display {
    let tasks = store.getAll();
    let session = store.getSession();

    let items: Vec<TaskView> = visibleTasks(&tasks, session.currentFilter, &session.searchQuery)
        .into_iter()
        .map(TaskView::from)
        .collect();

    let empty = if items.is_empty() {
        if tasks.is_empty() && session.searchQuery.is_empty() {
            Some(EmptyState::NoTasks)
        } else {
            Some(EmptyState::NoMatches)
        }
    } else {
        None
    };

    Display {
        items,
        empty,
        stats: statsLine(&tasks),
    }
}

/// Summary over the full collection, e.g. "3 Tasks (2 active, 1 completed)".
/// Singular at one task, the parenthetical omitted at zero.
pub fn statsLine(tasks: &[Task]) -> String {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let active = total - completed;

    let mut stats = format!("{} Task{}", total, if total != 1 { "s" } else { "" });
    if total > 0 {
        stats.push_str(&format!(" ({} active, {} completed)", active, completed));
    }
    stats
}

/// Locale-style short date, e.g. "Feb 3, 2026"
fn formatDate(millis: i64) -> String {
    match chrono::Local.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt.format("%b %-d, %Y").to_string(),
        _ => String::new(),
    }
}

/// Hour:minute with am/pm, e.g. "09:41 AM"
fn formatTime(millis: i64) -> String {
    match chrono::Local.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt.format("%I:%M %p").to_string(),
        _ => String::new(),
    }
}

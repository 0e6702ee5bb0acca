// In-memory task store for taskpad
// Single owner of the task collection and the session selectors; everything
// lives for one session only, nothing touches disk

use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{Filter, Priority, Task};

// ============================================
// CAPABILITIES
// ============================================

/// Millisecond clock, injected so timestamps are controllable in tests
pub trait Clock: Send + Sync {
    fn nowMillis(&self) -> i64;
}

/// Wall clock used by the running app
pub struct SystemClock;

impl Clock for SystemClock {
    fn nowMillis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Generate new UUID
pub fn newId() -> String {
    Uuid::new_v4().to_string()
}

// ============================================
// ERRORS
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Please enter a task!")]
    Validation,
    #[error("Task not found")]
    NotFound,
}

// ============================================
// SESSION STATE
// ============================================

/// Selectors and edit pointer for the current session
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub editingId: Option<String>,
    pub currentPriority: Priority,
    pub currentFilter: Filter,
    pub searchQuery: String,
}

// ============================================
// STORE
// ============================================

/// Main task store
pub struct Store {
    pub tasks: RwLock<Vec<Task>>,
    pub session: RwLock<Session>,
    clock: Arc<dyn Clock>,
}

pub type StoreState = Arc<Store>;

/// Initialize the shared store with the wall clock
pub fn initStore() -> StoreState {
    Arc::new(Store::new(Arc::new(SystemClock)))
}

impl Store {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
            session: RwLock::new(Session::default()),
            clock,
        }
    }

    /// Create a task and prepend it so the newest appears first
    pub fn addTask(&self, text: &str, priority: Priority) -> Result<Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::Validation);
        }

        let task = Task::new(newId(), text.to_string(), priority, self.clock.nowMillis());
        self.tasks.write().insert(0, task.clone());
        Ok(task)
    }

    /// Update text and priority in place; position in the collection is unchanged
    pub fn updateTask(&self, id: &str, text: &str, priority: Priority) -> Result<Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::Validation);
        }

        let mut tasks = self.tasks.write();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        task.text = text.to_string();
        task.priority = priority;
        task.updatedAt = self.clock.nowMillis();
        Ok(task.clone())
    }

    /// Flip the completion state and refresh `updatedAt`
    pub fn toggleComplete(&self, id: &str) -> Result<Task, StoreError> {
        let mut tasks = self.tasks.write();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        task.completed = !task.completed;
        task.updatedAt = self.clock.nowMillis();
        Ok(task.clone())
    }

    /// Remove a task, preserving the relative order of the rest. Unknown ids
    /// are a no-op: ids only arrive from rendered views, so a miss means the
    /// task is already gone.
    pub fn deleteTask(&self, id: &str) -> bool {
        let mut tasks = self.tasks.write();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        let removed = tasks.len() != before;
        if !removed {
            println!("[deleteTask] No task with id {}, ignoring", id);
        }
        removed
    }

    /// Empty the collection unconditionally
    pub fn clearAll(&self) {
        self.tasks.write().clear();
    }

    /// Snapshot of the full collection, newest first
    pub fn getAll(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }

    pub fn findTask(&self, id: &str) -> Option<Task> {
        self.tasks.read().iter().find(|t| t.id == id).cloned()
    }

    // Session selectors

    pub fn getSession(&self) -> Session {
        self.session.read().clone()
    }

    pub fn setPriority(&self, priority: Priority) {
        self.session.write().currentPriority = priority;
    }

    pub fn setFilter(&self, filter: Filter) {
        self.session.write().currentFilter = filter;
    }

    pub fn setSearch(&self, query: &str) {
        self.session.write().searchQuery = query.to_string();
    }
}

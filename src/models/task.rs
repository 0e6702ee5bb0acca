// Task model for in-memory storage
// UUID string for stable ID, millisecond timestamps from the injected clock

use serde::{Deserialize, Serialize};

use super::common::Priority;

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String, // UUID - stable identifier, immutable after creation
    pub text: String,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    pub createdAt: i64,
    pub updatedAt: i64,
}

impl Task {
    pub fn new(id: String, text: String, priority: Priority, now: i64) -> Self {
        Self {
            id,
            text,
            priority,
            completed: false,
            createdAt: now,
            updatedAt: now,
        }
    }
}

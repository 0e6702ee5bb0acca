// Form controller for taskpad
// Two modes: Create (default) and Editing, tracked by session.editingId.
// Owns the draft input so a failed submission preserves what was typed.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::Priority;
use crate::notify::{Notifier, NotifyKind};
use crate::store::{StoreError, StoreState};

/// Outcome of a submit, for the front-end to adjust its prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Updated,
    Rejected,
}

pub struct FormController {
    store: StoreState,
    notifier: Arc<Notifier>,
    draft: RwLock<String>,
}

impl FormController {
    pub fn new(store: StoreState, notifier: Arc<Notifier>) -> Self {
        Self {
            store,
            notifier,
            draft: RwLock::new(String::new()),
        }
    }

    pub fn isEditing(&self) -> bool {
        self.store.getSession().editingId.is_some()
    }

    pub fn draft(&self) -> String {
        self.draft.read().clone()
    }

    /// Enter edit mode for an existing task: load its text into the draft,
    /// adopt its priority, record the edit pointer. Unknown ids are a logged
    /// no-op. Returns the loaded draft for the front-end to show.
    pub fn beginEdit(&self, id: &str) -> Option<String> {
        let Some(task) = self.store.findTask(id) else {
            println!("[beginEdit] No task with id {}, ignoring", id);
            return None;
        };

        *self.draft.write() = task.text.clone();
        {
            let mut session = self.store.session.write();
            session.editingId = Some(task.id.clone());
            session.currentPriority = task.priority;
        }
        Some(task.text)
    }

    /// Save the input: creates in Create mode, updates in Editing mode.
    /// Validation failures surface an error notification and keep the draft
    /// (and mode) so the user can correct it.
    pub fn submit(&self, input: &str) -> SubmitOutcome {
        *self.draft.write() = input.to_string();
        let session = self.store.getSession();

        match session.editingId {
            Some(id) => match self.store.updateTask(&id, input, session.currentPriority) {
                Ok(_) => {
                    self.notifier
                        .notify("Task updated successfully!", NotifyKind::Success);
                    self.resetForm();
                    SubmitOutcome::Updated
                }
                Err(e @ StoreError::Validation) => {
                    self.notifier.notify(&e.to_string(), NotifyKind::Error);
                    SubmitOutcome::Rejected
                }
                Err(e @ StoreError::NotFound) => {
                    // The edit target vanished between render and save
                    println!("[submit] Editing target disappeared, resetting form");
                    self.notifier.notify(&e.to_string(), NotifyKind::Error);
                    self.resetForm();
                    SubmitOutcome::Rejected
                }
            },
            None => match self.store.addTask(input, session.currentPriority) {
                Ok(_) => {
                    self.notifier
                        .notify("Task added successfully!", NotifyKind::Success);
                    *self.draft.write() = String::new();
                    SubmitOutcome::Added
                }
                Err(e) => {
                    self.notifier.notify(&e.to_string(), NotifyKind::Error);
                    SubmitOutcome::Rejected
                }
            },
        }
    }

    /// Discard draft changes and return to Create mode
    pub fn cancelEdit(&self) {
        if self.isEditing() {
            self.resetForm();
        }
    }

    /// Back to Create mode: clear the draft and edit pointer, priority to medium
    fn resetForm(&self) {
        *self.draft.write() = String::new();
        let mut session = self.store.session.write();
        session.editingId = None;
        session.currentPriority = Priority::Medium;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testutil::testStore;

    fn controller() -> FormController {
        FormController::new(Arc::new(testStore()), Notifier::new())
    }

    #[tokio::test]
    async fn test_submit_creates_task() {
        let form = controller();
        assert_eq!(form.submit("Buy milk"), SubmitOutcome::Added);

        let all = form.store.getAll();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "Buy milk");
        assert_eq!(all[0].priority, Priority::Medium);
        assert_eq!(form.draft(), "");

        let n = form.notifier.current().unwrap();
        assert_eq!(n.message, "Task added successfully!");
        assert_eq!(n.kind, NotifyKind::Success);
    }

    #[tokio::test]
    async fn test_submit_uses_session_priority() {
        let form = controller();
        form.store.setPriority(Priority::High);
        form.submit("Walk dog");
        assert_eq!(form.store.getAll()[0].priority, Priority::High);
    }

    #[tokio::test]
    async fn test_blank_submit_is_rejected_and_preserves_draft() {
        let form = controller();
        assert_eq!(form.submit("   "), SubmitOutcome::Rejected);
        assert!(form.store.getAll().is_empty());
        assert_eq!(form.draft(), "   ");

        let n = form.notifier.current().unwrap();
        assert_eq!(n.message, "Please enter a task!");
        assert_eq!(n.kind, NotifyKind::Error);
    }

    #[tokio::test]
    async fn test_begin_edit_loads_task_into_form() {
        let form = controller();
        let task = form.store.addTask("Call mom", Priority::High).unwrap();

        let draft = form.beginEdit(&task.id).unwrap();
        assert_eq!(draft, "Call mom");
        assert!(form.isEditing());

        let session = form.store.getSession();
        assert_eq!(session.editingId.as_deref(), Some(task.id.as_str()));
        assert_eq!(session.currentPriority, Priority::High);
    }

    #[tokio::test]
    async fn test_begin_edit_unknown_id_is_noop() {
        let form = controller();
        assert!(form.beginEdit("nope").is_none());
        assert!(!form.isEditing());
    }

    #[tokio::test]
    async fn test_edit_submit_updates_and_resets_form() {
        let form = controller();
        let task = form.store.addTask("Call mom", Priority::Medium).unwrap();

        form.beginEdit(&task.id);
        form.store.setPriority(Priority::High);
        assert_eq!(form.submit("Call mom tonight"), SubmitOutcome::Updated);

        let all = form.store.getAll();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "Call mom tonight");
        assert_eq!(all[0].priority, Priority::High);
        assert!(all[0].updatedAt > all[0].createdAt);

        // Back in Create mode with defaults
        assert!(!form.isEditing());
        assert_eq!(form.draft(), "");
        assert_eq!(form.store.getSession().currentPriority, Priority::Medium);
        assert_eq!(
            form.notifier.current().unwrap().message,
            "Task updated successfully!"
        );
    }

    #[tokio::test]
    async fn test_blank_edit_submit_stays_in_editing() {
        let form = controller();
        let task = form.store.addTask("Call mom", Priority::Medium).unwrap();

        form.beginEdit(&task.id);
        assert_eq!(form.submit(""), SubmitOutcome::Rejected);
        assert!(form.isEditing());
        assert_eq!(form.store.getAll()[0].text, "Call mom");
    }

    #[tokio::test]
    async fn test_edit_submit_with_vanished_target_resets() {
        let form = controller();
        let task = form.store.addTask("Call mom", Priority::Medium).unwrap();

        form.beginEdit(&task.id);
        form.store.deleteTask(&task.id);

        assert_eq!(form.submit("Call mom tonight"), SubmitOutcome::Rejected);
        assert!(!form.isEditing());
        assert!(form.store.getAll().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_edit_discards_draft_and_resets_priority() {
        let form = controller();
        let task = form.store.addTask("Call mom", Priority::High).unwrap();

        form.beginEdit(&task.id);
        form.cancelEdit();

        assert!(!form.isEditing());
        assert_eq!(form.draft(), "");
        assert_eq!(form.store.getSession().currentPriority, Priority::Medium);
        assert_eq!(form.store.getAll()[0].text, "Call mom");
    }
}

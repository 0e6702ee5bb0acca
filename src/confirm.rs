// User-confirmation capability for destructive actions
// Injected so command logic is testable without a terminal

/// Yes/no prompt service
pub trait ConfirmService: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Canned answer, used by tests and non-interactive runs
pub struct AutoConfirm(pub bool);

impl ConfirmService for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

// Transient notifications for taskpad
// One visible message at a time, auto-dismissed 3 seconds after display

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotifyKind,
}

/// Notification area state. A new message replaces the current one and
/// cancels its pending dismissal, so a stale timer can never blank a newer
/// message.
pub struct Notifier {
    current: RwLock<Option<Notification>>,
    pending: RwLock<Option<CancellationToken>>,
    dismissAfter: Duration,
}

impl Notifier {
    pub fn new() -> Arc<Self> {
        Self::withDismissAfter(DISMISS_AFTER)
    }

    /// Dismissal interval is injectable so tests do not wait 3 seconds
    pub fn withDismissAfter(dismissAfter: Duration) -> Arc<Self> {
        Arc::new(Self {
            current: RwLock::new(None),
            pending: RwLock::new(None),
            dismissAfter,
        })
    }

    /// Show a message, superseding whatever is currently visible
    pub fn notify(self: &Arc<Self>, message: &str, kind: NotifyKind) {
        let token = CancellationToken::new();
        {
            // Cancel under the pending lock: a stale timer that wins the
            // lock race must already observe the cancellation
            let mut pending = self.pending.write();
            if let Some(old) = pending.replace(token.clone()) {
                old.cancel();
            }
        }
        *self.current.write() = Some(Notification {
            message: message.to_string(),
            kind,
        });

        let notifier = Arc::clone(self);
        let dismissAfter = self.dismissAfter;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(dismissAfter) => notifier.dismissIfActive(&token),
            }
        });
    }

    /// The currently visible notification, if any
    pub fn current(&self) -> Option<Notification> {
        self.current.read().clone()
    }

    /// Clear the display only if `token` still owns the pending dismissal.
    /// A replacement cancels the old token under the same lock, so a stale
    /// timer that lost the race observes the cancellation here and backs off.
    fn dismissIfActive(&self, token: &CancellationToken) {
        let mut pending = self.pending.write();
        if token.is_cancelled() {
            return;
        }
        *pending = None;
        *self.current.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notify_shows_message() {
        let notifier = Notifier::new();
        notifier.notify("Task added successfully!", NotifyKind::Success);

        let current = notifier.current().unwrap();
        assert_eq!(current.message, "Task added successfully!");
        assert_eq!(current.kind, NotifyKind::Success);
    }

    #[tokio::test]
    async fn test_new_message_replaces_current() {
        let notifier = Notifier::new();
        notifier.notify("first", NotifyKind::Success);
        notifier.notify("second", NotifyKind::Error);

        let current = notifier.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotifyKind::Error);
    }

    #[tokio::test]
    async fn test_auto_dismiss() {
        let notifier = Notifier::withDismissAfter(Duration::from_millis(20));
        notifier.notify("gone soon", NotifyKind::Success);
        assert!(notifier.current().is_some());

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test]
    async fn test_stale_timer_does_not_blank_newer_message() {
        let notifier = Notifier::withDismissAfter(Duration::from_millis(200));
        notifier.notify("first", NotifyKind::Success);

        tokio::time::sleep(Duration::from_millis(100)).await;
        notifier.notify("second", NotifyKind::Success);

        // Past the first message's original deadline, before the second's
        tokio::time::sleep(Duration::from_millis(150)).await;
        let current = notifier.current().unwrap();
        assert_eq!(current.message, "second");

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test]
    async fn test_cancelled_token_never_dismisses() {
        let notifier = Notifier::withDismissAfter(Duration::from_secs(60));
        notifier.notify("stays", NotifyKind::Success);

        let stale = CancellationToken::new();
        stale.cancel();
        notifier.dismissIfActive(&stale);
        assert!(notifier.current().is_some());
    }
}

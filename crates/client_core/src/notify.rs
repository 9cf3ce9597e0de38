//! Process-wide transient message channel.
//!
//! Lets a deeply nested component (a task form, the reconciler) raise a
//! user-visible message without holding a reference to the notification
//! surface. Replaces callback prop-threading with an explicit
//! publish/subscribe handle.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

/// How long a display surface keeps a notice on screen before
/// auto-dismissing it.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(6);

const NOTICE_CHANNEL_CAPACITY: usize = 64;

/// One transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Cheap-to-clone publish/subscribe handle, created once per process.
///
/// Display surfaces subscribe on mount and drop the receiver on unmount; a
/// publish with zero subscribers drops the message rather than queueing it.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(NOTICE_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn notify(&self, message: impl Into<String>) {
        let notice = Notice {
            message: message.into(),
            raised_at: Utc::now(),
        };
        let _ = self.sender.send(notice);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_to_every_subscriber() {
        let notifier = Notifier::new();
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();

        notifier.notify("saved");

        assert_eq!(first.recv().await.expect("first").message, "saved");
        assert_eq!(second.recv().await.expect("second").message, "saved");
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let notifier = Notifier::new();
        notifier.notify("dropped");

        // A late subscriber sees nothing: the message was dropped, not queued.
        let mut late = notifier.subscribe();
        assert!(matches!(
            late.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}

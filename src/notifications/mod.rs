// src/notifications/mod.rs
//
// User-facing notification surface (the toast layer of the UI shell).
//
// Services describe what the user should be told; the embedding shell
// decides how to render it. The default sink writes to the log, which is
// also what headless tests observe.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default sink: forwards notifications to the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => {
                log::info!("[notify] {}: {}", notification.title, notification.text)
            }
            NotificationLevel::Warning => {
                log::warn!("[notify] {}: {}", notification.title, notification.text)
            }
            NotificationLevel::Error => {
                log::error!("[notify] {}: {}", notification.title, notification.text)
            }
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every notification for assertions.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        seen: Arc<Mutex<Vec<Notification>>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seen(&self) -> Vec<Notification> {
            self.seen.lock().unwrap().clone()
        }

        pub fn levels(&self) -> Vec<NotificationLevel> {
            self.seen.lock().unwrap().iter().map(|n| n.level).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }
}

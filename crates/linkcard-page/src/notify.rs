//! Transient user notifications

use serde::Serialize;
use std::time::Duration;

/// How long a notification stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Confirmation
    Success,
    /// Failure
    Error,
}

/// Message for the notification collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Severity
    pub kind: NotificationKind,
    /// Text shown to the user
    pub message: String,
    /// Auto-dismiss delay
    #[serde(skip)]
    pub duration: Duration,
}

impl Notification {
    /// Success notification
    #[inline]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    /// Error notification
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            duration: TOAST_DURATION,
        }
    }
}

/// Fire-and-forget notification sink
pub trait Notifier {
    /// Show `notification`
    fn notify(&self, notification: Notification);
}

/// Notifier that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!("{}", notification.message),
            NotificationKind::Error => tracing::warn!("{}", notification.message),
        }
    }
}

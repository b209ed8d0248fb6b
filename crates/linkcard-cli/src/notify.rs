use linkcard_page::{Notification, NotificationKind, Notifier};

/// Notifier that prints to stderr
///
/// Terminals have no toast, so the display duration is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => eprintln!("{}", notification.message),
            NotificationKind::Error => eprintln!("error: {}", notification.message),
        }
    }
}

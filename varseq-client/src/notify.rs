use std::fmt::{self, Display};

pub const MSG_SUCCESS: &str = "Analysis completed successfully!";
pub const MSG_EMPTY_SEQUENCE: &str = "Please enter a sequence";
pub const MSG_FILE_REJECTED: &str = "Failed to process file";
pub const MSG_FILE_UNREACHABLE: &str = "Upload failed";
pub const MSG_SEQUENCE_REJECTED: &str = "Failed to process sequence";
pub const MSG_SEQUENCE_UNREACHABLE: &str = "Analysis failed";
pub const MSG_BUSY: &str = "An analysis is already running";
pub const MSG_MALFORMED: &str = "Stored analysis is malformed; please resubmit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Short, transient message for the user (a toast, or a line on stderr).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: &str) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Notification {
            kind: NotificationKind::Error,
            message: message.to_string(),
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NotificationKind::Success => write!(f, "✔ {}", self.message),
            NotificationKind::Error => write!(f, "✘ {}", self.message),
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Prints each notification to stderr as it arrives.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, notification: Notification) {
        eprintln!("{}", notification);
    }
}

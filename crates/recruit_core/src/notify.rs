use std::time::Duration;

use crate::Effect;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3500);

/// Identifies one displayed notification; only the newest token may clear it.
pub type NotificationToken = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub token: NotificationToken,
    pub message: String,
    pub kind: NotificationKind,
}

/// Single-slot notification holder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    last_token: NotificationToken,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replaces the displayed notification and returns the effect that arms
    /// its auto-clear. Arming a new clear supersedes any earlier one.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> Effect {
        self.last_token += 1;
        let token = self.last_token;
        self.current = Some(Notification {
            token,
            message: message.into(),
            kind,
        });
        Effect::ScheduleNotificationClear {
            token,
            after: NOTIFICATION_TTL,
        }
    }

    /// Clears the notification if `token` is still current. Returns whether
    /// anything changed.
    pub fn expire(&mut self, token: NotificationToken) -> bool {
        match &self.current {
            Some(current) if current.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

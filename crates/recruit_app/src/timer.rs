use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use recruit_core::{Msg, NotificationToken};

/// Single-slot auto-clear timer for notifications.
///
/// At most one timer is armed; arming a new one invalidates the previous
/// before the new one starts.
pub struct NotificationTimer {
    msg_tx: mpsc::Sender<Msg>,
    pending: Option<Arc<AtomicBool>>,
}

impl NotificationTimer {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            msg_tx,
            pending: None,
        }
    }

    pub fn schedule(&mut self, token: NotificationToken, after: Duration) {
        self.cancel();
        let cancelled = Arc::new(AtomicBool::new(false));
        self.pending = Some(cancelled.clone());

        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            thread::sleep(after);
            if !cancelled.load(Ordering::Acquire) {
                let _ = msg_tx.send(Msg::NotificationExpired { token });
            }
        });
    }

    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.store(true, Ordering::Release);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|cancelled| !cancelled.load(Ordering::Acquire))
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Notification dispatch.
//!
//! State transitions stay pure and return events; this module is the effect
//! edge that delivers them. Delivery is fire-and-forget -- a notifier must
//! not fail the update that produced the event.

use std::sync::Mutex;

use tracing::debug;

use crate::events::Event;

/// Receives notification-worthy events.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: &Event);
}

/// Deliver a batch of events to the notifier.
pub fn dispatch(notifier: &dyn Notifier, events: &[Event]) {
    for event in events {
        debug!(?event, "dispatching event");
        notifier.notify(event);
    }
}

/// Prints achievement notifications to stdout. Non-achievement events are
/// ignored here; they are plain state changes, not user-facing toasts.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, event: &Event) {
        match event {
            Event::StreakMilestone { habit, streak, .. } => {
                println!("Achievement unlocked! You've maintained a {streak}-day streak for {habit}!");
            }
            Event::LevelUp { level, .. } => {
                println!("Level up! You've reached Level {level} on your mission!");
            }
            _ => {}
        }
    }
}

/// Collects every dispatched event; used to assert on notification behavior
/// without a real notifier.
#[derive(Default)]
pub struct BufferNotifier {
    events: Mutex<Vec<Event>>,
}

impl BufferNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the collected events.
    pub fn take(&self) -> Vec<Event> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

impl Notifier for BufferNotifier {
    fn notify(&self, event: &Event) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

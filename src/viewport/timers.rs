//! Abbrechbare, verzögerte Schritte für den Viewport.
//!
//! Einträge sind entweder zeitbasiert (absolut, relativ zum Host-Takt)
//! oder an den nächsten Frame gebunden. Ausgelöst wird nur über
//! [`TimerQueue::take_due`], nie aus einem anderen Thread.

use std::time::Duration;

/// Fälligkeit eines Eintrags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    /// Fällig ab diesem Zeitpunkt
    At(Duration),
    /// Fällig ab diesem Frame
    Frame(u64),
}

impl Due {
    fn is_due(self, now: Duration, frame: u64) -> bool {
        match self {
            Due::At(at) => at <= now,
            Due::Frame(f) => f <= frame,
        }
    }
}

/// Handle eines geplanten Eintrags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Warteschlange geplanter Schritte mit Payload `T`.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<(TimerId, Due, T)>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Leere Warteschlange.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Plant `payload` mit Fälligkeit `due`.
    pub fn schedule(&mut self, due: Due, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, due, payload));
        id
    }

    /// Bricht einen Eintrag ab. `false`, wenn er schon ausgelöst oder abgebrochen war.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Bricht alle Einträge ab. Gibt die Anzahl zurück.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Entnimmt alle fälligen Einträge in Planungsreihenfolge.
    pub fn take_due(&mut self, now: Duration, frame: u64) -> Vec<T> {
        let mut due = Vec::new();
        let mut pending = Vec::with_capacity(self.entries.len());
        for (id, when, payload) in self.entries.drain(..) {
            if when.is_due(now, frame) {
                due.push(payload);
            } else {
                pending.push((id, when, payload));
            }
        }
        self.entries = pending;
        due
    }

    /// Anzahl offener Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn nichts geplant ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_schedule_order_when_due() {
        let mut queue = TimerQueue::new();
        queue.schedule(Due::At(Duration::from_millis(100)), "late");
        queue.schedule(Due::Frame(1), "frame");
        queue.schedule(Due::At(Duration::from_millis(50)), "early");

        assert_eq!(queue.take_due(Duration::from_millis(10), 0), Vec::<&str>::new());
        assert_eq!(queue.take_due(Duration::from_millis(60), 1), vec!["frame", "early"]);
        assert_eq!(queue.take_due(Duration::from_millis(100), 2), vec!["late"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn canceled_entries_never_fire() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(Due::Frame(1), 1);
        queue.schedule(Due::Frame(1), 2);

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert_eq!(queue.take_due(Duration::ZERO, 5), vec![2]);

        queue.schedule(Due::Frame(9), 3);
        assert_eq!(queue.cancel_all(), 1);
        assert!(queue.take_due(Duration::MAX, u64::MAX).is_empty());
    }
}

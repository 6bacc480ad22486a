//! # Scheduled Tasks
//!
//! A small timer queue used by the boot sequence and the simulated typing
//! animation. Tasks are due at an offset from the moment the schedule was
//! started; the event loop hands in the current instant on every tick.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry<T> {
    due: Duration,
    task: T,
}

/// Queue of tasks due at fixed offsets from `started_at`.
#[derive(Debug, Clone)]
pub struct Schedule<T> {
    started_at: Instant,
    // Sorted by `due`, stable for equal offsets.
    pending: Vec<Entry<T>>,
}

impl<T> Schedule<T> {
    pub fn new(started_at: Instant) -> Self {
        Self {
            started_at,
            pending: Vec::new(),
        }
    }

    /// Queue `task` to fire `due` after the start instant.
    pub fn at(&mut self, due: Duration, task: T) {
        let idx = self.pending.partition_point(|e| e.due <= due);
        self.pending.insert(idx, Entry { due, task });
    }

    /// Remove and return every task due at `now`, in due order.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let elapsed = now.saturating_duration_since(self.started_at);
        let ready = self.pending.partition_point(|e| e.due <= elapsed);
        self.pending.drain(..ready).map(|e| e.task).collect()
    }

    /// Remove and return every pending task regardless of its due time.
    pub fn flush(&mut self) -> Vec<T> {
        self.pending.drain(..).map(|e| e.task).collect()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time from `now` until the next task is due, if any.
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.pending
            .first()
            .map(|e| e.due.saturating_sub(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_poll_returns_due_tasks_in_order() {
        let start = Instant::now();
        let mut s = Schedule::new(start);
        s.at(ms(300), "c");
        s.at(ms(100), "a");
        s.at(ms(200), "b");

        assert!(s.poll(start).is_empty());
        assert_eq!(s.poll(start + ms(150)), vec!["a"]);
        assert_eq!(s.poll(start + ms(1000)), vec!["b", "c"]);
        assert!(s.is_idle());
    }

    #[test]
    fn test_equal_offsets_keep_insertion_order() {
        let start = Instant::now();
        let mut s = Schedule::new(start);
        s.at(ms(0), 1);
        s.at(ms(0), 2);
        s.at(ms(0), 3);
        assert_eq!(s.poll(start), vec![1, 2, 3]);
    }

    #[test]
    fn test_flush_ignores_due_time() {
        let start = Instant::now();
        let mut s = Schedule::new(start);
        s.at(ms(5000), 'x');
        s.at(ms(10), 'y');
        assert_eq!(s.flush(), vec!['y', 'x']);
    }

    #[test]
    fn test_next_due_in() {
        let start = Instant::now();
        let mut s = Schedule::new(start);
        assert_eq!(s.next_due_in(start), None);
        s.at(ms(100), ());
        assert_eq!(s.next_due_in(start + ms(40)), Some(ms(60)));
        assert_eq!(s.next_due_in(start + ms(400)), Some(Duration::ZERO));
    }
}

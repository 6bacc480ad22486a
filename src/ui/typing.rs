//! Simulated typing: when a quick link is picked the command is typed into
//! the prompt one character at a time and then executed.

use crate::ui::schedule::Schedule;
use std::time::{Duration, Instant};

/// Delay between typed characters.
pub const CHAR_INTERVAL_MS: u64 = 45;
/// Pause between the end of typing and execution.
pub const SUBMIT_DELAY_MS: u64 = 120;

/// A step of the typing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Submit,
}

#[derive(Debug, Clone)]
pub struct Typing {
    schedule: Schedule<Keystroke>,
}

impl Typing {
    /// Type `command` starting at `now`.
    ///
    /// The first character lands one interval after start. Typing ends one
    /// interval after the last character and submission follows
    /// [`SUBMIT_DELAY_MS`] later.
    pub fn start(command: &str, now: Instant) -> Self {
        let mut schedule = Schedule::new(now);
        let mut due = 0;
        for c in command.chars() {
            due += CHAR_INTERVAL_MS;
            schedule.at(Duration::from_millis(due), Keystroke::Char(c));
        }
        schedule.at(
            Duration::from_millis(due + CHAR_INTERVAL_MS + SUBMIT_DELAY_MS),
            Keystroke::Submit,
        );
        Self { schedule }
    }

    /// Keystrokes due at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<Keystroke> {
        self.schedule.poll(now)
    }

    pub fn is_finished(&self) -> bool {
        self.schedule.is_idle()
    }

    /// Time until the next keystroke.
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        self.schedule.next_due_in(now)
    }

    /// Total run time for a command of `len` characters.
    pub fn duration_for(len: usize) -> Duration {
        Duration::from_millis((len as u64 + 1) * CHAR_INTERVAL_MS + SUBMIT_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_interval() {
        let start = Instant::now();
        let mut t = Typing::start("hi", start);

        assert!(t.tick(start).is_empty());
        assert_eq!(
            t.tick(start + Duration::from_millis(45)),
            vec![Keystroke::Char('h')]
        );
        assert_eq!(
            t.tick(start + Duration::from_millis(90)),
            vec![Keystroke::Char('i')]
        );
        assert!(t.tick(start + Duration::from_millis(200)).is_empty());
        assert!(!t.is_finished());
    }

    #[test]
    fn test_last_char_lands_at_len_intervals() {
        let start = Instant::now();
        let mut t = Typing::start("about", start);
        assert_eq!(t.tick(start + Duration::from_millis(224)).len(), 4);
        assert_eq!(
            t.tick(start + Duration::from_millis(225)),
            vec![Keystroke::Char('t')]
        );
        assert_eq!(
            t.next_due_in(start + Duration::from_millis(225)),
            Some(Duration::from_millis(45 + 120))
        );
    }

    #[test]
    fn test_submits_after_delay() {
        let start = Instant::now();
        let mut t = Typing::start("about", start);
        let end = start + Typing::duration_for("about".len());

        let before = t.tick(end - Duration::from_millis(1));
        assert_eq!(before.len(), 5);
        assert!(!before.contains(&Keystroke::Submit));

        assert_eq!(t.tick(end), vec![Keystroke::Submit]);
        assert!(t.is_finished());
    }
}

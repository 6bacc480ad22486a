//! # Boot Sequence
//!
//! Prints the introductory lines at the top of the terminal pane with
//! staggered delays. Until the sequence completes the prompt does not
//! execute commands.

use crate::ui::schedule::Schedule;
use std::time::{Duration, Instant};

pub const BANNER: &str = "lisco-portfolio v1.0.0";

/// Boot completes this long after start, just after the last line.
pub const BOOT_DONE_MS: u64 = 1600;

/// One line of boot output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootLine {
    Banner,
    Separator,
    Blank,
    Greeting,
    Muted(&'static str),
    Text(&'static str),
    QuickLink {
        command: &'static str,
        desc: &'static str,
    },
}

/// Boot output with its delay in milliseconds.
pub const BOOT_LINES: [(u64, BootLine); 14] = [
    (0, BootLine::Banner),
    (100, BootLine::Separator),
    (200, BootLine::Blank),
    (300, BootLine::Greeting),
    (450, BootLine::Muted("Senior Software Engineer.")),
    (600, BootLine::Blank),
    (700, BootLine::Text("Quick links:")),
    (
        800,
        BootLine::QuickLink {
            command: "about",
            desc: "Who I am",
        },
    ),
    (
        900,
        BootLine::QuickLink {
            command: "experience",
            desc: "Where I've worked",
        },
    ),
    (
        1000,
        BootLine::QuickLink {
            command: "projects",
            desc: "What I've built",
        },
    ),
    (
        1100,
        BootLine::QuickLink {
            command: "skills",
            desc: "Technologies I use",
        },
    ),
    (
        1200,
        BootLine::QuickLink {
            command: "contact",
            desc: "Get in touch",
        },
    ),
    (1350, BootLine::Blank),
    (
        1500,
        BootLine::Muted("Type a command below or pick one above."),
    ),
];

#[derive(Debug, Clone, Copy)]
enum BootEvent {
    Line(BootLine),
    Done,
}

/// Progress of the boot sequence.
#[derive(Debug, Clone)]
pub struct Boot {
    schedule: Schedule<BootEvent>,
    lines: Vec<BootLine>,
    done: bool,
}

impl Boot {
    /// Start the sequence at `now`.
    pub fn start(now: Instant) -> Self {
        let mut schedule = Schedule::new(now);
        for (delay, line) in BOOT_LINES {
            schedule.at(Duration::from_millis(delay), BootEvent::Line(line));
        }
        schedule.at(Duration::from_millis(BOOT_DONE_MS), BootEvent::Done);

        Self {
            schedule,
            lines: Vec::with_capacity(BOOT_LINES.len()),
            done: false,
        }
    }

    /// A sequence that has already completed.
    pub fn skipped(now: Instant) -> Self {
        let mut boot = Self::start(now);
        boot.finish();
        boot
    }

    /// Apply every event due at `now`. Returns `true` if boot completed
    /// during this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let events = self.schedule.poll(now);
        self.apply(events)
    }

    /// Complete the sequence immediately.
    pub fn finish(&mut self) -> bool {
        let events = self.schedule.flush();
        self.apply(events)
    }

    fn apply(&mut self, events: Vec<BootEvent>) -> bool {
        let was_done = self.done;
        for event in events {
            match event {
                BootEvent::Line(line) => self.lines.push(line),
                BootEvent::Done => self.done = true,
            }
        }
        if self.done && !was_done {
            tracing::debug!(lines = self.lines.len(), "boot complete");
        }
        self.done && !was_done
    }

    /// Lines printed so far.
    pub fn lines(&self) -> &[BootLine] {
        &self.lines
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Time until the next boot line is due.
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        self.schedule.next_due_in(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_lines_appear_on_schedule() {
        let start = Instant::now();
        let mut boot = Boot::start(start);

        boot.tick(start);
        assert_eq!(boot.lines(), &[BootLine::Banner]);

        boot.tick(start + ms(299));
        assert_eq!(boot.lines().len(), 3);

        boot.tick(start + ms(800));
        assert_eq!(boot.lines().len(), 8);
        assert!(!boot.is_done());
    }

    #[test]
    fn test_done_only_after_last_line() {
        let start = Instant::now();
        let mut boot = Boot::start(start);

        assert!(!boot.tick(start + ms(1599)));
        assert_eq!(boot.lines().len(), BOOT_LINES.len());
        assert!(!boot.is_done());

        assert!(boot.tick(start + ms(BOOT_DONE_MS)));
        assert!(boot.is_done());
        assert!(!boot.tick(start + ms(5000)));
    }

    #[test]
    fn test_skipped_has_everything() {
        let boot = Boot::skipped(Instant::now());
        assert!(boot.is_done());
        assert_eq!(boot.lines().len(), BOOT_LINES.len());
        assert_eq!(boot.next_due_in(Instant::now()), None);
    }

    #[test]
    fn test_delays_are_ascending() {
        let delays: Vec<u64> = BOOT_LINES.iter().map(|(d, _)| *d).collect();
        let mut sorted = delays.clone();
        sorted.sort_unstable();
        assert_eq!(delays, sorted);
        assert!(delays.iter().all(|d| *d < BOOT_DONE_MS));
    }
}

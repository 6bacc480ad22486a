use crate::command::{self, Command};
use crate::nav::{Navigator, View};
use crate::ui::boot::Boot;
use crate::ui::{detail, render};
use crate::ui::theme::Theme;
use crate::ui::typing::{Keystroke, Typing};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

pub const PROMPT_FULL: &str = "visitor@josh-lisco:~$";
pub const PROMPT_SHORT: &str = "$";

/// Terminals at most this wide get the short prompt.
pub const NARROW_WIDTH: u16 = 60;

/// Commands offered as quick links, in display order.
pub const QUICK_LINKS: [&str; 6] = ["about", "experience", "projects", "skills", "contact", "links"];

const SCROLL_STEP: u16 = 3;
const IDLE_POLL: Duration = Duration::from_millis(100);

/// A one-off message shown in the detail panel instead of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    PermissionDenied,
    Greeting,
    NotFound(String),
}

/// What the detail panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    View(View),
    Notice(Notice),
}

pub struct App {
    pub navigator: Navigator,
    pub detail: Detail,
    pub detail_scroll: u16,
    pub input: String,
    pub boot: Boot,
    pub typing: Option<Typing>,
    pub selected_link: Option<usize>,
    pub theme: Theme,
    pub width: u16,
    pub today: NaiveDate,
    pub should_quit: bool,
}

impl App {
    /// Build the app and show the welcome card. With `boot_animation` off
    /// the boot output is complete immediately.
    pub fn new(theme: Theme, today: NaiveDate, now: Instant, boot_animation: bool) -> Self {
        let boot = if boot_animation {
            Boot::start(now)
        } else {
            Boot::skipped(now)
        };

        let mut app = Self {
            navigator: Navigator::unstarted(),
            detail: Detail::View(View::Welcome),
            detail_scroll: 0,
            input: String::new(),
            boot,
            typing: None,
            selected_link: None,
            theme,
            width: u16::MAX,
            today,
            should_quit: false,
        };
        app.show_view(View::Welcome);
        app
    }

    /// Advance timed behavior to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.boot.tick(now);

        let keystrokes = match self.typing.as_mut() {
            Some(typing) => typing.tick(now),
            None => return,
        };
        for keystroke in keystrokes {
            match keystroke {
                Keystroke::Char(c) => self.input.push(c),
                Keystroke::Submit => {
                    let line = std::mem::take(&mut self.input);
                    self.execute(&line);
                }
            }
        }
        if self.typing.as_ref().is_some_and(Typing::is_finished) {
            self.typing = None;
        }
    }

    /// How long the event loop may block waiting for input: until the next
    /// boot line or keystroke is due, and never more than 100ms.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let typing = self.typing.as_ref().and_then(|t| t.next_due_in(now));
        [self.boot.next_due_in(now), typing]
            .into_iter()
            .flatten()
            .fold(IDLE_POLL, Duration::min)
    }

    /// Run one line of prompt input.
    pub fn execute(&mut self, raw: &str) {
        let Some(cmd) = Command::parse(raw) else {
            return;
        };
        tracing::info!(command = cmd.name(), "execute");

        match cmd {
            Command::About
            | Command::Experience
            | Command::Projects
            | Command::Skills
            | Command::Contact
            | Command::Links
            | Command::Help
            | Command::Clear => {
                if let Some(view) = cmd.target_view() {
                    self.show_view(view);
                }
            }
            Command::Sudo => self.show(Detail::Notice(Notice::PermissionDenied)),
            Command::Hello => self.show(Detail::Notice(Notice::Greeting)),
            Command::Exit => self.should_quit = true,
            Command::Unknown(text) => {
                tracing::debug!(input = %text, "command not found");
                self.show(Detail::Notice(Notice::NotFound(text)));
            }
        }
    }

    fn show_view(&mut self, view: View) {
        self.navigator.goto(view);
        self.show(Detail::View(view));
    }

    fn show(&mut self, detail: Detail) {
        self.detail = detail;
        self.detail_scroll = 0;
    }

    /// Back control.
    pub fn back(&mut self) {
        if let Some(view) = self.navigator.go_back() {
            self.show(Detail::View(view));
        }
    }

    /// Home control.
    pub fn home(&mut self) {
        if self.navigator.go_home() {
            self.show(Detail::View(View::Welcome));
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn is_home(&self) -> bool {
        self.navigator.is_home()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_some()
    }

    pub fn prompt(&self) -> &'static str {
        if self.width <= NARROW_WIDTH {
            PROMPT_SHORT
        } else {
            PROMPT_FULL
        }
    }

    /// The block cursor only shows on an empty prompt.
    pub fn cursor_visible(&self) -> bool {
        self.input.is_empty()
    }

    pub fn tab_complete(&mut self) {
        if let Some(name) = command::complete(&self.input) {
            self.input = name.to_string();
        }
    }

    pub fn select_next_link(&mut self) {
        self.selected_link = Some(match self.selected_link {
            Some(i) => (i + 1) % QUICK_LINKS.len(),
            None => 0,
        });
    }

    pub fn select_previous_link(&mut self) {
        self.selected_link = Some(match self.selected_link {
            Some(0) | None => QUICK_LINKS.len() - 1,
            Some(i) => i - 1,
        });
    }

    pub fn selected_command(&self) -> Option<&'static str> {
        self.selected_link.and_then(|i| QUICK_LINKS.get(i).copied())
    }

    /// Type `command` into the prompt and run it. Ignored until boot
    /// finishes and while another command is being typed.
    pub fn type_and_execute(&mut self, command: &str, now: Instant) {
        if !self.boot.is_done() || self.is_typing() {
            return;
        }
        self.input.clear();
        self.typing = Some(Typing::start(command, now));
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(SCROLL_STEP);
    }

    pub fn scroll_detail_down(&mut self) {
        let width = render::detail_content_width(self.width);
        let max = detail::line_count(self, width).saturating_sub(1);
        self.detail_scroll = self.detail_scroll.saturating_add(SCROLL_STEP).min(max);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return;
        }

        if self.is_typing() {
            return;
        }

        match key.code {
            KeyCode::Char('b') if ctrl => self.back(),
            KeyCode::Left if alt => self.back(),
            KeyCode::Home => self.home(),
            KeyCode::PageUp => self.scroll_detail_up(),
            KeyCode::PageDown => self.scroll_detail_down(),
            KeyCode::Enter => {
                if !self.boot.is_done() {
                    return;
                }
                if self.input.trim().is_empty() {
                    if let Some(cmd) = self.selected_command() {
                        self.type_and_execute(cmd, now);
                    }
                    return;
                }
                let line = std::mem::take(&mut self.input);
                self.execute(&line);
            }
            KeyCode::Tab => self.tab_complete(),
            KeyCode::Esc => {
                self.input.clear();
                self.selected_link = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Up => self.select_previous_link(),
            KeyCode::Down => self.select_next_link(),
            KeyCode::Char(c) if !ctrl && !alt => {
                self.input.push(c);
                self.selected_link = None;
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_detail_up(),
            MouseEventKind::ScrollDown => self.scroll_detail_down(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_at(now: Instant) -> App {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
        App::new(Theme::default_theme().clone(), today, now, false)
    }

    #[test]
    fn test_starts_on_welcome_with_empty_history() {
        let app = app_at(Instant::now());
        assert_eq!(app.detail, Detail::View(View::Welcome));
        assert!(app.navigator.history().is_empty());
        assert!(app.is_home());
        assert!(!app.can_go_back());
    }

    #[test]
    fn test_easter_eggs_leave_navigation_alone() {
        let mut app = app_at(Instant::now());
        app.execute("about");
        let nav = app.navigator.clone();

        app.execute("sudo");
        assert_eq!(app.detail, Detail::Notice(Notice::PermissionDenied));
        app.execute("HI");
        assert_eq!(app.detail, Detail::Notice(Notice::Greeting));
        app.execute("rm -rf /");
        assert_eq!(
            app.detail,
            Detail::Notice(Notice::NotFound("rm -rf /".to_string()))
        );

        assert_eq!(app.navigator, nav);
    }

    #[test]
    fn test_back_after_notice_shows_previous_view() {
        let mut app = app_at(Instant::now());
        app.execute("about");
        app.execute("hello");
        app.back();
        assert_eq!(app.detail, Detail::View(View::Welcome));
    }

    #[test]
    fn test_prompt_is_responsive() {
        let mut app = app_at(Instant::now());
        app.width = 120;
        assert_eq!(app.prompt(), PROMPT_FULL);
        app.width = NARROW_WIDTH;
        assert_eq!(app.prompt(), PROMPT_SHORT);
    }

    #[test]
    fn test_link_selection_wraps() {
        let mut app = app_at(Instant::now());
        app.select_previous_link();
        assert_eq!(app.selected_command(), Some("links"));
        app.select_next_link();
        assert_eq!(app.selected_command(), Some("about"));
    }

    #[test]
    fn test_scroll_resets_on_new_content() {
        let mut app = app_at(Instant::now());
        app.execute("experience");
        app.scroll_detail_down();
        assert!(app.detail_scroll > 0);
        app.execute("skills");
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn test_scroll_reaches_wrapped_rows_in_narrow_pane() {
        let mut app = app_at(Instant::now());
        app.execute("experience");
        let unwrapped = detail::lines(&app.detail, &app.theme, app.today, None).len();

        app.width = 40;
        for _ in 0..500 {
            app.scroll_detail_down();
        }
        assert!(usize::from(app.detail_scroll) >= unwrapped);

        let before = app.detail_scroll;
        app.scroll_detail_down();
        assert_eq!(app.detail_scroll, before);
    }

    #[test]
    fn test_every_command_dispatches() {
        for name in command::COMPLETION_NAMES {
            let mut app = app_at(Instant::now());
            app.execute(name);
            match Command::parse(name).and_then(|c| c.target_view()) {
                Some(view) => assert_eq!(app.detail, Detail::View(view), "{name}"),
                None => assert!(matches!(app.detail, Detail::Notice(_)), "{name}"),
            }
        }
    }

    #[test]
    fn test_exit_command_quits() {
        let mut app = app_at(Instant::now());
        app.execute("exit");
        assert!(app.should_quit);
    }
}

//! Keyboard event handling tests
//!
//! Tests for prompt editing, command execution, tab completion, quick-link
//! picking and the back/home controls.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use portfolio::nav::View;
use portfolio::ui::app::{Detail, Notice};
use portfolio::ui::theme::Theme;
use portfolio::ui::typing::Typing;
use portfolio::ui::App;
use std::time::{Duration, Instant};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// Helper to create a booted app
fn create_test_app(now: Instant) -> App {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
    App::new(Theme::default_theme().clone(), today, now, false)
}

fn type_str(app: &mut App, s: &str, now: Instant) {
    for c in s.chars() {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
}

#[test]
fn test_type_and_enter_runs_command() {
    let now = Instant::now();
    let mut app = create_test_app(now);

    type_str(&mut app, "Projects", now);
    assert_eq!(app.input, "Projects");
    assert!(!app.cursor_visible());

    app.handle_key(key(KeyCode::Enter), now);
    assert_eq!(app.detail, Detail::View(View::Projects));
    assert!(app.input.is_empty());
    assert!(app.cursor_visible());
    assert!(app.can_go_back());
}

#[test]
fn test_enter_on_blank_input_does_nothing() {
    let now = Instant::now();
    let mut app = create_test_app(now);
    type_str(&mut app, "   ", now);
    app.handle_key(key(KeyCode::Enter), now);
    assert_eq!(app.detail, Detail::View(View::Welcome));
    assert!(app.navigator.history().is_empty());
}

#[test]
fn test_backspace_and_esc() {
    let now = Instant::now();
    let mut app = create_test_app(now);
    type_str(&mut app, "abx", now);
    app.handle_key(key(KeyCode::Backspace), now);
    assert_eq!(app.input, "ab");

    app.handle_key(key(KeyCode::Esc), now);
    assert!(app.input.is_empty());
}

#[test]
fn test_tab_completes_unique_prefix_only() {
    let now = Instant::now();
    let mut app = create_test_app(now);

    type_str(&mut app, "pro", now);
    app.handle_key(key(KeyCode::Tab), now);
    assert_eq!(app.input, "projects");

    app.handle_key(key(KeyCode::Esc), now);
    type_str(&mut app, "he", now);
    app.handle_key(key(KeyCode::Tab), now);
    assert_eq!(app.input, "he");
}

#[test]
fn test_unknown_command_shows_notice() {
    let now = Instant::now();
    let mut app = create_test_app(now);
    type_str(&mut app, "vim", now);
    app.handle_key(key(KeyCode::Enter), now);
    assert_eq!(
        app.detail,
        Detail::Notice(Notice::NotFound("vim".to_string()))
    );
    assert!(!app.can_go_back());
}

#[test]
fn test_back_and_home_keys() {
    let now = Instant::now();
    let mut app = create_test_app(now);
    app.execute("about");
    app.execute("skills");
    app.execute("contact");

    app.handle_key(with(KeyCode::Char('b'), KeyModifiers::CONTROL), now);
    assert_eq!(app.detail, Detail::View(View::Skills));

    app.handle_key(with(KeyCode::Left, KeyModifiers::ALT), now);
    assert_eq!(app.detail, Detail::View(View::About));
    // Ctrl+B is not typed into the prompt.
    assert!(app.input.is_empty());

    app.handle_key(key(KeyCode::Home), now);
    assert_eq!(app.detail, Detail::View(View::Welcome));
    assert!(!app.can_go_back());
    assert!(app.is_home());
}

#[test]
fn test_back_with_empty_history_keeps_notice() {
    let now = Instant::now();
    let mut app = create_test_app(now);
    app.execute("sudo");
    app.handle_key(with(KeyCode::Char('b'), KeyModifiers::CONTROL), now);
    assert_eq!(app.detail, Detail::Notice(Notice::PermissionDenied));
}

#[test]
fn test_home_from_notice_on_home_view_is_noop() {
    let now = Instant::now();
    let mut app = create_test_app(now);
    app.execute("hello");
    app.handle_key(key(KeyCode::Home), now);
    assert_eq!(app.detail, Detail::Notice(Notice::Greeting));
}

#[test]
fn test_ctrl_c_quits() {
    let now = Instant::now();
    let mut app = create_test_app(now);
    assert!(!app.should_quit);
    app.handle_key(with(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
    assert!(app.should_quit);
    assert!(app.input.is_empty());
}

#[test]
fn test_pick_quick_link_types_it() {
    let start = Instant::now();
    let mut app = create_test_app(start);

    app.handle_key(key(KeyCode::Down), start);
    app.handle_key(key(KeyCode::Down), start);
    assert_eq!(app.selected_command(), Some("experience"));

    app.handle_key(key(KeyCode::Enter), start);
    assert!(app.is_typing());

    let done = start + Typing::duration_for("experience".len());
    app.tick(done - Duration::from_millis(1));
    assert_eq!(app.input, "experience");
    assert_eq!(app.detail, Detail::View(View::Welcome));

    app.tick(done);
    assert!(!app.is_typing());
    assert!(app.input.is_empty());
    assert_eq!(app.detail, Detail::View(View::Experience));
}

#[test]
fn test_keys_ignored_while_typing() {
    let start = Instant::now();
    let mut app = create_test_app(start);
    app.type_and_execute("links", start);

    app.handle_key(key(KeyCode::Char('x')), start);
    app.handle_key(key(KeyCode::Enter), start);
    app.handle_key(key(KeyCode::Home), start);
    assert!(app.input.is_empty());

    // Quit still works.
    app.handle_key(with(KeyCode::Char('c'), KeyModifiers::CONTROL), start);
    assert!(app.should_quit);
}

#[test]
fn test_typing_clears_link_selection() {
    let now = Instant::now();
    let mut app = create_test_app(now);
    app.handle_key(key(KeyCode::Up), now);
    assert!(app.selected_command().is_some());
    type_str(&mut app, "a", now);
    assert_eq!(app.selected_command(), None);
}

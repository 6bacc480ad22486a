use crate::profile;
use crate::ui::app::App;
use crate::ui::boot::{BootLine, BANNER};
use crate::ui::detail;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::rc::Rc;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        frame.area(),
    );

    // Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, theme, main_chunks[0]);

    let body_chunks = body_layout(main_chunks[1]);

    render_terminal(frame, app, body_chunks[0]);
    render_detail(frame, app, body_chunks[1]);
    render_footer(frame, app, main_chunks[2]);
}

/// Terminal pane on the left, detail panel on the right.
fn body_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area)
}

fn detail_block(theme: &Theme, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(theme.fg_dim))
}

/// Columns available to detail content in a terminal `width` columns wide.
pub fn detail_content_width(width: u16) -> u16 {
    let body = body_layout(Rect::new(0, 0, width, 1));
    body[1].width.saturating_sub(2)
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("  {BANNER}"),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ·  {}", profile::NAME),
            Style::default().fg(theme.fg_dim),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

/// One boot line, with quick links highlighted when selected.
fn boot_line(line: &BootLine, theme: &Theme, selected: Option<&str>) -> Line<'static> {
    match *line {
        BootLine::Banner => Line::from(Span::styled(
            BANNER,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        BootLine::Separator => Line::from(Span::styled(
            "─".repeat(40),
            Style::default().fg(theme.fg_dim),
        )),
        BootLine::Blank => Line::from(""),
        BootLine::Greeting => Line::from(vec![
            Span::styled("Hey, I'm ", Style::default().fg(theme.fg)),
            Span::styled(
                profile::NAME,
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(".", Style::default().fg(theme.fg)),
        ]),
        BootLine::Muted(s) => Line::from(Span::styled(s, Style::default().fg(theme.fg_dim))),
        BootLine::Text(s) => Line::from(Span::styled(s, Style::default().fg(theme.fg))),
        BootLine::QuickLink { command, desc } => Line::from(vec![
            Span::raw("  "),
            Span::styled(
                command,
                detail::command_style(theme, selected == Some(command)),
            ),
            Span::raw(" ".repeat(12usize.saturating_sub(command.len()))),
            Span::styled(desc, Style::default().fg(theme.fg)),
        ]),
    }
}

fn render_terminal(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let selected = app.selected_command();

    let mut text: Vec<Line> = app
        .boot
        .lines()
        .iter()
        .map(|line| boot_line(line, theme, selected))
        .collect();

    let mut prompt = vec![
        Span::styled(
            app.prompt(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.input.clone(), Style::default().fg(theme.fg)),
    ];
    if app.cursor_visible() {
        prompt.push(Span::styled("█", Style::default().fg(theme.fg)));
    }
    text.push(Line::from(""));
    let prompt_row = u16::try_from(text.len()).unwrap_or(u16::MAX);
    text.push(Line::from(prompt));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" terminal ")
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(area);

    // Keep the prompt in view once the boot output fills the pane.
    let scroll = (prompt_row + 1).saturating_sub(inner.height);

    let paragraph = Paragraph::new(text).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    if !app.cursor_visible() && !app.is_typing() {
        let x = inner
            .x
            .saturating_add(char_width(app.prompt()))
            .saturating_add(1)
            .saturating_add(char_width(&app.input));
        let y = inner.y + prompt_row.saturating_sub(scroll);
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}

fn char_width(s: &str) -> u16 {
    u16::try_from(s.chars().count()).unwrap_or(u16::MAX)
}

fn nav_control(label: &'static str, enabled: bool, theme: &Theme) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.fg_dim)
            .add_modifier(Modifier::DIM)
    };
    Span::styled(label, style)
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = detail_block(theme, detail::title(&app.detail));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let nav = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        nav_control("← back", app.can_go_back(), theme),
        Span::raw("   "),
        nav_control("⌂ home", !app.is_home(), theme),
    ]));
    frame.render_widget(nav, chunks[0]);

    let content = detail::lines(&app.detail, theme, app.today, app.selected_command());
    let paragraph = Paragraph::new(content)
        .wrap(detail::WRAP)
        .scroll((app.detail_scroll, 0));
    frame.render_widget(paragraph, chunks[1]);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if !app.boot.is_done() {
        "Booting…  [Ctrl+C] Quit"
    } else if app.is_typing() {
        "Running…"
    } else {
        "[Enter] Run  [Tab] Complete  [↑↓] Pick link  [Ctrl+B] Back  [Home] Home  [PgUp/PgDn] Scroll  [Ctrl+C] Quit"
    };

    let footer = Paragraph::new(help_text).style(Style::default().fg(app.theme.fg_dim));
    frame.render_widget(footer, area);
}

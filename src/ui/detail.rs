//! # Detail Panel Content
//!
//! Turns a [`Detail`] into styled lines. Pure: the same detail, theme and
//! date always produce the same lines.

use crate::nav::View;
use crate::profile::{self, Contact};
use crate::ui::app::{App, Detail, Notice, QUICK_LINKS};
use crate::ui::theme::Theme;
use chrono::NaiveDate;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

const SEPARATOR_WIDTH: usize = 40;

/// Wrapping used for detail content.
pub const WRAP: Wrap = Wrap { trim: false };

/// Short description for each welcome-card command.
fn link_description(command: &str) -> &'static str {
    match command {
        "about" => "Who I am",
        "experience" => "Where I've worked",
        "projects" => "What I've built",
        "skills" => "Technologies I use",
        "contact" => "Get in touch",
        "links" => "Quick link-in-bio list",
        _ => "",
    }
}

/// Style for a command the visitor can run, highlighted when selected.
pub fn command_style(theme: &Theme, selected: bool) -> Style {
    let style = Style::default()
        .fg(theme.link)
        .add_modifier(Modifier::UNDERLINED);
    if selected {
        style.bg(theme.selection_bg).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Lines for the detail panel.
///
/// `selected` is the quick-link command currently highlighted, if any.
pub fn lines(
    detail: &Detail,
    theme: &Theme,
    today: NaiveDate,
    selected: Option<&str>,
) -> Vec<Line<'static>> {
    match detail {
        Detail::View(View::Welcome) => welcome(theme, selected),
        Detail::View(View::About) => about(theme, today),
        Detail::View(View::Experience) => experience(theme),
        Detail::View(View::Projects) => projects(theme),
        Detail::View(View::Skills) => skills(theme),
        Detail::View(View::Contact) => contacts(theme, View::Contact, profile::CONTACTS),
        Detail::View(View::Links) => contacts(theme, View::Links, profile::LINKS),
        Detail::Notice(notice) => notice_lines(theme, notice),
    }
}

/// Rows the app's current detail occupies once wrapped to `width` columns.
pub fn line_count(app: &App, width: u16) -> u16 {
    let text = lines(&app.detail, &app.theme, app.today, app.selected_command());
    let rows = Paragraph::new(text).wrap(WRAP).line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Title for the detail panel border.
pub fn title(detail: &Detail) -> &'static str {
    match detail {
        Detail::View(view) => view.title(),
        Detail::Notice(_) => "Terminal",
    }
}

/// Flatten styled lines to plain text, one line per row.
pub fn plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn heading(theme: &Theme, text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD),
    ))
}

fn separator(theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(SEPARATOR_WIDTH),
        Style::default().fg(theme.fg_dim),
    ))
}

fn text(theme: &Theme, s: &str) -> Line<'static> {
    Line::from(Span::styled(s.to_string(), Style::default().fg(theme.fg)))
}

fn labeled(theme: &Theme, label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(theme.fg_dim)),
        Span::styled(value, Style::default().fg(theme.fg)),
    ])
}

fn pills(theme: &Theme, items: &[&str]) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{item}]"),
            Style::default().fg(theme.pill),
        ));
    }
    Line::from(spans)
}

fn welcome(theme: &Theme, selected: Option<&str>) -> Vec<Line<'static>> {
    let mut out = vec![
        Line::from(Span::styled(
            profile::NAME,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile::TITLE, Style::default().fg(theme.fg_dim))),
        separator(theme),
        text(
            theme,
            "Welcome to my interactive portfolio. Pick a command below or type one in the terminal.",
        ),
        Line::from(""),
    ];

    for command in QUICK_LINKS {
        out.push(Line::from(vec![
            Span::styled(
                format!("{command:<12}"),
                command_style(theme, selected == Some(command)),
            ),
            Span::styled(
                link_description(command),
                Style::default().fg(theme.fg),
            ),
        ]));
    }
    out
}

fn about(theme: &Theme, today: NaiveDate) -> Vec<Line<'static>> {
    let age = profile::age_on(today);
    vec![
        heading(theme, View::About.title()),
        separator(theme),
        text(
            theme,
            &format!(
                "I'm {}, a {}-year-old {} software engineer based in {}. I build full-stack applications, focused on clean code and practical solutions.",
                profile::NAME,
                age,
                profile::HERITAGE,
                profile::LOCATION
            ),
        ),
        Line::from(""),
        labeled(theme, "Position", profile::TITLE.to_string()),
        labeled(theme, "Education", profile::EDUCATION.to_string()),
        labeled(theme, "Age", age.to_string()),
        labeled(theme, "Heritage", profile::HERITAGE.to_string()),
        labeled(theme, "Location", profile::LOCATION.to_string()),
    ]
}

fn experience(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![heading(theme, View::Experience.title()), separator(theme)];

    for (i, job) in profile::JOBS.iter().enumerate() {
        if i > 0 {
            out.push(Line::from(""));
        }
        out.push(Line::from(vec![
            Span::styled(
                job.company,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}", job.location, job.tenure),
                Style::default().fg(theme.fg_dim),
            ),
        ]));
        for role in job.roles {
            out.push(Line::from(vec![
                Span::styled(format!("  {:<32}", role.title), Style::default().fg(theme.fg)),
                Span::styled(role.period, Style::default().fg(theme.fg_dim)),
            ]));
        }
        for detail in job.details {
            out.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme.fg_dim)),
                Span::styled(*detail, Style::default().fg(theme.fg)),
            ]));
        }
    }
    out
}

fn projects(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![heading(theme, View::Projects.title()), separator(theme)];

    for project in profile::PROJECTS {
        out.push(Line::from(Span::styled(
            project.name,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        out.push(text(theme, project.desc));
        out.push(pills(theme, project.tech));
        out.push(Line::from(""));
    }
    out
}

fn skills(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![heading(theme, View::Skills.title()), separator(theme)];

    for category in profile::SKILL_CATEGORIES {
        out.push(Line::from(Span::styled(
            category.title,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        out.push(pills(theme, category.items));
        out.push(Line::from(""));
    }
    out
}

fn contacts(theme: &Theme, view: View, entries: &[Contact]) -> Vec<Line<'static>> {
    let mut out = vec![heading(theme, view.title()), separator(theme)];

    for entry in entries {
        out.push(Line::from(vec![
            Span::styled(format!("{:<10}", entry.label), Style::default().fg(theme.fg_dim)),
            Span::styled(
                entry.text,
                Style::default()
                    .fg(theme.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(format!("  {}", entry.target), Style::default().fg(theme.fg_dim)),
        ]));
    }
    out
}

fn notice_lines(theme: &Theme, notice: &Notice) -> Vec<Line<'static>> {
    match notice {
        Notice::PermissionDenied => vec![Line::from(Span::styled(
            "Nice try. Permission denied.",
            Style::default().fg(theme.error),
        ))],
        Notice::Greeting => vec![Line::from(Span::styled(
            "Hey there! Thanks for stopping by.",
            Style::default().fg(theme.success),
        ))],
        Notice::NotFound(cmd) => vec![
            Line::from(Span::styled(
                format!("Command not found: {cmd}"),
                Style::default().fg(theme.error),
            )),
            Line::from(vec![
                Span::styled("Type ", Style::default().fg(theme.fg)),
                Span::styled("help", command_style(theme, false)),
                Span::styled(
                    " or pick a command on the left.",
                    Style::default().fg(theme.fg),
                ),
            ]),
        ],
    }
}

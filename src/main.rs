//! # lisco-portfolio Entry Point
//!
//! An interactive, terminal-style portfolio. A short boot sequence prints an
//! introduction, then the visitor types commands and the detail panel shows
//! the matching page.
//!
//! ## Usage
//!
//! ```bash
//! # Start the interactive portfolio
//! lisco-portfolio
//!
//! # Skip the boot animation and pick a theme
//! lisco-portfolio --no-boot --theme Phosphor
//!
//! # Remember those choices
//! lisco-portfolio --no-boot --theme Phosphor --save-config
//!
//! # Print a single page and exit
//! lisco-portfolio --print projects
//! ```
//!
//! ## Commands
//!
//! `about`, `experience`, `projects`, `skills`, `contact`, `links`, `help`,
//! `clear`, `exit`, and a couple of easter eggs.
//!
//! ## Key Bindings
//!
//! - `Enter` - Run the typed command, or the picked quick link
//! - `Tab` - Complete a unique command prefix
//! - `Up` / `Down` - Pick a quick link
//! - `Esc` - Clear the prompt
//! - `Ctrl+B` / `Alt+Left` - Back
//! - `Home` - Home
//! - `PageUp` / `PageDown` / mouse wheel - Scroll the detail panel
//! - `Ctrl+C` - Quit

use portfolio::logging;
use portfolio::ui::config::Config;
use portfolio::ui::theme::Theme;
use portfolio::ui::{self, detail, App};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// lisco-portfolio - an interactive terminal-style portfolio
#[derive(Parser, Debug, Default)]
#[command(name = "lisco-portfolio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse Josh Lisco's portfolio from your terminal", long_about = None)]
struct Args {
    /// Color theme (see --list-themes)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the built-in themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Skip the boot animation
    #[arg(long)]
    no_boot: bool,

    /// Save --theme and --no-boot as the new defaults
    #[arg(long)]
    save_config: bool,

    /// Print the page for COMMAND as plain text and exit
    #[arg(short, long, value_name = "COMMAND")]
    print: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

/// Apply command line overrides on top of the loaded config.
fn resolve_config(mut config: Config, args: &Args) -> Result<Config> {
    if let Some(name) = &args.theme {
        let Some(theme) = Theme::by_name(name) else {
            let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            bail!("Unknown theme '{}'. Available: {}", name, names.join(", "));
        };
        config.theme = theme.name.to_string();
    }
    if args.no_boot {
        config.boot_animation = false;
    }
    Ok(config)
}

/// The page `command` leads to, as plain text.
fn plain_output(command: &str, theme: &Theme, today: NaiveDate) -> String {
    let mut app = App::new(theme.clone(), today, Instant::now(), false);
    app.execute(command);
    detail::plain_text(&detail::lines(&app.detail, theme, today, None))
}

async fn run_application(args: Args) -> Result<()> {
    if let Some(path) = &args.log_file {
        logging::init_file(path)?;
    }

    if args.list_themes {
        for theme in Theme::all() {
            println!("{}", theme.name);
        }
        return Ok(());
    }

    let config = resolve_config(Config::load(), &args)?;
    if args.save_config {
        let path = config.save()?;
        println!("Saved config to {}", path.display());
    }

    let theme = Theme::by_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "unknown theme in config, using default");
        Theme::default_theme()
    });
    let today = chrono::Local::now().date_naive();

    if let Some(command) = &args.print {
        println!("{}", plain_output(command, theme, today));
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(theme.clone(), today, Instant::now(), config.boot_animation);
    tracing::info!(theme = theme.name, boot = config.boot_animation, "starting");

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    app.width = terminal
        .size()
        .map_err(|e| anyhow::anyhow!("Failed to read terminal size: {e}"))?
        .width;

    loop {
        app.tick(Instant::now());
        if app.should_quit {
            break;
        }

        terminal
            .draw(|f| ui::render(f, app))
            .map_err(|e| anyhow::anyhow!("Failed to draw terminal UI: {e}"))?;

        let Some(event) = event_reader.read_event(app.poll_timeout(Instant::now()))? else {
            continue;
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key, Instant::now());
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, _) => app.width = width,
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("quit");
    Ok(())
}

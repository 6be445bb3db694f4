//! Terminal UI for the Cheers party game.
//!
//! Renders the three screens of a [`Navigator`] (home, player setup,
//! gameplay) with ratatui + crossterm and turns key presses into roster
//! edits, turn advances and navigation events.
//!
//! # Quick start
//!
//! ```ignore
//! use cheers_rs::prelude::*;
//! use cheers_tui::{TuiConfig, run_tui};
//!
//! let mut nav = Navigator::new(Catalog::default());
//! run_tui(&mut nav, &TuiConfig::default())?;
//! ```

use std::io;
use std::time::Duration;

use cheers_rs::Navigator;
use cheers_rs::ui::tracing::LogBuffer;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use ratatui::prelude::*;

mod app;
mod input;
mod render;

pub use render::{log_level_style, truncate_str};

use app::App;
use input::handle_key_event;
use render::render;

/// Configuration for the TUI.
#[derive(Default)]
pub struct TuiConfig {
    /// Log buffer from the tracing layer.
    ///
    /// When set, the TUI drains pending log lines from this buffer once
    /// per frame into its log pane.
    pub log_buffer: Option<LogBuffer>,
    /// Open with the log pane visible (toggled with `,`).
    pub show_logs: bool,
}

/// Run the TUI event loop (blocking) until the players quit.
pub fn run_tui(nav: &mut Navigator, config: &TuiConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new();
    app.show_logs = config.show_logs;

    let result = event_loop(&mut terminal, nav, &mut app, config);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    nav: &mut Navigator,
    app: &mut App,
    config: &TuiConfig,
) -> io::Result<()> {
    while !app.should_quit {
        if let Some(ref log_buf) = config.log_buffer {
            log_buf.flush_into(&mut app.logs);
        }

        terminal.draw(|frame| render(frame, nav, app))?;

        // Poll for input events (100ms timeout so the log pane stays live).
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key_event(key, app, nav);
        }
    }
    tracing::info!("players quit");
    Ok(())
}

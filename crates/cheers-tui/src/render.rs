//! Rendering for the home, setup and gameplay screens.

use cheers_rs::ui::{LogLevel, LogLine};
use cheers_rs::{GameSession, MAX_PLAYERS, MIN_PLAYERS, Navigator, Roster, Screen};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

const LOGO: &str = r"
  ____ _
 / ___| |__   ___  ___ _ __ ___
| |   | '_ \ / _ \/ _ \ '__/ __|
| |___| | | |  __/  __/ |  \__ \
 \____|_| |_|\___|\___|_|  |___/
";

// ── Public Utilities ──────────────────────────────────────────────────

/// Truncate a string to at most `max` characters, appending "..." if
/// truncated.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

/// Map a log level to a ratatui [`Style`].
pub fn log_level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
        LogLevel::Debug => Style::default().fg(Color::Cyan),
        LogLevel::Info => Style::default().fg(Color::Green),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

// ── Root Render ───────────────────────────────────────────────────────

pub(crate) fn render(frame: &mut Frame, nav: &Navigator, app: &App) {
    let area = frame.area();

    // Outer layout: [3] title bar | [flex] screen | [3] hint bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    let body = if app.show_logs {
        let mid = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);
        render_logs(frame, mid[1], &app.logs, app);
        mid[0]
    } else {
        chunks[1]
    };

    match nav.screen() {
        Screen::Home => {
            render_title(frame, chunks[0], "Cheers");
            render_home(frame, body);
        }
        Screen::PlayerSetup(roster) => {
            render_title(frame, chunks[0], "Mates");
            render_setup(frame, body, roster, app);
        }
        Screen::Gameplay(session) => {
            render_title(frame, chunks[0], &session.current_player().name);
            render_gameplay(frame, body, session);
        }
    }

    render_hints(frame, chunks[2], nav, app);
}

// ── Title Bar ─────────────────────────────────────────────────────────

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let max = area.width.saturating_sub(4) as usize;
    let paragraph = Paragraph::new(Line::from(Span::styled(
        truncate_str(title, max),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(paragraph, area);
}

// ── Home ──────────────────────────────────────────────────────────────

fn render_home(frame: &mut Frame, area: Rect) {
    let logo_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, logo_style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press [Enter] to start",
        Style::default().fg(Color::Green),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

// ── Player Setup ──────────────────────────────────────────────────────

fn render_setup(frame: &mut Frame, area: Rect, roster: &Roster, app: &App) {
    let placeholder = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = Vec::with_capacity(roster.len() + 2);

    for (i, name) in roster.slots().iter().enumerate() {
        let selected = i == app.setup_cursor;
        let marker = if selected { "> " } else { "  " };
        let marker_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![Span::styled(marker, marker_style)];
        if name.is_empty() {
            spans.push(Span::styled(format!("Player {} Name", i + 1), placeholder));
        } else {
            spans.push(Span::styled(
                name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if selected {
            spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let ready = if roster.is_ready() {
        Span::styled(
            "Ready: press [Enter] to play",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("Name at least {MIN_PLAYERS} mates to play"),
            Style::default().fg(Color::DarkGray),
        )
    };
    lines.push(Line::from(ready));

    let title = format!(" Players {}/{MAX_PLAYERS} ", roster.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    // Keep the cursor row visible on short terminals.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = (app.setup_cursor + 1).saturating_sub(inner_height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

// ── Gameplay ──────────────────────────────────────────────────────────

fn render_gameplay(frame: &mut Frame, area: Rect, session: &GameSession) {
    let pool = session.pool();
    let prompt_style = if session.is_finished() {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    // Push the prompt down towards the middle of the pane.
    let pad = area.height.saturating_sub(4) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        session.current_draw().text(),
        prompt_style,
    )));

    let title = format!(" Prompt {}/{} ", pool.served(), pool.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

// ── Log Pane ──────────────────────────────────────────────────────────

fn render_logs(frame: &mut Frame, area: Rect, logs: &[LogLine], app: &App) {
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = logs
        .iter()
        // Trace-level events are too noisy for the pane.
        .filter(|log| log.level != LogLevel::Trace)
        .map(|log| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", log.time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", log.level.label()),
                    log_level_style(log.level),
                ),
                Span::raw(log.message.as_str()),
            ])
        })
        .collect();

    let total = lines.len();
    let scroll = total
        .saturating_sub(inner_height)
        .saturating_sub(app.log_scroll);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Log ");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ── Hint Bar ──────────────────────────────────────────────────────────

fn render_hints(frame: &mut Frame, area: Rect, nav: &Navigator, app: &App) {
    let (hint, style) = match (&app.status_message, nav.screen()) {
        (Some(msg), _) => (msg.clone(), Style::default().fg(Color::Red)),
        (None, Screen::Home) => (
            "[Enter] start  [,] logs  [q] quit".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        (None, Screen::PlayerSetup(_)) => (
            "[Up/Down] select  [Ctrl+A] add  [Ctrl+D] remove  [Enter] play  [Esc] home"
                .to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        (None, Screen::Gameplay(session)) if session.is_finished() => (
            "Out of prompts!  [Esc] home  [q] quit".to_string(),
            Style::default().fg(Color::Magenta),
        ),
        (None, Screen::Gameplay(_)) => (
            "[Space] next mate  [Esc] home  [,] logs  [q] quit".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {hint} "));
    frame.render_widget(block, area);
}

// ── Tests ─────────────────────────────────────────────────────────────

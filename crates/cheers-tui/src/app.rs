//! TUI-local state (not part of the game).

use cheers_rs::ui::LogLine;

pub(crate) struct App {
    /// Highlighted name slot on the setup screen.
    pub(crate) setup_cursor: usize,
    /// Whether the logs pane is visible (toggled with `,`).
    pub(crate) show_logs: bool,
    /// Offset from the bottom of the log (0 = follow tail).
    pub(crate) log_scroll: usize,
    /// Captured log lines, drained from the tracing layer each frame.
    pub(crate) logs: Vec<LogLine>,
    /// Status messages shown temporarily at the bottom.
    pub(crate) status_message: Option<String>,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            setup_cursor: 0,
            show_logs: false,
            log_scroll: 0,
            logs: Vec::new(),
            status_message: None,
            should_quit: false,
        }
    }
}

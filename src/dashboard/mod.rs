//! Interactive terminal dashboard
//!
//! Renders the view battery for the current filter selection with
//! `ratatui` on a `crossterm` backend. Every filter change recomputes the
//! battery synchronously inside the event loop.
//!
//! Structured logging writes to stdout, which the alternate screen owns
//! while the dashboard runs, so the logger is muted for the session.

mod app;
mod event;
mod ui;
mod widgets;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    event::Event as TermEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::dataset::Dataset;
use crate::observability::{log_event_with_fields, Event, Logger};

pub use app::{DashboardApp, Tab};
pub use event::handle_key_event;
pub use ui::draw_ui;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the dashboard until the user quits.
///
/// The terminal is restored even when the event loop fails.
pub fn run(dataset: Dataset) -> io::Result<()> {
    let source = dataset.source().display().to_string();
    log_event_with_fields(
        Event::DashboardStart,
        &[("path", &source), ("records", &dataset.len().to_string())],
    );

    let mut app = DashboardApp::new(dataset);

    let logging_was_enabled = Logger::is_enabled();
    Logger::set_enabled(false);

    let result = run_terminal(&mut app);

    Logger::set_enabled(logging_was_enabled);

    match &result {
        Ok(()) => log_event_with_fields(Event::DashboardExit, &[("path", &source)]),
        Err(e) => log_event_with_fields(
            Event::DashboardExit,
            &[("path", &source), ("error", &e.to_string())],
        ),
    }

    result
}

fn run_terminal(app: &mut DashboardApp) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let result = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(mut terminal) => {
            let outcome = run_app(&mut terminal, app);
            let restored = execute!(terminal.backend_mut(), LeaveAlternateScreen)
                .and_then(|_| terminal.show_cursor());
            outcome.and(restored)
        }
        Err(e) => {
            let _ = leave_alternate_screen(&mut io::stdout());
            Err(e)
        }
    };

    disable_raw_mode()?;
    result
}

fn leave_alternate_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut DashboardApp) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        app.clear_expired_status();

        if let Some(TermEvent::Key(key)) = event::poll_event(TICK_RATE)? {
            handle_key_event(app, key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render(app: &DashboardApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|frame| draw_ui(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_tab_renders() {
        let mut app = app::tests::sample_app();
        for tab in Tab::all() {
            app.current_tab = *tab;
            let screen = render(&app);
            assert!(screen.contains("gradelens"));
            assert!(screen.contains("Matching: 4 of 4"));
        }
    }

    #[test]
    fn test_overview_shows_means() {
        let app = app::tests::sample_app();
        let screen = render(&app);
        // G1 values 10, 8, 14, 6
        assert!(screen.contains("9.50"));
        assert!(screen.contains("Preview (4 students)"));
    }

    #[test]
    fn test_empty_selection_renders_placeholders() {
        let mut app = app::tests::sample_app();
        app.shift_age_min(7);
        assert!(app.battery().is_empty());

        for tab in Tab::all() {
            app.current_tab = *tab;
            let screen = render(&app);
            assert!(screen.contains("Matching: 0 of 4"));
        }

        app.current_tab = Tab::Overview;
        let screen = render(&app);
        assert!(screen.contains("n/a"));
        assert!(screen.contains(ui::NO_MATCH));
    }

    #[test]
    fn test_leave_alternate_screen_sequence() {
        let mut out = Vec::new();
        leave_alternate_screen(&mut out).unwrap();
        assert_eq!(out, b"\x1b[?1049l");
    }
}

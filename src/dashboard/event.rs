//! Keyboard handling for the dashboard.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::DashboardApp;

/// Handle one key press.
pub fn handle_key_event(app: &mut DashboardApp, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Tabs
        KeyCode::Tab | KeyCode::Right => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left => app.previous_tab(),
        KeyCode::Char(c @ '1'..='5') => app.goto_tab(c as u8 - b'0'),

        // Filters
        KeyCode::Char('s') => app.cycle_school(),
        KeyCode::Char('x') => app.cycle_sex(),
        KeyCode::Char('[') => app.shift_age_min(-1),
        KeyCode::Char(']') => app.shift_age_min(1),
        KeyCode::Char('-') => app.shift_age_max(-1),
        KeyCode::Char('+') | KeyCode::Char('=') => app.shift_age_max(1),
        KeyCode::Char('r') => app.reset_filters(),
        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::app::tests::sample_app;
    use crate::dashboard::app::Tab;
    use crate::filter::Selection;

    fn press(app: &mut DashboardApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = sample_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_filter_keys() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.filters().sex, Selection::Only("F".into()));

        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!((app.filters().age_min, app.filters().age_max), (16, 21));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.filters().sex, Selection::All);
        assert_eq!(app.battery().total, 4);
    }

    #[test]
    fn test_tab_keys() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.current_tab, Tab::Cases);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_tab, Tab::Overview);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.current_tab, Tab::Cases);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = sample_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key);
        assert!(!app.should_quit);
    }
}

//! Key handling for the three screens.

use cheers_rs::{NavEvent, Navigator, Roster, Screen, ScreenKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Longest name a slot accepts, in characters.
const MAX_NAME_CHARS: usize = 24;

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App, nav: &mut Navigator) {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match nav.kind() {
        ScreenKind::Home => handle_home_key(key, app, nav),
        ScreenKind::PlayerSetup => handle_setup_key(key, app, nav),
        ScreenKind::Gameplay => handle_gameplay_key(key, app, nav),
    }
}

fn handle_home_key(key: KeyEvent, app: &mut App, nav: &mut Navigator) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            go(app, nav, NavEvent::Start);
            app.setup_cursor = 0;
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => handle_log_key(key, app),
    }
}

fn handle_gameplay_key(key: KeyEvent, app: &mut App, nav: &mut Navigator) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
            if let Screen::Gameplay(session) = nav.screen_mut() {
                session.advance();
            }
            app.status_message = None;
        }
        KeyCode::Esc | KeyCode::Char('h') => go(app, nav, NavEvent::Home),
        KeyCode::Char('q') => app.should_quit = true,
        _ => handle_log_key(key, app),
    }
}

fn handle_setup_key(key: KeyEvent, app: &mut App, nav: &mut Navigator) {
    match key.code {
        KeyCode::Esc => {
            go(app, nav, NavEvent::Home);
            return;
        }
        KeyCode::Enter => {
            go(app, nav, NavEvent::Play);
            return;
        }
        _ => {}
    }

    let Screen::PlayerSetup(roster) = nav.screen_mut() else {
        return;
    };
    app.setup_cursor = app.setup_cursor.min(roster.len().saturating_sub(1));
    edit_roster(key, app, roster);
}

/// Cursor movement, typing and slot add/remove on the setup form.
fn edit_roster(key: KeyEvent, app: &mut App, roster: &mut Roster) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('a') if ctrl => match roster.add_slot() {
            Ok(index) => {
                app.setup_cursor = index;
                app.status_message = None;
            }
            Err(e) => app.status_message = Some(e.to_string()),
        },
        KeyCode::Char('d') if ctrl => match roster.remove_slot(app.setup_cursor) {
            Ok(_) => {
                app.setup_cursor = app.setup_cursor.min(roster.len() - 1);
                app.status_message = None;
            }
            Err(e) => app.status_message = Some(e.to_string()),
        },
        KeyCode::Up | KeyCode::BackTab => {
            app.setup_cursor = app.setup_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Tab => {
            if app.setup_cursor + 1 < roster.len() {
                app.setup_cursor += 1;
            }
        }
        KeyCode::Backspace => {
            if let Some(name) = roster.name_mut(app.setup_cursor) {
                name.pop();
            }
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(name) = roster.name_mut(app.setup_cursor)
                && name.chars().count() < MAX_NAME_CHARS
            {
                name.push(c);
            }
        }
        _ => {}
    }
}

/// `,` toggles the log pane; arrows scroll it while visible.
fn handle_log_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(',') => app.show_logs = !app.show_logs,
        KeyCode::Up | KeyCode::Char('k') if app.show_logs => {
            app.log_scroll = app.log_scroll.saturating_add(3);
        }
        KeyCode::Down | KeyCode::Char('j') if app.show_logs => {
            app.log_scroll = app.log_scroll.saturating_sub(3);
        }
        KeyCode::End => app.log_scroll = 0, // follow tail
        _ => {}
    }
}

fn go(app: &mut App, nav: &mut Navigator, event: NavEvent) {
    match nav.handle(event) {
        Ok(_) => app.status_message = None,
        Err(e) => app.status_message = Some(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheers_rs::Catalog;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(s: &str, app: &mut App, nav: &mut Navigator) {
        for c in s.chars() {
            handle_key_event(press(KeyCode::Char(c)), app, nav);
        }
    }

    fn roster(nav: &Navigator) -> &Roster {
        match nav.screen() {
            Screen::PlayerSetup(roster) => roster,
            _ => panic!("expected setup screen"),
        }
    }

    #[test]
    fn full_flow_from_keys() {
        let mut app = App::new();
        let mut nav = Navigator::new(Catalog::new(["A", "B"]).unwrap());

        handle_key_event(press(KeyCode::Enter), &mut app, &mut nav);
        assert_eq!(nav.kind(), ScreenKind::PlayerSetup);

        type_str("Alice", &mut app, &mut nav);
        handle_key_event(press(KeyCode::Down), &mut app, &mut nav);
        type_str("Bobb", &mut app, &mut nav);
        handle_key_event(press(KeyCode::Backspace), &mut app, &mut nav);
        assert_eq!(roster(&nav).slots(), ["Alice", "Bob"]);

        handle_key_event(press(KeyCode::Enter), &mut app, &mut nav);
        assert_eq!(nav.kind(), ScreenKind::Gameplay);

        handle_key_event(press(KeyCode::Char(' ')), &mut app, &mut nav);
        handle_key_event(press(KeyCode::Char(' ')), &mut app, &mut nav);
        let Screen::Gameplay(session) = nav.screen() else {
            panic!("expected gameplay");
        };
        assert!(session.is_finished());

        handle_key_event(press(KeyCode::Esc), &mut app, &mut nav);
        assert_eq!(nav.kind(), ScreenKind::Home);
    }

    #[test]
    fn play_with_one_name_shows_status() {
        let mut app = App::new();
        let mut nav = Navigator::new(Catalog::default());
        handle_key_event(press(KeyCode::Enter), &mut app, &mut nav);
        type_str("Alice", &mut app, &mut nav);
        handle_key_event(press(KeyCode::Enter), &mut app, &mut nav);
        assert_eq!(nav.kind(), ScreenKind::PlayerSetup);
        assert!(app.status_message.as_deref().unwrap().contains("at least 2"));
    }

    #[test]
    fn ctrl_a_and_ctrl_d_edit_slots() {
        let mut app = App::new();
        let mut nav = Navigator::new(Catalog::default());
        handle_key_event(press(KeyCode::Enter), &mut app, &mut nav);

        handle_key_event(ctrl('a'), &mut app, &mut nav);
        assert_eq!(roster(&nav).len(), 3);
        assert_eq!(app.setup_cursor, 2);

        handle_key_event(ctrl('d'), &mut app, &mut nav);
        assert_eq!(roster(&nav).len(), 2);
        assert_eq!(app.setup_cursor, 1);

        handle_key_event(ctrl('d'), &mut app, &mut nav);
        assert_eq!(roster(&nav).len(), 2);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn add_stops_at_ten_slots() {
        let mut app = App::new();
        let mut nav = Navigator::new(Catalog::default());
        handle_key_event(press(KeyCode::Enter), &mut app, &mut nav);
        for _ in 0..12 {
            handle_key_event(ctrl('a'), &mut app, &mut nav);
        }
        assert_eq!(roster(&nav).len(), cheers_rs::MAX_PLAYERS);
        assert_eq!(app.setup_cursor, cheers_rs::MAX_PLAYERS - 1);
    }

    #[test]
    fn typing_q_on_setup_is_a_name_not_quit() {
        let mut app = App::new();
        let mut nav = Navigator::new(Catalog::default());
        handle_key_event(press(KeyCode::Enter), &mut app, &mut nav);
        type_str("q,", &mut app, &mut nav);
        assert!(!app.should_quit);
        assert!(!app.show_logs);
        assert_eq!(roster(&nav).name(0), Some("q,"));
    }

    #[test]
    fn names_are_length_capped() {
        let mut app = App::new();
        let mut nav = Navigator::new(Catalog::default());
        handle_key_event(press(KeyCode::Enter), &mut app, &mut nav);
        type_str(&"x".repeat(40), &mut app, &mut nav);
        assert_eq!(roster(&nav).name(0).unwrap().chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = App::new();
        let mut nav = Navigator::new(Catalog::default());
        handle_key_event(press(KeyCode::Char('q')), &mut app, &mut nav);
        assert!(app.should_quit);

        let mut app = App::new();
        handle_key_event(press(KeyCode::Enter), &mut app, &mut nav);
        handle_key_event(ctrl('c'), &mut app, &mut nav);
        assert!(app.should_quit);
    }

    #[test]
    fn comma_toggles_logs_outside_setup() {
        let mut app = App::new();
        let mut nav = Navigator::new(Catalog::default());
        handle_key_event(press(KeyCode::Char(',')), &mut app, &mut nav);
        assert!(app.show_logs);
        handle_key_event(press(KeyCode::Up), &mut app, &mut nav);
        assert_eq!(app.log_scroll, 3);
        handle_key_event(press(KeyCode::End), &mut app, &mut nav);
        assert_eq!(app.log_scroll, 0);
        handle_key_event(press(KeyCode::Char(',')), &mut app, &mut nav);
        assert!(!app.show_logs);
    }
}

//! Key mapping from terminal events to menu events and flight keys.

use crate::types::{FlightKey, MenuEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a menu navigation event.
pub fn menu_event(key: KeyEvent) -> Option<MenuEvent> {
    if should_quit(key) {
        return Some(MenuEvent::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(MenuEvent::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(MenuEvent::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuEvent::Confirm),
        _ => None,
    }
}

/// Map a key code to the flight key it holds, if any.
pub fn flight_key(code: KeyCode) -> Option<FlightKey> {
    match code {
        KeyCode::Left => Some(FlightKey::Left),
        KeyCode::Right => Some(FlightKey::Right),
        KeyCode::Up => Some(FlightKey::Up),
        KeyCode::Down => Some(FlightKey::Down),
        KeyCode::Char(' ') => Some(FlightKey::Trigger),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_flight_keys() {
        assert_eq!(flight_key(KeyCode::Left), Some(FlightKey::Left));
        assert_eq!(flight_key(KeyCode::Right), Some(FlightKey::Right));
        assert_eq!(flight_key(KeyCode::Up), Some(FlightKey::Up));
        assert_eq!(flight_key(KeyCode::Down), Some(FlightKey::Down));
        assert_eq!(flight_key(KeyCode::Char(' ')), Some(FlightKey::Trigger));
        assert_eq!(flight_key(KeyCode::Char('a')), None);
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu_event(KeyEvent::from(KeyCode::Up)), Some(MenuEvent::Up));
        assert_eq!(
            menu_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(MenuEvent::Down)
        );
        assert_eq!(
            menu_event(KeyEvent::from(KeyCode::Enter)),
            Some(MenuEvent::Confirm)
        );
        assert_eq!(
            menu_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(MenuEvent::Confirm)
        );
        assert_eq!(menu_event(KeyEvent::from(KeyCode::Esc)), Some(MenuEvent::Quit));
        assert_eq!(menu_event(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char(' '))));
    }
}

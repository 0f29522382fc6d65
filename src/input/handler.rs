use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = Self::direction_for(key.code) {
            return KeyAction::Game(Command::Steer(direction));
        }

        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                KeyAction::Game(Command::TogglePause)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Game(Command::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Arrow keys and WASD, case-insensitive
    fn direction_for(code: KeyCode) -> Option<Direction> {
        match code {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Some(Direction::Up),
                's' => Some(Direction::Down),
                'a' => Some(Direction::Left),
                'd' => Some(Direction::Right),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn steer(direction: Direction) -> KeyAction {
        KeyAction::Game(Command::Steer(direction))
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Up)), steer(Direction::Up));
        assert_eq!(handler.handle_key_event(press(KeyCode::Down)), steer(Direction::Down));
        assert_eq!(handler.handle_key_event(press(KeyCode::Left)), steer(Direction::Left));
        assert_eq!(handler.handle_key_event(press(KeyCode::Right)), steer(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('w'))), steer(Direction::Up));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('a'))), steer(Direction::Left));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('s'))), steer(Direction::Down));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('d'))), steer(Direction::Right));
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(w_upper), steer(Direction::Up));
    }

    #[test]
    fn test_pause_and_restart_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('p'))),
            KeyAction::Game(Command::TogglePause)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' '))),
            KeyAction::Game(Command::TogglePause)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r'))),
            KeyAction::Game(Command::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key_event(press(KeyCode::Tab)), KeyAction::None);
    }
}

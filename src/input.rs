//! Keyboard input: mapping terminal events to game events
use crate::game::Direction;
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use std::io;
use std::time::Duration;

/// An input event that the game cares about
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InputEvent {
    /// The player wants to leave the game
    Quit,

    /// The player pressed a key for steering the snake
    KeyDown(Direction),
}

impl InputEvent {
    pub(crate) fn from_event(event: &Event) -> Option<InputEvent> {
        InputEvent::from_key_event(event.as_key_press_event()?)
    }

    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<InputEvent> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(InputEvent::Quit),
            (_, KeyCode::Esc) => Some(InputEvent::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(InputEvent::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => {
                Some(InputEvent::KeyDown(Direction::Up))
            }
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(InputEvent::KeyDown(Direction::Down))
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(InputEvent::KeyDown(Direction::Left))
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(InputEvent::KeyDown(Direction::Right))
            }
            _ => None,
        }
    }
}

/// A queue of input events that can be emptied without blocking
pub(crate) trait EventSource {
    /// Remove & return all events that have arrived since the last call
    fn drain(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// An [`EventSource`] reading key presses from the terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn drain(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while poll(Duration::ZERO)? {
            events.extend(InputEvent::from_event(&read()?));
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(InputEvent::KeyDown(Direction::Up)))]
    #[case(KeyCode::Down, KeyModifiers::NONE, Some(InputEvent::KeyDown(Direction::Down)))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(InputEvent::KeyDown(Direction::Left)))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(InputEvent::KeyDown(Direction::Right)))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(InputEvent::KeyDown(Direction::Up)))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(InputEvent::KeyDown(Direction::Left)))]
    #[case(KeyCode::Char('j'), KeyModifiers::NONE, Some(InputEvent::KeyDown(Direction::Down)))]
    #[case(KeyCode::Char('l'), KeyModifiers::NONE, Some(InputEvent::KeyDown(Direction::Right)))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(InputEvent::Quit))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(InputEvent::Quit))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(InputEvent::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('w'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Enter, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] r: Option<InputEvent>,
    ) {
        assert_eq!(InputEvent::from_key_event(KeyEvent::new(code, modifiers)), r);
    }

    #[test]
    fn key_release_is_ignored() {
        let ev = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(InputEvent::from_event(&Event::Key(ev)), None);
        assert_eq!(
            InputEvent::from_event(&Event::Key(KeyCode::Up.into())),
            Some(InputEvent::KeyDown(Direction::Up))
        );
    }

    #[test]
    fn non_key_events_are_ignored() {
        assert_eq!(InputEvent::from_event(&Event::FocusLost), None);
        assert_eq!(InputEvent::from_event(&Event::Resize(80, 24)), None);
    }
}

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Normalized input, one per crossterm event worth acting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputEvent {
    Next,
    Previous,
    TogglePlay,
    Quit,
    /// Left button pressed at (column, row).
    PointerDown { x: u16, y: u16, at: Instant },
    /// Left button released at (column, row).
    PointerUp { x: u16, y: u16, at: Instant },
    Resize,
}

/// Map a raw crossterm event; `None` for everything we ignore. The space key
/// is consumed here so it can never fall through to any other handling.
pub(crate) fn map_event(event: Event, at: Instant) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, at),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Right => Some(InputEvent::Next),
        KeyCode::Left => Some(InputEvent::Previous),
        KeyCode::Char(' ') => Some(InputEvent::TogglePlay),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent, at: Instant) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown {
            x: mouse.column,
            y: mouse.row,
            at,
        }),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp {
            x: mouse.column,
            y: mouse.row,
            at,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn arrows_and_space_map_to_commands() {
        let at = Instant::now();
        assert_eq!(map_event(key(KeyCode::Right), at), Some(InputEvent::Next));
        assert_eq!(map_event(key(KeyCode::Left), at), Some(InputEvent::Previous));
        assert_eq!(
            map_event(key(KeyCode::Char(' ')), at),
            Some(InputEvent::TogglePlay)
        );
    }

    #[test]
    fn quit_keys() {
        let at = Instant::now();
        assert_eq!(map_event(key(KeyCode::Char('q')), at), Some(InputEvent::Quit));
        assert_eq!(map_event(key(KeyCode::Esc), at), Some(InputEvent::Quit));
        let ctrl_c = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(ctrl_c, at), Some(InputEvent::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let at = Instant::now();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(release, at), None);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let at = Instant::now();
        assert_eq!(map_event(key(KeyCode::Char('x')), at), None);
        assert_eq!(map_event(key(KeyCode::Enter), at), None);
    }
}

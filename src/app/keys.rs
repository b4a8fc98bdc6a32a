use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The symbolic key alphabet the navigation engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    CtrlA,
    CtrlC,
    CtrlD,
}

impl Key {
    /// Decode a terminal key press. Releases, repeats of unknown keys and
    /// unbound control chords yield `None`.
    pub fn from_event(event: KeyEvent) -> Option<Key> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let key = match event.code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'a' => Key::CtrlA,
                'c' => Key::CtrlC,
                'd' => Key::CtrlD,
                _ => return None,
            },
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return None,
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn plain(code: KeyCode) -> Option<Key> {
        Key::from_event(press(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Option<Key> {
        Key::from_event(press(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn plain_chars_and_named_keys() {
        assert_eq!(plain(KeyCode::Char('x')), Some(Key::Char('x')));
        assert_eq!(plain(KeyCode::Char('/')), Some(Key::Char('/')));
        assert_eq!(plain(KeyCode::Esc), Some(Key::Escape));
        assert_eq!(plain(KeyCode::PageDown), Some(Key::PageDown));

        let shifted = press(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(Key::from_event(shifted), Some(Key::Char('Q')));
    }

    #[test]
    fn control_chords() {
        assert_eq!(ctrl('a'), Some(Key::CtrlA));
        assert_eq!(ctrl('c'), Some(Key::CtrlC));
        assert_eq!(ctrl('D'), Some(Key::CtrlD));
        assert_eq!(ctrl('z'), None);
    }

    #[test]
    fn release_and_unknown_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(Key::from_event(release), None);
        assert_eq!(plain(KeyCode::F(5)), None);
    }
}

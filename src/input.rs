use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::{AppOp, Message};

// Non-character keys are forwarded as private-use code points
pub const KEY_UP: char = '\u{F700}';
pub const KEY_DOWN: char = '\u{F701}';
pub const KEY_ESC: char = '\u{001B}';
pub const KEY_CTRL_C: char = '\u{0003}';

pub fn key_to_char(key: KeyEvent) -> Option<char> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(KEY_CTRL_C),
        KeyCode::Char(c) => Some(c),
        KeyCode::Enter => Some('\r'),
        KeyCode::Esc => Some(KEY_ESC),
        KeyCode::Up => Some(KEY_UP),
        KeyCode::Down => Some(KEY_DOWN),
        _ => None,
    }
}

fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_char(key).map(|c| Message::new(AppOp::Rawkeys, c as u64)),
        Event::Resize(cols, rows) => Some(Message::resize(cols, rows)),
        Event::FocusGained => Some(Message::new(AppOp::FocusChange, 1)),
        Event::FocusLost => Some(Message::new(AppOp::FocusChange, 0)),
        _ => None,
    }
}

/// Forward terminal events to the main loop until it goes away.
pub fn input_thread(main: Sender<Message>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(e) => {
                log::error!("can't read terminal input: {}", e);
                main.send(Message::new(AppOp::Quit, 0)).ok();
                break;
            }
        };
        if let Some(msg) = event_to_message(event) {
            if main.send(msg).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_to_char(plain(KeyCode::Char('l'))), Some('l'));
        assert_eq!(key_to_char(plain(KeyCode::Enter)), Some('\r'));
        assert_eq!(key_to_char(plain(KeyCode::Up)), Some(KEY_UP));
        assert_eq!(key_to_char(plain(KeyCode::Down)), Some(KEY_DOWN));
        assert_eq!(key_to_char(plain(KeyCode::Esc)), Some(KEY_ESC));
        assert_eq!(key_to_char(plain(KeyCode::Tab)), None);
        assert_eq!(
            key_to_char(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KEY_CTRL_C)
        );
    }

    #[test]
    fn test_release_ignored() {
        let key = KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(key_to_char(key), None);
    }

    #[test]
    fn test_events_become_messages() {
        let msg = event_to_message(Event::Resize(100, 30)).unwrap();
        assert_eq!(msg.screensize(), Some((100, 30)));

        let msg = event_to_message(Event::FocusLost).unwrap();
        assert_eq!((msg.op(), msg.arg), (Some(AppOp::FocusChange), 0));

        let msg = event_to_message(Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE))).unwrap();
        assert_eq!((msg.op(), msg.arg), (Some(AppOp::Rawkeys), 'r' as u64));
    }
}

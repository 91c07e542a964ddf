// src/control/keys.rs  -  Terminal key events → pause / abort intents
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Enter or Space: bare acknowledgement (pause / resume)
    Acknowledge,
    /// q, Q or Esc: typed stop command
    Abort,
    /// Ctrl-C
    Interrupt,
    Other,
}

impl Key {
    pub fn classify(k: &KeyEvent) -> Self {
        if k.modifiers.contains(KeyModifiers::CONTROL) {
            return match k.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Key::Interrupt,
                _ => Key::Other,
            };
        }
        match k.code {
            KeyCode::Enter | KeyCode::Char(' ')        => Key::Acknowledge,
            KeyCode::Esc | KeyCode::Char('q' | 'Q')    => Key::Abort,
            _                                          => Key::Other,
        }
    }
}

/// Source of key intents. `poll` returns `None` once `timeout` elapses.
pub trait KeySource {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Key>>;
    /// Block until the next key press.
    fn read(&mut self) -> io::Result<Key>;
}

/// crossterm-backed source; needs raw mode (see [`RawMode`]) to see single keys.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(Some(key_of(event::read()?)))
    }

    fn read(&mut self) -> io::Result<Key> {
        loop {
            match key_of(event::read()?) {
                Key::Other => continue,
                k => return Ok(k),
            }
        }
    }
}

fn key_of(ev: Event) -> Key {
    match ev {
        // Release/repeat events are not used
        Event::Key(k) if k.kind == KeyEventKind::Press => Key::classify(&k),
        _ => Key::Other,
    }
}

/// Raw terminal mode for the lifetime of the guard. In raw mode Ctrl-C arrives
/// as a key event instead of SIGINT, so it can stop a drill without killing
/// the process.
pub struct RawMode;

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

// src/console.rs  -  Coloured console output + line input that survives Ctrl-C
use crate::control::RawMode;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{StyledContent, Stylize};
use crossterm::tty::IsTty;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Write one line. `\r\n` so output stays aligned while raw mode is on.
pub fn line<W: Write, T: Display>(out: &mut W, text: T) -> io::Result<()> {
    write!(out, "{text}\r\n")?;
    out.flush()
}

/// Sent characters
pub fn sending<T: Display>(text: T) -> StyledContent<String> {
    text.to_string().yellow()
}

/// Menu entries and banner
pub fn menu<T: Display>(text: T) -> StyledContent<String> {
    text.to_string().blue()
}

/// Prompts that need attention (pause, errors)
pub fn highlight<T: Display>(text: T) -> StyledContent<String> {
    text.to_string().magenta().bold()
}

/// Outcome of reading one line from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C or end of input
    Interrupted,
}

/// Read one line after printing `prompt`.
///
/// Uses raw mode so Ctrl-C comes back as [`Input::Interrupted`] instead of
/// killing the process. Piped stdin is read buffered, even inside a terminal:
/// raw mode would otherwise read keys from the controlling tty instead.
pub fn read_line(prompt: &str) -> Result<Input> {
    let mut out = io::stdout();
    write!(out, "{prompt}")?;
    out.flush()?;

    if !io::stdin().is_tty() {
        return read_buffered(&mut io::stdin().lock());
    }
    let raw = match RawMode::enable() {
        Ok(raw) => raw,
        Err(e) => {
            log::debug!("[console] raw mode unavailable ({e}), reading buffered stdin");
            return read_buffered(&mut io::stdin().lock());
        }
    };

    let mut buf = String::new();
    let result = loop {
        let ev = match event::read() {
            Ok(ev) => ev,
            Err(e) => break Err(anyhow::Error::from(e)),
        };
        let Event::Key(k) = ev else { continue };
        if k.kind == KeyEventKind::Release {
            continue;
        }
        if k.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(k.code, KeyCode::Char('c') | KeyCode::Char('d'))
        {
            break Ok(Input::Interrupted);
        }
        match k.code {
            KeyCode::Enter => break Ok(Input::Line(buf)),
            KeyCode::Backspace => {
                if buf.pop().is_some() {
                    write!(out, "\u{8} \u{8}")?;
                }
            }
            KeyCode::Char(c) => {
                buf.push(c);
                write!(out, "{c}")?;
            }
            _ => {}
        }
        out.flush()?;
    };
    drop(raw);
    write!(out, "\r\n")?;
    out.flush()?;
    result
}

fn read_buffered<R: BufRead>(input: &mut R) -> Result<Input> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(Input::Interrupted);
    }
    Ok(Input::Line(buf.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_ends_with_crlf() {
        let mut out = Vec::new();
        line(&mut out, "Sending: E").unwrap();
        assert_eq!(out, b"Sending: E\r\n");
    }

    #[test]
    fn buffered_lines_then_end_of_input() {
        let mut input = io::Cursor::new("7\r\n17\n");
        assert_eq!(read_buffered(&mut input).unwrap(), Input::Line("7".into()));
        assert_eq!(read_buffered(&mut input).unwrap(), Input::Line("17".into()));
        assert_eq!(read_buffered(&mut input).unwrap(), Input::Interrupted);
    }

    #[test]
    fn styled_text_keeps_content() {
        let s = sending("Sending: A (.-)").to_string();
        assert!(s.contains("Sending: A (.-)"));
    }
}

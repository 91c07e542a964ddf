// src/engine/echo.rs  -  What gets printed for each sent character
use crate::config::AppConfig;
use crate::console;
use crate::i18n::I18n;
use crate::morse::CharacterCode;
use crate::tui;
use std::io::{self, Write};
use std::time::Duration;

/// Display + voice switches, copied out of the settings per playback call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_code:    bool,
    pub flash_card:   bool,
    pub voice:        bool,
    /// Extra wait before the spoken answer, giving time to guess
    pub speech_delay: Duration,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_code:    true,
            flash_card:   false,
            voice:        false,
            speech_delay: Duration::from_millis(200),
        }
    }
}

impl From<&AppConfig> for DisplayOptions {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            show_code:    cfg.show_code,
            flash_card:   cfg.flash_card,
            voice:        cfg.voice_enabled,
            speech_delay: Duration::from_millis(cfg.speech_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoStyle {
    /// `Sending: A (.-)`
    LetterAndCode,
    /// `Sending: A`
    LetterOnly,
    /// bordered card with the letter, no pattern
    FlashCard,
}

impl DisplayOptions {
    pub fn echo_style(&self) -> EchoStyle {
        if self.flash_card {
            EchoStyle::FlashCard
        } else if self.show_code {
            EchoStyle::LetterAndCode
        } else {
            EchoStyle::LetterOnly
        }
    }
}

pub fn echo_character<W: Write>(
    out: &mut W,
    lang: &I18n,
    style: EchoStyle,
    ch: char,
    code: CharacterCode,
) -> io::Result<()> {
    let sending = lang.t("play.sending");
    match style {
        EchoStyle::LetterAndCode => {
            console::line(out, console::sending(format!("{sending}: {ch} ({code})")))
        }
        EchoStyle::LetterOnly => console::line(out, console::sending(format!("{sending}: {ch}"))),
        EchoStyle::FlashCard => {
            for row in tui::flash_card(ch, lang.t("label.flash")) {
                console::line(out, console::sending(row))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morse::code::lookup;

    fn render(style: EchoStyle, ch: char) -> String {
        let mut out = Vec::new();
        echo_character(&mut out, &I18n::new("en"), style, ch, lookup(ch).unwrap()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn flash_card_wins_over_show_code() {
        let opts = DisplayOptions { show_code: true, flash_card: true, ..Default::default() };
        assert_eq!(opts.echo_style(), EchoStyle::FlashCard);
        let opts = DisplayOptions { show_code: false, ..Default::default() };
        assert_eq!(opts.echo_style(), EchoStyle::LetterOnly);
        assert_eq!(DisplayOptions::default().echo_style(), EchoStyle::LetterAndCode);
    }

    #[test]
    fn letter_and_code_line() {
        assert!(render(EchoStyle::LetterAndCode, 'A').contains("Sending: A (.-)"));
    }

    #[test]
    fn letter_only_hides_pattern() {
        let s = render(EchoStyle::LetterOnly, 'A');
        assert!(s.contains("Sending: A"));
        assert!(!s.contains(".-"));
    }

    #[test]
    fn flash_card_hides_pattern() {
        let s = render(EchoStyle::FlashCard, 'N');
        assert!(s.contains('N'));
        assert!(!s.contains("-."));
        assert_eq!(s.matches("\r\n").count(), tui::CARD_HEIGHT as usize);
    }

    #[test]
    fn options_follow_settings() {
        let mut cfg = AppConfig::default();
        cfg.set_flash_card(true);
        cfg.toggle_voice();
        cfg.speech_delay_ms = 350;
        let opts = DisplayOptions::from(&cfg);
        assert!(opts.flash_card && !opts.show_code && opts.voice);
        assert_eq!(opts.speech_delay, Duration::from_millis(350));
    }
}

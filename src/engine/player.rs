// src/engine/player.rs  -  Character / word gap / text → tone + wait calls
use super::echo::{self, DisplayOptions};
use super::Services;
use crate::console;
use crate::control::{CancelToken, ControlSignal};
use crate::i18n::I18n;
use crate::morse::code::{self, Symbol};
use crate::morse::TimingHandle;
use anyhow::Result;
use std::io::Write;
use std::time::Duration;

/// One playback session. Borrows everything it needs; nothing outlives the
/// call chain that created it.
pub struct Player<'a, W: Write> {
    services: &'a mut Services,
    timing:   &'a TimingHandle,
    display:  DisplayOptions,
    lang:     &'a I18n,
    out:      W,
}

impl<'a, W: Write> Player<'a, W> {
    pub fn new(
        services: &'a mut Services,
        timing: &'a TimingHandle,
        display: DisplayOptions,
        lang: &'a I18n,
        out: W,
    ) -> Self {
        Self { services, timing, display, lang, out }
    }

    /// Send one character.
    ///
    /// Speed and pitch are read once here and held for every symbol of the
    /// character; a settings change lands on the next character.
    /// Characters without a pattern print a notice and return `Continue`.
    pub fn play_character(&mut self, ch: char) -> Result<ControlSignal> {
        let ch = ch.to_ascii_uppercase();
        let Some(code) = code::lookup(ch) else {
            self.notice_skipped(ch)?;
            return Ok(ControlSignal::Continue);
        };
        let cfg = self.timing.snapshot();

        echo::echo_character(&mut self.out, self.lang, self.display.echo_style(), ch, code)?;

        for symbol in code.symbols() {
            let length = match symbol {
                Symbol::Dot  => cfg.dot_duration(),
                Symbol::Dash => cfg.dash_duration(),
            };
            self.services.tone.emit_tone(cfg.frequency(), length)?;
            if self.wait(length).is_abort() {
                return Ok(ControlSignal::Abort);
            }
            if self.wait(cfg.intra_character_gap()).is_abort() {
                return Ok(ControlSignal::Abort);
            }
        }
        if self.wait(cfg.inter_character_gap()).is_abort() {
            return Ok(ControlSignal::Abort);
        }

        if self.display.voice {
            return Ok(self.announce(ch));
        }
        Ok(ControlSignal::Continue)
    }

    /// Word gap: silence of `inter_word_gap`, no tone.
    pub fn play_space(&mut self) -> Result<ControlSignal> {
        let gap = self.timing.snapshot().inter_word_gap();
        Ok(self.wait(gap))
    }

    /// Send free text. Lower case is folded up, whitespace becomes word gaps,
    /// anything without a pattern is skipped with a notice.
    pub fn play_text(&mut self, text: &str) -> Result<ControlSignal> {
        for ch in text.chars() {
            let signal = if ch.is_whitespace() {
                console::line(&mut self.out, self.lang.t("play.space"))?;
                self.play_space()?
            } else {
                self.play_character(ch)?
            };
            if signal.is_abort() {
                return Ok(ControlSignal::Abort);
            }
        }
        Ok(ControlSignal::Continue)
    }

    #[cfg(test)]
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.services.cancel
    }

    fn wait(&mut self, length: Duration) -> ControlSignal {
        self.services.waiter.wait(length)
    }

    /// Spoken answer, after a short pause to let the learner guess first.
    /// Speech failures are logged for this utterance only.
    fn announce(&mut self, ch: char) -> ControlSignal {
        let Some(speech) = self.services.speech.as_mut() else {
            return ControlSignal::Continue;
        };
        if self.services.waiter.wait(self.display.speech_delay).is_abort() {
            return ControlSignal::Abort;
        }
        if let Err(e) = speech.speak(&spoken_form(ch)) {
            log::warn!("[speech] {} failed for {ch:?}: {e:#}", speech.name());
        }
        ControlSignal::Continue
    }

    fn notice_skipped(&mut self, ch: char) -> Result<()> {
        log::debug!("[player] no pattern for {ch:?}");
        console::line(&mut self.out, format!("{}: {ch}", self.lang.t("play.skip")))?;
        Ok(())
    }
}

/// Punctuation is spelled out so speech engines do not swallow it.
fn spoken_form(ch: char) -> String {
    match ch {
        '.' => "period".into(),
        ',' => "comma".into(),
        '?' => "question mark".into(),
        '/' => "slash".into(),
        '-' => "dash".into(),
        '(' => "open bracket".into(),
        ')' => "close bracket".into(),
        c   => c.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::audio::ToneService;
    use crate::control::Waiter;
    use crate::morse::TimingConfig;
    use crate::speech::SpeechService;
    use anyhow::anyhow;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Everything the engine does to its collaborators, in call order.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Tone(u32, Duration),
        Wait(Duration),
        Speak(String),
    }

    pub type Log = Rc<RefCell<Vec<Call>>>;

    /// Runs before wait number `n`; may stop the drill through the token.
    pub type Hook = Box<dyn FnMut(usize, &CancelToken)>;

    struct FakeTone(Log);
    impl ToneService for FakeTone {
        fn emit_tone(&mut self, hz: u32, d: Duration) -> Result<()> {
            self.0.borrow_mut().push(Call::Tone(hz, d));
            Ok(())
        }
        fn name(&self) -> &str { "fake" }
    }

    struct FakeSpeech { log: Log, fail: bool }
    impl SpeechService for FakeSpeech {
        fn speak(&mut self, text: &str) -> Result<()> {
            self.log.borrow_mut().push(Call::Speak(text.to_string()));
            if self.fail { Err(anyhow!("backend gone")) } else { Ok(()) }
        }
        fn name(&self) -> &str { "fake" }
    }

    /// Records waits; the wait with index `abort_at` stops the drill the way
    /// the abort key does (sets the token). A set token aborts every wait.
    pub struct FakeWaiter {
        pub log:      Log,
        pub abort_at: Option<usize>,
        pub count:    usize,
        pub hook:     Option<Hook>,
        pub cancel:   CancelToken,
    }
    impl Waiter for FakeWaiter {
        fn wait(&mut self, d: Duration) -> ControlSignal {
            if let Some(h) = self.hook.as_mut() { h(self.count, &self.cancel); }
            self.log.borrow_mut().push(Call::Wait(d));
            let n = self.count;
            self.count += 1;
            if self.abort_at == Some(n) {
                self.cancel.cancel();
            }
            if self.cancel.is_cancelled() { ControlSignal::Abort } else { ControlSignal::Continue }
        }
    }

    pub fn services(log: &Log, abort_at: Option<usize>, speech: Option<bool>) -> Services {
        services_with_hook(log, abort_at, speech, None)
    }

    pub fn services_with_hook(
        log: &Log,
        abort_at: Option<usize>,
        speech: Option<bool>,
        hook: Option<Hook>,
    ) -> Services {
        let cancel = CancelToken::new();
        Services {
            tone: Box::new(FakeTone(log.clone())),
            speech: speech.map(|fail| {
                Box::new(FakeSpeech { log: log.clone(), fail }) as Box<dyn SpeechService>
            }),
            waiter: Box::new(FakeWaiter {
                log: log.clone(),
                abort_at,
                count: 0,
                hook,
                cancel: cancel.clone(),
            }),
            cancel,
        }
    }

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    fn ten_wpm() -> TimingHandle {
        TimingHandle::new(TimingConfig::new(10, 700).unwrap())
    }

    fn tones(log: &Log) -> Vec<Call> {
        log.borrow().iter().filter(|c| matches!(c, Call::Tone(..))).cloned().collect()
    }

    #[test]
    fn letter_e_at_10_wpm() {
        let log = Log::default();
        let mut svc = services(&log, None, None);
        let timing = ten_wpm();
        let lang = I18n::new("en");
        let mut p = Player::new(&mut svc, &timing, DisplayOptions::default(), &lang, Vec::new());

        assert_eq!(p.play_character('e').unwrap(), ControlSignal::Continue);
        assert_eq!(*log.borrow(), vec![
            Call::Tone(700, ms(120)),
            Call::Wait(ms(120)),  // tone
            Call::Wait(ms(120)),  // intra-character
            Call::Wait(ms(360)),  // inter-character
        ]);
        let out = String::from_utf8(p.out().clone()).unwrap();
        assert!(out.contains("Sending: E (.)"));
    }

    #[test]
    fn every_character_emits_one_tone_per_symbol() {
        let timing = ten_wpm();
        let cfg = timing.snapshot();
        let lang = I18n::new("en");
        for ch in code::ALPHABET.chars() {
            let log = Log::default();
            let mut svc = services(&log, None, None);
            let mut p = Player::new(&mut svc, &timing, DisplayOptions::default(), &lang, Vec::new());
            p.play_character(ch).unwrap();

            let pattern = code::lookup(ch).unwrap();
            let mut expected = Vec::new();
            for s in pattern.symbols() {
                let d = if s == Symbol::Dot { cfg.dot_duration() } else { cfg.dash_duration() };
                expected.push(Call::Tone(700, d));
                expected.push(Call::Wait(d));
                expected.push(Call::Wait(cfg.intra_character_gap()));
            }
            expected.push(Call::Wait(cfg.inter_character_gap()));
            assert_eq!(*log.borrow(), expected, "character {ch:?}");
            assert_eq!(tones(&log).len(), pattern.symbols().count());
        }
    }

    #[test]
    fn space_waits_seven_units_without_tone() {
        let log = Log::default();
        let mut svc = services(&log, None, None);
        let timing = ten_wpm();
        let lang = I18n::new("en");
        let mut p = Player::new(&mut svc, &timing, DisplayOptions::default(), &lang, Vec::new());
        assert_eq!(p.play_space().unwrap(), ControlSignal::Continue);
        assert_eq!(*log.borrow(), vec![Call::Wait(ms(840))]);
    }

    #[test]
    fn same_text_twice_gives_same_sequence() {
        let timing = ten_wpm();
        let lang = I18n::new("en");
        let run = || {
            let log = Log::default();
            let mut svc = services(&log, None, None);
            let mut p = Player::new(&mut svc, &timing, DisplayOptions::default(), &lang, Vec::new());
            p.play_text("CQ de W1AW").unwrap();
            let calls = log.borrow().clone();
            calls
        };
        let first = run();
        assert!(!first.is_empty());
        assert_eq!(first, run());
    }

    #[test]
    fn unsupported_character_is_skipped() {
        let log = Log::default();
        let mut svc = services(&log, None, None);
        let timing = ten_wpm();
        let lang = I18n::new("en");
        let mut p = Player::new(&mut svc, &timing, DisplayOptions::default(), &lang, Vec::new());

        assert_eq!(p.play_text("A1@B").unwrap(), ControlSignal::Continue);
        let expected: usize = "A1B".chars().map(|c| code::lookup(c).unwrap().symbols().count()).sum();
        assert_eq!(tones(&log).len(), expected);
        let out = String::from_utf8(p.out().clone()).unwrap();
        assert!(out.contains("Skipping unsupported character: @"));
        assert!(out.contains("Sending: A"));
        assert!(out.contains("Sending: 1"));
        assert!(out.contains("Sending: B"));
    }

    #[test]
    fn abort_stops_everything_after_it() {
        let timing = ten_wpm();
        let lang = I18n::new("en");
        let display = DisplayOptions { voice: true, ..Default::default() };
        // "ET": E = tone, 3 waits, speech delay wait; abort on E's inter-character gap
        let log = Log::default();
        let mut svc = services(&log, Some(2), Some(false));
        let mut p = Player::new(&mut svc, &timing, display, &lang, Vec::new());

        assert_eq!(p.play_text("ET").unwrap(), ControlSignal::Abort);
        let calls = log.borrow();
        assert_eq!(calls.last(), Some(&Call::Wait(ms(360))));
        assert_eq!(tones(&log).len(), 1);
        assert!(!calls.iter().any(|c| matches!(c, Call::Speak(_))));
    }

    #[test]
    fn abort_at_every_position_never_emits_later_calls() {
        let timing = ten_wpm();
        let lang = I18n::new("en");
        let display = DisplayOptions { voice: true, ..Default::default() };
        let text = "HI 73";
        for abort_at in 0..20 {
            let log = Log::default();
            let mut svc = services(&log, Some(abort_at), Some(false));
            let mut p = Player::new(&mut svc, &timing, display, &lang, Vec::new());
            let signal = p.play_text(text).unwrap();
            let calls = log.borrow();
            let waits = calls.iter().filter(|c| matches!(c, Call::Wait(_))).count();
            if signal.is_abort() {
                assert_eq!(waits, abort_at + 1);
                assert!(matches!(calls.last(), Some(Call::Wait(_))), "abort_at {abort_at}");
            } else {
                assert!(waits <= abort_at);
            }
        }
    }

    #[test]
    fn voice_speaks_after_gap_and_extra_pause() {
        let log = Log::default();
        let mut svc = services(&log, None, Some(false));
        let timing = ten_wpm();
        let lang = I18n::new("en");
        let display = DisplayOptions { voice: true, speech_delay: ms(200), ..Default::default() };
        let mut p = Player::new(&mut svc, &timing, display, &lang, Vec::new());

        p.play_character('T').unwrap();
        assert_eq!(*log.borrow(), vec![
            Call::Tone(700, ms(360)),
            Call::Wait(ms(360)),
            Call::Wait(ms(120)),
            Call::Wait(ms(360)),
            Call::Wait(ms(200)),
            Call::Speak("T".into()),
        ]);
    }

    #[test]
    fn speech_failure_is_not_fatal_nor_sticky() {
        let log = Log::default();
        let mut svc = services(&log, None, Some(true));
        let timing = ten_wpm();
        let lang = I18n::new("en");
        let display = DisplayOptions { voice: true, ..Default::default() };
        let mut p = Player::new(&mut svc, &timing, display, &lang, Vec::new());

        assert_eq!(p.play_text("E?").unwrap(), ControlSignal::Continue);
        let spoken: Vec<Call> = log.borrow().iter()
            .filter(|c| matches!(c, Call::Speak(_))).cloned().collect();
        assert_eq!(spoken, vec![Call::Speak("E".into()), Call::Speak("question mark".into())]);
    }

    #[test]
    fn settings_change_applies_from_next_character() {
        let log = Log::default();
        let timing = Rc::new(ten_wpm());
        let writer = timing.clone();
        // change pitch + speed while the first character's first symbol is sounding
        let mut svc = services_with_hook(&log, None, None, Some(Box::new(move |n: usize, _: &CancelToken| {
            if n == 0 {
                writer.apply(TimingConfig::new(20, 900).unwrap());
            }
        })));
        let lang = I18n::new("en");
        let mut p = Player::new(&mut svc, &timing, DisplayOptions::default(), &lang, Vec::new());
        p.play_text("AE").unwrap();

        assert_eq!(tones(&log), vec![
            Call::Tone(700, ms(120)),  // A: dot
            Call::Tone(700, ms(360)),  // A: dash, still old config
            Call::Tone(900, ms(60)),   // E: new config
        ]);
    }
}

// src/menu.rs  -  Numbered main menu, settings dialogs, drill sessions
use crate::config::{parse_number, AppConfig, SettingsError};
use crate::console::{self, Input};
use crate::control::{Interrupts, RawMode};
use crate::engine::{DisplayOptions, Player, Services};
use crate::i18n::I18n;
use crate::morse::TimingHandle;
use crate::practice::{run_drill, Drill};
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};

pub const MENU_LEN: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Drill(Drill),
    CustomText,
    Frequency,
    Wpm,
    ToggleDisplay,
    ToggleFlashCard,
    ToggleVoice,
    Exit,
}

pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    let n: u8 = input.trim().parse().ok()?;
    Some(match n {
        1..=6 => MenuChoice::Drill(Drill::Week(n)),
        7  => MenuChoice::Drill(Drill::AllCharacters),
        8  => MenuChoice::Drill(Drill::Words),
        9  => MenuChoice::Drill(Drill::Sentences),
        10 => MenuChoice::Drill(Drill::CallSigns),
        11 => MenuChoice::CustomText,
        12 => MenuChoice::Frequency,
        13 => MenuChoice::Wpm,
        14 => MenuChoice::ToggleDisplay,
        15 => MenuChoice::ToggleFlashCard,
        16 => MenuChoice::ToggleVoice,
        17 => MenuChoice::Exit,
        _  => return None,
    })
}

pub struct App {
    cfg:      AppConfig,
    timing:   TimingHandle,
    services: Services,
    lang:     I18n,
    rng:      SmallRng,
    /// Process Ctrl-C; armed only while a session plays
    interrupts: Interrupts,
}

impl App {
    pub fn new(cfg: AppConfig, services: Services, lang: I18n, interrupts: Interrupts) -> Self {
        let timing = TimingHandle::new(cfg.timing);
        Self { cfg, timing, services, lang, rng: SmallRng::from_entropy(), interrupts }
    }

    /// Menu until Exit, Ctrl-C or end of input; then say goodbye.
    pub fn run(&mut self) -> Result<()> {
        self.menu_loop()?;
        console::line(&mut io::stdout(), format!("\r\n{}", self.lang.t("app.goodbye")))?;
        Ok(())
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let prompt = format!("{} (1-{MENU_LEN}): ", self.lang.t("menu.choice"));
            let input = match console::read_line(&prompt)? {
                Input::Line(l)     => l,
                Input::Interrupted => return Ok(()),
            };
            match parse_choice(&input) {
                Some(MenuChoice::Exit) => return Ok(()),
                Some(choice)           => self.handle(choice)?,
                None => console::line(&mut io::stdout(), self.lang.t("menu.invalid"))?,
            }
        }
    }

    fn handle(&mut self, choice: MenuChoice) -> Result<()> {
        let mut out = io::stdout();
        match choice {
            MenuChoice::Drill(drill) => {
                self.session(io::stdout(), |p, rng, group| run_drill(p, drill, group, rng))?;
            }
            MenuChoice::CustomText => {
                if let Input::Line(text) = console::read_line(self.lang.t("prompt.text"))? {
                    self.play_once(&text)?;
                }
            }
            MenuChoice::Frequency => {
                if let Input::Line(v) = console::read_line(self.lang.t("prompt.freq"))? {
                    match self.change_frequency(&v) {
                        Ok(()) => {
                            let hz = self.cfg.timing.frequency();
                            console::line(&mut out, format!("{} {hz} Hz.", self.lang.t("msg.freq_set")))?;
                            self.persist()?;
                        }
                        Err(e) => console::line(&mut out, console::highlight(e))?,
                    }
                }
            }
            MenuChoice::Wpm => {
                if let Input::Line(v) = console::read_line(self.lang.t("prompt.wpm"))? {
                    match self.change_wpm(&v) {
                        Ok(()) => {
                            let wpm = self.cfg.timing.wpm();
                            console::line(&mut out, format!("{} {wpm}.", self.lang.t("msg.wpm_set")))?;
                            self.persist()?;
                        }
                        Err(e) => console::line(&mut out, console::highlight(e))?,
                    }
                }
            }
            MenuChoice::ToggleDisplay => {
                self.cfg.toggle_show_code();
                self.report_toggle(&mut out, "msg.display_now", self.cfg.show_code)?;
                self.persist()?;
            }
            MenuChoice::ToggleFlashCard => {
                self.cfg.toggle_flash_card();
                self.report_toggle(&mut out, "msg.flash_now", self.cfg.flash_card)?;
                self.persist()?;
            }
            MenuChoice::ToggleVoice => {
                self.cfg.toggle_voice();
                self.report_toggle(&mut out, "msg.voice_now", self.cfg.voice_enabled)?;
                if self.cfg.voice_enabled && self.services.speech.is_none() {
                    console::line(&mut out, console::highlight(self.lang.t("msg.no_voice")))?;
                }
                self.persist()?;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    /// Send `text` once (menu entry 11 and `--text`).
    pub fn play_once(&mut self, text: &str) -> Result<()> {
        let text = text.to_string();
        self.session(io::stdout(), move |p, _, _| p.play_text(&text).map(|_| ()))
    }

    /// `Voice is now ON`
    fn report_toggle<W: Write>(&self, out: &mut W, key: &'static str, on: bool) -> Result<()> {
        console::line(out, format!("{} {}", self.lang.t(key), self.lang.on_off(on)))?;
        Ok(())
    }

    /// Validated frequency change: settings, then the shared timing. Nothing
    /// changes when the input is rejected.
    fn change_frequency(&mut self, input: &str) -> Result<(), SettingsError> {
        let hz = parse_number(input)?;
        self.cfg.set_frequency(hz)?;
        self.timing.apply(self.cfg.timing);
        Ok(())
    }

    fn change_wpm(&mut self, input: &str) -> Result<(), SettingsError> {
        let wpm = parse_number(input)?;
        self.cfg.set_wpm(wpm)?;
        self.timing.apply(self.cfg.timing);
        Ok(())
    }

    /// Write settings back; a failed write is reported, the change stays.
    fn persist(&self) -> Result<()> {
        if let Err(e) = self.cfg.save() {
            log::warn!("[menu] {e:#}");
            let msg = format!("{}: {e:#}", self.lang.t("msg.save_failed"));
            console::line(&mut io::stdout(), console::highlight(msg))?;
        }
        Ok(())
    }

    /// One playback session writing to `out`. Raw mode is held for the session
    /// so keys (and Ctrl-C) reach the interruptible wait; it is released on
    /// every exit path, including errors. A process interrupt during the
    /// session stops only the session.
    fn session<W, F>(&mut self, mut out: W, body: F) -> Result<()>
    where
        W: Write,
        F: FnOnce(&mut Player<'_, &mut W>, &mut SmallRng, usize) -> Result<()>,
    {
        let raw = if self.services.waiter.is_interruptible() {
            match RawMode::enable() {
                Ok(raw) => Some(raw),
                Err(e) => {
                    self.services.waiter.disable_interrupts(&e.to_string());
                    None
                }
            }
        } else {
            None
        };
        if raw.is_some() {
            console::line(&mut out, console::menu(self.lang.t("play.hint")))?;
        }

        let display = DisplayOptions::from(&self.cfg);
        let group = self.cfg.group_size;
        let armed = self.interrupts.arm();
        let result = {
            let mut player =
                Player::new(&mut self.services, &self.timing, display, &self.lang, &mut out);
            body(&mut player, &mut self.rng, group)
        };
        drop(armed);
        drop(raw);

        if self.services.cancel.is_cancelled() {
            console::line(&mut out, self.lang.t("play.stopped"))?;
            self.services.cancel.reset();
        }
        result
    }

    fn print_menu(&self) -> Result<()> {
        let t = |k: &'static str| self.lang.t(k);
        let mut out = io::stdout();
        let timing = self.cfg.timing;

        console::line(&mut out, "")?;
        console::line(&mut out, format!(
            "{}: {} Hz | {}: {}",
            t("label.frequency"), timing.frequency(), t("label.wpm"), timing.wpm(),
        ))?;
        console::line(&mut out, console::menu(t("app.title")))?;
        console::line(&mut out, console::menu(t("app.tip1")))?;
        console::line(&mut out, console::menu(format!("{}\r\n", t("app.tip2"))))?;

        for (i, letters) in crate::practice::content::WEEKS.iter().enumerate() {
            let spaced: Vec<String> = if i == 5 {
                letters.chars().map(String::from).collect()
            } else {
                vec![letters.to_string()]
            };
            console::line(&mut out, console::menu(format!(
                "{}. {} {}: {}", i + 1, t("menu.week"), i + 1, spaced.join(" "),
            )))?;
        }
        let entries = [
            "menu.all", "menu.words", "menu.sentences", "menu.callsigns", "menu.custom",
            "menu.freq", "menu.wpm", "menu.display", "menu.flash", "menu.voice", "menu.exit",
        ];
        for (i, key) in entries.into_iter().enumerate() {
            console::line(&mut out, console::menu(format!("{}. {}", i + 7, t(key))))?;
        }

        console::line(&mut out, format!(
            "{}: {} | {}: {} | {}: {} | {}: {}",
            t("label.display"),  self.lang.on_off(self.cfg.show_code),
            t("label.flash"),    self.lang.on_off(self.cfg.flash_card),
            t("label.voice"),    self.lang.on_off(self.cfg.voice_enabled),
            t("label.language"), self.lang.lang_name(),
        ))?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::CancelToken;
    use crate::engine::player::tests::{services, services_with_hook, Call, Log};
    use std::path::PathBuf;

    fn temp_config(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("morse-trainer-menu-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    fn app_with(name: &str, services: Services) -> (App, PathBuf) {
        let path = temp_config(name);
        let cfg = AppConfig { path: path.clone(), ..AppConfig::default() };
        let interrupts = Interrupts::new(services.cancel.clone());
        (App::new(cfg, services, I18n::new("en"), interrupts), path)
    }

    fn app(name: &str) -> (App, PathBuf) {
        app_with(name, services(&Log::default(), None, None))
    }

    fn tone_count(log: &Log) -> usize {
        log.borrow().iter().filter(|c| matches!(c, Call::Tone(..))).count()
    }

    #[test]
    fn menu_numbers_map_to_actions() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Drill(Drill::Week(1))));
        assert_eq!(parse_choice(" 6\n"), Some(MenuChoice::Drill(Drill::Week(6))));
        assert_eq!(parse_choice("7"), Some(MenuChoice::Drill(Drill::AllCharacters)));
        assert_eq!(parse_choice("10"), Some(MenuChoice::Drill(Drill::CallSigns)));
        assert_eq!(parse_choice("11"), Some(MenuChoice::CustomText));
        assert_eq!(parse_choice("12"), Some(MenuChoice::Frequency));
        assert_eq!(parse_choice("17"), Some(MenuChoice::Exit));
        for bad in ["0", "18", "", "x", "-1"] {
            assert_eq!(parse_choice(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn rejected_frequency_changes_nothing() {
        let (mut app, path) = app("reject");
        let before = app.timing.snapshot();
        assert_eq!(
            app.change_frequency("1100"),
            Err(SettingsError::FrequencyOutOfRange(1100))
        );
        assert_eq!(app.change_frequency("loud"), Err(SettingsError::NotANumber("loud".into())));
        assert_eq!(app.timing.snapshot(), before);
        assert_eq!(app.cfg.timing, before);
        assert!(!path.exists());
    }

    #[test]
    fn accepted_wpm_reaches_the_shared_timing() {
        let (mut app, _) = app("accept");
        app.change_wpm("20").unwrap();
        assert_eq!(app.timing.snapshot().wpm(), 20);
        assert_eq!(app.timing.snapshot().frequency(), 700);
        assert_eq!(app.change_wpm("41"), Err(SettingsError::WpmOutOfRange(41)));
        assert_eq!(app.timing.snapshot().wpm(), 20);
    }

    #[test]
    fn stopped_session_reports_and_rearms() {
        let log = Log::default();
        let (mut app, _) = app_with("stopped", services(&log, Some(1), None));
        let mut out = Vec::new();
        app.session(&mut out, |p, _, _| p.play_text("EEE").map(|_| ())).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Stopped."), "{text}");
        assert!(!app.services.cancel.is_cancelled());
        assert_eq!(tone_count(&log), 1);

        let mut out = Vec::new();
        app.session(&mut out, |p, _, _| p.play_text("EE").map(|_| ())).unwrap();
        assert_eq!(tone_count(&log), 3);
        assert!(!String::from_utf8(out).unwrap().contains("Stopped."));
    }

    #[test]
    fn process_interrupt_stops_only_the_session() {
        let log = Log::default();
        let irq: std::rc::Rc<std::cell::RefCell<Option<Interrupts>>> = Default::default();
        let signal = irq.clone();
        // the interrupt arrives while the second wait is in progress
        let svc = services_with_hook(&log, None, None, Some(Box::new(
            move |n: usize, _: &CancelToken| {
                if n == 1 {
                    if let Some(irq) = signal.borrow().as_ref() {
                        assert!(irq.handle(), "interrupt must be armed during a session");
                    }
                }
            },
        )));
        let (mut app, _) = app_with("interrupt", svc);
        *irq.borrow_mut() = Some(app.interrupts.clone());

        let mut out = Vec::new();
        app.session(&mut out, |p, _, _| p.play_text("EEE").map(|_| ())).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Stopped."));
        assert_eq!(tone_count(&log), 1);
        assert!(!app.services.cancel.is_cancelled());
        // back at the menu the interrupt means quit, not stop
        assert!(!app.interrupts.handle());
    }

    #[test]
    fn toggles_report_their_new_state() {
        let (app, _) = app("toggle");
        let mut out = Vec::new();
        app.report_toggle(&mut out, "msg.voice_now", true).unwrap();
        app.report_toggle(&mut out, "msg.display_now", false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Voice is now ON"));
        assert!(text.contains("Morse code display is now OFF"));
    }
}

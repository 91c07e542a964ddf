// src/main.rs  -  morse-trainer  entry point
mod audio;
mod config;
mod console;
mod control;
mod engine;
mod i18n;
mod menu;
mod morse;
mod practice;
mod speech;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use config::{AppConfig, Cli};
use control::{CancelToken, InterruptibleWait, Interrupts, TerminalKeys};
use control::wait::PausePrompts;
use crossterm::tty::IsTty;
use engine::Services;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        return Ok(());
    }

    // ── Load config ───────────────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;
    let lang = i18n::I18n::new(&cfg.language);

    // ── Audio: no sound card, no trainer ──────────────────────────────────────
    let tone = audio::create_audio(cfg.volume, cfg.mute)
        .context("Audio output could not be initialised (use --mute to run without sound)")?;

    // ── Speech: optional, negotiated once ─────────────────────────────────────
    let speech = speech::create_speech();

    // ── Interruptible wait ────────────────────────────────────────────────────
    // Key polling only makes sense on a terminal; piped stdin sleeps instead.
    let cancel  = CancelToken::new();
    let prompts = PausePrompts {
        paused:  lang.t("play.paused").to_string(),
        resumed: lang.t("play.resumed").to_string(),
    };
    let waiter: Box<dyn control::Waiter> = if io::stdin().is_tty() {
        Box::new(InterruptibleWait::new(TerminalKeys, io::stdout(), cancel.clone(), prompts))
    } else {
        log::debug!("[main] stdin is not a terminal, waits are not interruptible");
        Box::new(InterruptibleWait::<TerminalKeys, _>::sleeping(io::stdout(), cancel.clone(), prompts))
    };

    // ── Ctrl-C outside raw mode: stop the drill, or quit at the menu ─────────
    let interrupts = Interrupts::new(cancel.clone());
    interrupts.install(lang.t("app.goodbye").to_string())?;

    let services = Services { tone, speech, waiter, cancel };
    let mut app = menu::App::new(cfg, services, lang, interrupts);

    // ── --text: send once, no menu ────────────────────────────────────────────
    if let Some(text) = &cli.text {
        return app.play_once(text);
    }

    app.run()
}

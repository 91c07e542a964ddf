// src/config.rs  -  Runtime configuration (CLI + TOML settings file)
use crate::morse::TimingConfig;
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  morse-trainer --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

pub const FREQ_RANGE: RangeInclusive<u32> = 400..=1000;
pub const WPM_RANGE:  RangeInclusive<u32> = 5..=40;

/// Rejected user input. The message is printed to the console as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid frequency {0} Hz. Valid range is 400-1000 Hz.")]
    FrequencyOutOfRange(u32),
    #[error("Invalid WPM value {0}. Valid range is 5-40.")]
    WpmOutOfRange(u32),
    #[error("Invalid input {0:?}. Enter a whole number.")]
    NotANumber(String),
}

pub fn parse_number(input: &str) -> Result<u32, SettingsError> {
    let trimmed = input.trim();
    trimmed.parse::<u32>().map_err(|_| SettingsError::NotANumber(trimmed.to_string()))
}

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug, Default)]
#[command(
    name  = "morse-trainer",
    about = "Morse Code Trainer  |  letters, words, sentences and call signs",
    version,
)]
pub struct Cli {
    /// Settings file path (default: ~/.config/morse-trainer/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Speed in words per minute (5-40)
    #[arg(long)]
    pub wpm: Option<u32>,

    /// Tone frequency in Hz (400-1000)
    #[arg(long)]
    pub tone: Option<u32>,

    /// Output volume 0.0-1.0
    #[arg(long)]
    pub volume: Option<f32>,

    /// Insert a word gap every N letters in letter drills (0 = never)
    #[arg(long)]
    pub group_size: Option<usize>,

    /// UI language: en | de | fr | it
    #[arg(long)]
    pub lang: Option<String>,

    /// Show the dot/dash pattern next to each character
    #[arg(long, action, conflicts_with = "hide_code")]
    pub show_code: bool,

    /// Hide the dot/dash pattern
    #[arg(long, action)]
    pub hide_code: bool,

    /// Flash-card display (replaces the dot/dash pattern)
    #[arg(long, action)]
    pub flash_card: bool,

    /// Speak each character after sending it
    #[arg(long, action)]
    pub voice: bool,

    /// No sound device: keep the timing but play nothing
    #[arg(long, action)]
    pub mute: bool,

    /// Send this text once and exit instead of opening the menu
    #[arg(long)]
    pub text: Option<String>,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FileConfig {
    pub morse:   Option<MorseCfg>,
    pub display: Option<DisplayCfg>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MorseCfg {
    pub wpm:             Option<u32>,
    pub tone_hz:         Option<u32>,
    pub volume:          Option<f32>,
    pub group_size:      Option<usize>,
    pub speech_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayCfg {
    pub show_code:     Option<bool>,
    pub flash_card:    Option<bool>,
    pub voice_enabled: Option<bool>,
    pub language:      Option<String>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Speed + pitch; only ever replaced as a whole
    pub timing:          TimingConfig,
    pub volume:          f32,
    /// Letters between inserted word gaps in letter drills (0 = off)
    pub group_size:      usize,
    pub speech_delay_ms: u64,
    pub show_code:       bool,
    pub flash_card:      bool,
    pub voice_enabled:   bool,
    pub language:        String,
    /// Null tone backend instead of the sound card
    pub mute:            bool,
    /// Where menu changes are written back to
    pub path:            PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timing:          TimingConfig::default(),
            volume:          0.7,
            group_size:      5,
            speech_delay_ms: 200,
            show_code:       true,
            flash_card:      false,
            voice_enabled:   false,
            language:        "en".into(),
            mute:            false,
            path:            default_config_path(),
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let mut cfg = Self {
            path: cli.config.clone().unwrap_or_else(default_config_path),
            ..Self::default()
        };

        // 1. Load TOML file
        if cfg.path.exists() {
            let fc = read_file(&cfg.path)?;
            cfg.apply_file(&fc);
        } else {
            log::info!("[config] no settings file at {}, using defaults", cfg.path.display());
        }

        // 2. Apply CLI overrides
        cfg.apply_cli(cli)?;
        Ok(cfg)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(m) = &fc.morse {
            let wpm = m.wpm.unwrap_or(self.timing.wpm() as u32);
            let hz  = m.tone_hz.unwrap_or(self.timing.frequency());
            self.timing = TimingConfig::clamped(wpm, hz);
            if let Some(v) = m.volume          { self.volume          = v.clamp(0.0, 1.0); }
            if let Some(v) = m.group_size      { self.group_size      = v; }
            if let Some(v) = m.speech_delay_ms { self.speech_delay_ms = v; }
        }
        if let Some(d) = &fc.display {
            if let Some(v) = d.show_code     { self.show_code     = v; }
            if let Some(v) = d.voice_enabled { self.voice_enabled = v; }
            if let Some(v) = &d.language     { self.language      = v.clone(); }
            if d.flash_card == Some(true)    { self.set_flash_card(true); }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) -> Result<()> {
        if let Some(v) = cli.wpm {
            self.timing = self.timing.with_wpm(v).context("--wpm")?;
        }
        if let Some(v) = cli.tone {
            self.timing = self.timing.with_frequency(v).context("--tone")?;
        }
        if let Some(v) = cli.volume      { self.volume     = v.clamp(0.0, 1.0); }
        if let Some(v) = cli.group_size  { self.group_size = v; }
        if let Some(v) = &cli.lang       { self.language   = v.clone(); }
        if cli.show_code                 { self.set_show_code(true); }
        if cli.hide_code                 { self.show_code  = false; }
        if cli.flash_card                { self.set_flash_card(true); }
        if cli.voice                     { self.voice_enabled = true; }
        if cli.mute                      { self.mute       = true; }
        Ok(())
    }

    // ── Menu-driven changes ───────────────────────────────────────────────────
    // Each validates first and leaves `self` untouched on error.

    pub fn set_frequency(&mut self, hz: u32) -> Result<(), SettingsError> {
        self.timing = self.timing.with_frequency(hz)?;
        Ok(())
    }

    pub fn set_wpm(&mut self, wpm: u32) -> Result<(), SettingsError> {
        self.timing = self.timing.with_wpm(wpm)?;
        Ok(())
    }

    /// Showing the raw pattern and the flash card are mutually exclusive.
    pub fn set_show_code(&mut self, on: bool) {
        self.show_code = on;
        if on { self.flash_card = false; }
    }

    pub fn set_flash_card(&mut self, on: bool) {
        self.flash_card = on;
        if on { self.show_code = false; }
    }

    pub fn toggle_show_code(&mut self)  { self.set_show_code(!self.show_code); }
    pub fn toggle_flash_card(&mut self) { self.set_flash_card(!self.flash_card); }
    pub fn toggle_voice(&mut self)      { self.voice_enabled = !self.voice_enabled; }

    pub fn to_file_config(&self) -> FileConfig {
        FileConfig {
            morse: Some(MorseCfg {
                wpm:             Some(self.timing.wpm() as u32),
                tone_hz:         Some(self.timing.frequency()),
                volume:          Some(self.volume),
                group_size:      Some(self.group_size),
                speech_delay_ms: Some(self.speech_delay_ms),
            }),
            display: Some(DisplayCfg {
                show_code:     Some(self.show_code),
                flash_card:    Some(self.flash_card),
                voice_enabled: Some(self.voice_enabled),
                language:      Some(self.language.clone()),
            }),
        }
    }

    /// Persist the current settings to `self.path`.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        let raw = toml::to_string_pretty(&self.to_file_config())
            .context("Serialising settings")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Writing config to {:?}", self.path))?;
        log::debug!("[config] saved to {}", self.path.display());
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Reading config {:?}", path))?;
    toml::from_str(&raw).with_context(|| format!("Parsing config {:?}", path))
}

fn default_config_path() -> PathBuf {
    config_dir().join("morse-trainer").join("config.toml")
}

fn config_dir() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}

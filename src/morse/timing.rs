// src/morse/timing.rs  -  WPM → element durations (PARIS standard, 50 units per word)
use crate::config::{SettingsError, FREQ_RANGE, WPM_RANGE};
use arc_swap::ArcSwap;
use std::sync::Arc;
use std::time::Duration;

const UNITS_PER_WORD: u64 = 50;
const NANOS_PER_MINUTE: u64 = 60_000_000_000;

pub const DEFAULT_WPM: u32 = 7;
pub const DEFAULT_FREQUENCY: u32 = 700;

/// All timing derived from a single dot length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub dot:      Duration,  // 1 unit
    pub dash:     Duration,  // 3 units
    pub elem_gap: Duration,  // 1 unit  (between dits/dahs in same char)
    pub char_gap: Duration,  // 3 units (between characters)
    pub word_gap: Duration,  // 7 units (between words)
}

impl Timing {
    /// unit = 60 s / (wpm × 50), rounded to the nearest nanosecond
    pub fn from_wpm(wpm: u8) -> Self {
        let units_per_minute = UNITS_PER_WORD * wpm.max(1) as u64;
        let unit_ns = (NANOS_PER_MINUTE + units_per_minute / 2) / units_per_minute;
        let unit = Duration::from_nanos(unit_ns);
        Self {
            dot:      unit,
            dash:     unit * 3,
            elem_gap: unit,
            char_gap: unit * 3,
            word_gap: unit * 7,
        }
    }
}

/// Speed + pitch, always replaced as a whole.
///
/// Fields are private so a value can only come out of [`TimingConfig::new`]
/// (or one of the `with_*` helpers); the derived [`Timing`] therefore always
/// belongs to the stored WPM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    wpm:       u8,
    frequency: u32,
    timing:    Timing,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm:       DEFAULT_WPM as u8,
            frequency: DEFAULT_FREQUENCY,
            timing:    Timing::from_wpm(DEFAULT_WPM as u8),
        }
    }
}

impl TimingConfig {
    pub fn new(wpm: u32, frequency: u32) -> Result<Self, SettingsError> {
        if !WPM_RANGE.contains(&wpm) {
            return Err(SettingsError::WpmOutOfRange(wpm));
        }
        if !FREQ_RANGE.contains(&frequency) {
            return Err(SettingsError::FrequencyOutOfRange(frequency));
        }
        let wpm = wpm as u8;
        Ok(Self { wpm, frequency, timing: Timing::from_wpm(wpm) })
    }

    /// Pull hand-edited file values into range instead of rejecting them.
    pub fn clamped(wpm: u32, frequency: u32) -> Self {
        let w = wpm.clamp(*WPM_RANGE.start(), *WPM_RANGE.end());
        let f = frequency.clamp(*FREQ_RANGE.start(), *FREQ_RANGE.end());
        if w != wpm {
            log::warn!("[config] wpm {wpm} out of range, using {w}");
        }
        if f != frequency {
            log::warn!("[config] tone_hz {frequency} out of range, using {f}");
        }
        Self { wpm: w as u8, frequency: f, timing: Timing::from_wpm(w as u8) }
    }

    pub fn with_wpm(&self, wpm: u32) -> Result<Self, SettingsError> {
        Self::new(wpm, self.frequency)
    }

    pub fn with_frequency(&self, frequency: u32) -> Result<Self, SettingsError> {
        Self::new(self.wpm as u32, frequency)
    }

    pub fn wpm(&self) -> u8        { self.wpm }
    pub fn frequency(&self) -> u32 { self.frequency }

    /// Exact unit length in seconds, `60 / (wpm * 50)`.
    pub fn unit_seconds(&self) -> f64 {
        60.0 / (self.wpm as f64 * UNITS_PER_WORD as f64)
    }

    pub fn unit_duration(&self) -> Duration       { self.timing.dot }
    pub fn dot_duration(&self) -> Duration        { self.unit_duration() }
    pub fn dash_duration(&self) -> Duration       { self.timing.dash }
    pub fn intra_character_gap(&self) -> Duration { self.timing.elem_gap }
    pub fn inter_character_gap(&self) -> Duration { self.timing.char_gap }
    pub fn inter_word_gap(&self) -> Duration      { self.timing.word_gap }
}

/// Process-wide current timing. The menu is the only writer; the playback
/// engine takes one snapshot per character.
#[derive(Debug)]
pub struct TimingHandle {
    current: ArcSwap<TimingConfig>,
}

impl TimingHandle {
    pub fn new(initial: TimingConfig) -> Self {
        Self { current: ArcSwap::from_pointee(initial) }
    }

    pub fn snapshot(&self) -> TimingConfig {
        **self.current.load()
    }

    pub fn apply(&self, next: TimingConfig) {
        log::debug!(
            "[timing] apply wpm={} tone={}Hz unit={:.4}s",
            next.wpm, next.frequency, next.unit_seconds(),
        );
        self.current.store(Arc::new(next));
    }
}

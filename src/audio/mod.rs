// src/audio/mod.rs  -  ToneService trait + cpal backend
use anyhow::Result;
use std::time::Duration;

/// "Play a tone of frequency F for duration D".
///
/// `emit_tone` only starts the tone and returns; the tone stops by itself once
/// `duration` has been rendered. The caller does its own waiting.
pub trait ToneService {
    fn emit_tone(&mut self, frequency_hz: u32, duration: Duration) -> Result<()>;
    fn name(&self) -> &str;
}

// ── cpal backend ─────────────────────────────────────────────────────────────
#[cfg(feature = "audio-cpal")]
mod cpal_backend;
#[cfg(feature = "audio-cpal")]
pub use cpal_backend::CpalAudio;

/// Null backend (no sound; `--mute` and builds without `audio-cpal`)
pub struct NullAudio;
impl ToneService for NullAudio {
    fn emit_tone(&mut self, frequency_hz: u32, duration: Duration) -> Result<()> {
        log::trace!("[audio] (muted) {frequency_hz} Hz for {duration:?}");
        Ok(())
    }
    fn name(&self) -> &str { "muted" }
}

/// Factory. Without `mute`, failing to open the sound card is an error: the
/// trainer is useless without sound.
pub fn create_audio(volume: f32, mute: bool) -> Result<Box<dyn ToneService>> {
    if mute {
        return Ok(Box::new(NullAudio));
    }
    #[cfg(feature = "audio-cpal")]
    {
        let audio = CpalAudio::new(volume)?;
        log::info!("[audio] using {}", audio.name());
        return Ok(Box::new(audio));
    }
    #[cfg(not(feature = "audio-cpal"))]
    {
        let _ = volume;
        log::warn!("[audio] built without audio-cpal, tones are silent");
        Ok(Box::new(NullAudio))
    }
}

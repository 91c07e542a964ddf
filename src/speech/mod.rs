// src/speech/mod.rs  -  Speech output, negotiated once at startup
//
// The playback engine only sees `Option<Box<dyn SpeechService>>`: either a
// working backend was found or voice is unavailable. All per-platform choices
// live in `create_speech`.
use anyhow::Result;

pub trait SpeechService {
    /// Say `text`. Errors are reported per utterance; callers log and go on.
    fn speak(&mut self, text: &str) -> Result<()>;
    fn name(&self) -> &str;
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
mod command;
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use command::CommandSpeech;

#[cfg(all(feature = "voice-tts", not(target_os = "linux")))]
mod native;
#[cfg(all(feature = "voice-tts", not(target_os = "linux")))]
pub use native::NativeSpeech;

/// Probe for a speech backend. `None` means voice output is unavailable; the
/// voice toggle still works but nothing is spoken.
pub fn create_speech() -> Option<Box<dyn SpeechService>> {
    #[cfg(all(feature = "voice-tts", not(target_os = "linux")))]
    {
        match NativeSpeech::new() {
            Ok(s) => {
                log::info!("[speech] using {}", s.name());
                return Some(Box::new(s));
            }
            Err(e) => log::warn!("[speech] native engine unavailable: {e:#}"),
        }
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        if let Some(s) = CommandSpeech::detect() {
            log::info!("[speech] using {}", s.name());
            return Some(Box::new(s));
        }
    }

    log::warn!("[speech] no speech backend found, voice output disabled");
    None
}

// src/speech/native.rs  -  Platform speech engine (SAPI / AVFoundation) via `tts`
use super::SpeechService;
use anyhow::{anyhow, Result};

pub struct NativeSpeech {
    engine: tts::Tts,
}

impl NativeSpeech {
    pub fn new() -> Result<Self> {
        let mut engine = tts::Tts::default().map_err(|e| anyhow!("{e}"))?;
        let _ = engine.set_rate(engine.normal_rate());
        Ok(Self { engine })
    }
}

impl SpeechService for NativeSpeech {
    fn speak(&mut self, text: &str) -> Result<()> {
        // interrupt=true: a stale announcement never queues behind the next one
        self.engine
            .speak(text.to_lowercase(), true)
            .map_err(|e| anyhow!("speech engine: {e}"))?;
        Ok(())
    }

    fn name(&self) -> &str { "native speech engine" }
}

// src/speech/command.rs  -  espeak / spd-say / say via child process
use super::SpeechService;
use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};

#[cfg(target_os = "linux")]
const CANDIDATES: &[&str] = &["espeak", "espeak-ng", "spd-say"];
#[cfg(target_os = "macos")]
const CANDIDATES: &[&str] = &["say"];

pub struct CommandSpeech {
    program: &'static str,
}

impl CommandSpeech {
    /// First candidate that can be started at all.
    pub fn detect() -> Option<Self> {
        CANDIDATES.iter().copied().find(|p| probe(p)).map(|program| Self { program })
    }
}

fn probe(program: &str) -> bool {
    // `say` has no --version; an empty utterance is a cheap no-op for all three
    Command::new(program)
        .arg("")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

impl SpeechService for CommandSpeech {
    fn speak(&mut self, text: &str) -> Result<()> {
        // Lowercase: some voices say "capital A" for "A"
        let status = Command::new(self.program)
            .arg(text.to_lowercase())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("Running {}", self.program))?;
        if !status.success() {
            bail!("{} exited with {status}", self.program);
        }
        Ok(())
    }

    fn name(&self) -> &str { self.program }
}

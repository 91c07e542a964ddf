// src/control/wait.rs  -  The one place where playback blocks
//
// Every gap and every tone length is waited out here. While waiting, the
// terminal is watched for keys:
//
//   Enter / Space   → pause; block until Enter / Space (resume) or q / Esc / Ctrl-C (stop)
//   q / Esc / Ctrl-C → stop the drill immediately
//
// If the terminal cannot deliver key events, the wait degrades to a plain
// sleep for the rest of the process and never tries the terminal again.
use super::cancel::CancelToken;
use super::keys::{Key, KeySource};
use crate::console;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Continue,
    Abort,
}

impl ControlSignal {
    pub fn is_abort(self) -> bool { self == ControlSignal::Abort }
}

pub trait Waiter {
    fn wait(&mut self, duration: Duration) -> ControlSignal;

    /// Stop using key input for good (e.g. raw mode could not be enabled).
    fn disable_interrupts(&mut self, _reason: &str) {}

    fn is_interruptible(&self) -> bool { false }
}

/// Prompt texts shown while paused.
#[derive(Debug, Clone)]
pub struct PausePrompts {
    pub paused:  String,
    pub resumed: String,
}

pub struct InterruptibleWait<K: KeySource, W: Write> {
    /// `None` after the one-way downgrade to plain sleeping
    keys:    Option<K>,
    out:     W,
    cancel:  CancelToken,
    prompts: PausePrompts,
}

impl<K: KeySource, W: Write> InterruptibleWait<K, W> {
    pub fn new(keys: K, out: W, cancel: CancelToken, prompts: PausePrompts) -> Self {
        Self { keys: Some(keys), out, cancel, prompts }
    }

    /// Plain sleeping from the start (stdin is not a terminal).
    pub fn sleeping(out: W, cancel: CancelToken, prompts: PausePrompts) -> Self {
        Self { keys: None, out, cancel, prompts }
    }

    fn downgrade(&mut self, reason: &str) {
        if self.keys.take().is_some() {
            log::debug!("[wait] key input unavailable ({reason}); using plain sleep from now on");
        }
    }

    /// Wait on key events until `deadline`.
    fn wait_keys(&mut self, deadline: Instant) -> io::Result<ControlSignal> {
        let Some(keys) = self.keys.as_mut() else {
            return Ok(ControlSignal::Continue);
        };
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Ok(ControlSignal::Continue);
            }
            match keys.poll(left)? {
                None                             => return Ok(ControlSignal::Continue),
                Some(Key::Other)                 => continue,
                Some(Key::Abort | Key::Interrupt) => {
                    self.cancel.cancel();
                    return Ok(ControlSignal::Abort);
                }
                Some(Key::Acknowledge) => {
                    return pause(keys, &mut self.out, &self.cancel, &self.prompts);
                }
            }
        }
    }
}

/// Paused: block until the user resumes or stops.
fn pause<K: KeySource, W: Write>(
    keys: &mut K,
    out: &mut W,
    cancel: &CancelToken,
    prompts: &PausePrompts,
) -> io::Result<ControlSignal> {
    console::line(out, console::highlight(&prompts.paused))?;
    loop {
        match keys.read()? {
            Key::Acknowledge => {
                console::line(out, &prompts.resumed)?;
                return Ok(ControlSignal::Continue);
            }
            Key::Abort | Key::Interrupt => {
                cancel.cancel();
                return Ok(ControlSignal::Abort);
            }
            Key::Other => {}
        }
    }
}

impl<K: KeySource, W: Write> Waiter for InterruptibleWait<K, W> {
    fn wait(&mut self, duration: Duration) -> ControlSignal {
        if self.cancel.is_cancelled() {
            return ControlSignal::Abort;
        }
        let deadline = Instant::now() + duration;
        let signal = match self.wait_keys(deadline) {
            Ok(signal) => signal,
            Err(e) => {
                self.downgrade(&e.to_string());
                ControlSignal::Continue
            }
        };
        if signal == ControlSignal::Continue && self.keys.is_none() {
            // degraded (or failed half way): sleep out whatever is left
            thread::sleep(deadline.saturating_duration_since(Instant::now()));
        }
        if self.cancel.is_cancelled() {
            return ControlSignal::Abort;
        }
        signal
    }

    fn disable_interrupts(&mut self, reason: &str) {
        self.downgrade(reason);
    }

    fn is_interruptible(&self) -> bool {
        self.keys.is_some()
    }
}

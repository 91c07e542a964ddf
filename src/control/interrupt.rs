// src/control/interrupt.rs  -  Process interrupt (SIGINT / console Ctrl-C) routing
//
// In raw mode Ctrl-C arrives as a key and never becomes a signal. This covers
// the rest: piped stdin, refused raw mode, `kill -INT`. During a drill the
// signal only sets the cancel token; at the menu it ends the program.
use super::cancel::CancelToken;
use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Interrupts {
    armed:  Arc<AtomicBool>,
    cancel: CancelToken,
}

impl Interrupts {
    pub fn new(cancel: CancelToken) -> Self {
        Self { armed: Arc::default(), cancel }
    }

    /// Register the process handler. Only one per process.
    pub fn install(&self, goodbye: String) -> Result<()> {
        let this = self.clone();
        ctrlc::set_handler(move || {
            if this.handle() {
                return;
            }
            let _ = crossterm::terminal::disable_raw_mode();
            println!("\r\n{goodbye}\r");
            std::process::exit(0);
        })
        .context("Installing the Ctrl-C handler")
    }

    /// One interrupt. `true` when it stopped the running drill, `false` when
    /// no drill is armed and the program should end.
    pub fn handle(&self) -> bool {
        if self.armed.load(Ordering::Acquire) {
            log::debug!("[interrupt] stopping the running drill");
            self.cancel.cancel();
            true
        } else {
            false
        }
    }

    /// Route interrupts to the cancel token until the guard is dropped.
    pub fn arm(&self) -> Armed<'_> {
        self.armed.store(true, Ordering::Release);
        Armed(self)
    }
}

pub struct Armed<'a>(&'a Interrupts);

impl Drop for Armed<'_> {
    fn drop(&mut self) {
        self.0.armed.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armed_interrupt_cancels_the_drill() {
        let cancel = CancelToken::new();
        let irq = Interrupts::new(cancel.clone());
        {
            let _armed = irq.arm();
            assert!(irq.handle());
            assert!(cancel.is_cancelled());
        }
        cancel.reset();
        // disarmed again once the drill is over
        assert!(!irq.handle());
        assert!(!cancel.is_cancelled());
    }

    #[test]
    fn unarmed_interrupt_leaves_the_token_alone() {
        let cancel = CancelToken::new();
        let irq = Interrupts::new(cancel.clone());
        assert!(!irq.handle());
        assert!(!cancel.is_cancelled());
    }
}

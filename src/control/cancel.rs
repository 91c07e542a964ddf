// src/control/cancel.rs  -  Cooperative stop flag for the running drill
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set by whatever sees the user's interrupt (Ctrl-C, q, Esc); read at every
/// wait boundary. A drill re-arms it with [`CancelToken::reset`] when it starts,
/// so an interrupt only ever stops the drill that was running.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self { Self::default() }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

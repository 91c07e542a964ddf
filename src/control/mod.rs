// src/control/mod.rs  -  Interruptible waiting, key input, drill cancellation
pub mod cancel;
pub mod interrupt;
pub mod keys;
pub mod wait;

pub use cancel::CancelToken;
pub use interrupt::Interrupts;
pub use keys::{RawMode, TerminalKeys};
pub use wait::{ControlSignal, InterruptibleWait, Waiter};

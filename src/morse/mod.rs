// src/morse/mod.rs  -  Character table + timing model
pub mod code;
pub mod timing;

pub use code::CharacterCode;
pub use timing::{TimingConfig, TimingHandle};

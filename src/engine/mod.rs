// src/engine/mod.rs  -  Playback engine: text → tones, gaps, echo and speech
pub mod echo;
pub mod player;

pub use echo::DisplayOptions;
pub use player::Player;

use crate::audio::ToneService;
use crate::control::{CancelToken, Waiter};
use crate::speech::SpeechService;

/// Outside collaborators the engine drives. Built once in `main`.
pub struct Services {
    pub tone:   Box<dyn ToneService>,
    pub speech: Option<Box<dyn SpeechService>>,
    pub waiter: Box<dyn Waiter>,
    pub cancel: CancelToken,
}

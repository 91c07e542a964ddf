// src/practice/mod.rs  -  Drills: what to send next, until the user stops
pub mod content;
pub mod drill;

pub use drill::{run_drill, Drill};

//! Terminal input module.
//!
//! Maps `crossterm` key events to stop requests. The terminal runs in raw
//! mode while animating, so Ctrl-C is delivered here rather than as a signal.

pub mod map;

pub use map::{is_interrupt, should_quit};

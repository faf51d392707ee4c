//! Runtime configuration from environment variables.
//!
//! - `WIREFRAME_FPS`: target frame rate (default: 40, clamped to 1..=240)
//! - `WIREFRAME_CHAR`: wireframe character, first printable ASCII char (default: "a")
//! - `WIREFRAME_CAPTION`: overlay text (default: "by @davidSimek")
//! - `WIREFRAME_LOG_PATH`: append logs to this file (default: no logging)
//! - `WIREFRAME_LOG_LEVEL`: trace/debug/info/warn/error (default: info)
//!
//! Unparseable values fall back to their defaults.

use std::path::PathBuf;

use tracing::Level;

use crate::term::FramePacer;
use crate::types::{DEFAULT_CAPTION, DEFAULT_DRAW_CHAR, TARGET_FPS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub fps: u32,
    pub draw_char: u8,
    pub caption: String,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fps: TARGET_FPS,
            draw_char: DEFAULT_DRAW_CHAR as u8,
            caption: DEFAULT_CAPTION.to_string(),
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let fps = lookup("WIREFRAME_FPS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|fps| fps.clamp(1, FramePacer::MAX_FPS))
            .unwrap_or(defaults.fps);

        let draw_char = lookup("WIREFRAME_CHAR")
            .and_then(|s| s.chars().next())
            .filter(char::is_ascii_graphic)
            .map(|c| c as u8)
            .unwrap_or(defaults.draw_char);

        let caption = lookup("WIREFRAME_CAPTION").unwrap_or(defaults.caption);

        let log_path = lookup("WIREFRAME_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_level = lookup("WIREFRAME_LOG_LEVEL")
            .and_then(|s| s.trim().parse::<Level>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            fps,
            draw_char,
            caption,
            log_path,
            log_level,
        }
    }

    pub fn pacer(&self) -> FramePacer {
        FramePacer::new(self.fps)
    }
}

use std::time::Duration;

use anyhow::Result;

use crate::display::DisplayDevice;

/// Fixed-rate frame pacing.
///
/// Waits a constant interval between frames; time spent rendering is not
/// subtracted and missed frames are not caught up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    fps: u32,
    interval: Duration,
}

impl FramePacer {
    pub const MAX_FPS: u32 = 240;

    /// `fps` is clamped to `1..=MAX_FPS`.
    pub fn new(fps: u32) -> Self {
        let fps = fps.clamp(1, Self::MAX_FPS);
        Self {
            fps,
            interval: Duration::from_micros(1_000_000 / u64::from(fps)),
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep one interval on `display`, returning whether an interrupt arrived.
    pub fn wait<D: DisplayDevice + ?Sized>(&self, display: &mut D) -> Result<bool> {
        display.wait_for_interrupt(self.interval)
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(crate::types::TARGET_FPS)
    }
}

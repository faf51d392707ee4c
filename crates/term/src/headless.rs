//! In-memory display for tests, benches and scripted runs.

use std::time::Duration;

use anyhow::{bail, Result};

use crate::display::DisplayDevice;
use crate::fb::{FrameBuffer, Viewport};

/// A display with a scripted size that records every presented frame.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDisplay {
    viewport: Option<Viewport>,
    frames: Vec<String>,
    waits: Vec<Duration>,
    interrupt_after: Option<usize>,
}

impl HeadlessDisplay {
    /// A display that always reports `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Some(viewport),
            ..Self::default()
        }
    }

    /// A display whose size query always fails.
    pub fn unmeasurable() -> Self {
        Self::default()
    }

    /// Request an interrupt once `frames` frames have been presented.
    pub fn interrupt_after(mut self, frames: usize) -> Self {
        self.interrupt_after = Some(frames);
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Presented frames as text, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Timeouts passed to `wait_for_interrupt`, in call order.
    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }
}

impl DisplayDevice for HeadlessDisplay {
    fn viewport(&mut self) -> Result<Viewport> {
        match self.viewport {
            Some(v) => Ok(v),
            None => bail!("can't get terminal size: no viewport configured"),
        }
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.frames
            .push(String::from_utf8_lossy(fb.render()).into_owned());
        Ok(())
    }

    fn wait_for_interrupt(&mut self, timeout: Duration) -> Result<bool> {
        self.waits.push(timeout);
        Ok(self
            .interrupt_after
            .is_some_and(|n| self.frames.len() >= n))
    }
}

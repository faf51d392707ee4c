//! Display capability consumed by the animation loop.

use std::time::Duration;

use anyhow::Result;

use crate::fb::{FrameBuffer, Viewport};

/// Anything that can measure a character grid and show a frame on it.
///
/// The loop calls [`viewport`](DisplayDevice::viewport) once per frame and
/// treats an error as fatal.
pub trait DisplayDevice {
    /// Current drawable grid.
    fn viewport(&mut self) -> Result<Viewport>;

    /// Replace whatever is on screen with the visible part of `fb`.
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;

    /// Wait up to `timeout` and report whether an interrupt was requested.
    fn wait_for_interrupt(&mut self, timeout: Duration) -> Result<bool>;

    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        Ok(())
    }
}

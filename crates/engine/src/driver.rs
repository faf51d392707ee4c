//! Animation driver - one frame at a time.
//!
//! Owns everything that changes between frames (the frame counter and the
//! frame buffer) and the fixed scene. Each frame:
//!
//! 1. Query the grid size from the display (a failure ends the run)
//! 2. Reset the frame buffer to that size
//! 3. Draw every object in declaration order, later draws overwriting earlier ones
//! 4. Draw the caption near the bottom-left corner
//! 5. Present, advance the counter, wait one frame interval

use anyhow::Result;
use tracing::{debug, info};

use crate::cancel::CancelToken;
use crate::config::RunConfig;
use crate::core::Scene;
use crate::term::{raster, DisplayDevice, FrameBuffer, FrameError, FramePacer, Viewport};
use crate::types::GridCoord;

/// Caption column.
const CAPTION_X: i32 = 2;

/// Caption row, counted up from the bottom of the grid.
const CAPTION_ROWS_FROM_BOTTOM: i32 = 3;

pub struct AnimationDriver {
    scene: Scene,
    fb: FrameBuffer,
    last_viewport: Option<Viewport>,
    frame: u64,
    draw_char: u8,
    caption: String,
}

impl AnimationDriver {
    pub fn new(scene: Scene, config: &RunConfig) -> Self {
        Self {
            scene,
            fb: FrameBuffer::new(),
            last_viewport: None,
            frame: 0,
            draw_char: config.draw_char,
            caption: config.caption.clone(),
        }
    }

    /// Start at an arbitrary frame number.
    pub fn with_frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Viewport requested by the latest `render_frame`, even if it was too small.
    pub fn last_viewport(&self) -> Option<Viewport> {
        self.last_viewport
    }

    /// Record `viewport`, returning whether it differs from the previous frame's.
    fn note_viewport(&mut self, viewport: Viewport) -> bool {
        self.last_viewport.replace(viewport) != Some(viewport)
    }

    /// Draw the current frame into the frame buffer.
    ///
    /// On a viewport too small to hold a frame the buffer is left empty and
    /// the error returned; the caller may still present it.
    pub fn render_frame(&mut self, viewport: Viewport) -> Result<(), FrameError> {
        if self.note_viewport(viewport) {
            debug!(width = viewport.width, height = viewport.height, "viewport changed");
        }
        self.fb.reset(viewport)?;

        for instance in self.scene.instances_at(self.frame) {
            for seg in instance.segments() {
                raster::draw_segment(&mut self.fb, self.draw_char, seg);
            }
        }

        let caption_y = i32::from(viewport.height) - CAPTION_ROWS_FROM_BOTTOM;
        raster::draw_text(&mut self.fb, &self.caption, GridCoord::new(CAPTION_X, caption_y));
        Ok(())
    }

    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Measure, draw, present and advance one frame.
    pub fn step<D: DisplayDevice + ?Sized>(&mut self, display: &mut D) -> Result<()> {
        let viewport = display.viewport()?;
        if let Err(err) = self.render_frame(viewport) {
            debug!(frame = self.frame, %err, "skipping frame");
        }
        display.present(&self.fb)?;
        self.advance();
        Ok(())
    }

    /// Run until `cancel` is set or the display reports an interrupt.
    ///
    /// Cancellation is only observed between frames.
    pub fn run<D: DisplayDevice + ?Sized>(
        &mut self,
        display: &mut D,
        pacer: &FramePacer,
        cancel: &CancelToken,
    ) -> Result<()> {
        info!(fps = pacer.fps(), "animation started");

        while !cancel.is_cancelled() {
            self.step(display)?;
            if pacer.wait(display)? {
                cancel.cancel();
            }
        }

        info!(frames = self.frame, "animation stopped");
        Ok(())
    }
}

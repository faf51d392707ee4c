//! Terminal rendering module.
//!
//! This is the 2D half of the pipeline. Projected segments are rasterized into
//! a flat character framebuffer, which a display device then flushes to the
//! terminal in one write.
//!
//! - [`fb`]: the frame buffer manager (sizing, per-frame reset, visible text)
//! - [`raster`]: line and text drawing, pure and unit-tested
//! - [`display`]: the [`DisplayDevice`] capability the animation loop talks to
//! - [`renderer`]: crossterm-backed terminal display
//! - [`headless`]: in-memory display for tests and benches
//! - [`pacer`]: fixed frame-rate waits

pub mod display;
pub mod fb;
pub mod headless;
pub mod pacer;
pub mod raster;
pub mod renderer;

pub use tui_wireframe_core as core;
pub use tui_wireframe_input as input;
pub use tui_wireframe_types as types;

pub use display::DisplayDevice;
pub use fb::{measure_required_size, FrameBuffer, FrameError, Viewport};
pub use headless::HeadlessDisplay;
pub use pacer::FramePacer;
pub use raster::{draw_char, draw_line, draw_segment, draw_text, project_segment};
pub use renderer::{encode_frame_into, TerminalRenderer};

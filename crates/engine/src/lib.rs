//! Animation engine - drives the scene through the render pipeline.
//!
//! - [`driver`]: per-frame orchestration and the main loop
//! - [`cancel`]: cooperative stop flag checked between frames
//! - [`config`]: environment-based runtime configuration
//!
//! # Example
//!
//! ```
//! use tui_wireframe_engine::{AnimationDriver, CancelToken, RunConfig};
//! use tui_wireframe_engine::core::Scene;
//! use tui_wireframe_engine::term::{FramePacer, HeadlessDisplay, Viewport};
//!
//! let mut display = HeadlessDisplay::new(Viewport::new(79, 24)).interrupt_after(3);
//! let mut driver = AnimationDriver::new(Scene::demo(), &RunConfig::default());
//!
//! driver
//!     .run(&mut display, &FramePacer::default(), &CancelToken::new())
//!     .unwrap();
//! assert_eq!(driver.frame(), 3);
//! ```

pub mod cancel;
pub mod config;
pub mod driver;

pub use tui_wireframe_core as core;
pub use tui_wireframe_term as term;
pub use tui_wireframe_types as types;

pub use cancel::CancelToken;
pub use config::RunConfig;
pub use driver::AnimationDriver;

//! TUI Wireframe (workspace facade crate).
//!
//! Re-exports the pipeline crates under one name:
//! `tui_wireframe::{types, core, term, input, engine}`. The implementation
//! lives in dedicated crates under `crates/`.

pub use tui_wireframe_core as core;
pub use tui_wireframe_engine as engine;
pub use tui_wireframe_input as input;
pub use tui_wireframe_term as term;
pub use tui_wireframe_types as types;

//! Command-line interface modes
//!
//! This module contains the logic behind the binary's two modes: the
//! always-running HTTP server and the one-shot page render.

pub mod render;
pub mod serve;

pub use render::{RenderArgs, run_render_mode};
pub use serve::{ServeArgs, run_serve_mode};

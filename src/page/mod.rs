//! Page rendering for the teleporter
//!
//! This module owns the fixed HTML skeleton and the author-credit
//! interpolation that produces the served page.

pub mod template;

pub use template::{PAGE_TITLE, render_index};

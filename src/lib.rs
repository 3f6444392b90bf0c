//! Random Earth Teleporter
//!
//! A single-page web server that renders the Random Earth Teleporter landing
//! page with an author credit sourced from the process environment.
//!
//! # Features
//!
//! - **HTTP Server Mode**: Always-running server exposing the page at `GET /`
//! - **Render Mode**: One-shot rendering of the page to stdout
//! - **Layered Configuration**: CLI flags over environment variables over a
//!   TOML config file over built-in defaults
//!
//! # Usage
//!
//! ## Server Mode
//!
//! ```bash
//! earth-teleporter --host 0.0.0.0 --port 5000
//! ```
//!
//! ## Render Mode
//!
//! ```bash
//! earth-teleporter render --author "Jane Doe"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use earth_teleporter::{Settings, server::create_app};
//!
//! let settings = Settings::default();
//! let _app = create_app(settings);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod page;
pub mod server;
pub mod utils;

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};

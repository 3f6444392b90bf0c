//! Configuration management for the teleporter
//!
//! This module handles loading and managing configuration settings
//! for both server and render modes.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;

#[cfg(test)]
pub(crate) mod test_env {
    use std::sync::Mutex;

    // Static mutex to ensure environment variable tests don't interfere with each other
    pub(crate) static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());
}

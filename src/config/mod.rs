//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/bullyscan/config.toml)
//! 3. Project config (.bullyscan/config.toml)
//! 4. Environment variables (BULLYSCAN_*)
//! 5. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::{ConfigLoader, ConfigOverrides};
pub use types::*;

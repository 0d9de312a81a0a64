//! Settings management for the AI Researcher
//!
//! This crate loads typed, validated settings from:
//! - a dotenv file (first of `.env`, `.taskmaster/.env`, `../.env`)
//! - a YAML settings file (`.taskmaster/config.yaml` by default)
//! - `RESEARCHER_<SECTION>_<FIELD>` environment overrides
//!
//! and can write them back as YAML with secrets removed.
//!
//! # Example
//!
//! ```no_run
//! use researcher_config::SettingsLoader;
//!
//! let loader = SettingsLoader::load()?;
//! loader.ensure_directories()?;
//!
//! let llm = loader.llm_settings(None);
//! println!("{} via {}", llm.model, llm.provider);
//! # Ok::<(), researcher_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::{SettingsBuilder, SettingsLoader, DEFAULT_CONFIG_PATH};
pub use types::*;
pub use validation::Validate;

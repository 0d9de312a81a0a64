//! Settings type definitions
//!
//! One module per settings record, plus the root [`Settings`] that owns them
//! along with the application mode, debug flag and log level.

pub mod data;
pub mod engine;
pub mod llm;
pub mod secret;

pub use data::DataSettings;
pub use engine::EngineSettings;
pub use llm::{LlmSettings, Provider};
pub use secret::Secret;

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How much the researcher acts without confirmation
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Automatic,
    #[default]
    SemiManual,
    Manual,
}

impl Mode {
    pub const NAMES: [&'static str; 3] = ["automatic", "semi-manual", "manual"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Automatic => "automatic",
            Mode::SemiManual => "semi-manual",
            Mode::Manual => "manual",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "automatic" => Ok(Mode::Automatic),
            "semi-manual" => Ok(Mode::SemiManual),
            "manual" => Ok(Mode::Manual),
            _ => Err(ConfigError::invalid_enum("mode", s, &Self::NAMES)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Log verbosity, spelled the way the settings file spells it
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub const NAMES: [&'static str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Closest `tracing` level; CRITICAL has no counterpart and maps to ERROR
    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Critical => tracing::Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(ConfigError::invalid_enum("log_level", s, &Self::NAMES)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Root settings aggregating every record
///
/// Field order is the order written by [`crate::SettingsLoader::save`].
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Settings {
    /// LLM provider settings
    pub llm: LlmSettings,

    /// Input and output locations
    pub data: DataSettings,

    /// Research engine limits
    pub engine: EngineSettings,

    pub mode: Mode,

    pub debug: bool,

    pub log_level: LogLevel,
}

impl crate::validation::Validate for Settings {
    fn validate(&self) -> crate::error::Result<()> {
        // First failure wins; order matters for the reported error.
        self.llm.validate()?;
        self.data.validate()?;
        self.engine.validate()?;
        // mode and log_level cannot hold out-of-set values once parsed

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.mode, Mode::SemiManual);
        assert!(!settings.debug);
        assert_eq!(settings.log_level, LogLevel::Info);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_order_llm_before_engine() {
        let mut settings = Settings::default();
        settings.engine.concurrent_queries = 0;
        settings.llm.max_tokens = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("llm.max_tokens"));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("semi-manual".parse::<Mode>().unwrap(), Mode::SemiManual);
        assert_eq!("automatic".parse::<Mode>().unwrap(), Mode::Automatic);
        assert!("AUTOMATIC".parse::<Mode>().is_err());
        assert!("Semi-Manual".parse::<Mode>().is_err());
        let err = "invalid_mode".parse::<Mode>().unwrap_err();
        assert!(err.to_string().contains("mode"));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert!("TRACE".parse::<LogLevel>().is_err());
        assert!("debug".parse::<LogLevel>().is_err());
        assert!("Info".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Critical.as_tracing(), tracing::Level::ERROR);
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(serde_yaml::to_string(&Mode::SemiManual).unwrap().trim(), "semi-manual");
        assert_eq!(serde_yaml::to_string(&LogLevel::Warning).unwrap().trim(), "WARNING");
        assert_eq!(serde_json::to_string(&Provider::OpenAi).unwrap(), "\"openai\"");
    }
}

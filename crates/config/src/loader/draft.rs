//! Settings under construction

use crate::{error::ConfigError, Result, Settings, Validate};

/// Enumerated field whose parse failure is reported during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    Provider,
    Mode,
    LogLevel,
}

/// Settings being assembled from defaults and overlays
///
/// Enumeration values that fail to parse are held back and reported when
/// [`Draft::finish`] reaches their place in the validation order:
/// provider, the numeric limits, mode, then log level.
#[derive(Debug, Default)]
pub struct Draft {
    pub settings: Settings,
    provider: Option<ConfigError>,
    mode: Option<ConfigError>,
    log_level: Option<ConfigError>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the outcome of parsing `field`
    ///
    /// A successful parse clears an earlier rejection of the same field, so
    /// the last source to set a field decides whether it is valid.
    pub fn record<T>(&mut self, field: Deferred, parsed: Result<T>) -> Option<T> {
        let slot = match field {
            Deferred::Provider => &mut self.provider,
            Deferred::Mode => &mut self.mode,
            Deferred::LogLevel => &mut self.log_level,
        };

        match parsed {
            Ok(value) => {
                *slot = None;
                Some(value)
            }
            Err(e) => {
                *slot = Some(e);
                None
            }
        }
    }

    /// Validate and hand back the settings; the first failure wins
    pub fn finish(self) -> Result<Settings> {
        if let Some(err) = self.provider {
            return Err(err);
        }
        self.settings.validate()?;
        if let Some(err) = self.mode {
            return Err(err);
        }
        if let Some(err) = self.log_level {
            return Err(err);
        }

        Ok(self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;

    fn rejected(field: &str) -> ConfigError {
        ConfigError::invalid_enum(field, "bogus", &["one", "two"])
    }

    #[test]
    fn test_clean_draft_finishes() {
        assert_eq!(Draft::new().finish().unwrap(), Settings::default());
    }

    #[test]
    fn test_numeric_limits_reported_before_mode() {
        let mut draft = Draft::new();
        draft.record::<Mode>(Deferred::Mode, Err(rejected("mode")));
        draft.settings.llm.temperature = 5.0;

        let err = draft.finish().unwrap_err();
        assert_eq!(err.field(), Some("llm.temperature"));
    }

    #[test]
    fn test_provider_reported_before_numeric_limits() {
        let mut draft = Draft::new();
        draft.record::<Mode>(Deferred::Provider, Err(rejected("llm.provider")));
        draft.settings.llm.max_tokens = 0;

        let err = draft.finish().unwrap_err();
        assert_eq!(err.field(), Some("llm.provider"));
    }

    #[test]
    fn test_mode_reported_before_log_level() {
        let mut draft = Draft::new();
        draft.record::<Mode>(Deferred::LogLevel, Err(rejected("log_level")));
        draft.record::<Mode>(Deferred::Mode, Err(rejected("mode")));

        let err = draft.finish().unwrap_err();
        assert_eq!(err.field(), Some("mode"));
    }

    #[test]
    fn test_later_valid_value_clears_rejection() {
        let mut draft = Draft::new();
        draft.record::<Mode>(Deferred::Mode, Err(rejected("mode")));
        let mode = draft.record(Deferred::Mode, Ok(Mode::Manual));

        assert_eq!(mode, Some(Mode::Manual));
        assert!(draft.finish().is_ok());
    }
}

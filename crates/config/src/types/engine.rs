//! Research engine limits

use serde::Serialize;
use std::time::Duration;

/// Runtime limits for the research engine
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EngineSettings {
    /// How deep follow-up questions may recurse
    pub max_recursion_depth: u32,

    /// Queries allowed in flight at once
    pub concurrent_queries: u32,

    /// Idle session lifetime in seconds
    pub session_timeout: u64,

    /// Seconds between automatic session saves
    pub auto_save_interval: u64,
}

impl EngineSettings {
    /// [`Self::session_timeout`] as a `Duration`
    pub fn session_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.session_timeout)
    }

    /// [`Self::auto_save_interval`] as a `Duration`
    pub fn auto_save_duration(&self) -> Duration {
        Duration::from_secs(self.auto_save_interval)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_recursion_depth: 5,
            concurrent_queries: 3,
            session_timeout: 3600,
            auto_save_interval: 300,
        }
    }
}

impl crate::validation::Validate for EngineSettings {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_positive;

        validate_positive(
            "engine.max_recursion_depth",
            u64::from(self.max_recursion_depth),
            0,
        )?;
        validate_positive(
            "engine.concurrent_queries",
            u64::from(self.concurrent_queries),
            0,
        )?;

        Ok(())
    }
}

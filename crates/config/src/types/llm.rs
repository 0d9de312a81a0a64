//! LLM provider configuration

use super::Secret;
use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported LLM providers
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Google Gemini (reads `GOOGLE_API_KEY`)
    #[default]
    Gemini,
    /// OpenAI (reads `OPENAI_API_KEY`)
    OpenAi,
    /// Anthropic (reads `ANTHROPIC_API_KEY`)
    Anthropic,
    /// Perplexity (reads `PERPLEXITY_API_KEY`)
    Perplexity,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Gemini,
        Provider::OpenAi,
        Provider::Anthropic,
        Provider::Perplexity,
    ];

    pub const NAMES: [&'static str; 4] = ["gemini", "openai", "anthropic", "perplexity"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Perplexity => "perplexity",
        }
    }

    /// Environment variable holding this provider's API key
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::Gemini => "GOOGLE_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::Perplexity => "PERPLEXITY_API_KEY",
        }
    }

    /// Read the API key from the process environment
    ///
    /// The environment is consulted on every call; nothing is cached.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(self.api_key_env()).ok()
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "perplexity" => Ok(Provider::Perplexity),
            _ => Err(ConfigError::invalid_enum("llm.provider", s, &Self::NAMES)),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// LLM (Large Language Model) settings
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LlmSettings {
    /// Provider to send requests to
    pub provider: Provider,

    /// Model name
    ///
    /// Examples: "gemini-1.5-flash", "gpt-4o", "claude-3-5-sonnet-latest"
    pub model: String,

    /// Provider API key
    ///
    /// Never written back to disk.
    #[serde(skip_serializing)]
    pub api_key: Option<Secret>,

    /// Optional API base URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Maximum tokens for LLM responses
    pub max_tokens: u32,

    /// Sampling temperature, 0.0 to 2.0 inclusive
    pub temperature: f64,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            model: default_model(),
            api_key: None,
            base_url: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout: default_timeout(),
        }
    }
}

impl crate::validation::Validate for LlmSettings {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{validate_positive, validate_range};

        // provider membership is enforced by the type
        validate_range("llm.temperature", self.temperature, 0.0, MAX_TEMPERATURE)?;
        validate_positive("llm.max_tokens", u64::from(self.max_tokens), 0)?;

        Ok(())
    }
}

const MAX_TEMPERATURE: f64 = 2.0;

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_max_tokens() -> u32 {
    8192
}

fn default_temperature() -> f64 {
    0.7
}

fn default_timeout() -> u64 {
    30
}

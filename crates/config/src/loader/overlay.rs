//! Typed overlay of YAML values onto settings
//!
//! Every recognised key has an explicit setter below. Unknown keys are
//! reported back to the caller (`Ok(false)`) so it can warn and move on;
//! values of the wrong type are errors. Enumerations that fail to parse are
//! recorded on the [`Draft`] and surface during validation.

use super::draft::{Deferred, Draft};
use crate::{error::ConfigError, types::*, Result};
use camino::Utf8PathBuf;
use serde_yaml::{Mapping, Value};
use tracing::warn;

/// Sections holding a settings record
pub const SECTIONS: [&str; 3] = ["llm", "data", "engine"];

/// Scalar keys living at the document root
pub const ROOT_KEYS: [&str; 3] = ["mode", "debug", "log_level"];

/// Where an overlaid value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// Settings file; values must already have the field's type
    File,
    /// Override variable; its text is parsed into the field's type
    Env(&'a str),
}

impl Source<'_> {
    fn parses_text(&self) -> bool {
        matches!(self, Source::Env(_))
    }

    /// Attach the variable name to errors from an override
    fn wrap(&self, err: ConfigError) -> ConfigError {
        match self {
            Source::File => err,
            Source::Env(var) => ConfigError::EnvVarError {
                var: var.to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Apply a parsed settings document
///
/// A null document (empty file) leaves the draft untouched.
pub fn apply_document(draft: &mut Draft, doc: &Value) -> Result<()> {
    let root = match doc {
        Value::Null => return Ok(()),
        Value::Mapping(map) => map,
        other => {
            return Err(ConfigError::InvalidStructure {
                field: "<root>".to_string(),
                message: format!("expected a mapping, got {}", describe(other)),
            })
        }
    };

    for (key, value) in root {
        let Some(key) = key.as_str() else {
            warn!(key = ?key, "ignoring non-string settings key");
            continue;
        };

        if SECTIONS.contains(&key) {
            apply_section(draft, key, value)?;
        } else if !apply_root(draft, key, value, Source::File)? {
            warn!(key, "ignoring unknown settings key");
        }
    }

    Ok(())
}

fn apply_section(draft: &mut Draft, section: &str, value: &Value) -> Result<()> {
    let map: &Mapping = match value {
        Value::Null => return Ok(()),
        Value::Mapping(map) => map,
        other => {
            return Err(ConfigError::InvalidStructure {
                field: section.to_string(),
                message: format!("expected a mapping, got {}", describe(other)),
            })
        }
    };

    for (key, value) in map {
        let Some(key) = key.as_str() else {
            warn!(section, key = ?key, "ignoring non-string settings key");
            continue;
        };

        if !apply_field(draft, section, key, value, Source::File)? {
            warn!(section, key, "ignoring unknown settings key");
        }
    }

    Ok(())
}

/// Set `section.key`; returns `false` if the record has no such field
pub fn apply_field(
    draft: &mut Draft,
    section: &str,
    key: &str,
    value: &Value,
    source: Source<'_>,
) -> Result<bool> {
    let applied = match section {
        "llm" => apply_llm(draft, key, value, source),
        "data" => apply_data(&mut draft.settings.data, key, value, source),
        "engine" => apply_engine(&mut draft.settings.engine, key, value, source),
        _ => Ok(false),
    };
    applied.map_err(|e| source.wrap(e))
}

/// Set a root-level key; returns `false` if `key` is not one
pub fn apply_root(
    draft: &mut Draft,
    key: &str,
    value: &Value,
    source: Source<'_>,
) -> Result<bool> {
    let applied = match key {
        "mode" => expect_str("mode", value).map(|raw| {
            let parsed = raw.parse::<Mode>().map_err(|e| source.wrap(e));
            if let Some(mode) = draft.record(Deferred::Mode, parsed) {
                draft.settings.mode = mode;
            }
        }),
        "debug" => expect_bool("debug", value, source).map(|debug| draft.settings.debug = debug),
        "log_level" => expect_str("log_level", value).map(|raw| {
            let parsed = raw.parse::<LogLevel>().map_err(|e| source.wrap(e));
            if let Some(level) = draft.record(Deferred::LogLevel, parsed) {
                draft.settings.log_level = level;
            }
        }),
        _ => return Ok(false),
    };
    applied.map(|()| true).map_err(|e| source.wrap(e))
}

fn apply_llm(draft: &mut Draft, key: &str, value: &Value, source: Source<'_>) -> Result<bool> {
    if key == "provider" {
        let parsed = expect_str("llm.provider", value)?
            .parse::<Provider>()
            .map_err(|e| source.wrap(e));
        if let Some(provider) = draft.record(Deferred::Provider, parsed) {
            draft.settings.llm.provider = provider;
        }
        return Ok(true);
    }

    let config = &mut draft.settings.llm;
    match key {
        "model" => config.model = expect_string("llm.model", value)?,
        "api_key" => config.api_key = expect_opt_string("llm.api_key", value)?.map(Secret::from),
        "base_url" => config.base_url = expect_opt_string("llm.base_url", value)?,
        "max_tokens" => config.max_tokens = expect_u32("llm.max_tokens", value, source)?,
        "temperature" => config.temperature = expect_f64("llm.temperature", value, source)?,
        "timeout" => config.timeout = expect_u64("llm.timeout", value, source)?,
        _ => return Ok(false),
    }
    Ok(true)
}

fn apply_data(
    config: &mut DataSettings,
    key: &str,
    value: &Value,
    source: Source<'_>,
) -> Result<bool> {
    match key {
        "mindmap_csv_path" => {
            config.mindmap_csv_path = expect_path("data.mindmap_csv_path", value)?
        }
        "output_dir" => config.output_dir = expect_path("data.output_dir", value)?,
        "cache_dir" => config.cache_dir = expect_path("data.cache_dir", value)?,
        "max_file_size_mb" => {
            config.max_file_size_mb = expect_u64("data.max_file_size_mb", value, source)?
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn apply_engine(
    config: &mut EngineSettings,
    key: &str,
    value: &Value,
    source: Source<'_>,
) -> Result<bool> {
    match key {
        "max_recursion_depth" => {
            config.max_recursion_depth =
                expect_u32("engine.max_recursion_depth", value, source)?
        }
        "concurrent_queries" => {
            config.concurrent_queries = expect_u32("engine.concurrent_queries", value, source)?
        }
        "session_timeout" => {
            config.session_timeout = expect_u64("engine.session_timeout", value, source)?
        }
        "auto_save_interval" => {
            config.auto_save_interval = expect_u64("engine.auto_save_interval", value, source)?
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn expect_str<'v>(field: &str, value: &'v Value) -> Result<&'v str> {
    value
        .as_str()
        .ok_or_else(|| ConfigError::invalid_type(field, "a string", describe(value)))
}

fn expect_string(field: &str, value: &Value) -> Result<String> {
    expect_str(field, value).map(str::to_string)
}

fn expect_opt_string(field: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        other => expect_string(field, other).map(Some),
    }
}

fn expect_path(field: &str, value: &Value) -> Result<Utf8PathBuf> {
    expect_str(field, value).map(Utf8PathBuf::from)
}

fn expect_u64(field: &str, value: &Value, source: Source<'_>) -> Result<u64> {
    const EXPECTED: &str = "a non-negative integer";
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) if source.parses_text() => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ConfigError::invalid_type(field, EXPECTED, describe(value)))
}

fn expect_u32(field: &str, value: &Value, source: Source<'_>) -> Result<u32> {
    let wide = expect_u64(field, value, source)?;
    u32::try_from(wide).map_err(|_| {
        ConfigError::invalid_type(field, format!("an integer <= {}", u32::MAX), wide.to_string())
    })
}

fn expect_f64(field: &str, value: &Value, source: Source<'_>) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if source.parses_text() => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ConfigError::invalid_type(field, "a number", describe(value)))
}

fn expect_bool(field: &str, value: &Value, source: Source<'_>) -> Result<bool> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if source.parses_text() => parse_bool(s),
        _ => None,
    };
    parsed.ok_or_else(|| ConfigError::invalid_type(field, "a boolean", describe(value)))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Short description of a value for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(_) => "a tagged value".to_string(),
    }
}

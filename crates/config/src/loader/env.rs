//! Environment variable overrides
//!
//! Supports environment variables in the format:
//! `RESEARCHER_<section>_<field>=value` or `RESEARCHER_<root key>=value`
//!
//! Examples:
//! - `RESEARCHER_LLM_MODEL=gpt-4o`
//! - `RESEARCHER_ENGINE_CONCURRENT_QUERIES=8`
//! - `RESEARCHER_LOG_LEVEL=DEBUG`
//!
//! API keys are never taken from here; they are read from the provider
//! variables on demand.

use super::draft::Draft;
use super::overlay::{self, Source, ROOT_KEYS, SECTIONS};
use crate::{error::ConfigError, Result};
use serde_yaml::Value;
use std::env;
use std::ffi::OsStr;
use tracing::{debug, warn};

/// Prefix shared by every override variable
pub const ENV_PREFIX: &str = "RESEARCHER_";

/// Apply overrides from the process environment
pub fn apply_process_overrides(draft: &mut Draft) -> Result<usize> {
    apply_overrides(draft, env::vars_os())
}

/// Apply overrides from `vars`, returning how many were applied
///
/// Only names carrying the prefix are decoded; everything else is skipped
/// untouched. Unknown names are ignored with a warning; values that are not
/// UTF-8 or do not parse are errors.
pub fn apply_overrides<I, K, V>(draft: &mut Draft, vars: I) -> Result<usize>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
{
    let mut applied = 0;

    for (var, value) in vars {
        let Some(var) = var.as_ref().to_str() else {
            continue;
        };
        let Some(name) = var.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        let Some(value) = value.as_ref().to_str() else {
            return Err(ConfigError::EnvVarError {
                var: var.to_string(),
                message: "value is not valid UTF-8".to_string(),
            });
        };

        if apply_env_var(draft, var, name, value)? {
            debug!(var, "applied environment override");
            applied += 1;
        } else {
            warn!(var, "ignoring unknown environment override");
        }
    }

    Ok(applied)
}

/// Apply a single variable; `name` has the prefix stripped
fn apply_env_var(draft: &mut Draft, var: &str, name: &str, value: &str) -> Result<bool> {
    let name = name.to_lowercase();
    let value = Value::String(value.to_string());
    let source = Source::Env(var);

    // root keys contain underscores themselves, so match them whole first
    if ROOT_KEYS.contains(&name.as_str()) {
        return overlay::apply_root(draft, &name, &value, source);
    }

    let Some((section, field)) = name.split_once('_') else {
        return Ok(false);
    };

    if !SECTIONS.contains(&section) || field.contains("api_key") {
        return Ok(false);
    }

    overlay::apply_field(draft, section, field, &value, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LogLevel, Mode};
    use crate::Settings;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_section_overrides() {
        let mut draft = Draft::new();
        let applied = apply_overrides(
            &mut draft,
            vars(&[
                ("RESEARCHER_LLM_MODEL", "gpt-4o"),
                ("RESEARCHER_LLM_TEMPERATURE", "1.25"),
                ("RESEARCHER_ENGINE_CONCURRENT_QUERIES", "8"),
                ("RESEARCHER_DATA_OUTPUT_DIR", "/tmp/out"),
            ]),
        )
        .unwrap();

        assert_eq!(applied, 4);
        assert_eq!(draft.settings.llm.model, "gpt-4o");
        assert_eq!(draft.settings.llm.temperature, 1.25);
        assert_eq!(draft.settings.engine.concurrent_queries, 8);
        assert_eq!(draft.settings.data.output_dir, "/tmp/out");
    }

    #[test]
    fn test_root_overrides() {
        let mut draft = Draft::new();
        apply_overrides(
            &mut draft,
            vars(&[
                ("RESEARCHER_MODE", "manual"),
                ("RESEARCHER_DEBUG", "1"),
                ("RESEARCHER_LOG_LEVEL", "WARNING"),
            ]),
        )
        .unwrap();

        assert_eq!(draft.settings.mode, Mode::Manual);
        assert!(draft.settings.debug);
        assert_eq!(draft.settings.log_level, LogLevel::Warning);
    }

    #[test]
    fn test_unrelated_and_unknown_vars_skipped() {
        let mut draft = Draft::new();
        let applied = apply_overrides(
            &mut draft,
            vars(&[
                ("PATH", "/usr/bin"),
                ("RESEARCHER_LLM_FLAVOUR", "spicy"),
                ("RESEARCHER_NOPE", "1"),
                ("RESEARCHER_CACHE_SIZE", "1"),
            ]),
        )
        .unwrap();

        assert_eq!(applied, 0);
        assert_eq!(draft.settings, Settings::default());
    }

    #[test]
    fn test_api_key_not_read_from_overrides() {
        let mut draft = Draft::new();
        apply_overrides(&mut draft, vars(&[("RESEARCHER_LLM_API_KEY", "leak")])).unwrap();
        assert!(draft.settings.llm.api_key.is_none());
    }

    #[test]
    fn test_unparsable_value_names_variable() {
        let mut draft = Draft::new();
        let err = apply_overrides(
            &mut draft,
            vars(&[("RESEARCHER_LLM_MAX_TOKENS", "lots")]),
        )
        .unwrap_err();

        match err {
            ConfigError::EnvVarError { var, message } => {
                assert_eq!(var, "RESEARCHER_LLM_MAX_TOKENS");
                assert!(message.contains("llm.max_tokens"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_enum_override_reported_at_validation() {
        let mut draft = Draft::new();
        apply_overrides(&mut draft, vars(&[("RESEARCHER_MODE", "turbo")])).unwrap();

        match draft.finish().unwrap_err() {
            ConfigError::EnvVarError { var, message } => {
                assert_eq!(var, "RESEARCHER_MODE");
                assert!(message.contains("mode"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_valid_override_replaces_rejected_file_value() {
        let doc: Value = serde_yaml::from_str("log_level: loud\n").unwrap();
        let mut draft = Draft::new();
        overlay::apply_document(&mut draft, &doc).unwrap();
        apply_overrides(&mut draft, vars(&[("RESEARCHER_LOG_LEVEL", "ERROR")])).unwrap();

        let settings = draft.finish().unwrap();
        assert_eq!(settings.log_level, LogLevel::Error);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_values() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let bad = || OsString::from_vec(vec![0xff, 0xfe]);

        let mut draft = Draft::new();
        let applied = apply_overrides(&mut draft, vec![(OsString::from("UNRELATED"), bad())]);
        assert_eq!(applied.unwrap(), 0);

        let err = apply_overrides(
            &mut draft,
            vec![(OsString::from("RESEARCHER_LLM_MODEL"), bad())],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarError { .. }));
    }
}

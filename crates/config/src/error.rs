//! Error types for settings loading, validation and persistence

pub mod format;

use std::path::PathBuf;
use thiserror::Error;

pub use format::ErrorFormatter;

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading, validating or saving settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file is not valid YAML
    #[error("Invalid YAML in config file {path}{location}:\n{message}\n{context}")]
    YamlError {
        path: PathBuf,
        location: String,
        message: String,
        context: String,
    },

    /// Settings file could not be read
    #[error("Error loading config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Discovered dotenv file could not be parsed
    #[error("Failed to load environment file {path}: {message}")]
    DotenvError { path: PathBuf, message: String },

    /// Document or section is not a mapping
    #[error("Invalid configuration structure at {field}: {message}")]
    InvalidStructure { field: String, message: String },

    /// Value has the wrong type for its field
    #[error("{field} expects {expected}, got {found}")]
    InvalidType {
        field: String,
        expected: String,
        found: String,
    },

    /// Invalid enum value
    #[error("Invalid value '{value}' for {field}\n  Valid options: {options}\n  Hint: {hint}")]
    InvalidEnum {
        field: String,
        value: String,
        options: String,
        hint: String,
    },

    /// Value out of valid range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Invalid integer value
    #[error("{field} must be > {min}, got {value}")]
    InvalidInteger { field: String, value: u64, min: u64 },

    /// Environment variable parsing error
    #[error("Failed to parse environment variable {var}: {message}")]
    EnvVarError { var: String, message: String },

    /// Directory bootstrap failed
    #[error("Failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be written
    #[error("Failed to write config file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be rendered as YAML
    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] serde_yaml::Error),
}

impl ConfigError {
    /// Create an invalid enum error with a suggestion
    pub fn invalid_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let value = value.into();
        let hint = Self::suggest_option(&value, options);
        Self::InvalidEnum {
            field: field.into(),
            value,
            options: options.join(", "),
            hint,
        }
    }

    /// Create a type mismatch error
    pub fn invalid_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a YAML error from serde_yaml::Error
    pub fn from_yaml_error(
        err: serde_yaml::Error,
        content: &str,
        path: impl Into<PathBuf>,
    ) -> Self {
        let (location, context) = extract_yaml_context(&err, content);
        Self::YamlError {
            path: path.into(),
            location,
            message: err.to_string(),
            context,
        }
    }

    /// Name of the offending field, for errors that carry one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidStructure { field, .. }
            | Self::InvalidType { field, .. }
            | Self::InvalidEnum { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidInteger { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Suggest the closest option by edit distance
    fn suggest_option(input: &str, options: &[&str]) -> String {
        let input_lower = input.to_lowercase();
        let closest = options
            .iter()
            .min_by_key(|opt| Self::distance(&input_lower, &opt.to_lowercase()));

        match closest {
            Some(opt) if Self::distance(&input_lower, &opt.to_lowercase()) <= 3 => {
                format!("Did you mean '{}'?", opt)
            }
            _ => "Check your configuration file".to_string(),
        }
    }

    /// Levenshtein distance
    fn distance(a: &str, b: &str) -> usize {
        let b_chars: Vec<char> = b.chars().collect();
        let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();

        for (i, a_char) in a.chars().enumerate() {
            let mut curr_row = vec![i + 1];
            for (j, b_char) in b_chars.iter().enumerate() {
                let cost = usize::from(a_char != *b_char);
                let best = (curr_row[j] + 1)
                    .min(prev_row[j + 1] + 1)
                    .min(prev_row[j] + cost);
                curr_row.push(best);
            }
            prev_row = curr_row;
        }

        *prev_row.last().unwrap_or(&0)
    }
}

/// Extract a line marker and a few lines of source around a YAML error
fn extract_yaml_context(err: &serde_yaml::Error, content: &str) -> (String, String) {
    if let Some(loc) = err.location() {
        let line_num = loc.line();
        let lines: Vec<&str> = content.lines().collect();

        if line_num > 0 && line_num <= lines.len() {
            let start = line_num.saturating_sub(2);
            let end = (line_num + 1).min(lines.len());

            let context = lines[start..end]
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let num = start + i + 1;
                    if num == line_num {
                        format!("→ {:3} | {}", num, line)
                    } else {
                        format!("  {:3} | {}", num, line)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");

            return (format!(" at line {}", line_num), context);
        }
    }

    (String::new(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggests_close_option() {
        let err = ConfigError::invalid_enum("llm.provider", "opnai", &["gemini", "openai"]);
        match err {
            ConfigError::InvalidEnum { hint, options, .. } => {
                assert_eq!(hint, "Did you mean 'openai'?");
                assert_eq!(options, "gemini, openai");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_suggestion_for_distant_value() {
        let err = ConfigError::invalid_enum("mode", "invalid_mode", &["automatic", "manual"]);
        assert!(err.to_string().contains("Check your configuration file"));
    }

    #[test]
    fn test_distance() {
        assert_eq!(ConfigError::distance("kitten", "sitting"), 3);
        assert_eq!(ConfigError::distance("", "abc"), 3);
        assert_eq!(ConfigError::distance("same", "same"), 0);
    }

    #[test]
    fn test_yaml_error_mentions_file() {
        let content = "invalid: yaml: content: [";
        let err = serde_yaml::from_str::<serde_yaml::Value>(content).unwrap_err();
        let err = ConfigError::from_yaml_error(err, content, "settings.yaml");
        let message = err.to_string();
        assert!(message.starts_with("Invalid YAML in config file settings.yaml"));
    }

    #[test]
    fn test_field_accessor() {
        let err = ConfigError::invalid_type("llm.max_tokens", "an integer", "a list");
        assert_eq!(err.field(), Some("llm.max_tokens"));
    }
}

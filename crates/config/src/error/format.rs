//! Terminal rendering for settings errors

use crate::error::ConfigError;
use std::fmt;
use yansi::Paint;

/// Format error with colors and context
#[derive(Debug)]
pub struct ErrorFormatter<'a> {
    error: &'a ConfigError,
    use_colors: bool,
}

impl<'a> ErrorFormatter<'a> {
    /// Create a formatter that colors output when stderr is a terminal
    pub fn new(error: &'a ConfigError) -> Self {
        Self {
            error,
            use_colors: supports_color(),
        }
    }

    /// Create a formatter that never emits escape codes
    pub fn plain(error: &'a ConfigError) -> Self {
        Self {
            error,
            use_colors: false,
        }
    }

    pub fn format(&self) -> String {
        if self.use_colors {
            self.format_colored()
        } else {
            self.format_plain()
        }
    }

    fn format_colored(&self) -> String {
        let cross = "✗".red().bold();
        match self.error {
            ConfigError::InvalidEnum {
                field,
                value,
                options,
                hint,
            } => {
                let value_str = format!("'{}'", value);
                format!(
                    "{} Invalid value {} for {}\n  {}: {}\n  {}: {}",
                    cross,
                    value_str.yellow(),
                    field.cyan(),
                    "Valid options".bold(),
                    options,
                    "Hint".bold(),
                    hint.green()
                )
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                let value_str = value.to_string();
                format!(
                    "{} {} must be between {} and {}, got {}",
                    cross,
                    field.cyan(),
                    min.green(),
                    max.green(),
                    value_str.red()
                )
            }
            ConfigError::InvalidInteger { field, value, min } => {
                format!(
                    "{} {} must be > {}, got {}",
                    cross,
                    field.cyan(),
                    min.green(),
                    value.red()
                )
            }
            ConfigError::InvalidType {
                field,
                expected,
                found,
            } => {
                format!(
                    "{} {} expects {}, got {}",
                    cross,
                    field.cyan(),
                    expected.green(),
                    found.yellow()
                )
            }
            ConfigError::YamlError {
                path,
                location,
                message,
                context,
            } => {
                let path_str = path.display().to_string();
                format!(
                    "{} Invalid YAML in {}{}\n  {}\n{}",
                    cross,
                    path_str.yellow(),
                    location,
                    message,
                    context
                )
            }
            _ => format!("{} {}", cross, self.format_plain()),
        }
    }

    fn format_plain(&self) -> String {
        self.error.to_string()
    }
}

/// Check if terminal supports colors
fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

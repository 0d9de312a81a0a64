//! Secret values that must never be persisted or logged

use std::fmt;

/// A secret string such as a provider API key
///
/// `Secret` deliberately does not implement `Serialize`, so any settings
/// field holding one has to be marked `#[serde(skip_serializing)]`.
/// `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(\"***\")")
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let secret = Secret::new("sk-live-123");
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("sk-live-123"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_expose() {
        assert_eq!(Secret::from("abc").expose(), "abc");
    }
}

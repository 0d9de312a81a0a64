//! Dotenv file discovery

use crate::{error::ConfigError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Candidate dotenv files, probed in order
pub const DEFAULT_ENV_FILES: [&str; 3] = [".env", ".taskmaster/.env", "../.env"];

/// Load the first existing file from `candidates` into the process
/// environment
///
/// Variables already present in the environment are left alone. Returns the
/// file that was loaded, if any.
pub fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Result<Option<PathBuf>> {
    for candidate in candidates {
        let path = candidate.as_ref();
        if !path.is_file() {
            continue;
        }

        dotenvy::from_path(path).map_err(|e| ConfigError::DotenvError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded environment file");
        return Ok(Some(path.to_path_buf()));
    }

    debug!("no environment file found");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_none_found() {
        let dir = tempdir().unwrap();
        let missing = [dir.path().join(".env")];
        assert!(load_first(&missing).unwrap().is_none());
    }

    #[test]
    fn test_first_existing_wins_and_keeps_existing_vars() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.env");
        let second = dir.path().join("second.env");
        fs::write(
            &first,
            "DOTENV_PROBE_A=from-first\nDOTENV_PROBE_KEEP=overwritten\n",
        )
        .unwrap();
        fs::write(&second, "DOTENV_PROBE_B=from-second\n").unwrap();
        std::env::set_var("DOTENV_PROBE_KEEP", "original");

        let candidates = [dir.path().join("missing.env"), first.clone(), second];
        let loaded = load_first(&candidates).unwrap();

        assert_eq!(loaded, Some(first));
        assert_eq!(
            std::env::var("DOTENV_PROBE_A").as_deref(),
            Ok("from-first")
        );
        assert!(std::env::var("DOTENV_PROBE_B").is_err());
        assert_eq!(
            std::env::var("DOTENV_PROBE_KEEP").as_deref(),
            Ok("original")
        );

        for key in [
            "DOTENV_PROBE_A",
            "DOTENV_PROBE_KEEP",
        ] {
            std::env::remove_var(key);
        }
    }
}

use anyhow::{Context, Result};
use researcher_config::SettingsLoader;
use tracing::info;

pub fn handle_init(loader: &SettingsLoader, force: bool) -> Result<()> {
    loader
        .ensure_directories()
        .context("Failed to create data directories")?;
    for dir in loader.settings().data.required_dirs() {
        println!("Directory ready: {}", dir);
    }

    let path = loader.config_path();
    if path.exists() && !force {
        info!(path = %path.display(), "settings file exists, leaving it alone");
        println!(
            "Settings file already exists: {} (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    let written = loader.save()?;
    println!("Wrote settings to {}", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use researcher_config::SettingsBuilder;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const EXISTING: &str = "# hand-edited\nmode: manual\n";

    fn loader_in(dir: &Path) -> SettingsLoader {
        let mut loader = SettingsBuilder::new()
            .with_file(dir.join("config.yaml"))
            .without_env_files()
            .with_env_overrides(false)
            .build()
            .unwrap();

        let data = &mut loader.settings_mut().data;
        data.output_dir = dir.join("output").to_str().unwrap().into();
        data.cache_dir = dir.join("cache").to_str().unwrap().into();
        data.mindmap_csv_path = dir.join("data").join("map.csv").to_str().unwrap().into();
        loader
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, EXISTING).unwrap();

        handle_init(&loader_in(dir.path()), false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), EXISTING);
        assert!(dir.path().join("output").is_dir());
        assert!(dir.path().join("cache").is_dir());
        assert!(dir.path().join("data").is_dir());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, EXISTING).unwrap();

        handle_init(&loader_in(dir.path()), true).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("hand-edited"));
        assert!(written.contains("mode: manual"));
        assert!(written.starts_with("llm:\n"));
    }

    #[test]
    fn test_init_writes_missing_file() {
        let dir = tempdir().unwrap();
        handle_init(&loader_in(dir.path()), false).unwrap();
        assert!(dir.path().join("config.yaml").is_file());
    }
}

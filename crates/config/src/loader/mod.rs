//! Settings loading, access and persistence

pub mod dotenv;
pub mod draft;
pub mod env;
pub mod file;
pub mod overlay;

use crate::{error::ConfigError, LlmSettings, Provider, Result, Settings};
use draft::Draft;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings file used when none is given
pub const DEFAULT_CONFIG_PATH: &str = ".taskmaster/config.yaml";

/// Builder for loading settings
///
/// Sources are applied in a fixed order:
/// defaults < dotenv file < settings file < `RESEARCHER_*` overrides,
/// followed by validation.
///
/// # Example
///
/// ```no_run
/// use researcher_config::SettingsBuilder;
///
/// let loader = SettingsBuilder::new()
///     .with_file("research.yaml")
///     .without_env_files()
///     .build()?;
/// println!("model: {}", loader.settings().llm.model);
/// # Ok::<(), researcher_config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    config_path: PathBuf,
    env_files: Vec<PathBuf>,
    env_overrides: bool,
}

impl SettingsBuilder {
    /// Start from the default settings path and dotenv candidates
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            env_files: dotenv::DEFAULT_ENV_FILES.iter().map(PathBuf::from).collect(),
            env_overrides: true,
        }
    }

    /// Read settings from `path` instead of the default location
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = path.as_ref().to_path_buf();
        self
    }

    /// Replace the dotenv candidates; the first existing one is loaded
    pub fn with_env_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.env_files = files.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        self
    }

    /// Skip dotenv discovery entirely
    pub fn without_env_files(mut self) -> Self {
        self.env_files.clear();
        self
    }

    /// Enable or disable `RESEARCHER_*` overrides (enabled by default)
    pub fn with_env_overrides(mut self, enabled: bool) -> Self {
        self.env_overrides = enabled;
        self
    }

    /// Load, merge and validate
    pub fn build(self) -> Result<SettingsLoader> {
        let mut draft = Draft::new();

        dotenv::load_first(self.env_files.as_slice())?;

        if let Some(doc) = file::read_document(&self.config_path)? {
            overlay::apply_document(&mut draft, &doc)?;
            debug!(path = %self.config_path.display(), "applied settings file");
        }

        if self.env_overrides {
            env::apply_process_overrides(&mut draft)?;
        }

        let settings = draft.finish()?;

        Ok(SettingsLoader {
            config_path: self.config_path,
            settings,
        })
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated settings together with the file they came from
///
/// Construct one at startup and hand `&Settings` to whatever needs it.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    config_path: PathBuf,
    settings: Settings,
}

impl SettingsLoader {
    /// Load from `path`, or [`DEFAULT_CONFIG_PATH`] when `None`
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Load from [`DEFAULT_CONFIG_PATH`]
    pub fn load() -> Result<Self> {
        SettingsBuilder::new().build()
    }

    /// Load from a specific settings file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        SettingsBuilder::new().with_file(path).build()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access; changes are not re-validated
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// File the settings were read from, and the default save target
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Look up the API key for a provider by name
    ///
    /// Reads the environment on every call. Unknown providers and unset
    /// variables both yield `None`.
    pub fn api_key(&self, provider: &str) -> Option<String> {
        provider.parse::<Provider>().ok()?.api_key()
    }

    /// LLM settings for `provider` (the configured one when `None`) with
    /// its API key resolved from the environment
    pub fn llm_settings(&self, provider: Option<Provider>) -> LlmSettings {
        let llm = &self.settings.llm;
        let provider = provider.unwrap_or(llm.provider);

        LlmSettings {
            provider,
            model: llm.model.clone(),
            api_key: provider.api_key().map(Into::into),
            base_url: llm.base_url.clone(),
            max_tokens: llm.max_tokens,
            temperature: llm.temperature,
            timeout: llm.timeout,
        }
    }

    /// Create the output, cache and index directories if missing
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in self.settings.data.required_dirs() {
            fs::create_dir_all(dir).map_err(|e| ConfigError::DirectoryError {
                path: dir.as_std_path().to_path_buf(),
                source: e,
            })?;
            debug!(path = %dir, "ensured directory");
        }
        Ok(())
    }

    /// Render the settings as YAML, without secrets or unset values
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.settings)?)
    }

    /// Write the settings to [`Self::config_path`]
    pub fn save(&self) -> Result<PathBuf> {
        self.save_to(&self.config_path)
    }

    /// Write the settings to `path`, creating its parent directory
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref();
        let yaml = self.to_yaml()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        fs::write(path, yaml).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!(path = %path.display(), "saved settings");
        Ok(path.to_path_buf())
    }
}

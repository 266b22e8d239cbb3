use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "mdx.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config for {config_path}: {source}")]
    SerializeError {
        config_path: PathBuf,
        source: toml::ser::Error,
    },

    #[error("Invalid include pattern {pattern}: {source}")]
    PatternError {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read source {path}: {source}")]
    SourceReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder holding the markdown sources, relative to the project root.
    pub base_folder: PathBuf,
    /// Document converted by default, relative to `base_folder`.
    pub entry: PathBuf,
    pub output_folder: PathBuf,
    /// Glob matched under `base_folder` by `sources`.
    pub include: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_folder: PathBuf::from("src/content"),
            entry: PathBuf::from("blog.md"),
            output_folder: PathBuf::from("dist"),
            include: "**/*.md".to_string(),
        }
    }
}

/// What `initialize` had to create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOutcome {
    pub config_created: bool,
    pub base_folder_created: bool,
}

impl InitOutcome {
    pub fn created_anything(&self) -> bool {
        self.config_created || self.base_folder_created
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.base_folder = Self::expand_path(&config.base_folder).unwrap_or(config.base_folder);
        config.output_folder =
            Self::expand_path(&config.output_folder).unwrap_or(config.output_folder);

        Ok(Some(config))
    }

    /// Loads `root/mdx.toml`, falling back to defaults when it is absent.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(Self::config_path(root))?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::WriteError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|source| ConfigError::SerializeError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        std::fs::write(config_path, content).map_err(|source| ConfigError::WriteError {
            path: config_path.to_path_buf(),
            source,
        })
    }

    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    pub fn base_dir(&self, root: &Path) -> PathBuf {
        resolve(root, &self.base_folder)
    }

    pub fn entry_path(&self, root: &Path) -> PathBuf {
        self.base_dir(root).join(&self.entry)
    }

    pub fn output_dir(&self, root: &Path) -> PathBuf {
        resolve(root, &self.output_folder)
    }

    /// Every file under the base folder matching `include`, sorted.
    pub fn sources(&self, root: &Path) -> Result<Vec<PathBuf>, ConfigError> {
        let pattern = self
            .base_dir(root)
            .join(&self.include)
            .to_string_lossy()
            .into_owned();
        let paths = glob::glob(&pattern).map_err(|source| ConfigError::PatternError {
            pattern: pattern.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| ConfigError::SourceReadError {
                path: e.path().to_path_buf(),
                source: e.into_error(),
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Scaffolds a project under `root`: writes the default `mdx.toml` when it is
/// missing and creates the configured base folder.
///
/// Running it again on an initialized project creates nothing.
pub fn initialize(root: &Path) -> Result<InitOutcome, ConfigError> {
    let mut outcome = InitOutcome::default();
    let config_path = Config::config_path(root);

    let config = match Config::load_from_path(&config_path)? {
        Some(config) => config,
        None => {
            let config = Config::default();
            config.save_to_path(&config_path)?;
            log::info!("configuration file created: {}", config_path.display());
            outcome.config_created = true;
            config
        }
    };

    let base_dir = config.base_dir(root);
    if !base_dir.exists() {
        std::fs::create_dir_all(&base_dir).map_err(|source| ConfigError::WriteError {
            path: base_dir.clone(),
            source,
        })?;
        log::info!("content folder created: {}", base_dir.display());
        outcome.base_folder_created = true;
    }

    Ok(outcome)
}

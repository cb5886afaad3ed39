use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use scrambl_core::DEFAULT_BASE_URL;

use crate::cli::Cli;
use crate::constants::APP_DIR;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScramblConfig {
    #[serde(default)]
    pub words: WordsSection,
    #[serde(default)]
    pub links: LinksSection,
    #[serde(default)]
    pub contacts: ContactsSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WordsSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinksSection {
    pub base_url: String,
}

impl Default for LinksSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContactsSection {
    pub path: Option<String>,
}

impl ScramblConfig {
    /// Config with every path spelled out.
    pub fn with_defaults() -> anyhow::Result<Self> {
        Ok(Self {
            words: WordsSection {
                path: Some(default_words_path()?.to_string_lossy().to_string()),
            },
            links: LinksSection::default(),
            contacts: ContactsSection {
                path: Some(default_contacts_path()?.to_string_lossy().to_string()),
            },
        })
    }
}

/// Effective settings after merging flags, environment, config file and
/// defaults, in that order of precedence.
#[derive(Debug, Serialize)]
pub struct Settings {
    pub config_path: PathBuf,
    pub words_path: PathBuf,
    pub base_url: String,
    pub contacts_path: PathBuf,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        let config = if config_path.exists() {
            read_config(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            ScramblConfig::default()
        };

        let words_path = match (&cli.words, config.words.path) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => PathBuf::from(path),
            (None, None) => default_words_path()?,
        };
        let contacts_path = match (&cli.contacts, config.contacts.path) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => PathBuf::from(path),
            (None, None) => default_contacts_path()?,
        };
        let base_url = cli
            .base_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(config.links.base_url);

        Ok(Self {
            config_path,
            words_path,
            base_url,
            contacts_path,
        })
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_words_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("words.txt"))
}

pub fn default_contacts_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("contacts.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<ScramblConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &ScramblConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".config").join(APP_DIR))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join(APP_DIR))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::editor::EditorSettings;
use crate::model::{GenderOption, GenderOptions};
use crate::ui::action::parse_action;
use crate::util::paths::{config_path, default_export_dir};
use crate::view::DEFAULT_PAGE_SIZE;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Records per table page
    pub page_size: usize,
    /// Directory CSV exports are written to
    pub export_dir: PathBuf,
    /// Choices offered for the gender field
    pub genders: GenderOptions,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            export_dir: default_export_dir(),
            genders: GenderOptions::default(),
            keybindings: default_keybindings(),
        }
    }
}

/// A binding value: one key or a list of keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TomlKeys {
    One(String),
    Many(Vec<String>),
}

impl TomlKeys {
    fn iter(&self) -> impl Iterator<Item = &str> {
        let keys: Vec<&str> = match self {
            TomlKeys::One(key) => vec![key.as_str()],
            TomlKeys::Many(keys) => keys.iter().map(String::as_str).collect(),
        };
        keys.into_iter()
    }
}

/// TOML representation of the `[keys]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global bindings (`action = "key"`)
    #[serde(flatten)]
    pub global: HashMap<String, TomlKeys>,
    pub form: Option<HashMap<String, TomlKeys>>,
    pub search: Option<HashMap<String, TomlKeys>>,
    pub table: Option<HashMap<String, TomlKeys>>,
    pub edit: Option<HashMap<String, TomlKeys>>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub page_size: Option<usize>,
    pub export_dir: Option<PathBuf>,
    pub genders: Option<Vec<GenderOption>>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();
        parse_context_bindings(&mut config, KeyContext::Global, &self.global);

        let sections = [
            (KeyContext::Form, &self.form),
            (KeyContext::Search, &self.search),
            (KeyContext::Table, &self.table),
            (KeyContext::Edit, &self.edit),
        ];
        for (context, bindings) in sections {
            if let Some(bindings) = bindings {
                parse_context_bindings(&mut config, context, bindings);
            }
        }

        config
    }
}

/// Invalid entries are skipped with a warning so one typo does not
/// discard the whole file.
fn parse_context_bindings(
    config: &mut KeybindingConfig,
    context: KeyContext,
    bindings: &HashMap<String, TomlKeys>,
) {
    for (action_name, keys) in bindings {
        let Some(action) = parse_action(action_name) else {
            tracing::warn!(
                context = context.config_key(),
                action = %action_name,
                "Unknown action in keybinding config"
            );
            continue;
        };
        for key in keys.iter() {
            match parse_key_notation(key) {
                Ok(combo) => config.bind(context, combo, action.clone()),
                Err(e) => tracing::warn!(
                    context = context.config_key(),
                    action = %action_name,
                    key,
                    error = %e,
                    "Invalid key in keybinding config"
                ),
            }
        }
    }
}

impl Config {
    /// Load `~/.roster/config.toml`, writing the bundled example on first
    /// run. Errors are logged and the defaults used instead.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            Self::create_default_config(&path);
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Using default configuration");
                Config::default()
            }
        }
    }

    /// Load a specific config file, merging it over the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|e| match e {
            ParseFailure::Toml(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            ParseFailure::Invalid(msg) => ConfigError::Invalid(msg),
        })
    }

    /// Parse config file contents, merging them over the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents).map_err(|e| match e {
            ParseFailure::Toml(source) => ConfigError::Parse {
                path: PathBuf::from("<inline>"),
                source,
            },
            ParseFailure::Invalid(msg) => ConfigError::Invalid(msg),
        })
    }

    fn parse(contents: &str) -> Result<Self, ParseFailure> {
        let toml_config: TomlConfig = toml::from_str(contents).map_err(ParseFailure::Toml)?;
        let mut config = Config::default();

        if let Some(page_size) = toml_config.page_size {
            if page_size == 0 {
                return Err(ParseFailure::Invalid(
                    "page_size must be at least 1".to_string(),
                ));
            }
            config.page_size = page_size;
        }

        if let Some(dir) = toml_config.export_dir {
            config.export_dir = dir;
        }

        if let Some(options) = toml_config.genders {
            let genders = GenderOptions::new(options);
            if genders.is_empty() {
                return Err(ParseFailure::Invalid(
                    "at least one gender option is required".to_string(),
                ));
            }
            config.genders = genders;
        }

        if let Some(keys) = toml_config.keys {
            config.keybindings.merge(keys.to_keybinding_config());
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write default config");
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = dir;
        self
    }

    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            page_size: self.page_size,
            genders: self.genders.clone(),
        }
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(String),
}

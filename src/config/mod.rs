//! Project settings (`resconf.toml`) and validation.
pub mod toml_loader;
pub mod validation;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::platform::{Platform, ResourceType};

/// Name of the settings file at the project root.
pub const SETTINGS_FILE: &str = "resconf.toml";

/// Contents of `resconf.toml`; every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Document to reconcile, relative to the project root.
    pub config_xml: PathBuf,
    /// Prefix for catalog resource paths.
    pub resources_dir: String,
    /// Platforms to reconcile.
    pub platforms: Vec<Platform>,
    /// Resource types to reconcile.
    pub types: Vec<ResourceType>,
    /// Descriptor manifest replacing the built-in catalog.
    pub manifest: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_xml: PathBuf::from("config.xml"),
            resources_dir: "resources".to_string(),
            platforms: Platform::ALL.to_vec(),
            types: ResourceType::ALL.to_vec(),
            manifest: None,
        }
    }
}

/// Values given on the command line; each replaces the matching setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replaces [`Settings::config_xml`].
    pub config_xml: Option<PathBuf>,
    /// Replaces [`Settings::resources_dir`].
    pub resources_dir: Option<String>,
    /// Empty means "use the settings file".
    pub platforms: Vec<Platform>,
    /// Empty means "use the settings file".
    pub types: Vec<ResourceType>,
    /// Replaces [`Settings::manifest`].
    pub manifest: Option<PathBuf>,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project root every relative path is resolved against.
    pub root: PathBuf,
    /// Settings with overrides applied.
    pub settings: Settings,
}

impl Config {
    /// Load `resconf.toml` from `root`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be read or
    /// parsed.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let settings = toml_loader::load_config(&root.join(SETTINGS_FILE))?;
        Ok(Self {
            root: root.to_path_buf(),
            settings,
        })
    }

    /// Apply command-line overrides on top of the loaded settings.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        let settings = &mut self.settings;
        if let Some(config_xml) = overrides.config_xml {
            settings.config_xml = config_xml;
        }
        if let Some(resources_dir) = overrides.resources_dir {
            settings.resources_dir = resources_dir;
        }
        if !overrides.platforms.is_empty() {
            settings.platforms = overrides.platforms;
        }
        if !overrides.types.is_empty() {
            settings.types = overrides.types;
        }
        if overrides.manifest.is_some() {
            settings.manifest = overrides.manifest;
        }
        self
    }

    /// Absolute location of the document to reconcile.
    #[must_use]
    pub fn config_xml_path(&self) -> PathBuf {
        self.root.join(&self.settings.config_xml)
    }

    /// Absolute location of the descriptor manifest, if one is configured.
    #[must_use]
    pub fn manifest_path(&self) -> Option<PathBuf> {
        self.settings.manifest.as_ref().map(|m| self.root.join(m))
    }
}

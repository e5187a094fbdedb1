//! Site configuration.
//!
//! Defaults cover the whole site; a TOML file and a handful of `FOLIO_*`
//! environment variables patch over them. Load order: explicit `--config`
//! path, then `FOLIO_CONFIG`, then the user config dir. A missing file is
//! not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub owner: OwnerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerConfig {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: "Al-Amin".to_string(),
            tagline: "Full Stack Developer".to_string(),
            email: "md.alamin.coding@gmail.com".to_string(),
            location: "Dhaka, Bangladesh".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Dark palette by default, matching the site's initial theme toggle.
    pub dark: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { dark: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Sink for accepted contact messages. Only "log" ships.
    pub sink: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            sink: "log".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("FOLIO_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("folio/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| FolioError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| FolioError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(owner) = patch.owner {
            if let Some(name) = owner.name {
                self.owner.name = name;
            }
            if let Some(tagline) = owner.tagline {
                self.owner.tagline = tagline;
            }
            if let Some(email) = owner.email {
                self.owner.email = email;
            }
            if let Some(location) = owner.location {
                self.owner.location = location;
            }
        }
        if let Some(theme) = patch.theme {
            if let Some(dark) = theme.dark {
                self.theme.dark = dark;
            }
        }
        if let Some(delivery) = patch.delivery {
            if let Some(sink) = delivery.sink {
                self.delivery.sink = sink;
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("FOLIO_OWNER_NAME") {
            self.owner.name = name;
        }
        if let Ok(theme) = std::env::var("FOLIO_THEME") {
            self.theme.dark = theme != "light";
        }
    }
}

/// Partial config as read from disk; every field optional so a file can
/// override a single key without restating the rest.
#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    owner: Option<OwnerPatch>,
    theme: Option<ThemePatch>,
    delivery: Option<DeliveryPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct OwnerPatch {
    name: Option<String>,
    tagline: Option<String>,
    email: Option<String>,
    location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ThemePatch {
    dark: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct DeliveryPatch {
    sink: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_dark_log_sink() {
        let config = SiteConfig::default();
        assert!(config.theme.dark);
        assert_eq!(config.delivery.sink, "log");
        assert_eq!(config.owner.name, "Al-Amin");
    }

    #[test]
    fn explicit_file_patches_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[owner]\nname = \"Jane\"\n\n[theme]\ndark = false\n").unwrap();

        let config = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config.owner.name, "Jane");
        // Unpatched keys keep their defaults.
        assert_eq!(config.owner.tagline, "Full Stack Developer");
        assert!(!config.theme.dark);
    }

    #[test]
    fn missing_explicit_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.owner.name, "Al-Amin");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "owner = not toml").unwrap();

        let err = SiteConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }
}

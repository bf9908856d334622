use crate::settings::{Keymap, Settings};
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub keymap: Keymap,
    filepath: PathBuf,
}

/// On-disk shape of configuration.json. Missing sections or fields fall
/// back to defaults, so a hand-edited partial file stays valid.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(rename = "Setting", default)]
    settings: Settings,
    #[serde(rename = "Keymap", default)]
    keymap: Keymap,
}

impl Config {
    pub fn new() -> Result<Self> {
        let prefix = get_app_data_prefix()?;
        let filepath = prefix.join("configuration.json");

        if filepath.exists() {
            return Self::load_from(filepath);
        }

        // Save initial config if it doesn't exist
        let config = Self {
            settings: Settings::default(),
            keymap: Keymap::default(),
            filepath,
        };
        config.save()?;
        Ok(config)
    }

    /// Load configuration from a custom path (the -c flag).
    pub fn load_from(filepath: PathBuf) -> Result<Self> {
        let mut settings = Settings::default();
        let mut keymap = Keymap::default();

        if filepath.exists() {
            let config_str = fs::read_to_string(&filepath)?;
            match serde_json::from_str::<ConfigFile>(&config_str) {
                Ok(file) => {
                    settings.merge(file.settings);
                    keymap.merge(file.keymap);
                }
                Err(err) => {
                    crate::logging::warn(format!(
                        "Ignoring malformed configuration {}: {}",
                        filepath.display(),
                        err
                    ));
                }
            }
        }

        Ok(Self {
            settings,
            keymap,
            filepath,
        })
    }

    /// Defaults without touching the filesystem.
    pub fn with_defaults() -> Self {
        Self {
            settings: Settings::default(),
            keymap: Keymap::default(),
            filepath: PathBuf::from("configuration.json"),
        }
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        let file = ConfigFile {
            settings: self.settings.clone(),
            keymap: self.keymap.clone(),
        };
        let config_str = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.filepath.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.filepath, config_str)?;
        Ok(())
    }

    /// Get the configuration file path
    pub fn filepath(&self) -> &PathBuf {
        &self.filepath
    }
}

pub fn get_app_data_prefix() -> Result<PathBuf> {
    if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(config_home).join("tutui");
        return Ok(path);
    } else if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home.clone()).join(".config").join("tutui");
        if path.exists() {
            return Ok(path);
        } else {
            return Ok(PathBuf::from(home).join(".tutui"));
        }
    } else if let Some(user_profile) = std::env::var_os("USERPROFILE") {
        return Ok(PathBuf::from(user_profile).join(".tutui"));
    }

    Err(eyre::eyre!(
        "Could not determine application data directory"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(dir.path().join("nope.json")).unwrap();
        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.keymap, Keymap::default());
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configuration.json");
        fs::write(
            &path,
            r#"{"Setting": {"narrow_width": 70}, "Keymap": {"quit": "x"}}"#,
        )
        .unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.settings.narrow_width, 70);
        assert_eq!(config.settings.sidebar_width, 32);
        assert_eq!(config.keymap.quit, "x");
        assert_eq!(config.keymap.help, "?");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("configuration.json");

        let mut config = Config {
            settings: Settings::default(),
            keymap: Keymap::default(),
            filepath: path.clone(),
        };
        config.settings.narrow_width = 100;
        config.save().unwrap();

        let reloaded = Config::load_from(path).unwrap();
        assert_eq!(reloaded.settings.narrow_width, 100);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configuration.json");
        fs::write(&path, "{not json").unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.settings, Settings::default());
    }
}

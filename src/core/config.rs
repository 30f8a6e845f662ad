use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserConfig {
    pub show_branch_header: bool,
    pub show_empty_groups: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            show_branch_header: true,
            show_empty_groups: true,
        }
    }
}

impl UserConfig {
    pub fn load_or_create() -> Result<Self> {
        Self::load_or_create_in(&config_directory())
    }

    pub fn load_or_create_in(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save_in(config_dir)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_in(&config_directory())
    }

    pub fn save_in(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }
}

/// Per-user config directory, shared by every repository.
fn config_directory() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::config_dir().unwrap_or_else(|| PathBuf::from("/tmp"))
        });
    base.join("commit-groups")
}

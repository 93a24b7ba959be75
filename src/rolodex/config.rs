use crate::directory::DEFAULT_PAGE_SIZE;
use crate::error::{RolodexError, Result};
use crate::store::fs::DEFAULT_SNAPSHOT_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rolodex, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Records per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Snapshot file, relative to the working directory unless absolute
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_snapshot_file() -> String {
    DEFAULT_SNAPSHOT_FILE.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            snapshot_file: default_snapshot_file(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RolodexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.validate()?;
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(RolodexError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.snapshot_file.trim().is_empty() {
            return Err(RolodexError::Config(
                "snapshot_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the snapshot file against `cwd`.
    pub fn snapshot_path(&self, cwd: &Path) -> PathBuf {
        let path = Path::new(&self.snapshot_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        }
    }
}

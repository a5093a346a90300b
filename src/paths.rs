use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const STATE_FILE_NAME: &str = "state";

pub struct AppPaths {
    pub config_file: PathBuf,
    pub cache_dir: PathBuf,
    pub state_file: PathBuf,
}

impl AppPaths {
    pub fn initialize() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "Comicview", "comicview")
            .context("Unable to determine XDG directories")?;
        Self::with_dirs(dirs.config_dir(), dirs.cache_dir())
    }

    /// Lays out the same files under explicit directories, creating them.
    pub fn with_dirs(config_dir: &Path, cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(config_dir).context("Failed to create config directory")?;
        std::fs::create_dir_all(cache_dir).context("Failed to create cache directory")?;
        Ok(Self {
            config_file: config_dir.join("config.toml"),
            cache_dir: cache_dir.to_path_buf(),
            state_file: cache_dir.join(STATE_FILE_NAME),
        })
    }
}

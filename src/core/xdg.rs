//! XDG Base Directory Support
//!
//! Resolves where kbseek reads its configuration and knowledge file
//! from, and where the file session backend keeps paging state.

use std::env;
use std::fs;
use std::path::PathBuf;

/// XDG directory structure for kbseek
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit KBSEEK_* env vars
    /// 2. XDG_* environment variables
    /// 3. XDG defaults (~/.config, ~/.local/share, ~/.local/state)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve("KBSEEK_CONFIG_DIR", "XDG_CONFIG_HOME", &[".config"]),
            data_dir: Self::resolve("KBSEEK_DATA_DIR", "XDG_DATA_HOME", &[".local", "share"]),
            state_dir: Self::resolve("KBSEEK_STATE_DIR", "XDG_STATE_HOME", &[".local", "state"]),
        }
    }

    fn resolve(own_var: &str, xdg_var: &str, home_default: &[&str]) -> PathBuf {
        if let Ok(dir) = env::var(own_var) {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var(xdg_var) {
            return PathBuf::from(xdg).join("kbseek");
        }

        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        for part in home_default {
            path.push(part);
        }
        path.join("kbseek")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // Explicit override wins
        if let Ok(file) = env::var("KBSEEK_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Default location of the knowledge file when none is configured
    pub fn content_file(&self) -> PathBuf {
        self.data_dir.join("knowledge.json")
    }

    /// Directory used by the file session backend
    pub fn sessions_dir(&self) -> PathBuf {
        self.state_dir.join("sessions")
    }

    /// Create the config, data and session directories
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        for dir in [self.config_dir.clone(), self.data_dir.clone(), self.sessions_dir()] {
            fs::create_dir_all(&dir)?;
            tracing::debug!("Using directory {:?}", dir);
        }
        Ok(())
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

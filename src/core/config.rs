//! Configuration management for kbseek.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{KbError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Knowledge file configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Path to the knowledge JSON file
    #[serde(default = "default_content_path")]
    pub path: PathBuf,

    /// Language used when a field is missing in the requested one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Languages an index is built for
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum query string length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Characters of description shown in a hit snippet
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,
}

/// Media asset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Root directory holding the media subdirectories
    #[serde(default = "default_media_root")]
    pub root: PathBuf,

    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    #[serde(default = "default_document_dir")]
    pub document_dir: String,

    /// Extensions (without dot) treated as images
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,

    /// Extensions (without dot) treated as documents
    #[serde(default = "default_document_extensions")]
    pub document_extensions: Vec<String>,
}

/// Which session backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackendKind {
    /// JSON files on disk, shared between processes
    File,
    /// In-process map, lost on exit
    Memory,
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_backend")]
    pub backend: SessionBackendKind,

    /// Time-to-live of a paging session in seconds
    #[serde(default = "default_session_ttl")]
    pub ttl_sec: u64,

    /// Prefix prepended to the user id to form the store key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Directory for the file backend (XDG state dir when unset)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Longest accepted session TTL (one year)
pub const MAX_SESSION_TTL_SEC: u64 = 365 * 24 * 60 * 60;

// Default value functions
fn default_content_path() -> PathBuf {
    PathBuf::from("./data/knowledge.json")
}

fn default_language() -> String {
    "fa".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["fa".to_string(), "en".to_string(), "it".to_string()]
}

fn default_max_query_length() -> usize {
    500
}

fn default_snippet_length() -> usize {
    100
}

fn default_media_root() -> PathBuf {
    PathBuf::from("./media")
}

fn default_image_dir() -> String {
    "images".to_string()
}

fn default_document_dir() -> String {
    "documents".to_string()
}

fn default_image_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png", "gif", "webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_document_extensions() -> Vec<String> {
    ["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_session_backend() -> SessionBackendKind {
    SessionBackendKind::File
}

fn default_session_ttl() -> u64 {
    3600
}

fn default_key_prefix() -> String {
    "pagination:".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_content_path(),
            default_language: default_language(),
            languages: default_languages(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_length: default_max_query_length(),
            snippet_length: default_snippet_length(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: default_media_root(),
            image_dir: default_image_dir(),
            document_dir: default_document_dir(),
            image_extensions: default_image_extensions(),
            document_extensions: default_document_extensions(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: default_session_backend(),
            ttl_sec: default_session_ttl(),
            key_prefix: default_key_prefix(),
            dir: None,
        }
    }
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_sec)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| KbError::ConfigError(format!("Failed to read config file: {e}")))?;

        let mut config: Config = toml::from_str(&contents)?;
        config.normalize();
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. KBSEEK_CONFIG env var
    /// 2. XDG config file (~/.config/kbseek/config.toml)
    /// 3. ./kbseek.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("KBSEEK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("kbseek.toml").exists() {
                Self::from_file("kbseek.toml")?
            } else {
                Self::default()
            }
        };

        // Fall back to the XDG data dir when the default relative path is absent
        if config.content.path == default_content_path() && !config.content.path.exists() {
            config.content.path = xdg.content_file();
        }

        if config.session.dir.is_none() {
            config.session.dir = Some(xdg.sessions_dir());
        }

        config.merge_env();
        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Content configuration
        if let Ok(path) = env::var("KBSEEK_CONTENT_PATH") {
            self.content.path = PathBuf::from(path);
        }
        if let Ok(lang) = env::var("KBSEEK_DEFAULT_LANGUAGE") {
            self.content.default_language = lang.trim().to_lowercase();
        }
        if let Ok(langs) = env::var("KBSEEK_LANGUAGES") {
            self.content.languages = langs
                .split(',')
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect();
        }

        // Search configuration
        if let Ok(max_query_len) = env::var("KBSEEK_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
        if let Ok(snippet_len) = env::var("KBSEEK_SNIPPET_LENGTH") {
            if let Ok(len) = snippet_len.parse() {
                self.search.snippet_length = len;
            }
        }

        // Media configuration
        if let Ok(root) = env::var("KBSEEK_MEDIA_ROOT") {
            self.media.root = PathBuf::from(root);
        }

        // Session configuration
        if let Ok(backend) = env::var("KBSEEK_SESSION_BACKEND") {
            match backend.trim().to_lowercase().as_str() {
                "file" => self.session.backend = SessionBackendKind::File,
                "memory" => self.session.backend = SessionBackendKind::Memory,
                other => tracing::warn!("Ignoring unknown KBSEEK_SESSION_BACKEND '{}'", other),
            }
        }
        if let Ok(ttl) = env::var("KBSEEK_SESSION_TTL_SEC") {
            if let Ok(t) = ttl.parse() {
                self.session.ttl_sec = t;
            }
        }
        if let Ok(dir) = env::var("KBSEEK_SESSION_DIR") {
            self.session.dir = Some(PathBuf::from(dir));
        }
    }

    /// Lower-case and trim language codes. Content keys are stored
    /// lower-case, so configured codes must match that form.
    pub fn normalize(&mut self) {
        self.content.default_language = self.content.default_language.trim().to_lowercase();
        let mut languages: Vec<String> = Vec::with_capacity(self.content.languages.len());
        for lang in &self.content.languages {
            let lang = lang.trim().to_lowercase();
            if !lang.is_empty() && !languages.contains(&lang) {
                languages.push(lang);
            }
        }
        self.content.languages = languages;
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.content.languages.is_empty() {
            return Err(KbError::ConfigError(
                "At least one language must be configured".to_string(),
            ));
        }

        if !self
            .content
            .languages
            .contains(&self.content.default_language)
        {
            return Err(KbError::ConfigError(format!(
                "Default language '{}' is not in languages {:?}",
                self.content.default_language, self.content.languages
            )));
        }

        if self.search.max_query_length == 0 {
            return Err(KbError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.search.snippet_length == 0 {
            return Err(KbError::ConfigError(
                "Snippet length must be non-zero".to_string(),
            ));
        }

        if self.media.image_extensions.is_empty() || self.media.document_extensions.is_empty() {
            return Err(KbError::ConfigError(
                "Media extension lists must not be empty".to_string(),
            ));
        }

        if let Some(ext) = self
            .media
            .image_extensions
            .iter()
            .find(|ext| self.media.document_extensions.contains(ext))
        {
            return Err(KbError::ConfigError(format!(
                "Extension '{ext}' is listed as both image and document"
            )));
        }

        if self.session.ttl_sec == 0 {
            return Err(KbError::ConfigError(
                "Session TTL must be non-zero".to_string(),
            ));
        }

        if self.session.ttl_sec > MAX_SESSION_TTL_SEC {
            return Err(KbError::ConfigError(format!(
                "Session TTL must be at most {MAX_SESSION_TTL_SEC}s"
            )));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Content file: {:?}", self.content.path);
        tracing::info!("  Languages: {:?}", self.content.languages);
        tracing::info!("  Default language: {}", self.content.default_language);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Snippet length: {}", self.search.snippet_length);
        tracing::info!("  Media root: {:?}", self.media.root);
        tracing::info!("  Session backend: {:?}", self.session.backend);
        tracing::info!("  Session TTL: {}s", self.session.ttl_sec);
        tracing::info!("  Session dir: {:?}", self.session.dir);
    }
}

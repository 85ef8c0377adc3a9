//! Detects media filenames embedded in content lines.

use crate::core::config::MediaConfig;
use crate::core::error::{KbError, Result};
use crate::core::types::MediaKind;
use regex::{Regex, RegexBuilder};
use std::path::PathBuf;

/// Finds the first recognized filename in a line and maps it to its
/// location under the media root.
#[derive(Debug, Clone)]
pub struct MediaLocator {
    pattern: Regex,
    config: MediaConfig,
}

impl MediaLocator {
    pub fn new(config: MediaConfig) -> Result<Self> {
        let extensions: Vec<String> = config
            .image_extensions
            .iter()
            .chain(config.document_extensions.iter())
            .map(|ext| regex::escape(ext.trim_start_matches('.')))
            .collect();

        // name segments joined by dots, then a known extension at a word end
        let source = format!(r"[\w\-]+(?:\.[\w\-]+)*?\.(?:{})\b", extensions.join("|"));
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| KbError::ConfigError(format!("Invalid media extensions: {e}")))?;

        Ok(Self { pattern, config })
    }

    /// First filename with a recognized extension in `line`
    pub fn find<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern.find(line).map(|m| m.as_str())
    }

    /// Media kind decided by the file extension
    pub fn kind(&self, filename: &str) -> Option<MediaKind> {
        let ext = filename.rsplit_once('.')?.1.to_lowercase();
        let matches = |list: &[String]| {
            list.iter()
                .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(&ext))
        };
        if matches(&self.config.image_extensions) {
            Some(MediaKind::Image)
        } else if matches(&self.config.document_extensions) {
            Some(MediaKind::Document)
        } else {
            None
        }
    }

    /// Where a file of this name is expected on disk
    pub fn path_for(&self, filename: &str) -> Option<PathBuf> {
        let subdir = match self.kind(filename)? {
            MediaKind::Image => &self.config.image_dir,
            MediaKind::Document => &self.config.document_dir,
        };
        Some(self.config.root.join(subdir).join(filename))
    }
}

// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Knowledge file covering the common shapes: full language maps,
/// plain-string fields, numeric ids and entries that must be skipped.
#[allow(dead_code)] // Used in integration tests
pub const STUDENT_KB: &str = r#"{
  "housing": [
    {
      "id": "contract",
      "title": {"en": "Housing Contract", "fa": "قرارداد مسکن", "it": "Contratto di affitto"},
      "description": {"en": "How to sign a rental contract.", "it": "Come firmare un contratto."},
      "subsections": [
        {
          "title": {"en": "Documents"},
          "content": {"en": ["Passport copy", "Template: contratto_modello.pdf"]}
        }
      ]
    },
    {
      "id": "insurance",
      "title": {"en": "Housing Insurance"},
      "description": {"en": "Insurance for your room."}
    }
  ],
  "visa": [
    {
      "id": 7,
      "title": {"fa": "اجازه اقامت"},
      "description": "مراحل دریافت اجازه اقامت",
      "subsections": [
        {"title": {"fa": "مدارک"}, "content": {"fa": ["کپی پاسپورت", "campus_map.png"]}}
      ]
    },
    {"title": {"en": "Entry without id"}}
  ],
  "broken": "not a list"
}"#;

/// A knowledge file and media tree in a temporary directory
#[allow(dead_code)] // Used in integration tests
pub struct TestKnowledgeBase {
    pub dir: TempDir,
}

impl TestKnowledgeBase {
    #[allow(dead_code)] // Used in integration tests
    pub fn new(json: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("knowledge.json"), json).expect("Failed to write kb");
        Self { dir }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn student() -> Self {
        Self::new(STUDENT_KB)
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn content_file(&self) -> PathBuf {
        self.dir.path().join("knowledge.json")
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn media_root(&self) -> PathBuf {
        self.dir.path().join("media")
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn sessions_dir(&self) -> PathBuf {
        self.dir.path().join("sessions")
    }

    /// Create `media/<subdir>/<name>`
    #[allow(dead_code)] // Used in integration tests
    pub fn add_media(&self, subdir: &str, name: &str) -> PathBuf {
        let dir = self.media_root().join(subdir);
        std::fs::create_dir_all(&dir).expect("Failed to create media dir");
        let path = dir.join(name);
        std::fs::write(&path, b"media").expect("Failed to write media");
        path
    }

    /// Replace the knowledge file contents
    #[allow(dead_code)] // Used in integration tests
    pub fn rewrite(&self, json: &str) {
        std::fs::write(self.content_file(), json).expect("Failed to rewrite kb");
    }
}

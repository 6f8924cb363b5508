//! Test helpers building on-disk catalogue and favorites fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Catalogue used by the command tests: one recent standard image, one
/// restricted image, and one archived image older than a year.
pub(super) const CATALOGUE_PAYLOAD: &str = r#"[
  {
    "id": "img-aurora",
    "title": "Aurora over the fjord",
    "description": "Green arcs above the water line.",
    "url": "https://images.example/aurora.jpg",
    "createdAt": "2024-05-01T10:00:00Z",
    "views": 1500,
    "likes": 150,
    "shares": 100
  },
  {
    "id": "img-vault",
    "title": "Vault door",
    "type": "restricted",
    "createdAt": "2026-06-10T08:30:00Z",
    "views": 2000,
    "likes": 50,
    "shares": 10
  },
  {
    "id": "img-archive",
    "title": "Archive print",
    "createdAt": "1998-03-20",
    "views": 5000,
    "likes": 500,
    "shares": 200
  }
]"#;

/// Temporary data directory holding a catalogue and a favorites file.
#[derive(Debug)]
pub(super) struct DataFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DataFiles {
    pub(super) fn new() -> Self {
        Self::with_favorites("[]")
    }

    pub(super) fn with_favorites(favorites_json: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        fs::write(root.join("catalogue.json").as_std_path(), CATALOGUE_PAYLOAD)
            .expect("write catalogue");
        fs::write(root.join("favorites.json").as_std_path(), favorites_json)
            .expect("write favorites");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalogue(&self) -> Utf8PathBuf {
        self.root.join("catalogue.json")
    }

    pub(super) fn favorites(&self) -> Utf8PathBuf {
        self.root.join("favorites.json")
    }

    pub(super) fn set_favorites(&self, json: &str) {
        fs::write(self.favorites().as_std_path(), json).expect("write favorites");
    }

    pub(super) fn read_favorites(&self) -> String {
        fs::read_to_string(self.favorites().as_std_path()).expect("read favorites")
    }
}

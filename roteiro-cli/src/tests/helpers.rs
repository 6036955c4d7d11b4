//! Test helpers for writing catalogue fixtures into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use roteiro_core::test_support::{numbered_pois, numbered_restaurants, poi};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Catalogue JSON with `pois` numbered sights and `restaurants` tables.
pub(super) fn numbered_catalogue(pois: usize, restaurants: usize) -> Value {
    json!({
        "pointsOfInterest": numbered_pois(pois),
        "restaurants": numbered_restaurants(restaurants),
    })
}

/// Catalogue JSON holding only the Eiffel Tower.
pub(super) fn paris_catalogue() -> Value {
    json!({
        "pointsOfInterest": [poi("Torre Eiffel")],
        "restaurants": [],
    })
}

pub(super) fn write_catalogue(path: &Utf8Path, catalogue: &Value) {
    let payload = serde_json::to_vec_pretty(catalogue).expect("serialise catalogue");
    write_utf8(path, &payload);
}

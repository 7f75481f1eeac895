use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const MANIFEST_NAME: &str = "manifest.json";

/// Checksum and size of one staged file. `sha256` is either a 64-char
/// lowercase hex digest or an `ERROR: <description>` marker for a file
/// that could not be read.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub sha256: String,
    pub size_bytes: u64,
}

impl FileRecord {
    pub fn is_error(&self) -> bool {
        self.sha256.starts_with("ERROR:")
    }
}

/// Snapshot of a stage directory. Fields are declared in alphabetical
/// order and `files` is a BTreeMap so the serialized JSON has sorted keys
/// at every level.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Manifest {
    pub files: BTreeMap<String, FileRecord>,
    pub timestamp: String,
    pub total_files: u64,
}

impl Manifest {
    pub fn new(timestamp: String, files: BTreeMap<String, FileRecord>) -> Self {
        let total_files = files.len() as u64;
        Manifest { files, timestamp, total_files }
    }
}

/// Stage timestamp: the portion of the root directory's name after the
/// first underscore (`stage_20250906_133751` -> `20250906_133751`), or
/// "unknown" when there is no underscore to split on. This is a naming
/// convention of the staging pipeline, not a clock reading.
pub fn stage_timestamp(root: &Path) -> String {
    root.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split_once('_'))
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Serialize `manifest` (pretty JSON, 2-space indent) to `manifest.json`
/// inside `root`, replacing any previous manifest. Returns the path
/// written.
pub fn write(manifest: &Manifest, root: &Path) -> Result<PathBuf> {
    let mpath = root.join(MANIFEST_NAME);
    let mut mf =
        File::create(&mpath).with_context(|| format!("create {}", mpath.display()))?;
    mf.write_all(serde_json::to_string_pretty(manifest)?.as_bytes())
        .with_context(|| format!("write {}", mpath.display()))?;
    Ok(mpath)
}

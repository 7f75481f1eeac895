use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One regular file discovered under the stage root.
#[derive(Clone, Debug)]
pub struct ScannedFile {
    /// Path relative to the root, `/`-separated.
    pub rel_path: String,
    pub abs_path: PathBuf,
}

/// Recursively list every regular file under `root`, sorted by relative
/// path so downstream output does not depend on filesystem enumeration
/// order. Entries that fail to stat during the walk are skipped; symlinks
/// are not followed (walkdir default).
pub fn discover(root: &Path) -> Result<Vec<ScannedFile>> {
    if !root.is_dir() {
        bail!("stage directory not found: {}", root.display());
    }
    let mut files: Vec<ScannedFile> = Vec::new();
    for ent in WalkDir::new(root).min_depth(1).into_iter().filter_map(|e| e.ok()) {
        if !ent.file_type().is_file() {
            continue;
        }
        let path = ent.path();
        let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
        files.push(ScannedFile {
            rel_path: rel.to_string_lossy().replace('\\', "/"),
            abs_path: path.to_path_buf(),
        });
    }
    files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    Ok(files)
}

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

use crate::checksum;
use crate::manifest::{self, FileRecord, Manifest};
use crate::scan;

/// Walk `root`, hash every regular file, and assemble the manifest.
/// Sequential by design: one file is opened, hashed, and closed before the
/// next. Per-file read failures land in the record as an `ERROR:` digest;
/// only a missing root aborts the run.
pub fn snapshot(root: &Path) -> Result<Manifest> {
    let scanned = scan::discover(root)?;
    let mut files: BTreeMap<String, FileRecord> = BTreeMap::new();
    for sf in scanned {
        let sha256 = checksum::record_digest(&sf.abs_path);
        let size_bytes = checksum::record_size(&sf.abs_path);
        files.insert(sf.rel_path, FileRecord { sha256, size_bytes });
    }
    Ok(Manifest::new(manifest::stage_timestamp(root), files))
}

/// Snapshot `root` and write the manifest into it. Returns the manifest
/// for reporting.
pub fn snapshot_to_manifest_file(root: &Path) -> Result<Manifest> {
    let m = snapshot(root)?;
    manifest::write(&m, root)?;
    Ok(m)
}

use stagemark_core::manifest::MANIFEST_NAME;
use stagemark_core::snapshot;
use std::fs::{self, File};

const SHA256_HI: &str = "8f434346648f6b96df89dda901c5176b10a6d83961dd3c1ac88b59b2dc327aa4";
const SHA256_BYE: &str = "b49f425a7e1f9cff3856329ada223f2f9d368f15a00cf48df16ca95986137fe8";

#[test]
fn snapshot_small_tree_records_paths_hashes_sizes() {
    let td = tempfile::tempdir().unwrap();
    let root = td.path().join("stage_20250906_133751");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "hi").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/b.txt"), "bye").unwrap();

    let mani = snapshot::snapshot_to_manifest_file(&root).unwrap();

    assert_eq!(mani.total_files, 2);
    assert_eq!(mani.files.len(), 2);
    assert_eq!(mani.timestamp, "20250906_133751");

    let a = &mani.files["a.txt"];
    assert_eq!(a.sha256, SHA256_HI);
    assert_eq!(a.size_bytes, 2);
    let b = &mani.files["sub/b.txt"];
    assert_eq!(b.sha256, SHA256_BYE);
    assert_eq!(b.size_bytes, 3);

    // Manifest landed inside the root and round-trips.
    let mpath = root.join(MANIFEST_NAME);
    assert!(mpath.exists());
    let reread: stagemark_core::manifest::Manifest =
        serde_json::from_reader(File::open(&mpath).unwrap()).unwrap();
    assert_eq!(reread.total_files, 2);
    assert_eq!(reread.files["a.txt"].sha256, SHA256_HI);
}

#[test]
fn snapshot_missing_root_fails_before_any_work() {
    let td = tempfile::tempdir().unwrap();
    let root = td.path().join("no_such_stage");
    let err = snapshot::snapshot(&root).expect_err("expected missing-root error");
    let msg = format!("{:#}", err);
    assert!(msg.contains("stage directory not found"), "unexpected error: {}", msg);
    assert!(!root.join(MANIFEST_NAME).exists());
}

#[test]
fn snapshot_empty_tree_yields_empty_manifest() {
    let td = tempfile::tempdir().unwrap();
    let root = td.path().join("stage_empty");
    fs::create_dir(&root).unwrap();
    let mani = snapshot::snapshot(&root).unwrap();
    assert_eq!(mani.total_files, 0);
    assert!(mani.files.is_empty());
    assert_eq!(mani.timestamp, "empty");
}

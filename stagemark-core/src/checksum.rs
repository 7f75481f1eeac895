use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Fixed read size for streaming hashes; files are never loaded whole.
pub const READ_CHUNK: usize = 4096;

/// Stream `path` through SHA-256 and return the lowercase hex digest.
pub fn sha256_file(path: &Path) -> std::io::Result<String> {
    let mut f = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; READ_CHUNK];
    loop {
        let n = f.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Digest for a manifest record. An unreadable file must not abort the
/// run, so I/O failures collapse to the `ERROR:` sentinel here and the
/// caller moves on to the next file.
pub fn record_digest(path: &Path) -> String {
    match sha256_file(path) {
        Ok(hex) => hex,
        Err(e) => format!("ERROR: {}", e),
    }
}

/// Best-effort size lookup; 0 when the file vanished mid-scan.
pub fn record_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use stagemark_core::snapshot;

#[derive(Parser)]
#[command(name = "stagemark", version, about = "Write a checksum manifest for a staged file tree")]
struct Cli {
    /// Stage directory to snapshot; manifest.json is written inside it
    stage_dir: PathBuf,
}

fn main() -> Result<()> {
    // Argument errors must exit 1 (clap defaults to 2); --help and
    // --version keep clap's normal behavior.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        use clap::error::ErrorKind;
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }
        let _ = err.print();
        std::process::exit(1);
    });
    let mani = snapshot::snapshot_to_manifest_file(&cli.stage_dir)?;
    println!(
        "Manifest written: {} file(s) -> {}",
        mani.total_files,
        cli.stage_dir.join(stagemark_core::manifest::MANIFEST_NAME).display()
    );
    Ok(())
}

//! pack-images: pack every image listed in a TOML manifest into one stream.
//!
//! All records are built in memory first; nothing is written if any payload
//! is missing.

use std::path::PathBuf;

use clap::Parser;

use fwbuild::Manifest;

/// Pack images listed in a manifest.
#[derive(Parser, Debug)]
struct Args {
    /// Manifest file (TOML).
    manifest: PathBuf,
}

fn main() {
    let args = Args::parse();
    fwbuild::init_logging();
    fwbuild::exit_on_error(run(args));
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = Manifest::load(&args.manifest)?;
    let written = manifest.pack()?;
    eprintln!(
        "wrote {} ({} images, {written} bytes)",
        manifest.output.display(),
        manifest.images.len()
    );
    Ok(())
}

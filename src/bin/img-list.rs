//! img-list: list the records of an image stream.
//!
//! Prints offset, size, type, version and the SHA-256 of each payload, or a
//! JSON array with `--json`.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use sha2::{Digest, Sha256};

use fwbuild::{ImageType, ImageVersion, RecordReader};

/// List records in an image file.
#[derive(Parser, Debug)]
struct Args {
    /// Image stream to inspect.
    path: PathBuf,
    /// Print the listing as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Listing {
    index: usize,
    offset: u64,
    size: u32,
    image_type: ImageType,
    version: ImageVersion,
    sha256: String,
}

fn main() {
    let args = Args::parse();
    fwbuild::init_logging();
    fwbuild::exit_on_error(run(args));
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut listing = Vec::new();
    for (index, record) in RecordReader::open(&args.path)?.enumerate() {
        let record = record?;
        listing.push(Listing {
            index,
            offset: record.offset,
            size: record.header.size,
            image_type: record.header.image_type,
            version: record.header.version,
            sha256: hex::encode(Sha256::digest(&record.payload)),
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        for entry in &listing {
            println!(
                "#{} @0x{:08x} {:>10} bytes  {:<10} v{}  {}",
                entry.index,
                entry.offset,
                entry.size,
                entry.image_type.to_string(),
                entry.version,
                entry.sha256
            );
        }
    }
    Ok(())
}

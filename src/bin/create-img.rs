//! create-img: frame a binary payload with a 16-byte image header and append
//! the record to an image stream.
//!
//! Header: magic `30 20 30 20`, zero checksum, LE payload size, image type,
//! version major/patch/sub. Running it repeatedly against one output
//! concatenates records.

use std::path::PathBuf;

use clap::Parser;

use fwbuild::ImageParams;

/// Append one framed image record to an output file.
#[derive(Parser, Debug)]
struct Args {
    /// Raw payload to pack.
    input: PathBuf,
    /// Version major (0-255).
    major: u64,
    /// Version patch (0-255).
    patch: u64,
    /// Version sub (0-255).
    sub: u64,
    /// Image type (0-255): 0 bootloader, 1 kernel A, 2 kernel B.
    image_type: u64,
    /// Image stream to append to (created if absent).
    output: PathBuf,
}

fn main() {
    let args = Args::parse();
    fwbuild::init_logging();
    fwbuild::exit_on_error(run(args));
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let params = ImageParams::from_raw(args.major, args.patch, args.sub, args.image_type)?;
    fwbuild::append_image(&args.input, &params, &args.output)?;
    Ok(())
}

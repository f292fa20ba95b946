//! autocfg: turn a `KEY=VALUE` config file into an include-guarded C header.
//!
//! `y`/`m` values become `1`/`2`; empty and `n` entries are left undefined.

use std::path::PathBuf;

use clap::Parser;

/// Generate autocfg.h from a config file.
#[derive(Parser, Debug)]
struct Args {
    /// Config file to read.
    input: PathBuf,
    /// Header file to write.
    output: PathBuf,
}

fn main() {
    let args = Args::parse();
    fwbuild::init_logging();
    fwbuild::exit_on_error(run(args));
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    fwbuild::header::generate(&args.input, &args.output)?;
    Ok(())
}

//! mkconfig: write a normalized settings file with build metadata.
//!
//! Emits CONFIG_VERSION_CODE, CONFIG_ARCH and CONFIG_BUILD_INFO, then one
//! line per config entry (`KEY = VALUE` or `# KEY is not set`).

use std::path::PathBuf;

use clap::Parser;

use fwbuild::{BuildInfo, Version};

/// Generate a settings file from a config file.
#[derive(Parser, Debug)]
struct Args {
    /// Major version (0-255).
    major: u64,
    /// Patch level (0-255).
    patch: u64,
    /// Sub level (0-255).
    sub: u64,
    /// Architecture name.
    arch: String,
    /// Config file to read.
    input: PathBuf,
    /// Settings file to write.
    output: PathBuf,
    /// Use this text for CONFIG_BUILD_INFO instead of the current local time.
    #[arg(long, value_name = "TEXT")]
    build_info: Option<String>,
}

fn main() {
    let args = Args::parse();
    fwbuild::init_logging();
    fwbuild::exit_on_error(run(args));
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let version = Version::from_components(args.major, args.patch, args.sub)?;
    let info = match args.build_info {
        Some(stamp) => BuildInfo::with_timestamp(version, args.arch, stamp),
        None => BuildInfo::now(version, args.arch),
    };
    fwbuild::settings::generate(&info, &args.input, &args.output)?;
    Ok(())
}

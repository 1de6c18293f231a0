use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod layout;
pub mod version;
pub mod watch;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode captured payload bytes into sensor values.
    Decode(DecodeArgs),
    /// Poll a device and print decoded readings.
    Watch(WatchArgs),
    /// Inspect a layout descriptor.
    Layout(LayoutArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Watch(args) => watch::run(args, format),
        Command::Layout(args) => layout::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Payload bytes as a hex string.
    #[arg(long, conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read payload bytes from a capture file.
    #[arg(long, conflicts_with = "hex")]
    pub file: Option<PathBuf>,
    /// Layout spec (f = float32, i = int32, x = pad byte).
    #[arg(long, default_value = "xffffiix")]
    pub layout: String,
    /// Treat the input as framed chunks and reassemble before decoding.
    #[arg(long)]
    pub framed: bool,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Device to read from (e.g. /dev/ttyACM0).
    pub device: PathBuf,
    /// Layout spec (f = float32, i = int32, x = pad byte).
    #[arg(long, default_value = "xffffiix")]
    pub layout: String,
    /// Treat each burst as framed chunks and reassemble before decoding.
    #[arg(long)]
    pub framed: bool,
    /// Idle delay between polls (e.g. 10ms, 1s).
    #[arg(long, default_value = "10ms")]
    pub interval: String,
    /// Exit after printing N readings.
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Layout spec to inspect. Defaults to the firmware layout.
    pub spec: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

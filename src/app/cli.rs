// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing.

use crate::application::service::TrackSource;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "\
gpxif - geotag photos and correct their local time from GPX tracks

USAGE:
    gpxif tag --images <DIR> (--gpx <FILE>... | --fetch) [OPTIONS]

OPTIONS:
    --images <DIR>     Directory of JPEG photos to update
    --gpx <FILE>       GPX track file; may be repeated
    --fetch            Download the track for the photos' dates from the
                       [track_source] endpoint in the config file
    --config <FILE>    Config file (default: <config dir>/gpxif/settings.toml)
    --dry-run          Report planned changes without writing anything
    -h, --help         Print this help

Set RUST_LOG (e.g. RUST_LOG=gpxif=debug) to change log verbosity.
";

/// Options of the `tag` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptions {
    pub images: PathBuf,
    pub source: TrackSource,
    pub config_path: Option<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Tag(TagOptions),
}

/// Parses process arguments, excluding the program name.
pub fn parse_args(args: Vec<OsString>) -> Result<Command> {
    let mut args = pico_args::Arguments::from_vec(args);
    let usage = |e: pico_args::Error| Error::Usage(e.to_string());

    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    match args.subcommand().map_err(usage)?.as_deref() {
        Some("tag") => {}
        Some(other) => return Err(Error::Usage(format!("unknown command '{other}'"))),
        None => return Err(Error::Usage("missing command".into())),
    }

    let images: PathBuf = args.value_from_str("--images").map_err(usage)?;
    let gpx_files: Vec<PathBuf> = args.values_from_str("--gpx").map_err(usage)?;
    let fetch = args.contains("--fetch");
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").map_err(usage)?;
    let dry_run = args.contains("--dry-run");

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Usage(format!("unexpected arguments: {remaining:?}")));
    }

    let source = match (gpx_files.is_empty(), fetch) {
        (false, false) => TrackSource::Files(gpx_files),
        (true, true) => TrackSource::Fetch,
        (false, true) => return Err(Error::Usage("--gpx and --fetch are exclusive".into())),
        (true, false) => return Err(Error::Usage("one of --gpx or --fetch is required".into())),
    };

    Ok(Command::Tag(TagOptions {
        images,
        source,
        config_path,
        dry_run,
    }))
}

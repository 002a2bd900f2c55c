use std::io::Read;
use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand};
use datauri_codec::CodecConfig;

use crate::exit::{io_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod lookup;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a file, URL, or text as a data URI.
    Encode(EncodeArgs),
    /// Decode a data URI and write its payload.
    Decode(DecodeArgs),
    /// Parse a data URI and print its metadata.
    Inspect(InspectArgs),
    /// Look up media types and extensions in the bundled table.
    Lookup(LookupArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, config: &CodecConfig, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, config, format),
        Command::Decode(args) => decode::run(args, config),
        Command::Inspect(args) => inspect::run(args, config, format),
        Command::Lookup(args) => lookup::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Read payload from file (media type inferred from its extension).
    #[arg(long, conflicts_with_all = ["url", "data"])]
    pub file: Option<PathBuf>,
    /// Fetch payload from a URL (requires the `http` feature).
    #[arg(long, conflicts_with_all = ["file", "data"])]
    pub url: Option<String>,
    /// Raw string payload. Without --file, --url, or --data, stdin is read.
    #[arg(long, conflicts_with_all = ["file", "url"])]
    pub data: Option<String>,
    /// Media type, overriding any inferred one.
    #[arg(long, value_name = "MIME")]
    pub media_type: Option<String>,
    /// Extra parameter as name=value (repeatable).
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_parameter)]
    pub params: Vec<(String, String)>,
    /// Force base64 encoding even for text/* media types.
    #[arg(long)]
    pub base64: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Data URI to decode, or `-` to read it from stdin.
    pub uri: String,
    /// Write the payload to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Data URI to inspect, or `-` to read it from stdin.
    pub uri: String,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("query").required(true).args(["extension", "media_type"])))]
pub struct LookupArgs {
    /// Find the media type for a file extension (exact match).
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
    /// Find the extension for a media type (substring match).
    #[arg(long, value_name = "MIME")]
    pub media_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_parameter(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{input}`")),
    }
}

/// Read the URI argument, taking it from stdin when it is `-`.
pub(crate) fn read_uri_arg(arg: &str) -> CliResult<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| io_error("failed reading stdin", err))?;
    let text = text.trim_end_matches(&['\r', '\n'][..]);
    if text.is_empty() {
        return Err(CliError::new(USAGE, "no data URI on stdin"));
    }
    Ok(text.to_string())
}

mod cmd;
mod exit;
mod logging;
mod output;

use clap::{Parser, ValueEnum};
use datauri_codec::{CodecConfig, LengthMode};

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeArg {
    Literal,
    Attribute,
    Tag,
}

impl From<ModeArg> for LengthMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Literal => LengthMode::Literal,
            ModeArg::Attribute => LengthMode::Attribute,
            ModeArg::Tag => LengthMode::Tag,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "datauri", version, about = "Encode and decode data: URIs")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        env = "DATAURI_LOG_LEVEL",
        default_value = "warn",
        global = true
    )]
    log_level: LogLevel,

    /// Enforce payload length limits and reject base64 outside the alphabet.
    #[arg(long, env = "DATAURI_STRICT", global = true)]
    strict: bool,

    /// Length ceiling applied with --strict.
    #[arg(long, value_name = "MODE", env = "DATAURI_MODE", default_value = "tag", global = true)]
    mode: ModeArg,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn codec_config(&self) -> CodecConfig {
        CodecConfig {
            strict: self.strict,
            mode: self.mode.into(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let config = cli.codec_config();
    tracing::debug!(
        strict = config.strict,
        mode = config.mode.as_str(),
        limit = config.mode.limit(),
        "codec configuration"
    );
    let result = cmd::run(cli.command, &config, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from([
            "datauri",
            "encode",
            "--data",
            "hello",
            "--media-type",
            "text/html",
            "--param",
            "charset=utf-8",
        ])
        .expect("encode args should parse");

        assert!(matches!(cli.command, Command::Encode(_)));
    }

    #[test]
    fn rejects_conflicting_input_args() {
        let err = Cli::try_parse_from([
            "datauri",
            "encode",
            "--data",
            "hello",
            "--file",
            "/tmp/x.txt",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn global_strict_and_mode_build_config() {
        let cli = Cli::try_parse_from([
            "datauri",
            "--strict",
            "--mode",
            "literal",
            "decode",
            "data:,x",
        ])
        .expect("decode args should parse");

        let config = cli.codec_config();
        assert!(config.strict);
        assert_eq!(config.mode, LengthMode::Literal);
    }

    #[test]
    fn lookup_requires_a_query() {
        let err = Cli::try_parse_from(["datauri", "lookup"]).expect_err("lookup needs a query");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}

use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use datauri_codec::DataUri;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ParameterOutput<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct InspectOutput<'a> {
    media_type: &'a str,
    parameters: Vec<ParameterOutput<'a>>,
    binary: bool,
    extension: Option<&'a str>,
    payload_size: usize,
    payload: String,
}

#[derive(Serialize)]
struct EncodeOutput<'a> {
    uri: &'a str,
    media_type: &'a str,
    binary: bool,
    payload_size: usize,
}

#[derive(Serialize)]
pub struct LookupOutput<'a> {
    pub query: &'a str,
    pub kind: &'static str,
    pub result: Option<&'static str>,
}

pub fn print_inspect(uri: &DataUri, format: OutputFormat) {
    let out = InspectOutput {
        media_type: uri.media_type(),
        parameters: uri
            .parameters()
            .iter()
            .map(|(name, value)| ParameterOutput { name, value })
            .collect(),
        binary: uri.is_binary(),
        extension: uri.extension(),
        payload_size: uri.payload().len(),
        payload: payload_preview(uri.payload()),
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => {
            let params = out
                .parameters
                .iter()
                .map(|p| format!("{}={}", p.name, p.value))
                .collect::<Vec<_>>()
                .join("; ");
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["MEDIA TYPE", "PARAMETERS", "BINARY", "EXTENSION", "SIZE"])
                .add_row(vec![
                    out.media_type.to_string(),
                    params,
                    out.binary.to_string(),
                    out.extension.unwrap_or("-").to_string(),
                    out.payload_size.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("media_type={}", out.media_type);
            for p in &out.parameters {
                println!("param {}={}", p.name, p.value);
            }
            println!(
                "binary={} extension={} size={} payload={}",
                out.binary,
                out.extension.unwrap_or("-"),
                out.payload_size,
                out.payload
            );
        }
        OutputFormat::Raw => print_raw(uri.payload()),
    }
}

pub fn print_encoded(uri: &DataUri, encoded: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&EncodeOutput {
            uri: encoded,
            media_type: uri.media_type(),
            binary: uri.is_binary(),
            payload_size: uri.payload().len(),
        }),
        OutputFormat::Table | OutputFormat::Pretty | OutputFormat::Raw => println!("{encoded}"),
    }
}

pub fn print_lookup(out: &LookupOutput<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["QUERY", "KIND", "RESULT"])
                .add_row(vec![
                    out.query.to_string(),
                    out.kind.to_string(),
                    out.result.unwrap_or("-").to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{} {} -> {}",
                out.kind,
                out.query,
                out.result.unwrap_or("(none)")
            );
        }
        OutputFormat::Raw => {
            if let Some(result) = out.result {
                println!("{result}");
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<binary {} bytes>", payload.len()),
    }
}

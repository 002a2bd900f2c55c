use std::io::Read;

use datauri_codec::CodecConfig;
use datauri_source::{FileSource, SourcePayload};
use tracing::info;

use crate::cmd::EncodeArgs;
use crate::exit::{codec_error, io_error, source_error, CliResult, SUCCESS};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, config: &CodecConfig, format: OutputFormat) -> CliResult<i32> {
    let mut payload = resolve_payload(&args)?;

    if let Some(media_type) = &args.media_type {
        payload.media_type = Some(media_type.clone());
    }
    for (name, value) in &args.params {
        payload.parameters.insert(name.clone(), value.clone());
    }

    let mut uri = payload
        .into_data_uri(config)
        .map_err(|err| source_error("encode failed", err))?;
    if args.base64 {
        uri.mark_binary();
    }

    let encoded = uri.to_encoded_string();
    info!(
        media_type = uri.media_type(),
        size = uri.payload().len(),
        encoded_len = encoded.len(),
        "encoded data URI"
    );

    // Serializing must stay re-parseable; a bad --media-type or --param would not be.
    datauri_codec::parse_with_config(&encoded, config)
        .map_err(|err| codec_error("encoded URI does not re-parse", err))?;

    print_encoded(&uri, &encoded, format);
    Ok(SUCCESS)
}

fn resolve_payload(args: &EncodeArgs) -> CliResult<SourcePayload> {
    if let Some(path) = &args.file {
        return FileSource::new()
            .read(path)
            .map_err(|err| source_error("load failed", err));
    }
    if let Some(url) = &args.url {
        return fetch_url(url);
    }
    if let Some(data) = &args.data {
        return Ok(SourcePayload::new(data.as_bytes().to_vec(), None));
    }

    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .map_err(|err| io_error("failed reading stdin", err))?;
    Ok(SourcePayload::new(buf, None))
}

#[cfg(feature = "http")]
fn fetch_url(url: &str) -> CliResult<SourcePayload> {
    datauri_source::HttpSource::new()
        .and_then(|source| source.fetch(url))
        .map_err(|err| source_error("fetch failed", err))
}

#[cfg(not(feature = "http"))]
fn fetch_url(_url: &str) -> CliResult<SourcePayload> {
    Err(crate::exit::CliError::new(
        crate::exit::USAGE,
        "--url requires a build with the `http` feature",
    ))
}

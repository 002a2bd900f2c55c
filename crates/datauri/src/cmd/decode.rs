use datauri_codec::{parse_with_config, CodecConfig};
use tracing::info;

use crate::cmd::{read_uri_arg, DecodeArgs};
use crate::exit::{codec_error, io_error, CliResult, SUCCESS};
use crate::output::print_raw;

pub fn run(args: DecodeArgs, config: &CodecConfig) -> CliResult<i32> {
    let text = read_uri_arg(&args.uri)?;
    let uri = parse_with_config(&text, config).map_err(|err| codec_error("decode failed", err))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, uri.payload()).map_err(|err| {
                io_error(&format!("failed writing {}", path.display()), err)
            })?;
            info!(?path, size = uri.payload().len(), "wrote payload");
        }
        None => print_raw(uri.payload()),
    }

    Ok(SUCCESS)
}

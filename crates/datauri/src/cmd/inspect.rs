use datauri_codec::{parse_with_config, CodecConfig};

use crate::cmd::{read_uri_arg, InspectArgs};
use crate::exit::{codec_error, CliResult, SUCCESS};
use crate::output::{print_inspect, OutputFormat};

pub fn run(args: InspectArgs, config: &CodecConfig, format: OutputFormat) -> CliResult<i32> {
    let text = read_uri_arg(&args.uri)?;
    let uri = parse_with_config(&text, config).map_err(|err| codec_error("inspect failed", err))?;
    print_inspect(&uri, format);
    Ok(SUCCESS)
}

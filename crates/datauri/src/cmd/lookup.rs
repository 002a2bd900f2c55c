use datauri_mime::{extension_by_media_type, media_type_by_extension};

use crate::cmd::LookupArgs;
use crate::exit::{CliError, CliResult, FAILURE, SUCCESS, USAGE};
use crate::output::{print_lookup, LookupOutput, OutputFormat};

pub fn run(args: LookupArgs, format: OutputFormat) -> CliResult<i32> {
    let out = if let Some(extension) = &args.extension {
        LookupOutput {
            query: extension,
            kind: "media_type",
            result: media_type_by_extension(extension),
        }
    } else if let Some(media_type) = &args.media_type {
        LookupOutput {
            query: media_type,
            kind: "extension",
            result: extension_by_media_type(media_type),
        }
    } else {
        return Err(CliError::new(USAGE, "--extension or --media-type is required"));
    };

    print_lookup(&out, format);
    Ok(if out.result.is_some() { SUCCESS } else { FAILURE })
}

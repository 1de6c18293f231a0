use std::fs;

use sensorwire_frame::reassemble_burst;
use sensorwire_layout::{decode, Layout};

use crate::cmd::DecodeArgs;
use crate::exit::{decode_error, io_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_reading, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let layout = Layout::parse(&args.layout)
        .map_err(|err| decode_error("invalid --layout", err))?;

    let raw = resolve_input(&args)?;
    let payload = if args.framed {
        let payload = reassemble_burst(&raw)
            .map_err(|err| CliError::new(DATA_INVALID, format!("reassembly failed: {err}")))?;
        if !payload.terminated {
            tracing::warn!("input had no stop sentinel; payload may be incomplete");
        }
        payload.into_bytes()
    } else {
        raw.into()
    };

    let reading = decode(&payload, &layout).map_err(|err| decode_error("decode failed", err))?;
    print_reading(&reading, &layout, format);

    Ok(SUCCESS)
}

fn resolve_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(hex_str) = &args.hex {
        return hex::decode(hex_str.trim())
            .map_err(|err| CliError::new(USAGE, format!("--hex is not valid hex: {err}")));
    }
    if let Some(path) = &args.file {
        return fs::read(path).map_err(|err| {
            io_error(&format!("failed reading {}", path.display()), err)
        });
    }
    Err(CliError::new(USAGE, "either --hex or --file is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_input_decodes_hex() {
        let args = DecodeArgs {
            hex: Some("0a0b0c".to_string()),
            file: None,
            layout: "xffffiix".to_string(),
            framed: false,
        };
        assert_eq!(resolve_input(&args).unwrap(), vec![0x0A, 0x0B, 0x0C]);
    }

    #[test]
    fn resolve_input_rejects_bad_hex() {
        let args = DecodeArgs {
            hex: Some("zz".to_string()),
            file: None,
            layout: "i".to_string(),
            framed: false,
        };
        let err = resolve_input(&args).unwrap_err();
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn resolve_input_requires_a_source() {
        let args = DecodeArgs {
            hex: None,
            file: None,
            layout: "i".to_string(),
            framed: false,
        };
        assert_eq!(resolve_input(&args).unwrap_err().code, USAGE);
    }
}

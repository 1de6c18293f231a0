use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sensorwire_layout::Layout;
use sensorwire_poller::{reading_queue, PollError, PollOutcome, SensorPoller};
use sensorwire_transport::ReadSource;

use crate::cmd::WatchArgs;
use crate::exit::{decode_error, poll_error, transport_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_reading, OutputFormat};

pub fn run(args: WatchArgs, format: OutputFormat) -> CliResult<i32> {
    let layout = Layout::parse(&args.layout)
        .map_err(|err| decode_error("invalid --layout", err))?;
    let interval = parse_duration(&args.interval)?;

    let source =
        ReadSource::open(&args.device).map_err(|err| transport_error("open failed", err))?;

    let (tx, rx) = reading_queue();
    let mut poller = SensorPoller::new(source, layout.clone(), tx).framed(args.framed);

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut printed = 0usize;

    while running.load(Ordering::SeqCst) {
        match poller.poll() {
            Ok(PollOutcome::Enqueued) => {
                while let Ok(reading) = rx.try_recv() {
                    print_reading(&reading, &layout, format);
                    printed = printed.saturating_add(1);
                }
                if let Some(count) = args.count {
                    if printed >= count {
                        return Ok(SUCCESS);
                    }
                }
            }
            Ok(PollOutcome::Idle) => {
                std::thread::sleep(interval);
            }
            // One malformed payload aborts its cycle only.
            Err(err @ (PollError::Decode(_) | PollError::Frame(_))) => {
                tracing::error!(%err, "dropping malformed payload");
            }
            Err(err) => return Err(poll_error("poll failed", err)),
        }
    }

    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}

fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "interval must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "ms")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid interval value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "interval must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        _ => Ok(Duration::from_secs(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_millis_and_seconds() {
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("15").unwrap(), Duration::from_millis(15));
    }

    #[test]
    fn parse_duration_rejects_invalid_values() {
        assert!(parse_duration("0ms").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("soon").is_err());
    }
}

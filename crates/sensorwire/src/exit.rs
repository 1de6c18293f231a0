use std::fmt;
use std::io;

use sensorwire_layout::DecodeError;
use sensorwire_poller::PollError;
use sensorwire_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => FAILURE,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Open { source, .. } | TransportError::Io(source) => {
            io_error(context, source)
        }
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn decode_error(context: &str, err: DecodeError) -> CliError {
    let code = match err {
        DecodeError::UnknownFieldSymbol { .. } => USAGE,
        _ => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn poll_error(context: &str, err: PollError) -> CliError {
    match err {
        PollError::Transport(err) => transport_error(context, err),
        PollError::Frame(err) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        PollError::Decode(err) => decode_error(context, err),
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

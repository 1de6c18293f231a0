use std::collections::VecDeque;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use bytes::Bytes;

use crate::error::{Result, TransportError};

const READ_CHUNK_SIZE: usize = 4 * 1024;

/// A source of raw bytes from the sensor link.
///
/// One call returns one burst: whatever the device had buffered at that
/// moment. An empty burst means "no data right now" and is not an error.
pub trait ByteSource {
    /// Read one burst of available bytes.
    fn read_burst(&mut self) -> Result<Bytes>;
}

/// Adapts any `Read` stream (a tty device node, a pipe, a capture file)
/// into a [`ByteSource`].
///
/// A read that would block is reported as an empty burst, matching the
/// "return empty on no data" device contract.
#[derive(Debug)]
pub struct ReadSource<T> {
    inner: T,
}

impl ReadSource<File> {
    /// Open a device node (e.g. `/dev/ttyACM0`) as a byte source.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TransportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<T> ReadSource<T> {
    /// Wrap an already-open stream.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the source and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read> ByteSource for ReadSource<T> {
    fn read_burst(&mut self) -> Result<Bytes> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            return match self.inner.read(&mut chunk) {
                Ok(0) => Ok(Bytes::new()),
                Ok(n) => {
                    tracing::trace!(bytes = n, "read burst");
                    Ok(Bytes::copy_from_slice(&chunk[..n]))
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err)
                    if err.kind() == ErrorKind::WouldBlock || err.kind() == ErrorKind::TimedOut =>
                {
                    Ok(Bytes::new())
                }
                Err(err) => Err(TransportError::Io(err)),
            };
        }
    }
}

/// A scripted byte source for tests and offline replay.
///
/// Yields each programmed burst once, in order, then empty bursts forever.
#[derive(Debug, Default)]
pub struct ScriptSource {
    bursts: VecDeque<Bytes>,
}

impl ScriptSource {
    /// Create a source that will yield the given bursts in order.
    pub fn new(bursts: impl IntoIterator<Item = impl Into<Bytes>>) -> Self {
        Self {
            bursts: bursts.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of bursts not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bursts.len()
    }
}

impl ByteSource for ScriptSource {
    fn read_burst(&mut self) -> Result<Bytes> {
        Ok(self.bursts.pop_front().unwrap_or_default())
    }
}

use std::sync::mpsc::{self, Receiver, Sender};

use bytes::Bytes;

use sensorwire_frame::reassemble_burst;
use sensorwire_layout::{DecodeStrategy, Layout, PermissiveDecoder, SensorReading};
use sensorwire_transport::ByteSource;

use crate::error::{PollError, Result};
use crate::image::ImageSource;

/// What one poll cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The source had no data; nothing was decoded or enqueued.
    Idle,
    /// One reading was decoded and pushed onto the outbound queue.
    Enqueued,
}

/// Create the outbound queue: unbounded, FIFO, single producer (the
/// poller) and single consumer (the publisher), safe across threads.
pub fn reading_queue() -> (Sender<SensorReading>, Receiver<SensorReading>) {
    mpsc::channel()
}

/// Continuously reads sensor data from the microcontroller link.
///
/// Owns the byte source and the sending half of the outbound queue. All
/// collaborators are injected at construction time.
pub struct SensorPoller<S> {
    source: S,
    layout: Layout,
    queue: Sender<SensorReading>,
    decoder: Box<dyn DecodeStrategy>,
    framed: bool,
    image_source: Option<Box<dyn ImageSource>>,
}

impl<S: ByteSource> SensorPoller<S> {
    /// Build a poller with the stock permissive decoder.
    ///
    /// By default a burst is treated as one already-reassembled payload,
    /// matching the device contract; see [`framed`](Self::framed).
    pub fn new(source: S, layout: Layout, queue: Sender<SensorReading>) -> Self {
        Self {
            source,
            layout,
            queue,
            decoder: Box::new(PermissiveDecoder),
            framed: false,
            image_source: None,
        }
    }

    /// Substitute the decode strategy.
    pub fn with_decoder(mut self, decoder: Box<dyn DecodeStrategy>) -> Self {
        self.decoder = decoder;
        self
    }

    /// When true, each burst is segmented into 10-byte frames and
    /// reassembled before decoding.
    pub fn framed(mut self, framed: bool) -> Self {
        self.framed = framed;
        self
    }

    /// Attach a camera/vision collaborator.
    pub fn with_image_source(mut self, image_source: Box<dyn ImageSource>) -> Self {
        self.image_source = Some(image_source);
        self
    }

    /// The layout this poller decodes against.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Perform one read-decode-enqueue cycle.
    ///
    /// An empty burst is a no-op. Errors abort this cycle only and carry
    /// their layer of origin; nothing is retried or downgraded to a
    /// default value here.
    pub fn poll(&mut self) -> Result<PollOutcome> {
        let burst = self.source.read_burst()?;
        if burst.is_empty() {
            return Ok(PollOutcome::Idle);
        }

        let payload = if self.framed {
            reassemble_burst(&burst)?.into_bytes()
        } else {
            burst
        };

        let reading = self.decoder.decode(&payload, &self.layout)?;
        tracing::debug!(values = reading.len(), bytes = payload.len(), "decoded reading");

        self.queue
            .send(reading)
            .map_err(|_| PollError::QueueClosed)?;
        Ok(PollOutcome::Enqueued)
    }

    /// The most recent camera frame, if an image source was attached.
    pub fn image_snapshot(&mut self) -> Option<Bytes> {
        self.image_source
            .as_mut()
            .and_then(|source| source.current_frame())
    }
}

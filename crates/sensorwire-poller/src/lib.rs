//! The read-decode-enqueue pipeline.
//!
//! A [`SensorPoller`] owns a byte source and the sending half of the
//! outbound queue. Each [`poll`](SensorPoller::poll) performs exactly one
//! cycle: read one burst, decode it, enqueue the reading. No retry, no
//! backoff; repeated polling belongs to the caller's loop.

pub mod error;
pub mod image;
pub mod poller;
pub mod publish;

pub use error::{PollError, Result};
pub use image::ImageSource;
pub use poller::{reading_queue, PollOutcome, SensorPoller};
pub use publish::{drain_into, Publisher, SENSOR_TOPIC};

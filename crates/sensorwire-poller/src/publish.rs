use std::io;
use std::sync::mpsc::Receiver;

use sensorwire_layout::SensorReading;

/// Conventional topic for decoded sensor readings.
pub const SENSOR_TOPIC: &str = "perception/sensors";

/// The outbound side of the pipeline.
///
/// Delivery semantics (at-most-once, best-effort, batching) are the
/// implementation's concern, not the poller's.
pub trait Publisher {
    /// Publish one reading on a topic.
    fn publish(&mut self, topic: &str, reading: &SensorReading) -> io::Result<()>;
}

/// Forward every reading currently queued to a publisher.
///
/// Returns the number of readings forwarded. Stops at the first publish
/// error; readings already taken from the queue before the failure are not
/// re-queued.
pub fn drain_into<P: Publisher>(
    queue: &Receiver<SensorReading>,
    publisher: &mut P,
    topic: &str,
) -> io::Result<usize> {
    let mut published = 0usize;
    while let Ok(reading) = queue.try_recv() {
        publisher.publish(topic, &reading)?;
        published += 1;
    }
    Ok(published)
}

#[cfg(test)]
mod tests {
    use sensorwire_layout::Value;

    use super::*;
    use crate::poller::reading_queue;

    #[derive(Default)]
    struct RecordingPublisher {
        seen: Vec<(String, SensorReading)>,
        fail_after: Option<usize>,
    }

    impl Publisher for RecordingPublisher {
        fn publish(&mut self, topic: &str, reading: &SensorReading) -> io::Result<()> {
            if self.fail_after == Some(self.seen.len()) {
                return Err(io::Error::other("broker unavailable"));
            }
            self.seen.push((topic.to_string(), reading.clone()));
            Ok(())
        }
    }

    fn reading(v: i32) -> SensorReading {
        SensorReading::new(vec![Value::I32(v)])
    }

    #[test]
    fn drains_queued_readings_in_order() {
        let (tx, rx) = reading_queue();
        for v in 0..3 {
            tx.send(reading(v)).unwrap();
        }

        let mut publisher = RecordingPublisher::default();
        let published = drain_into(&rx, &mut publisher, SENSOR_TOPIC).unwrap();

        assert_eq!(published, 3);
        assert_eq!(publisher.seen.len(), 3);
        assert!(publisher.seen.iter().all(|(t, _)| t == SENSOR_TOPIC));
        assert_eq!(publisher.seen[2].1, reading(2));
    }

    #[test]
    fn empty_queue_publishes_nothing() {
        let (_tx, rx) = reading_queue();
        let mut publisher = RecordingPublisher::default();
        assert_eq!(drain_into(&rx, &mut publisher, SENSOR_TOPIC).unwrap(), 0);
    }

    #[test]
    fn publish_failure_stops_the_drain() {
        let (tx, rx) = reading_queue();
        for v in 0..3 {
            tx.send(reading(v)).unwrap();
        }

        let mut publisher = RecordingPublisher {
            fail_after: Some(1),
            ..Default::default()
        };
        let err = drain_into(&rx, &mut publisher, SENSOR_TOPIC).unwrap_err();
        assert_eq!(err.to_string(), "broker unavailable");
        assert_eq!(publisher.seen.len(), 1);
        // The remaining reading is still queued.
        assert!(rx.try_recv().is_ok());
    }
}

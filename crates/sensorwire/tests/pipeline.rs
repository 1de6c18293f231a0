//! End-to-end pipeline: capture bytes → transport → reassembly → decode →
//! queue → publisher.

use std::io::Cursor;

use bytes::BytesMut;
use sensorwire::frame::encode_frames;
use sensorwire::layout::{encode_reading, Layout, SensorReading, Value};
use sensorwire::poller::{drain_into, reading_queue, PollOutcome, Publisher, SENSOR_TOPIC};
use sensorwire::transport::ReadSource;
use sensorwire::SensorPoller;

#[derive(Default)]
struct CollectingPublisher {
    published: Vec<(String, SensorReading)>,
}

impl Publisher for CollectingPublisher {
    fn publish(&mut self, topic: &str, reading: &SensorReading) -> std::io::Result<()> {
        self.published.push((topic.to_string(), reading.clone()));
        Ok(())
    }
}

fn firmware_reading() -> SensorReading {
    SensorReading::new(vec![
        Value::F32(21.75),
        Value::F32(-0.5),
        Value::F32(1013.25),
        Value::F32(3.3),
        Value::I32(1450),
        Value::I32(-30),
    ])
}

#[test]
fn capture_file_to_publisher() {
    // A capture as the firmware would emit it: framed, stop sentinel on the
    // last frame. 24-byte layout = exactly three frames.
    let layout = Layout::parse("ffffii").expect("layout should parse");
    let payload = encode_reading(&firmware_reading(), &layout).expect("reading should encode");
    let mut capture = BytesMut::new();
    encode_frames(&payload, &mut capture).expect("payload should frame");

    let source = ReadSource::new(Cursor::new(capture.to_vec()));
    let (tx, rx) = reading_queue();
    let mut poller = SensorPoller::new(source, layout, tx).framed(true);

    assert_eq!(poller.poll().expect("poll should succeed"), PollOutcome::Enqueued);
    // The capture is exhausted; the next cycle is idle.
    assert_eq!(poller.poll().expect("poll should succeed"), PollOutcome::Idle);

    let mut publisher = CollectingPublisher::default();
    let published =
        drain_into(&rx, &mut publisher, SENSOR_TOPIC).expect("publishing should succeed");

    assert_eq!(published, 1);
    let (topic, reading) = &publisher.published[0];
    assert_eq!(topic, SENSOR_TOPIC);
    assert_eq!(reading, &firmware_reading());
}

#[test]
fn unframed_device_contract() {
    // The device hands over payloads already reassembled; the poller decodes
    // each burst directly against the default firmware layout.
    let layout = Layout::default();
    let payload = encode_reading(&firmware_reading(), &layout).expect("reading should encode");

    let source = ReadSource::new(Cursor::new(payload.to_vec()));
    let (tx, rx) = reading_queue();
    let mut poller = SensorPoller::new(source, layout, tx);

    assert_eq!(poller.poll().expect("poll should succeed"), PollOutcome::Enqueued);
    assert_eq!(rx.recv().expect("reading should be queued"), firmware_reading());
}

use bytes::Bytes;

/// An optional camera/vision collaborator.
///
/// The poller is constructed with one explicitly when image capture is
/// wired in; there is no module-global simulator handle to look up.
pub trait ImageSource {
    /// The most recent captured frame, encoded by the source. `None` when
    /// no frame is available yet.
    fn current_frame(&mut self) -> Option<Bytes>;
}

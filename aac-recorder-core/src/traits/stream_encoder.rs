use crate::models::error::RecorderError;

/// Fixed encoder configuration applied before start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderSetup {
    /// Codec mime, e.g. "audio/mp4a-latm".
    pub mime: &'static str,
    pub sample_rate: u32,
    pub channels: u8,
    /// Largest input block the session will queue, in bytes.
    pub max_input_size: usize,
    pub bit_rate: u32,
    /// AAC audio object type (low complexity = 2).
    pub profile: u8,
}

/// Metadata describing one ready output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSlotInfo {
    /// Byte offset of the frame within the slot buffer.
    pub offset: usize,
    /// Frame length in bytes.
    pub size: usize,
    /// Whether the frame carries codec configuration rather than audio.
    pub is_config: bool,
}

/// Result of polling the encoder for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPoll {
    /// A frame is ready in `slot`.
    Frame { slot: usize, info: OutputSlotInfo },
    /// The encoder replaced its output slot layout; the caller must call
    /// [`StreamEncoder::refresh_output_slots`] before polling again.
    SlotsChanged,
    /// Nothing ready right now.
    Empty,
}

/// Interface for a slot-based streaming encoder (hardware or software).
///
/// Input and output buffers are encoder-owned slots: dequeue a slot, fill
/// or read it, then queue/release it back. Slot indices are only valid
/// between their dequeue and their queue/release.
pub trait StreamEncoder: Send {
    /// Apply the fixed configuration. Failure is fatal to session start.
    fn configure(&mut self, setup: &EncoderSetup) -> Result<(), RecorderError>;

    fn start(&mut self) -> Result<(), RecorderError>;

    fn stop(&mut self);

    fn release(&mut self);

    /// Wait up to `timeout_micros` for a free input slot.
    fn dequeue_input_slot(&mut self, timeout_micros: u64) -> Option<usize>;

    /// Copy `data` into the input slot and commit it. `end_of_stream`
    /// marks the final block of the session.
    fn queue_input(&mut self, slot: usize, data: &[u8], end_of_stream: bool);

    /// Poll for a ready output slot, waiting at most `timeout_micros`.
    fn dequeue_output_slot(&mut self, timeout_micros: u64) -> OutputPoll;

    /// Bytes of the dequeued output slot.
    fn output_slot(&self, slot: usize) -> &[u8];

    /// Hand an output slot back to the encoder.
    fn release_output_slot(&mut self, slot: usize);

    /// Re-acquire the output slot view after [`OutputPoll::SlotsChanged`].
    fn refresh_output_slots(&mut self);
}

use crate::models::error::RecorderError;

/// Parameters handed to the device when it is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureParams {
    /// Capture rate in Hz.
    pub sample_rate: u32,
    /// Channel count (mono = 1).
    pub channels: u8,
    /// Device-internal buffer size in bytes.
    pub internal_buffer_size: usize,
}

/// Outcome of one blocking device read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// `n` bytes were written into the destination buffer. A short read
    /// (`n` less than the buffer length) is a transient anomaly, not an
    /// error.
    Data(usize),
    /// The device rejected the read parameters.
    BadValue,
    /// The device is not in a readable state.
    InvalidOperation,
}

/// Interface for the hardware input device delivering raw 16-bit
/// little-endian PCM.
///
/// The session drives this from a single dedicated thread: `read` is a
/// blocking pull and is never cancelled mid-flight — pause and stop take
/// effect after the in-flight read returns.
pub trait CaptureSource: Send {
    /// Acquire the device. Failure is fatal to session start.
    fn open(&mut self, params: &CaptureParams) -> Result<(), RecorderError>;

    /// Begin delivering samples.
    fn start(&mut self) -> Result<(), RecorderError>;

    /// Stop delivering samples. The device stays acquired and can be
    /// started again (pause/resume).
    fn stop(&mut self);

    /// Release the device. Called once, on every exit path.
    fn release(&mut self);

    /// Block until the device fills `buf` (or fails). One call reads one
    /// raw block.
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome;

    /// Best-effort noise suppression, applied once after open.
    /// Returns whether the platform enabled it.
    fn enable_noise_suppression(&mut self) -> bool {
        false
    }

    /// Best-effort automatic gain control, applied once after open.
    /// Returns whether the platform enabled it.
    fn enable_automatic_gain(&mut self) -> bool {
        false
    }
}

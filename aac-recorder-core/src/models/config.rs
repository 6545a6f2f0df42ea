use std::path::PathBuf;

/// Capture and encode rate in Hz. The capture pipeline is pinned to this
/// rate; a caller-requested rate is accepted but ignored.
pub const SAMPLE_RATE: u32 = 44_100;

/// ADTS sampling-frequency index corresponding to [`SAMPLE_RATE`].
pub const SAMPLE_RATE_INDEX: u8 = 4;

/// Channel count. Mono capture, mono encode.
pub const CHANNELS: u8 = 1;

/// AAC encoder bit rate.
pub const BIT_RATE: u32 = 32_000;

/// AAC audio object type: low complexity.
pub const AAC_PROFILE_LC: u8 = 2;

/// Capacity of the waveform accumulator, in samples.
pub const SAMPLE_BUFFER_SIZE: usize = 6_400;

/// Metering floor in dB: silence, or any non-recording transport state.
pub const SILENCE_FLOOR_DB: f64 = -120.0;

/// Calibration factor reproducing the reference platform's dB scale.
/// Must not be altered.
pub const DB_CALIBRATION: f64 = 0.3;

/// Bounded wait for an encoder input slot, in microseconds.
pub const INPUT_SLOT_TIMEOUT_MICROS: u64 = 10_000;

/// Default size of one device-read block, in bytes.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4_096;

/// Configuration for a recording session.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Path of the output ADTS stream.
    pub output_path: PathBuf,

    /// Format label reported in the session result (e.g. "aac").
    pub audio_format: String,

    /// Size in bytes of one device-read block. Every block fed to the
    /// encoder must have exactly this length.
    pub read_buffer_size: usize,
}

impl RecorderConfig {
    /// Build a configuration for the given output path.
    ///
    /// `requested_sample_rate` is accepted for interface compatibility with
    /// the host layer but the pipeline always records at [`SAMPLE_RATE`].
    pub fn new(requested_sample_rate: u32, output_path: impl Into<PathBuf>) -> Self {
        if requested_sample_rate != SAMPLE_RATE {
            log::debug!(
                "requested sample rate {} Hz ignored; capture is pinned to {} Hz",
                requested_sample_rate,
                SAMPLE_RATE
            );
        }
        Self {
            output_path: output_path.into(),
            audio_format: "aac".into(),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

//! # aac-recorder-core
//!
//! Microphone-to-AAC recording core library.
//!
//! Pulls raw 16-bit mono PCM from a capture device, encodes it through a
//! slot-based streaming AAC encoder, frames every encoded unit with an
//! ADTS header, and appends the result to an output file — while deriving
//! live power levels and a down-sampled waveform for UI feedback.
//! Platform backends implement the `CaptureSource` and `StreamEncoder`
//! traits and plug into the generic `RecordingSession`.
//!
//! ## Architecture
//!
//! ```text
//! aac-recorder-core (this crate)
//! ├── traits/       ← CaptureSource, StreamEncoder, WaveformListener
//! ├── models/       ← RecorderError, RecorderState, RecorderConfig, RecordingResult
//! ├── processing/   ← power metering, waveform accumulation, ADTS framing
//! ├── session/      ← AacEncoder adapter + RecordingSession (generic orchestrator)
//! └── storage/      ← append-only ADTS stream writer
//! ```
//!
//! The capture/encode loop runs on a dedicated thread; pause/resume never
//! drop or duplicate an encoded byte, and stop returns a result snapshot
//! with duration and final power levels.

pub mod models;
pub mod processing;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::RecorderConfig;
pub use models::error::RecorderError;
pub use models::result::RecordingResult;
pub use models::state::RecorderState;
pub use processing::power_meter::PowerReading;
pub use processing::waveform::WaveformSampler;
pub use session::encoder::{AacEncoder, EncodedFrame};
pub use session::recorder::RecordingSession;
pub use storage::adts_writer::AdtsWriter;
pub use traits::capture_source::{CaptureParams, CaptureSource, ReadOutcome};
pub use traits::listener::WaveformListener;
pub use traits::stream_encoder::{EncoderSetup, OutputPoll, OutputSlotInfo, StreamEncoder};

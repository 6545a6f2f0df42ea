use thiserror::Error;

use super::state::RecorderState;

/// Errors surfaced by the recording session.
///
/// Per-iteration anomalies (short device reads, unavailable encoder slots)
/// are absorbed and logged inside the capture loop; they never appear here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("capture device failed to initialize: {0}")]
    DeviceInit(String),

    #[error("encoder failed to configure: {0}")]
    EncoderInit(String),

    #[error("cannot {operation} while {state:?}")]
    InvalidState {
        operation: &'static str,
        state: RecorderState,
    },

    #[error("storage error: {0}")]
    Storage(String),
}

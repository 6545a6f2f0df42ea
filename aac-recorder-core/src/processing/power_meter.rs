use crate::models::config::{DB_CALIBRATION, SILENCE_FLOOR_DB};
use crate::models::state::RecorderState;

const FULL_SCALE_SQUARED: f64 = 32767.0 * 32767.0;

/// Instantaneous signal power for one raw block, in dB on [-120, 0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerReading {
    pub average_db: f64,
    pub peak_db: f64,
}

impl PowerReading {
    /// The defined floor: silence, or a non-recording transport state.
    pub fn silence() -> Self {
        Self {
            average_db: SILENCE_FLOOR_DB,
            peak_db: SILENCE_FLOOR_DB,
        }
    }
}

impl Default for PowerReading {
    fn default() -> Self {
        Self::silence()
    }
}

/// Compute peak and average power for one raw block of 16-bit
/// little-endian samples.
///
/// Mean and peak of the squared samples, log-scaled with the fixed
/// calibration factor. A silent block, or any state where metering is not
/// active, reports exactly the -120 dB floor on both fields. No smoothing
/// across blocks: each call stands alone.
pub fn measure(block: &[u8], state: RecorderState) -> PowerReading {
    let mut sum = 0.0f64;
    let mut max = 0.0f64;
    let mut count = 0usize;

    for pair in block.chunks_exact(2) {
        let sample = i16::from_le_bytes([pair[0], pair[1]]) as f64;
        let square = sample * sample;
        sum += square;
        if square > max {
            max = square;
        }
        count += 1;
    }

    if count == 0 {
        return PowerReading::silence();
    }

    let mean = sum / count as f64;
    if mean == 0.0 || !state.is_metering_active() {
        return PowerReading::silence();
    }

    PowerReading {
        average_db: 10.0 * (mean / FULL_SCALE_SQUARED).ln() * DB_CALIBRATION,
        peak_db: 10.0 * (max / FULL_SCALE_SQUARED).ln() * DB_CALIBRATION,
    }
}

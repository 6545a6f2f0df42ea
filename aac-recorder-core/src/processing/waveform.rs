use std::sync::Arc;

use crate::models::config::SAMPLE_BUFFER_SIZE;
use crate::traits::listener::WaveformListener;

/// Down-sampled waveform feed for live visualization.
///
/// Accumulates raw blocks into a fixed-capacity sample buffer and emits
/// one normalized snapshot to the registered listener each time the
/// buffer fills. Without a listener the sampler does no work at all, so
/// nothing accumulates unboundedly.
///
/// The accumulator persists across pause/resume; only a full buffer
/// resets it.
pub struct WaveformSampler {
    listener: Option<Arc<dyn WaveformListener>>,
    samples: Vec<i16>,
    capacity: usize,
}

impl WaveformSampler {
    pub fn new(listener: Option<Arc<dyn WaveformListener>>) -> Self {
        Self {
            listener,
            samples: Vec::with_capacity(SAMPLE_BUFFER_SIZE),
            capacity: SAMPLE_BUFFER_SIZE,
        }
    }

    #[cfg(test)]
    fn with_capacity(listener: Arc<dyn WaveformListener>, capacity: usize) -> Self {
        Self {
            listener: Some(listener),
            samples: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Feed one raw block of 16-bit little-endian samples.
    ///
    /// Copies from the head of the block until the accumulator is full;
    /// excess within one block is truncated, never wrapped. On reaching
    /// capacity exactly, emits a single synchronous snapshot and resets.
    pub fn push(&mut self, block: &[u8]) {
        let Some(listener) = self.listener.clone() else {
            return;
        };

        let room = self.capacity - self.samples.len();
        let take = (block.len() / 2).min(room);
        for pair in block.chunks_exact(2).take(take) {
            self.samples.push(i16::from_le_bytes([pair[0], pair[1]]));
        }

        if self.samples.len() == self.capacity {
            let normalized: Vec<f32> =
                self.samples.iter().map(|&s| s as f32 / 32767.0).collect();
            listener.on_audio_data(&normalized);
            self.samples.clear();
        }
    }
}

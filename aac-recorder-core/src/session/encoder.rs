use crate::models::config::{
    AAC_PROFILE_LC, BIT_RATE, CHANNELS, INPUT_SLOT_TIMEOUT_MICROS, SAMPLE_RATE,
};
use crate::models::error::RecorderError;
use crate::traits::stream_encoder::{EncoderSetup, OutputPoll, StreamEncoder};

/// One encoded unit yielded by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    pub data: Vec<u8>,
    /// Codec setup metadata rather than audio payload. Config frames are
    /// never written to the output stream.
    pub is_config: bool,
}

/// Adapts a slot-based [`StreamEncoder`] to the block pipeline: fixed-size
/// raw blocks in, batches of ready frames out.
pub struct AacEncoder<E: StreamEncoder> {
    inner: E,
    expected_block_size: usize,
}

impl<E: StreamEncoder> AacEncoder<E> {
    /// Apply the pinned AAC-LC configuration. A configure failure is fatal
    /// to session start.
    pub fn configure(mut inner: E, read_buffer_size: usize) -> Result<Self, RecorderError> {
        let setup = EncoderSetup {
            mime: "audio/mp4a-latm",
            sample_rate: SAMPLE_RATE,
            channels: CHANNELS,
            max_input_size: read_buffer_size,
            bit_rate: BIT_RATE,
            profile: AAC_PROFILE_LC,
        };
        inner.configure(&setup)?;
        Ok(Self {
            inner,
            expected_block_size: read_buffer_size,
        })
    }

    pub fn start(&mut self) -> Result<(), RecorderError> {
        self.inner.start()
    }

    pub fn stop(&mut self) {
        self.inner.stop();
    }

    pub fn release(&mut self) {
        self.inner.release();
    }

    /// Queue one raw block for encoding.
    ///
    /// Returns false when the block length does not match the expected
    /// device-read size — a signal that this iteration should skip the
    /// drain, not an error. Otherwise waits the bounded 10 ms for an input
    /// slot; if none frees up in time the block is dropped and the next
    /// iteration carries on (expected under encoder back-pressure).
    pub fn feed(&mut self, block: &[u8], is_final: bool) -> bool {
        if block.len() != self.expected_block_size {
            return false;
        }

        if let Some(slot) = self.inner.dequeue_input_slot(INPUT_SLOT_TIMEOUT_MICROS) {
            self.inner.queue_input(slot, block, is_final);
        }

        true
    }

    /// Collect every frame the encoder has ready, without blocking.
    ///
    /// Frames are yielded in encoder emission order. An output-layout
    /// change refreshes the slot view and keeps polling; an empty poll
    /// ends the batch.
    pub fn drain(&mut self) -> Vec<EncodedFrame> {
        let mut frames = Vec::new();

        loop {
            match self.inner.dequeue_output_slot(0) {
                OutputPoll::Frame { slot, info } => {
                    let bytes = self.inner.output_slot(slot);
                    let data = bytes[info.offset..info.offset + info.size].to_vec();
                    frames.push(EncodedFrame {
                        data,
                        is_config: info.is_config,
                    });
                    self.inner.release_output_slot(slot);
                }
                OutputPoll::SlotsChanged => self.inner.refresh_output_slots(),
                OutputPoll::Empty => break,
            }
        }

        frames
    }
}

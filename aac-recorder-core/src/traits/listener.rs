/// Listener for live waveform snapshots.
///
/// Called synchronously from the capture thread each time the waveform
/// accumulator fills — keep processing minimal. Implementations should
/// marshal to the UI thread if needed.
pub trait WaveformListener: Send + Sync {
    /// One full accumulator of samples, normalized to [-1.0, 1.0].
    fn on_audio_data(&self, samples: &[f32]);
}

pub mod adts;
pub mod power_meter;
pub mod waveform;

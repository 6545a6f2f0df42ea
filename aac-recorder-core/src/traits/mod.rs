pub mod capture_source;
pub mod listener;
pub mod stream_encoder;

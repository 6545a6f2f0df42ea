pub mod encoder;
pub mod recorder;

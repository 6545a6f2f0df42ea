use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::models::error::RecorderError;
use crate::processing::adts;

/// Append-only ADTS stream writer.
///
/// Each encoded AAC frame is written as a 7-byte ADTS header followed by
/// the payload, in strict emission order. ADTS is self-describing, so the
/// file never needs a finalization pass: every byte already written stays
/// valid even if close fails.
pub struct AdtsWriter {
    path: PathBuf,
    file: Option<File>,
    bytes_written: u64,
}

impl AdtsWriter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            file: None,
            bytes_written: 0,
        }
    }

    /// Create the output file (and its parent directory if missing).
    pub fn open(&mut self) -> Result<(), RecorderError> {
        if self.file.is_some() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    RecorderError::Storage(format!("failed to create directory: {}", e))
                })?;
            }
        }

        let file = File::create(&self.path)
            .map_err(|e| RecorderError::Storage(format!("failed to create file: {}", e)))?;
        self.file = Some(file);
        Ok(())
    }

    /// Append one framed payload: ADTS header, then the frame bytes.
    pub fn write_frame(&mut self, payload: &[u8]) -> Result<(), RecorderError> {
        let header = adts::header(payload.len());
        self.write_raw(&header)?;
        self.write_raw(payload)
    }

    /// Total bytes appended so far (headers included).
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and drop the file handle. Best effort at session stop: a
    /// failure here is logged by the caller, never fatal.
    pub fn close(&mut self) -> Result<(), RecorderError> {
        if let Some(mut file) = self.file.take() {
            file.flush()
                .map_err(|e| RecorderError::Storage(format!("flush failed: {}", e)))?;
        }
        Ok(())
    }

    fn write_raw(&mut self, data: &[u8]) -> Result<(), RecorderError> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| RecorderError::Storage("file is not open".into()))?;
        file.write_all(data)
            .map_err(|e| RecorderError::Storage(format!("write failed: {}", e)))?;
        self.bytes_written += data.len() as u64;
        Ok(())
    }
}

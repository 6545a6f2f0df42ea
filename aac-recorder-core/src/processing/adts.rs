use crate::models::config::{AAC_PROFILE_LC, CHANNELS, SAMPLE_RATE_INDEX};

/// Size of the ADTS header prefixed to every encoded frame.
pub const ADTS_HEADER_SIZE: usize = 7;

/// Build the 7-byte ADTS header for one encoded AAC frame.
///
/// Pinned to the session configuration: MPEG-4, no CRC, AAC-LC,
/// 44.1 kHz (sampling-frequency index 4), mono.
///
/// Layout:
/// ```text
/// [0]  1111 1111  sync
/// [1]  1111 0001  sync | MPEG-4 | layer 00 | no CRC
/// [2]  pp ffff c  profile-1 | frequency index | channel cfg bit 2
/// [3]  cc ll....  channel cfg bits 0-1 | frame length bits 12-11
/// [4]  llll llll  frame length bits 10-3
/// [5]  lll 11111  frame length bits 2-0 | buffer fullness high
/// [6]  1111 1100  buffer fullness low | one raw data block
/// ```
///
/// `frame length` counts header plus payload.
pub fn header(payload_len: usize) -> [u8; ADTS_HEADER_SIZE] {
    let frame_length = payload_len + ADTS_HEADER_SIZE;

    let mut adts = [0u8; ADTS_HEADER_SIZE];
    adts[0] = 0xFF;
    adts[1] = 0xF1;
    adts[2] = ((AAC_PROFILE_LC - 1) << 6) | (SAMPLE_RATE_INDEX << 2) | (CHANNELS >> 2);
    adts[3] = ((CHANNELS & 3) << 6) | (((frame_length >> 11) & 0x03) as u8);
    adts[4] = ((frame_length >> 3) & 0xFF) as u8;
    adts[5] = (((frame_length & 0x07) << 5) as u8) | 0x1F;
    adts[6] = 0xFC;
    adts
}

/// Decode the total frame length (header + payload) from a header.
///
/// Inverse of the length packing in [`header`]; used when parsing an
/// ADTS stream back into frames.
pub fn frame_length(adts: &[u8; ADTS_HEADER_SIZE]) -> usize {
    (((adts[3] & 0x03) as usize) << 11) | ((adts[4] as usize) << 3) | ((adts[5] >> 5) as usize)
}

use serde::Serialize;

/// Result returned when a recording session stops.
///
/// Serializes with the field names the host layer expects
/// (`duration`, `path`, `audioFormat`, `peakPower`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingResult {
    /// Recorded duration in milliseconds, truncated to whole seconds
    /// before conversion (sub-second precision is structurally lost).
    #[serde(rename = "duration")]
    pub duration_ms: u64,

    pub path: String,

    pub audio_format: String,

    /// Last peak power reading in dB, [-120, 0].
    pub peak_power: f64,

    /// Last average power reading in dB, [-120, 0].
    pub average_power: f64,

    pub is_metering_enabled: bool,

    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_host_field_names() {
        let result = RecordingResult {
            duration_ms: 2000,
            path: "/tmp/rec.aac".into(),
            audio_format: "aac".into(),
            peak_power: -120.0,
            average_power: -120.0,
            is_metering_enabled: true,
            status: "stopped".into(),
        };

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["duration"], 2000);
        assert_eq!(json["audioFormat"], "aac");
        assert_eq!(json["peakPower"], -120.0);
        assert_eq!(json["averagePower"], -120.0);
        assert_eq!(json["isMeteringEnabled"], true);
        assert_eq!(json["status"], "stopped");
    }
}

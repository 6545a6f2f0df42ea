/// Recording session state machine.
///
/// State transitions:
/// ```text
/// idle → recording ↔ paused
///            ↓         ↓
///            stopped (terminal)
/// ```
///
/// `Stopped` is terminal; a new session must be constructed to record again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Recording,
    Paused,
    Stopped,
}

impl RecorderState {
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Whether power metering is live in this state.
    ///
    /// Anything other than active recording reports the silence floor,
    /// matching the platform-normalized "no signal" convention.
    pub fn is_metering_active(&self) -> bool {
        matches!(self, Self::Recording)
    }

    /// Status string as reported to the host layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        }
    }
}

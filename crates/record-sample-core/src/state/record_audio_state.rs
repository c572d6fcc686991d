use uuid::Uuid;

/// Message shown when a recording is attempted without permission.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied!";

/// Lifecycle of the press-and-hold recording control.
///
/// Every variant but `Pending` and `Error` carries the session id of the
/// recording it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecordAudioState {
    /// Nothing recorded yet, or the last outcome was acknowledged.
    #[default]
    Pending,
    /// A recording is in progress.
    StartRecord(Uuid),
    /// The recording was released and finalized.
    RecordingComplete(Uuid),
    /// The recording was trashed.
    RecordingCancelled(Uuid),
    /// A user-facing error, shown until dismissed.
    Error(String),
}

impl RecordAudioState {
    /// Returns the session id of an in-progress recording.
    pub fn recording_session(&self) -> Option<Uuid> {
        match self {
            RecordAudioState::StartRecord(id) => Some(*id),
            _ => None,
        }
    }

    /// True while a recording is in progress.
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordAudioState::StartRecord(_))
    }
}

use crate::state::{PermissionStatus, RecordAudioState};

/// Root of the application state tree.
///
/// Owned by the store for the lifetime of the process. Everything else
/// sees it through snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// Permission statuses known to the application.
    pub permissions_state: PermissionsState,
    /// State of the audio recording control.
    pub record_audio_state: RecordAudioState,
}

/// Permission statuses known to the application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PermissionsState {
    /// Microphone access.
    pub record_audio: PermissionStatus,
}

use crate::state::PermissionStatus;

/// Everything that can happen to the application, from the UI or from a
/// middleware follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// The scene became active (app launched or brought to foreground).
    ScenePhaseActive,
    /// The permission service reported a microphone status.
    SetRecordAudio(PermissionStatus),
    /// The record button was pressed.
    StartRecordSession,
    /// The record button was released.
    EndRecordSession,
    /// The recording was swiped to the trash.
    CancelRecordSession,
    /// The error banner was dismissed.
    ErrorDismiss,
    /// Does nothing. Emitted to keep a middleware chain alive.
    Nop,
}

//! The application state machine.

use crate::{
    AppAction,
    state::{ACCESS_DENIED_MESSAGE, AppState, PermissionStatus, RecordAudioState},
};

use tracing::debug;
use uuid::Uuid;

/// Applies `action` to `state`.
///
/// The only place the state tree changes. Total: every action is accepted in
/// every state, and actions that do not apply are ignored.
pub fn app_reducer(state: &mut AppState, action: &AppAction) {
    match action {
        AppAction::ScenePhaseActive | AppAction::Nop => {}
        AppAction::SetRecordAudio(status) => {
            state.permissions_state.record_audio = *status;
        }
        AppAction::StartRecordSession => match state.permissions_state.record_audio {
            PermissionStatus::NotDetermined => {}
            PermissionStatus::Granted => {
                let session_id = Uuid::new_v4();
                debug!(session_id = %session_id, "Record session started");
                state.record_audio_state = RecordAudioState::StartRecord(session_id);
            }
            PermissionStatus::Denied => {
                state.record_audio_state =
                    RecordAudioState::Error(ACCESS_DENIED_MESSAGE.to_string());
            }
        },
        AppAction::EndRecordSession => {
            if let RecordAudioState::StartRecord(id) = state.record_audio_state {
                debug!(session_id = %id, "Record session complete");
                state.record_audio_state = RecordAudioState::RecordingComplete(id);
            }
        }
        AppAction::CancelRecordSession => {
            if let RecordAudioState::StartRecord(id) = state.record_audio_state {
                debug!(session_id = %id, "Record session cancelled");
                state.record_audio_state = RecordAudioState::RecordingCancelled(id);
            }
        }
        AppAction::ErrorDismiss => {
            if matches!(state.record_audio_state, RecordAudioState::Error(_)) {
                state.record_audio_state = RecordAudioState::Pending;
            }
        }
    }
}

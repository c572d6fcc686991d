mod app_state;
mod permission_status;
mod record_audio_state;

pub use {
    app_state::{AppState, PermissionsState},
    permission_status::PermissionStatus,
    record_audio_state::{ACCESS_DENIED_MESSAGE, RecordAudioState},
};

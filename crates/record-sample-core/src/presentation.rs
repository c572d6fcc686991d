use crate::state::{AppState, RecordAudioState};

/// What the conversation screen shows for a given state.
///
/// While recording, the composer controls give way to the record panel
/// (timer plus lock, cancel and send controls).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationView {
    /// Record panel with timer and lock/cancel/send controls.
    pub show_record_panel: bool,
    /// Attachment button of the composer.
    pub show_attachment_button: bool,
    /// Message text field of the composer.
    pub show_text_field: bool,
    /// Emoji icon of the composer.
    pub show_emoji_icon: bool,
    /// Transient error banner. Dismissing it dispatches `ErrorDismiss`.
    pub error_banner: Option<String>,
}

impl From<&AppState> for ConversationView {
    fn from(state: &AppState) -> Self {
        let is_recording = state.record_audio_state.is_recording();
        let error_banner = match &state.record_audio_state {
            RecordAudioState::Error(message) => Some(message.clone()),
            _ => None,
        };

        Self {
            show_record_panel: is_recording,
            show_attachment_button: !is_recording,
            show_text_field: !is_recording,
            show_emoji_icon: !is_recording,
            error_banner,
        }
    }
}

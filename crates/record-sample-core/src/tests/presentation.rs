use crate::{AppState, ConversationView, RecordAudioState};

use uuid::Uuid;

fn view_of(record_audio_state: RecordAudioState) -> ConversationView {
    let state = AppState {
        record_audio_state,
        ..AppState::default()
    };
    ConversationView::from(&state)
}

/// WHAT: Recording swaps the composer for the record panel
/// WHY: Attachment, text field and emoji are hidden while the timer runs
#[test]
fn given_recording_state_when_mapping_then_record_panel_only() {
    // Given/When: A recording in progress
    let view = view_of(RecordAudioState::StartRecord(Uuid::new_v4()));

    // Then: Record panel shown, composer hidden
    assert!(view.show_record_panel);
    assert!(!view.show_attachment_button);
    assert!(!view.show_text_field);
    assert!(!view.show_emoji_icon);
    assert_eq!(view.error_banner, None);
}

/// WHAT: Finished or idle sessions show the composer
/// WHY: The record panel only exists while recording
#[test]
fn given_idle_states_when_mapping_then_composer_shown() {
    let id = Uuid::new_v4();
    for state in [
        RecordAudioState::Pending,
        RecordAudioState::RecordingComplete(id),
        RecordAudioState::RecordingCancelled(id),
    ] {
        // Given/When: A non-recording state
        let view = view_of(state);

        // Then: Composer shown, no banner
        assert!(!view.show_record_panel);
        assert!(view.show_attachment_button);
        assert!(view.show_text_field);
        assert!(view.show_emoji_icon);
        assert_eq!(view.error_banner, None);
    }
}

/// WHAT: Error state surfaces its message as a banner
/// WHY: Permission denial is reported to the user
#[test]
fn given_error_state_when_mapping_then_banner_with_message() {
    // Given/When: An error
    let view = view_of(RecordAudioState::Error("Access denied!".to_string()));

    // Then: Banner with the message, composer shown
    assert_eq!(view.error_banner.as_deref(), Some("Access denied!"));
    assert!(view.show_text_field);
}

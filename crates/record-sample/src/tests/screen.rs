use crate::screen::{ScreenRenderer, render};

use record_sample_core::{AppState, ConversationView, RecordAudioState};
use uuid::Uuid;

fn state(record_audio_state: RecordAudioState) -> AppState {
    AppState {
        record_audio_state,
        ..AppState::default()
    }
}

/// WHAT: The recording screen shows the record panel only
/// WHY: Composer controls are hidden while recording
#[test]
fn given_recording_view_when_rendering_then_record_panel_without_composer() {
    // Given: A recording in progress
    let view = ConversationView::from(&state(RecordAudioState::StartRecord(Uuid::new_v4())));

    // When: Rendering
    let text = render(&view);

    // Then: Panel shown, composer hidden
    assert!(text.contains("[ REC ]"));
    assert!(!text.contains("[ message ]"));
}

/// WHAT: Errors render as a banner above the composer
/// WHY: The user needs to see why nothing is recording
#[test]
fn given_error_view_when_rendering_then_banner_and_composer() {
    // Given: An access denied error
    let view = ConversationView::from(&state(RecordAudioState::Error(
        "Access denied!".to_string(),
    )));

    // When: Rendering
    let text = render(&view);

    // Then: Banner first, composer below
    assert!(text.starts_with("[!] Access denied!"));
    assert!(text.contains("[ message ]"));
}

/// WHAT: The renderer only redraws when the view changes
/// WHY: Follow-ups like Nop must not reprint the screen
#[test]
fn given_renderer_when_state_changes_without_view_change_then_no_redraw() {
    // Given: A renderer that drew the pending screen
    let renderer = ScreenRenderer::new();
    assert!(renderer.update(&state(RecordAudioState::Pending)).is_some());

    // When: A state change that maps to the same view
    let id = Uuid::new_v4();
    let same_view = renderer.update(&state(RecordAudioState::RecordingComplete(id)));
    let new_view = renderer.update(&state(RecordAudioState::StartRecord(id)));

    // Then: Redraw only for the recording screen
    assert!(same_view.is_none());
    assert!(new_view.is_some());
}

use crate::{DraftOutbox, draft_outbox::DraftMessage};

use std::path::PathBuf;

use record_sample_core::MessageService;
use uuid::Uuid;

/// WHAT: Drafts reference the recording file of their session
/// WHY: The outgoing message must carry the recorded audio
#[test]
fn given_session_when_preparing_draft_then_draft_points_at_recording() {
    // Given: An outbox over a recordings directory
    let mut outbox = DraftOutbox::new(PathBuf::from("/tmp/voice"), "wav");
    let drafts = outbox.drafts();
    let id = Uuid::new_v4();

    // When: Preparing a draft
    outbox.prepare_draft_message(id);

    // Then: One draft at <dir>/<id>.wav
    let drafts = drafts.lock().unwrap_or_else(|e| e.into_inner()).clone();
    assert_eq!(
        drafts,
        vec![DraftMessage {
            session_id: id,
            audio_path: PathBuf::from("/tmp/voice").join(format!("{id}.wav")),
        }]
    );
}

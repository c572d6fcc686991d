use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use record_sample_core::{MessageService, recording_path};
use tracing::info;
use uuid::Uuid;

/// An outgoing message waiting to be sent, referencing a recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftMessage {
    /// Session the audio was recorded in.
    pub session_id: Uuid,
    /// Recorded audio file.
    pub audio_path: PathBuf,
}

/// Shared list of prepared drafts.
pub type Drafts = Arc<Mutex<Vec<DraftMessage>>>;

/// Message service keeping drafts in memory for the current process.
pub struct DraftOutbox {
    recordings_dir: PathBuf,
    extension: String,
    drafts: Drafts,
}

impl DraftOutbox {
    /// Drafts point at `<recordings_dir>/<session_id>.<extension>`.
    pub fn new(recordings_dir: PathBuf, extension: &str) -> Self {
        Self {
            recordings_dir,
            extension: extension.to_string(),
            drafts: Arc::default(),
        }
    }

    /// Handle for reading the drafts after the outbox moved into the store.
    pub fn drafts(&self) -> Drafts {
        Arc::clone(&self.drafts)
    }
}

impl MessageService for DraftOutbox {
    fn prepare_draft_message(&mut self, session_id: Uuid) {
        let draft = DraftMessage {
            session_id,
            audio_path: recording_path(&self.recordings_dir, session_id, &self.extension),
        };

        info!(session_id = %session_id, audio_path = ?draft.audio_path, "Draft message prepared");

        self.drafts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(draft);
    }
}

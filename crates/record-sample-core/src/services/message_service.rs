use uuid::Uuid;

/// Turns a finished recording into an outgoing draft message.
pub trait MessageService {
    /// Creates a draft referencing the audio recorded for `session_id`.
    fn prepare_draft_message(&mut self, session_id: Uuid);
}

use crate::CoreResult;

use uuid::Uuid;

/// Writes microphone audio to a session-scoped file.
///
/// Files live in a temporary directory and are named `<session_id>.<ext>`.
pub trait RecorderService {
    /// Begins recording into the file for `session_id`.
    fn start(&mut self, session_id: Uuid) -> CoreResult<()>;

    /// Stops and finalizes the active recording.
    fn stop(&mut self) -> CoreResult<()>;

    /// Stops the active recording and deletes the file for `session_id`.
    fn cancel(&mut self, session_id: Uuid) -> CoreResult<()>;
}

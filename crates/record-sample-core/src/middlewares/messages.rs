use crate::{
    AppAction, Effect, Middleware,
    services::MessageService,
    state::{AppState, RecordAudioState},
};

use tracing::info;

/// Hands completed recordings to the message service as draft messages.
pub struct MessagesMiddleware {
    service: Box<dyn MessageService>,
}

impl MessagesMiddleware {
    /// Takes ownership of the message service.
    pub fn new(service: impl MessageService + 'static) -> Self {
        Self {
            service: Box::new(service),
        }
    }
}

impl Middleware<AppState, AppAction> for MessagesMiddleware {
    fn handle(&mut self, state: &AppState, action: &AppAction) -> Option<Effect<AppAction>> {
        if let (AppAction::EndRecordSession, RecordAudioState::RecordingComplete(session_id)) =
            (action, &state.record_audio_state)
        {
            info!(session_id = %session_id, "Preparing draft message");
            self.service.prepare_draft_message(*session_id);
        }

        Some(Effect::none())
    }

    fn name(&self) -> &str {
        "messages"
    }
}

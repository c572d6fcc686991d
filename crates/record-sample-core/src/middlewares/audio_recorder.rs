use crate::{
    AppAction, CoreError, CoreResult, Effect, FatalError, Middleware, RecorderOperation,
    services::RecorderService,
    state::{AppState, RecordAudioState},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Drives the recorder service from the recording state machine.
///
/// Never emits a follow-up action. Recorder failures are environment
/// failures: each one is sent to the host on the fatal channel and the
/// middleware refuses every later recorder operation.
pub struct AudioRecorderMiddleware {
    recorder: Box<dyn RecorderService>,
    fatal_tx: mpsc::UnboundedSender<FatalError>,
    poisoned: bool,
}

impl AudioRecorderMiddleware {
    /// Takes ownership of the recorder. Fatal failures go to `fatal_tx`.
    pub fn new(
        recorder: impl RecorderService + 'static,
        fatal_tx: mpsc::UnboundedSender<FatalError>,
    ) -> Self {
        Self {
            recorder: Box::new(recorder),
            fatal_tx,
            poisoned: false,
        }
    }

    /// True once a recorder operation has failed.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    #[instrument(skip(self))]
    fn perform(&mut self, operation: RecorderOperation, session_id: Uuid) {
        let result = self.run(operation, session_id);

        match result {
            Ok(()) => info!(session_id = %session_id, %operation, "Recorder operation done"),
            Err(source) => {
                error!(
                    session_id = %session_id,
                    %operation,
                    error = %source,
                    "Recorder failed, escalating to host"
                );
                self.poisoned = true;
                if self
                    .fatal_tx
                    .send(FatalError { operation, source })
                    .is_err()
                {
                    error!("Fatal error channel closed, no host to notify");
                }
            }
        }
    }

    #[track_caller]
    fn run(&mut self, operation: RecorderOperation, session_id: Uuid) -> CoreResult<()> {
        if self.poisoned {
            return Err(CoreError::RecorderPoisoned {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match operation {
            RecorderOperation::Start => self.recorder.start(session_id),
            RecorderOperation::Stop => self.recorder.stop(),
            RecorderOperation::Cancel => self.recorder.cancel(session_id),
        }
    }
}

impl Middleware<AppState, AppAction> for AudioRecorderMiddleware {
    fn handle(&mut self, state: &AppState, action: &AppAction) -> Option<Effect<AppAction>> {
        match (action, &state.record_audio_state) {
            (AppAction::StartRecordSession, RecordAudioState::StartRecord(id)) => {
                self.perform(RecorderOperation::Start, *id);
            }
            (AppAction::EndRecordSession, RecordAudioState::RecordingComplete(id)) => {
                self.perform(RecorderOperation::Stop, *id);
            }
            (AppAction::CancelRecordSession, RecordAudioState::RecordingCancelled(id)) => {
                self.perform(RecorderOperation::Cancel, *id);
            }
            _ => {}
        }

        Some(Effect::none())
    }

    fn name(&self) -> &str {
        "audio-recorder"
    }
}

//! Microphone permission for a terminal host.
//!
//! Status combines the remembered consent with input-device presence. A
//! request is turned into a [`PermissionPrompt`] the console loop answers
//! with the user's next line. Concurrent requests share one prompt.

use crate::config::ConsentSetting;

use std::sync::Mutex;

use async_trait::async_trait;
use record_sample_core::{CpalRecorder, PermissionService, PermissionStatus};
use tokio::sync::{Mutex as AsyncMutex, mpsc, oneshot};
use tracing::{error, info, instrument, warn};

/// A pending "allow microphone access?" question.
#[derive(Debug)]
pub struct PermissionPrompt {
    /// Receives the user's answer.
    pub responder: oneshot::Sender<bool>,
}

/// Permission service backed by console prompts.
pub struct ConsolePermissions {
    consent: Mutex<Option<bool>>,
    prompt_tx: mpsc::Sender<PermissionPrompt>,
    /// Held while a prompt is outstanding.
    prompting: AsyncMutex<()>,
    input_available: fn() -> bool,
}

impl ConsolePermissions {
    /// Starts from the consent stored in the config file.
    pub fn new(initial: ConsentSetting, prompt_tx: mpsc::Sender<PermissionPrompt>) -> Self {
        Self::with_device_probe(initial, prompt_tx, CpalRecorder::input_available)
    }

    /// Like [`new`](Self::new) with a custom input-device probe.
    pub fn with_device_probe(
        initial: ConsentSetting,
        prompt_tx: mpsc::Sender<PermissionPrompt>,
        input_available: fn() -> bool,
    ) -> Self {
        Self {
            consent: Mutex::new(initial.answer()),
            prompt_tx,
            prompting: AsyncMutex::new(()),
            input_available,
        }
    }

    fn consent(&self) -> Option<bool> {
        *self.consent.lock().unwrap_or_else(|e| {
            error!("Consent lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }

    fn remember(&self, answer: bool) {
        *self.consent.lock().unwrap_or_else(|e| e.into_inner()) = Some(answer);
    }
}

#[async_trait]
impl PermissionService for ConsolePermissions {
    #[instrument(skip(self))]
    async fn check_status(&self) -> PermissionStatus {
        if !(self.input_available)() {
            warn!("No input device available, reporting microphone access as denied");
            return PermissionStatus::Denied;
        }

        match self.consent() {
            None => PermissionStatus::NotDetermined,
            Some(answer) => PermissionStatus::from_answer(answer),
        }
    }

    #[instrument(skip(self))]
    async fn request_permission(&self) -> bool {
        if !(self.input_available)() {
            warn!("No input device available, refusing microphone access without prompting");
            return false;
        }

        if let Some(answer) = self.consent() {
            info!(answer, "Consent already given, not prompting");
            return answer;
        }

        let _prompting = self.prompting.lock().await;

        // Answered by the prompt this request waited behind.
        if let Some(answer) = self.consent() {
            info!(answer, "Consent given while waiting, not prompting");
            return answer;
        }

        let (responder, answer_rx) = oneshot::channel();
        if let Err(e) = self.prompt_tx.send(PermissionPrompt { responder }).await {
            error!(error = ?e, "Failed to send permission prompt");
            return false;
        }

        match answer_rx.await {
            Ok(answer) => {
                self.remember(answer);
                info!(answer, "Microphone consent recorded");
                answer
            }
            Err(_) => {
                warn!("Permission prompt dropped without an answer, treating as denied");
                false
            }
        }
    }
}

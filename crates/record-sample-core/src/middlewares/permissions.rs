use crate::{
    AppAction, Effect, Middleware,
    services::PermissionService,
    state::{AppState, PermissionStatus},
};

use std::sync::Arc;

use tracing::{debug, info};

/// Keeps the microphone permission in the state tree up to date.
///
/// Checks the status whenever the scene becomes active and asks for access
/// when a recording is attempted without it.
pub struct PermissionsMiddleware {
    service: Arc<dyn PermissionService>,
}

impl PermissionsMiddleware {
    /// Wraps a permission service.
    pub fn new(service: Arc<dyn PermissionService>) -> Self {
        Self { service }
    }
}

impl Middleware<AppState, AppAction> for PermissionsMiddleware {
    fn handle(&mut self, state: &AppState, action: &AppAction) -> Option<Effect<AppAction>> {
        let effect = match action {
            AppAction::ScenePhaseActive => {
                let service = Arc::clone(&self.service);
                Effect::future(async move {
                    let status = service.check_status().await;
                    debug!(status = ?status, "Microphone permission checked");
                    AppAction::SetRecordAudio(status)
                })
            }
            AppAction::StartRecordSession => {
                if state.permissions_state.record_audio == PermissionStatus::Granted {
                    Effect::just(AppAction::Nop)
                } else {
                    let service = Arc::clone(&self.service);
                    Effect::future(async move {
                        let granted = service.request_permission().await;
                        info!(granted, "Microphone permission requested");
                        AppAction::SetRecordAudio(PermissionStatus::from_answer(granted))
                    })
                }
            }
            _ => Effect::none(),
        };

        Some(effect)
    }

    fn name(&self) -> &str {
        "permissions"
    }
}

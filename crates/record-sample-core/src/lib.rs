//! Record-sample Core Library
//!
//! Unidirectional data flow for a press-and-hold audio recording control:
//! a single state tree, a pure reducer, and middlewares that talk to the
//! permission, recorder and message services.
//!
//! # Example
//!
//! ```no_run
//! use record_sample_core::{
//!     AppAction, AppState, AudioRecorderMiddleware, CpalRecorder, CoreResult, MessageService,
//!     PermissionService, PermissionStatus, PermissionsMiddleware, MessagesMiddleware, Store,
//!     app_reducer,
//! };
//!
//! use std::sync::Arc;
//!
//! struct AlwaysGranted;
//!
//! #[async_trait::async_trait]
//! impl PermissionService for AlwaysGranted {
//!     async fn check_status(&self) -> PermissionStatus {
//!         PermissionStatus::Granted
//!     }
//!     async fn request_permission(&self) -> bool {
//!         true
//!     }
//! }
//!
//! struct LogDrafts;
//!
//! impl MessageService for LogDrafts {
//!     fn prepare_draft_message(&mut self, session_id: uuid::Uuid) {
//!         println!("draft for {session_id}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let (fatal_tx, _fatal_rx) = tokio::sync::mpsc::unbounded_channel();
//!     let recorder = CpalRecorder::new(std::env::temp_dir(), "wav")?;
//!
//!     let mut store = Store::new(
//!         AppState::default(),
//!         app_reducer,
//!         vec![
//!             Box::new(PermissionsMiddleware::new(Arc::new(AlwaysGranted))),
//!             Box::new(AudioRecorderMiddleware::new(recorder, fatal_tx)),
//!             Box::new(MessagesMiddleware::new(LogDrafts)),
//!         ],
//!     );
//!
//!     store.dispatch(AppAction::ScenePhaseActive);
//!     store.settle().await;
//!     store.dispatch(AppAction::StartRecordSession);
//!     tokio::time::sleep(std::time::Duration::from_secs(3)).await;
//!     store.dispatch(AppAction::EndRecordSession);
//!     store.settle().await;
//!     Ok(())
//! }
//! ```

mod action;
mod audio;
mod error;
mod middlewares;
mod presentation;
mod reducer;
mod services;
mod state;
mod store;

pub use {
    action::AppAction,
    audio::{CpalRecorder, DEFAULT_EXTENSION, recording_path},
    error::{CoreError, FatalError, RecorderOperation, Result as CoreResult},
    middlewares::{AudioRecorderMiddleware, MessagesMiddleware, PermissionsMiddleware},
    presentation::ConversationView,
    reducer::app_reducer,
    services::{MessageService, PermissionService, RecorderService},
    state::{ACCESS_DENIED_MESSAGE, AppState, PermissionStatus, PermissionsState, RecordAudioState},
    store::{ChainPolicy, Effect, Middleware, Reducer, Store, Subscription},
};

/// The application store.
pub type AppStore = Store<AppState, AppAction>;

#[cfg(test)]
mod tests;

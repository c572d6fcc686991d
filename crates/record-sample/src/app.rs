use crate::{
    AppError, AppResult, ConsoleCommand, ConsolePermissions, DraftOutbox, Drafts,
    PermissionPrompt, config::Config, console_command::parse_answer, screen,
};

use std::{collections::VecDeque, sync::Arc};

use record_sample_core::{
    AppAction, AppState, AppStore, AudioRecorderMiddleware, ConversationView, CpalRecorder,
    FatalError, MessagesMiddleware, PermissionsMiddleware, Store, Subscription, app_reducer,
};
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info, instrument, warn};

/// Whether the console loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// The host shell around the store.
///
/// Owns the store, so this task is the main context: user commands,
/// follow-up actions and permission prompts are all handled here, one at a
/// time.
pub struct App {
    pub(crate) store: AppStore,
    pub(crate) drafts: Drafts,
    pub(crate) line_rx: mpsc::Receiver<String>,
    pub(crate) prompt_rx: mpsc::Receiver<PermissionPrompt>,
    pub(crate) fatal_rx: mpsc::UnboundedReceiver<FatalError>,
    /// Unanswered permission prompts; one answer settles them all.
    pub(crate) pending_prompts: VecDeque<oneshot::Sender<bool>>,
    pub(crate) _screen: Subscription,
}

impl App {
    /// Builds the services and the store from `config`.
    ///
    /// Middleware order: permissions, recorder, messages.
    #[track_caller]
    #[instrument(skip(config, line_rx))]
    pub fn assemble(config: &Config, line_rx: mpsc::Receiver<String>) -> AppResult<Self> {
        let output_dir = config.recorder.resolved_output_dir();
        let extension = config.recorder.extension.as_str();

        let recorder = CpalRecorder::new(&output_dir, extension)?;

        let (prompt_tx, prompt_rx) = mpsc::channel(4);
        let permissions = Arc::new(ConsolePermissions::new(
            config.permissions.record_audio,
            prompt_tx,
        ));

        let outbox = DraftOutbox::new(output_dir, extension);
        let drafts = outbox.drafts();

        let (fatal_tx, fatal_rx) = mpsc::unbounded_channel();

        let store = Store::new(
            AppState::default(),
            app_reducer,
            vec![
                Box::new(PermissionsMiddleware::new(permissions)),
                Box::new(AudioRecorderMiddleware::new(recorder, fatal_tx)),
                Box::new(MessagesMiddleware::new(outbox)),
            ],
        );

        Ok(Self::from_parts(store, drafts, line_rx, prompt_rx, fatal_rx))
    }

    /// Wraps an already assembled store and attaches the screen renderer.
    pub(crate) fn from_parts(
        store: AppStore,
        drafts: Drafts,
        line_rx: mpsc::Receiver<String>,
        prompt_rx: mpsc::Receiver<PermissionPrompt>,
        fatal_rx: mpsc::UnboundedReceiver<FatalError>,
    ) -> Self {
        let renderer = screen::ScreenRenderer::new();
        let screen = store.subscribe(move |state: &AppState| {
            if let Some(text) = renderer.update(state) {
                println!("{text}");
            }
        });

        Self {
            store,
            drafts,
            line_rx,
            prompt_rx,
            fatal_rx,
            pending_prompts: VecDeque::new(),
            _screen: screen,
        }
    }

    /// Run the console loop until `quit`, end of input or a fatal failure.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> AppResult<()> {
        info!("Record-sample starting");
        println!("{}", ConsoleCommand::HELP);

        self.store.dispatch(AppAction::ScenePhaseActive);

        loop {
            tokio::select! {
                biased;

                Some(fatal) = self.fatal_rx.recv() => {
                    error!(error = %fatal, "Fatal recorder failure");
                    return Err(AppError::from(fatal));
                }

                Some(prompt) = self.prompt_rx.recv() => {
                    if self.pending_prompts.is_empty() {
                        println!("Allow microphone access? [y/n]");
                    }
                    self.pending_prompts.push_back(prompt.responder);
                }

                _ = self.store.next_follow_up(), if self.store.pending_effects() > 0 => {}

                line = self.line_rx.recv() => {
                    match line {
                        Some(line) => {
                            if self.handle_line(&line) == Flow::Quit {
                                info!("Quit requested");
                                break;
                            }
                        }
                        None => {
                            info!("Console input closed, shutting down");
                            break;
                        }
                    }
                }
            }
        }

        info!("Record-sample shut down successfully");

        Ok(())
    }

    /// Handle one line of console input.
    pub(crate) fn handle_line(&mut self, line: &str) -> Flow {
        if !self.pending_prompts.is_empty() {
            match parse_answer(line) {
                Some(answer) => {
                    for responder in self.pending_prompts.drain(..) {
                        if responder.send(answer).is_err() {
                            warn!("Permission request went away before the answer");
                        }
                    }
                }
                None => println!("Please answer y or n."),
            }
            return Flow::Continue;
        }

        let Some(command) = ConsoleCommand::parse(line) else {
            if !line.trim().is_empty() {
                println!("Unknown command `{}`. Type `help`.", line.trim());
            }
            return Flow::Continue;
        };

        if let Some(action) = command.action() {
            self.store.dispatch(action);
            return Flow::Continue;
        }

        match command {
            ConsoleCommand::Lock => {
                if self.store.state().record_audio_state.is_recording() {
                    println!("Recording locked. `send` or `trash` to finish.");
                } else {
                    println!("Nothing to lock.");
                }
            }
            ConsoleCommand::Status => {
                let view = ConversationView::from(self.store.state());
                println!("{}", screen::render(&view));
                let drafts = self.drafts.lock().unwrap_or_else(|e| e.into_inner());
                println!("{} draft message(s)", drafts.len());
                for draft in drafts.iter() {
                    println!("  {} -> {}", draft.session_id, draft.audio_path.display());
                }
            }
            ConsoleCommand::Help => println!("{}", ConsoleCommand::HELP),
            ConsoleCommand::Quit => return Flow::Quit,
            _ => {}
        }

        Flow::Continue
    }
}

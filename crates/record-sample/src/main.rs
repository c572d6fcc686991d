//! Record-sample: press-and-hold voice messages on a console conversation screen.

mod app;
mod config;
mod console_command;
mod console_permissions;
mod draft_outbox;
mod error;
mod input_handler;
mod screen;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    console_command::ConsoleCommand,
    console_permissions::{ConsolePermissions, PermissionPrompt},
    draft_outbox::{DraftOutbox, Drafts},
    error::{AppError, Result as AppResult},
};

use crate::{config::Config, input_handler::spawn_stdin_forwarder};

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "record_sample=debug,record_sample_core=debug";

/// How long shutdown waits for the console forwarder parked in `read_line`.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

/// Application entry point.
fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Logs go to stderr; stdout is the conversation screen.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let result = rt.block_on(async move {
        let (line_tx, line_rx) = mpsc::channel(32);
        let _forwarder = spawn_stdin_forwarder(line_tx);

        let app = App::assemble(&config, line_rx)?;
        app.run().await
    });

    rt.shutdown_timeout(SHUTDOWN_TIMEOUT);

    if let Err(e) = result {
        error!(error = ?e, "Record-sample terminated");
        std::process::exit(1);
    }
}

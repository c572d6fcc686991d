//! Forwards console lines into the async runtime.

use std::io::BufRead;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, error};

/// Spawns the stdin forwarder.
///
/// Single persistent blocking task: `read_line` blocks without polling.
/// When `line_tx`'s receiver is dropped the next `blocking_send` fails and
/// the task ends; until then it may stay parked in `read_line`, so the
/// runtime is shut down with a timeout.
pub fn spawn_stdin_forwarder(line_tx: mpsc::Sender<String>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!(error = ?e, "Failed to read console input");
                    break;
                }
            }
        }
        debug!("Console input forwarder stopped");
    })
}

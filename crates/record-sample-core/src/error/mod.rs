use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recorder and audio device errors with source location tracking.
///
/// These are environment failures. The store never turns them into state;
/// the recorder middleware escalates them to the host as a [`FatalError`].
#[derive(Error, Debug)]
pub enum CoreError {
    /// No audio input device found.
    #[error("No microphone found {location}")]
    NoMicrophoneFound {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio device operation failed.
    #[error("Audio device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Filesystem operation on a recording file failed.
    #[error("File error at {path:?}: {source} {location}")]
    FileError {
        /// Path of the recording file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Writing or finalizing the WAV container failed.
    #[error("WAV encoding error: {reason} {location}")]
    WavError {
        /// Description of the encoding error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Stop or cancel was requested with no active recording.
    #[error("No active recording {location}")]
    RecorderIdle {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The recorder refused an operation after an earlier fatal failure.
    #[error("Recorder unavailable after a fatal failure {location}")]
    RecorderPoisoned {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// Recorder operation that produced a [`FatalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderOperation {
    /// `RecorderService::start`.
    Start,
    /// `RecorderService::stop`.
    Stop,
    /// `RecorderService::cancel`.
    Cancel,
}

impl std::fmt::Display for RecorderOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecorderOperation::Start => "start",
            RecorderOperation::Stop => "stop",
            RecorderOperation::Cancel => "cancel",
        };
        f.write_str(name)
    }
}

/// Unrecoverable environment failure surfaced to the host application.
///
/// The host decides between termination and degraded-mode continuation.
/// The recorder stays poisoned either way.
#[derive(Error, Debug)]
#[error("Fatal recorder failure during {operation}: {source}")]
pub struct FatalError {
    /// Which recorder operation failed.
    pub operation: RecorderOperation,
    /// The underlying core error.
    #[source]
    pub source: CoreError,
}

mod recorder;

pub use recorder::CpalRecorder;

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Extension used when none is configured.
pub const DEFAULT_EXTENSION: &str = "wav";

/// File backing the recording of `session_id`: `<dir>/<session_id>.<extension>`.
pub fn recording_path(dir: &Path, session_id: Uuid, extension: &str) -> PathBuf {
    dir.join(format!("{session_id}.{extension}"))
}

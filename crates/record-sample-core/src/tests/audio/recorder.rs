use crate::{CpalRecorder, DEFAULT_EXTENSION, RecorderService, recording_path};

use std::path::PathBuf;

use uuid::Uuid;

/// WHAT: Recording files are named after the session id
/// WHY: Cancel deletes the file by id alone
#[test]
fn given_session_id_when_building_path_then_id_dot_extension_in_dir() {
    // Given: A directory and a session id
    let dir = PathBuf::from("/tmp/recordings");
    let id = Uuid::new_v4();

    // When: Building the recording path
    let path = recording_path(&dir, id, DEFAULT_EXTENSION);

    // Then: <dir>/<id>.wav
    assert_eq!(path, dir.join(format!("{id}.wav")));
}

/// WHAT: Stop with nothing recording is an error
/// WHY: The recorder must not pretend a file was saved
#[test]
#[allow(clippy::unwrap_used)]
fn given_idle_recorder_when_stopping_then_recorder_idle_error() {
    // Given: A recorder with nothing recording
    let dir = std::env::temp_dir().join(format!("record-sample-it-{}", Uuid::new_v4()));
    let mut recorder = CpalRecorder::new(&dir, DEFAULT_EXTENSION).unwrap();

    // When: Stopping without starting
    let result = recorder.stop();

    // Then: RecorderIdle, for cancel too
    assert!(matches!(result, Err(crate::CoreError::RecorderIdle { .. })));
    assert!(matches!(
        recorder.cancel(Uuid::new_v4()),
        Err(crate::CoreError::RecorderIdle { .. })
    ));
    assert!(dir.is_dir());
    let _ = std::fs::remove_dir_all(dir);
}

/// WHAT: A recorded session leaves a WAV file; a cancelled one does not
/// WHY: Validates the full device-to-file path
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
#[allow(clippy::unwrap_used)]
fn given_default_device_when_recording_then_file_saved_or_removed() {
    // Given: A recorder on the default input device
    let dir = std::env::temp_dir().join(format!("record-sample-it-{}", Uuid::new_v4()));
    let mut recorder = CpalRecorder::new(&dir, DEFAULT_EXTENSION).unwrap();
    let kept = Uuid::new_v4();
    let trashed = Uuid::new_v4();

    // When: Recording one session to the end and cancelling another
    recorder.start(kept).unwrap();
    assert_eq!(recorder.active_session(), Some(kept));
    std::thread::sleep(std::time::Duration::from_millis(300));
    recorder.stop().unwrap();

    recorder.start(trashed).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(300));
    recorder.cancel(trashed).unwrap();

    // Then: Only the kept session has a readable WAV file
    let kept_path = recording_path(recorder.output_dir(), kept, DEFAULT_EXTENSION);
    assert!(hound::WavReader::open(&kept_path).is_ok());
    assert!(!recording_path(recorder.output_dir(), trashed, DEFAULT_EXTENSION).exists());
    assert_eq!(recorder.active_session(), None);
    let _ = std::fs::remove_dir_all(dir);
}

/// WHAT: Cancelling under another session id removes the active recording
/// WHY: The file being recorded must not be left behind
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
#[allow(clippy::unwrap_used)]
fn given_active_recording_when_cancelling_other_session_then_active_file_removed() {
    // Given: A recording in progress
    let dir = std::env::temp_dir().join(format!("record-sample-it-{}", Uuid::new_v4()));
    let mut recorder = CpalRecorder::new(&dir, DEFAULT_EXTENSION).unwrap();
    let active = Uuid::new_v4();
    let other = Uuid::new_v4();
    recorder.start(active).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(100));

    // When: Cancelling with a different session id
    let result = recorder.cancel(other);

    // Then: The active file is gone and the recorder is idle
    assert!(result.is_ok());
    assert!(!recording_path(recorder.output_dir(), active, DEFAULT_EXTENSION).exists());
    assert_eq!(recorder.active_session(), None);
    let _ = std::fs::remove_dir_all(dir);
}

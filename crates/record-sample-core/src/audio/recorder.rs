use crate::{CoreError, CoreResult, audio::recording_path, services::RecorderService};

use std::{
    fs::{self, File},
    io::BufWriter,
    panic::Location,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        {Arc, Mutex},
    },
    time::Duration,
};

use cpal::{
    Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

type SharedWriter = Arc<Mutex<Option<WavWriter<BufWriter<File>>>>>;

/// Time given to an in-flight audio callback to observe the shutdown flag
/// after the stream is dropped. Paid on the calling thread, which for the
/// store is the runtime thread running `dispatch`.
const CALLBACK_SETTLE_DELAY: Duration = Duration::from_millis(5);

struct ActiveRecording {
    session_id: Uuid,
    path: PathBuf,
    stream: Stream,
    writer: SharedWriter,
    /// Set before the stream is dropped so no in-flight callback writes
    /// after the writer is finalized.
    shutdown: Arc<AtomicBool>,
}

/// Records the default input device to WAV files, one per session.
///
/// A missing microphone surfaces as [`CoreError::NoMicrophoneFound`] from
/// `start`, not at construction.
///
/// Samples are written as 32-bit float PCM with the device's native rate
/// and channel count.
pub struct CpalRecorder {
    output_dir: PathBuf,
    extension: String,
    active: Option<ActiveRecording>,
}

impl CpalRecorder {
    /// Prepares `output_dir`. The input device is opened per recording, so
    /// a microphone plugged in later is picked up.
    ///
    /// # Errors
    ///
    /// Returns error if the output directory cannot be created.
    #[track_caller]
    #[instrument(skip(output_dir))]
    pub fn new(output_dir: impl Into<PathBuf>, extension: &str) -> CoreResult<Self> {
        let output_dir = output_dir.into();

        if !output_dir.exists() {
            fs::create_dir_all(&output_dir).map_err(|source| CoreError::FileError {
                path: output_dir.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;
            debug!(output_dir = ?output_dir, "Created recordings directory");
        }

        info!(output_dir = ?output_dir, extension, "CpalRecorder initialized");

        Ok(Self {
            output_dir,
            extension: extension.to_string(),
            active: None,
        })
    }

    /// True when the host exposes a default input device.
    pub fn input_available() -> bool {
        cpal::default_host().default_input_device().is_some()
    }

    #[track_caller]
    fn open_input() -> CoreResult<(Device, StreamConfig)> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .ok_or(CoreError::NoMicrophoneFound {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config = device
            .default_input_config()
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to get config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(
            device_id = ?device.id(),
            sample_rate = config.sample_rate(),
            channels = config.channels(),
            "Input device opened"
        );

        Ok((device, config.into()))
    }

    /// Directory recordings are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Session id of the recording in progress, if any.
    pub fn active_session(&self) -> Option<Uuid> {
        self.active.as_ref().map(|active| active.session_id)
    }

    #[track_caller]
    fn open_writer(path: &Path, config: &StreamConfig) -> CoreResult<WavWriter<BufWriter<File>>> {
        let spec = WavSpec {
            channels: config.channels,
            sample_rate: config.sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };

        WavWriter::create(path, spec).map_err(|e| CoreError::WavError {
            reason: format!("Failed to create {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Stops the stream and finalizes the WAV header.
    #[track_caller]
    fn finish(active: ActiveRecording) -> CoreResult<PathBuf> {
        active.shutdown.store(true, Ordering::Release);
        drop(active.stream);
        std::thread::sleep(CALLBACK_SETTLE_DELAY);

        let writer = active
            .writer
            .lock()
            .unwrap_or_else(|e| {
                error!("WAV writer lock poisoned, recovering: {}", e);
                e.into_inner()
            })
            .take();

        if let Some(writer) = writer {
            writer.finalize().map_err(|e| CoreError::WavError {
                reason: format!("Failed to finalize {:?}: {}", active.path, e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        debug!(session_id = %active.session_id, path = ?active.path, "Recording finalized");

        Ok(active.path)
    }
}

impl RecorderService for CpalRecorder {
    #[track_caller]
    #[instrument(skip(self))]
    fn start(&mut self, session_id: Uuid) -> CoreResult<()> {
        if let Some(previous) = self.active.take() {
            warn!(
                previous_session = %previous.session_id,
                "Recording already active, finalizing it first"
            );
            Self::finish(previous)?;
        }

        let (device, config) = Self::open_input()?;
        let path = recording_path(&self.output_dir, session_id, &self.extension);
        let writer = Self::open_writer(&path, &config)?;
        let writer: SharedWriter = Arc::new(Mutex::new(Some(writer)));
        let shutdown = Arc::new(AtomicBool::new(false));

        let callback_writer = Arc::clone(&writer);
        let callback_shutdown = Arc::clone(&shutdown);

        let stream = device
            .build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if callback_shutdown.load(Ordering::Acquire) {
                        return;
                    }
                    let mut guard = callback_writer.lock().unwrap_or_else(|e| {
                        error!("WAV writer lock poisoned, recovering: {}", e);
                        e.into_inner()
                    });
                    if let Some(writer) = guard.as_mut() {
                        for &sample in data {
                            if let Err(e) = writer.write_sample(sample) {
                                error!("Failed to write sample: {}", e);
                                break;
                            }
                        }
                    }
                },
                |err| {
                    error!("Audio stream error: {}", err);
                },
                None,
            )
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to build stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| CoreError::DeviceError {
            reason: format!("Failed to start stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(session_id = %session_id, path = ?path, "Recording started");

        self.active = Some(ActiveRecording {
            session_id,
            path,
            stream,
            writer,
            shutdown,
        });

        Ok(())
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn stop(&mut self) -> CoreResult<()> {
        let active = self.active.take().ok_or(CoreError::RecorderIdle {
            location: ErrorLocation::from(Location::caller()),
        })?;
        let session_id = active.session_id;

        let path = Self::finish(active)?;

        info!(session_id = %session_id, path = ?path, "Recording saved");

        Ok(())
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn cancel(&mut self, session_id: Uuid) -> CoreResult<()> {
        let active = self.active.take().ok_or(CoreError::RecorderIdle {
            location: ErrorLocation::from(Location::caller()),
        })?;

        if active.session_id != session_id {
            warn!(
                active_session = %active.session_id,
                session_id = %session_id,
                "Cancelling a recording under a different session id, removing the active file"
            );
        }

        let path = Self::finish(active)?;
        fs::remove_file(&path).map_err(|source| CoreError::FileError {
            path: path.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(session_id = %session_id, path = ?path, "Recording cancelled and removed");

        Ok(())
    }
}

mod audio_recorder;
mod messages;
mod permissions;

pub use {
    audio_recorder::AudioRecorderMiddleware, messages::MessagesMiddleware,
    permissions::PermissionsMiddleware,
};

mod message_service;
mod permission_service;
mod recorder_service;

pub use {
    message_service::MessageService, permission_service::PermissionService,
    recorder_service::RecorderService,
};

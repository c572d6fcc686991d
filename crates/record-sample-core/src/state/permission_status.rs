/// Microphone permission as reported by the permission service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// The user has not been asked yet.
    #[default]
    NotDetermined,
    /// Recording is allowed.
    Granted,
    /// Recording was refused.
    Denied,
}

impl PermissionStatus {
    /// Maps the boolean answer of a permission request.
    pub fn from_answer(granted: bool) -> Self {
        if granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }
}

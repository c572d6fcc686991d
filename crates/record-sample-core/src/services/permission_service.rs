use crate::state::PermissionStatus;

use async_trait::async_trait;

/// Platform microphone permission.
#[async_trait]
pub trait PermissionService: Send + Sync {
    /// Current permission status, without prompting.
    async fn check_status(&self) -> PermissionStatus;

    /// Asks the user for access. `true` when granted.
    async fn request_permission(&self) -> bool;
}

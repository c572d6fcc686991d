use crate::config::ConsentSetting;

use serde::{Deserialize, Serialize};

/// Permission configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Pre-seeded microphone consent.
    #[serde(default)]
    pub record_audio: ConsentSetting,
}

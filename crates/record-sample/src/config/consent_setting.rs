use serde::{Deserialize, Serialize};

/// Microphone consent remembered in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentSetting {
    /// Ask on the first recording.
    #[default]
    NotDetermined,
    /// Recording allowed without asking.
    Granted,
    /// Recording refused without asking.
    Denied,
}

impl ConsentSetting {
    /// The stored answer, if any.
    pub fn answer(self) -> Option<bool> {
        match self {
            ConsentSetting::NotDetermined => None,
            ConsentSetting::Granted => Some(true),
            ConsentSetting::Denied => Some(false),
        }
    }
}


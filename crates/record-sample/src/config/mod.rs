mod consent_setting;
#[allow(clippy::module_inception)]
mod config;
mod permissions_config;
mod recorder_config;

pub(crate) use {
    config::Config, consent_setting::ConsentSetting, permissions_config::PermissionsConfig,
    recorder_config::RecorderConfig,
};

use record_sample_core::DEFAULT_EXTENSION;

pub(crate) fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

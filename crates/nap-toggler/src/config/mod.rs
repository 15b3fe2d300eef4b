mod feedback_config;
#[allow(clippy::module_inception)]
mod config;
mod logging_config;
mod privilege_config;

pub(crate) use {
    config::Config, feedback_config::FeedbackConfig, logging_config::LoggingConfig,
    privilege_config::PrivilegeConfig,
};

pub(crate) const DEFAULT_FEEDBACK_DURATION_MS: u64 = 2000;
pub(crate) const DEFAULT_NOTIFY: bool = false;
pub(crate) const DEFAULT_LOG_FILTER: &str = "nap_toggler=debug,nap_toggler_core=debug";
pub(crate) const DEFAULT_LOG_TO_FILE: bool = true;

pub(crate) fn default_prompt() -> String {
    nap_toggler_core::DEFAULT_PRIVILEGE_PROMPT.to_string()
}

pub(crate) fn default_feedback_duration_ms() -> u64 {
    DEFAULT_FEEDBACK_DURATION_MS
}

pub(crate) fn default_notify() -> bool {
    DEFAULT_NOTIFY
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

pub(crate) fn default_log_to_file() -> bool {
    DEFAULT_LOG_TO_FILE
}

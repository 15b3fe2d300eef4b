use crate::config::default_prompt;

use serde::{Deserialize, Serialize};

/// Privilege elevation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegeConfig {
    /// Text shown in the macOS credential dialog.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for PrivilegeConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

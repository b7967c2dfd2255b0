use serde::{Deserialize, Serialize};
use token_service::TokenConfig;

use crate::model::ControllerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid system config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Deployment settings for a token system and its first controller.
///
/// ```toml
/// [token]
/// name = "Skeletal Token"
/// symbol = "SKL"
/// decimals = 18
///
/// [controller]
/// minting_finished = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub token: TokenConfig,
    pub controller: ControllerConfig,
}

impl SystemConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

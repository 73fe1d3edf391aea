use serde::{Deserialize, Serialize};

use self::complex_portal::ComplexPortalConfig;

pub mod complex_portal;
mod env;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub complex_portal: ComplexPortalConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            complex_portal: ComplexPortalConfig::new(),
        }
    }

    pub fn with_env_overrides(self) -> Self {
        Config {
            complex_portal: self.complex_portal.with_env_overrides(),
        }
    }
}

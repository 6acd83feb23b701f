use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use log::debug;
use serde::Deserialize;

use crate::capability::DEFAULT_BTF_PATH;

const DEFAULT_CAPABILITY_MODE: &str = "auto";

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(unused)]
pub struct Settings {
    /// `auto`, `core_full` or `bcc_degraded`.
    pub capability_mode: Option<String>,
    pub btf_path: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        for (key, value) in std::env::vars() {
            if key.starts_with("SLOPROBE") || key.starts_with("RUST_LOG") {
                debug!("ENV: {}={}", key, value);
            }
        }

        let s = Config::builder()
            .add_source(
                Environment::with_prefix("SLOPROBE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = s.try_deserialize()?;
        debug!("Parsed settings: {:?}", settings);
        Ok(settings)
    }

    pub fn capability_mode(&self) -> &str {
        self.capability_mode
            .as_deref()
            .unwrap_or(DEFAULT_CAPABILITY_MODE)
    }

    pub fn btf_path(&self) -> PathBuf {
        PathBuf::from(self.btf_path.as_deref().unwrap_or(DEFAULT_BTF_PATH))
    }
}

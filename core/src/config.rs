//! Configuration management for Stitch

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub timings: TimingConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Delays driving the simulated flows, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub connect_delay_ms: u64,
    pub duration_tick_ms: u64,
    pub dismiss_delay_ms: u64,
    pub auto_reply_delay_ms: u64,
    pub search_delay_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Fixes the generator behind synthesized data when set.
    pub rng_seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            connect_delay_ms: 3000,
            duration_tick_ms: 1000,
            dismiss_delay_ms: 1000,
            auto_reply_delay_ms: 2000,
            search_delay_ms: 300,
        }
    }
}

impl TimingConfig {
    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    pub fn duration_tick(&self) -> Duration {
        Duration::from_millis(self.duration_tick_ms.max(1))
    }

    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }

    pub fn auto_reply_delay(&self) -> Duration {
        Duration::from_millis(self.auto_reply_delay_ms)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

impl AppConfig {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = serde_json::from_str(&content)?;
            log::debug!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(data_dir)?;
        let config_path = data_dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Store honouring `data.rng_seed`.
    pub fn build_store(&self) -> crate::store::DataStore {
        match self.data.rng_seed {
            Some(seed) => crate::store::DataStore::with_seed(seed),
            None => crate::store::DataStore::new(),
        }
    }
}

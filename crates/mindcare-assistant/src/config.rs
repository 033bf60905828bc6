use std::path::{Path, PathBuf};
use std::time::Duration;

use mindcare_core::storage_keys;
use mindcare_storage::FileStore;
use serde::{Deserialize, Serialize};

use crate::responder::{DEFAULT_SUGGESTION_LIMIT, RandomChooser};
use crate::telemetry::LogFormat;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.mindcare.assistant";

/// Delay before the bot's reply appears, in milliseconds.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    pub typing_delay_ms: u64,
    /// Storage key the progress record is written under.
    pub progress_key: String,
    /// Directory for the file store. `None` = platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Seed for fallback-reply selection. `None` = OS entropy.
    pub fallback_seed: Option<u64>,
    /// Number of quick-start categories on a suggestion message.
    pub suggestion_limit: usize,
    pub log_format: LogFormat,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            progress_key: storage_keys::USER_PROGRESS.to_string(),
            data_dir: None,
            fallback_seed: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            log_format: LogFormat::default(),
        }
    }
}

impl AssistantConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let base =
                    dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
                Ok(base.join(APP_DIR))
            }
        }
    }

    pub fn file_store(&self) -> eyre::Result<FileStore> {
        Ok(FileStore::new(self.data_dir()?))
    }

    pub fn chooser(&self) -> RandomChooser {
        match self.fallback_seed {
            Some(seed) => RandomChooser::seeded(seed),
            None => RandomChooser::from_entropy(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config from the platform config directory. A missing file
/// yields the defaults.
pub fn load_config() -> eyre::Result<AssistantConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<AssistantConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AssistantConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AssistantConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: `typing_delay_secs` (float seconds) became `typing_delay_ms`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(secs) = obj.remove("typing_delay_secs").and_then(|v| v.as_f64()) {
            let ms = (secs * 1000.0).round().max(0.0) as u64;
            obj.insert("typing_delay_ms".to_string(), serde_json::json!(ms));
        }
        obj.insert("config_version".to_string(), serde_json::json!(1));
        tracing::info!("migrated config v0 → v1 (typing delay in milliseconds)");
    }

    Ok(json)
}

pub fn save_config(config: &AssistantConfig) -> eyre::Result<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &AssistantConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let mut config = config.clone();
    config.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&config)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

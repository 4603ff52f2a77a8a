use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_DIR_NAME: &str = "medicart";
const CONFIG_FILE_NAME: &str = "config.json";
const STATE_FILE_NAME: &str = "state.json";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Lower bound of the simulated "doctor is typing" pause.
    #[serde(default = "ChatConfig::default_typing_delay_min_ms")]
    pub typing_delay_min_ms: u64,
    #[serde(default = "ChatConfig::default_typing_delay_max_ms")]
    pub typing_delay_max_ms: u64,
    /// Messages shown when a chat transcript is printed.
    #[serde(default = "ChatConfig::default_history_limit")]
    pub history_limit: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_min_ms: Self::default_typing_delay_min_ms(),
            typing_delay_max_ms: Self::default_typing_delay_max_ms(),
            history_limit: Self::default_history_limit(),
        }
    }
}

impl ChatConfig {
    const fn default_typing_delay_min_ms() -> u64 {
        1000
    }

    const fn default_typing_delay_max_ms() -> u64 {
        2000
    }

    const fn default_history_limit() -> usize {
        20
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Where cart and sign-in state are kept between runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog JSON to use instead of the built-in tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load `~/medicart/config.json`, falling back to defaults when absent.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults. Run 'medicart init' to create one.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolved location of the state file.
    pub fn state_path(&self) -> anyhow::Result<PathBuf> {
        match &self.storage.state_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(STATE_FILE_NAME)),
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - chat.typing_delay_min_ms / typing_delay_max_ms: simulated reply delay (0 disables)");
        println!("   - chat.history_limit: messages shown by 'history' in the chat");
        println!("   - storage.state_file: where the cart and sign-in are saved");
        println!("   - catalog.path: JSON catalog to use instead of the built-in one");
        println!();
        Ok(())
    }

    /// Write the default config to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)?;
        Ok(())
    }
}

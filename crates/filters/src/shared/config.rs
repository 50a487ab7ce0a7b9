use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// Prefix of the session storage keys holding filter state
    pub key_prefix: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[storage]
key_prefix = "inventory.filters."
"#;

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                key_prefix: "inventory.filters.".to_string(),
            },
        }
    }
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration from a TOML file
///
/// Falls back to the embedded default config when the file does not exist.
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        tracing::info!("Loading filter config from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        return parse_config(&contents);
    }

    tracing::warn!("{} not found, using default embedded configuration", path.display());
    parse_config(DEFAULT_CONFIG)
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the cart lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding slot files. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Name of the durable slot (default: "cart.v1"). The name informally
    /// versions the wire format; bump it when the persisted shape changes.
    #[serde(default = "default_slot")]
    pub slot: String,
}

/// Presentation settings for rendered prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency prefix for formatted amounts (default: "$").
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Placeholder for unknown prices and unknown totals (default: "n/a").
    #[serde(default = "default_unknown_price")]
    pub unknown_price: String,
}

fn default_slot() -> String {
    "cart.v1".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_unknown_price() -> String {
    "n/a".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            slot: default_slot(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            unknown_price: default_unknown_price(),
        }
    }
}

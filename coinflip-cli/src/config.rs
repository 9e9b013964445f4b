/// Config file loading and creation for the coinflip CLI.
///
/// Config lives at ~/.config/coinflip/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CoinflipConfig {
    pub coin_probabilities: Option<Vec<f64>>,
    pub flips_per_run: Option<i64>,
    pub num_runs: Option<i64>,
    pub high_threshold: Option<i64>,
    pub low_threshold: Option<i64>,
    pub seed: Option<u64>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# coinflip configuration
# All values here can be overridden by CLI flags.

# Head probability of each coin, each strictly between 0 and 1.
# The number of entries is the number of coins.
# coin_probabilities = [0.20, 0.40, 0.50, 0.60, 0.80]

# Flips allowed per run
# flips_per_run = 20

# Runs per batch
# num_runs = 100

# Runs with more heads than this are reported as above the threshold
# high_threshold = 10

# Runs with fewer heads than this are reported as below the threshold
# low_threshold = 10

# Fixed seed for reproducible batches. Leave unset for a fresh seed every time.
# seed = 42
";

/// Returns the default config path: ~/.config/coinflip/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("coinflip").join("config.toml")
}

/// Parse config text.
pub fn parse_config(content: &str) -> Result<CoinflipConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> CoinflipConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CoinflipConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config(path: &Path) {
    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));
}

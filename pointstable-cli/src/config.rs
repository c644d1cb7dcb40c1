/// Config file loading and creation for the pointstable CLI.
///
/// Config lives at ~/.config/pointstable/config.toml.
/// All fields are optional; CLI args override config values.
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PointsTableConfig {
    pub win_points: Option<u32>,
    pub tie_points: Option<u32>,
    pub no_result_points: Option<u32>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# pointstable configuration
# All values here can be overridden by CLI flags.

# Points for a win (a loss is always 0)
# win_points = 2

# Points each side gets for a tie
# tie_points = 1

# Points each side gets when a match is abandoned
# no_result_points = 1
";

/// Returns the default config path: ~/.config/pointstable/config.toml
pub fn config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("pointstable").join("config.toml"))
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> Result<PointsTableConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(PointsTableConfig::default())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read config at {}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config to {}", path.display()))
}

use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::display::renderer::MIN_WIDTH;

const CONFIG_PATH: &str = ".abacus/config.toml";

/// User configuration from `.abacus/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Print the key legend above the display.
    #[serde(default = "default_show_help")]
    pub show_help: bool,
    /// Inner width of the display box, in columns.
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_show_help() -> bool {
    true
}

fn default_width() -> usize {
    24
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_help: default_show_help(),
            width: default_width(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= MIN_WIDTH,
            "display width must be at least {MIN_WIDTH}, got {}",
            self.width
        );
        Ok(())
    }
}

/// Load configuration from `.abacus/config.toml` under `dir`.
///
/// Falls back to defaults if the file is missing.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_PATH);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_file(&path)
}

/// Load configuration from an explicit file, which must exist.
pub fn load_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

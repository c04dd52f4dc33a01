//! Optional workspace configuration.
//!
//! A `.bigboard.toml` in the working directory supplies board defaults so
//! a scouting workspace doesn't need the same flags on every run:
//!
//! ```toml
//! [board]
//! top = 100
//! sort = "overall"
//! min_minutes = 150
//! ```
//!
//! A missing file is fine; a malformed one is a hard error, since a silently
//! ignored config is worse than no config.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const CONFIG_FILE: &str = ".bigboard.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub board: BoardDefaults,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardDefaults {
    pub top: Option<usize>,
    pub sort: Option<String>,
    pub min_minutes: Option<f64>,
}

/// Load `.bigboard.toml` from `dir` if present.
pub fn load(dir: &Path) -> Result<Config, Box<dyn Error>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let config: Config =
        toml::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

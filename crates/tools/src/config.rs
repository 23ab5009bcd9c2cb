//! Optional TOML configuration for the `delve` CLI. Flags override file values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use delve_core::PlayerStats;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DelveConfig {
    pub generation: GenerationConfig,
    pub player: PlayerConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub difficulty: String,
    pub size: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { difficulty: "adventurer".to_string(), size: "medium".to_string() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerConfig {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let stats = PlayerStats::default();
        Self { hp: stats.hp, attack: stats.attack, defense: stats.defense, speed: stats.speed }
    }
}

impl PlayerConfig {
    pub fn stats(&self) -> PlayerStats {
        PlayerStats { hp: self.hp, attack: self.attack, defense: self.defense, speed: self.speed }
    }
}

impl DelveConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Missing path means defaults; a path that fails to load is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

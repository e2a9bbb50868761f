//! Session configuration: TOML file first, command-line flags on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chess_core::{Color, DEFAULT_DEPTH, START_PLACEMENT, SearchLimits, codec};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Who moves for one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Classical,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Search depth in plies for the classical engine
    pub depth: u8,
    /// Per-move time budget; unset means search the full depth
    pub move_time_ms: Option<u64>,
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Starting placement (first FEN field)
    pub start: String,
    pub side_to_move: Color,
    /// Where to write the finished game as JSON
    pub record: Option<PathBuf>,
    /// Plies after which an unfinished game is abandoned
    pub max_plies: u32,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            move_time_ms: None,
            white: PlayerKind::Human,
            black: PlayerKind::Classical,
            start: START_PLACEMENT.to_string(),
            side_to_move: Color::White,
            record: None,
            max_plies: 300,
        }
    }
}

impl PlayConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Loads `path` when given, otherwise starts from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            bail!("depth must be at least 1");
        }
        codec::parse(&self.start).context("invalid start placement")?;
        Ok(())
    }

    /// Fresh limits for one move; the clock starts when the engine begins.
    pub fn search_limits(&self) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }

    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

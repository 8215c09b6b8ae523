//! Game configuration: level geometry and tuning knobs.
//!
//! Every parameter the core consumes is injected through [`GameConfig`]
//! rather than hardcoded, so tuning the collision forgiveness or goal
//! inset is a config change, not a code change. The frontend loads
//! `glowmaze.ron` when present and falls back to the reference defaults
//! otherwise.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Level geometry and tuning parameters.
///
/// Unknown or omitted fields in the RON file fall back to the reference
/// defaults, so a config file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maze width in cells.
    pub cols: usize,
    /// Maze height in cells.
    pub rows: usize,
    /// Cell edge length in maze-space units.
    pub cell_size: f32,
    /// Thickness of wall rectangles.
    pub wall_thickness: f32,
    /// Nominal (visual) avatar radius.
    pub avatar_radius: f32,
    /// Scroll units per pixel of mouse motion.
    pub sensitivity: f32,
    /// Collision radius factor; below 1.0 makes wall contact forgiving.
    pub wall_forgiveness: f32,
    /// How far the end zone shrinks on each side for the win test.
    pub goal_inset: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: 5,
            rows: 5,
            cell_size: 180.0,
            wall_thickness: 10.0,
            avatar_radius: 30.0,
            sensitivity: 0.5,
            wall_forgiveness: 0.8,
            goal_inset: 10.0,
        }
    }
}

/// Error type for config loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid RON for [`GameConfig`].
    Parse(ron::error::SpannedError),
    /// The values would break a core precondition.
    Validation(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Loads and validates a RON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = ron::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    ///
    /// A malformed or invalid file is reported to stderr and ignored; a
    /// bad tuning file must not stop the game from starting.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Rejects values the core would panic on or that collapse the level
    /// geometry.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.cols < 1 || self.rows < 1 {
            return Err(ConfigError::Validation(format!(
                "maze dimensions must be at least 1x1, got {}x{}",
                self.cols, self.rows
            )));
        }
        if self.wall_thickness <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "wall_thickness must be positive, got {}",
                self.wall_thickness
            )));
        }
        if self.cell_size <= 2.0 * self.wall_thickness {
            return Err(ConfigError::Validation(format!(
                "cell_size ({}) must exceed twice the wall thickness ({})",
                self.cell_size, self.wall_thickness
            )));
        }
        if self.goal_inset < 0.0 {
            return Err(ConfigError::Validation(format!(
                "goal_inset must not be negative, got {}",
                self.goal_inset
            )));
        }
        let zone = self.cell_size - 2.0 * self.wall_thickness;
        if 2.0 * self.goal_inset >= zone {
            return Err(ConfigError::Validation(format!(
                "goal_inset ({}) must leave the {}-unit end zone a positive interior",
                self.goal_inset, zone
            )));
        }
        Ok(())
    }
}

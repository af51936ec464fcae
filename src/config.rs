//! Configuration for simulation runs.
//!
//! Strongly-typed structures that map to a `glyphgrid.toml` file. Defaults
//! reproduce the original widgets: a 15×15 Moore-neighborhood majority grid
//! over the five mnality glyphs, a 10-symbol entropy window.
//!
//! ## Example `glyphgrid.toml`
//!
//! ```toml
//! [grid]
//! width = 15
//! height = 15
//! alphabet = "Ω∅𝐩∀Ξ"
//! neighborhood = "Moore"
//! mode = "Majority"
//! seed = 42
//! life_fill = 0.3
//!
//! [gauge]
//! window = 10
//! stream_capacity = 20
//! history_capacity = 20
//! ```

use std::fs;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::grid::Neighborhood;

/// Which step rule a simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EvolutionMode {
    /// Majority-symbol adoption over the configured alphabet.
    #[default]
    Majority,
    /// Strict Game of Life over the binary alphabet.
    Life,
}

/// Grid shape, alphabet, and evolution rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: u16,
    pub height: u16,
    /// Alphabet tokens in enumeration order; ignored in `Life` mode, which
    /// always uses the binary alphabet.
    pub alphabet: String,
    pub neighborhood: Neighborhood,
    pub mode: EvolutionMode,
    /// Pins the RNG for reproducible runs; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Initial alive probability in `Life` mode.
    pub life_fill: f64,
}

impl GridConfig {
    /// Builds the alphabet this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::EmptyAlphabet`] when `alphabet` has no
    /// tokens.
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(self.alphabet.chars())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            alphabet: "Ω∅𝐩∀Ξ".to_string(),
            neighborhood: Neighborhood::Moore,
            mode: EvolutionMode::Majority,
            seed: None,
            life_fill: 0.3,
        }
    }
}

/// Entropy gauge sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeConfig {
    /// Trailing window the entropy is computed over.
    pub window: usize,
    /// How many emitted symbols the stream retains.
    pub stream_capacity: usize,
    /// How many per-tick entropy readings are kept for charting consumers.
    pub history_capacity: usize,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            window: 10,
            stream_capacity: 20,
            history_capacity: 20,
        }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub gauge: GaugeConfig,
}

impl SimConfig {
    /// Loads `glyphgrid.toml` from the working directory, falling back to
    /// defaults (and writing them out) when the file is missing or invalid.
    #[must_use]
    pub fn load() -> Self {
        if let Ok(content) = fs::read_to_string("glyphgrid.toml") {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
            tracing::warn!("glyphgrid.toml is invalid, using defaults");
        }
        let default = Self::default();
        let _ = fs::write(
            "glyphgrid.toml",
            toml::to_string(&default).unwrap_or_default(),
        );
        default
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        Ok(config)
    }
}

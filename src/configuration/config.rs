//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run mode (window or headless), tick count, seed
//! - [`ParametersConfig`] – the gravitational constant
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   headless: false         # true -> no window, log the final state
//!   ticks: 600              # ticks to run when headless
//!   seed: 42                # trail colour seed, random when omitted
//!
//! parameters:
//!   g: 1.0                  # gravitational constant
//!
//! bodies:
//!   - x: [ -150.0, 0.0 ]
//!     v: [  0.0, 1.22 ]
//!     m: 1.0
//!     color_set: white      # white | pink, optional
//!   - x: [  150.0, 0.0 ]
//!     v: [  0.0, -1.22 ]
//!     m: 1.0
//! ```
//!
//! The engine then maps this configuration into its runtime `Scenario`.

use serde::Deserialize;

use crate::simulation::colors::ColorSetName;

fn default_ticks() -> u64 {
    600
}

/// Run mode options
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub headless: bool, // `false` - bevy window, `true` - run and log
    #[serde(default = "default_ticks")]
    pub ticks: u64, // ticks to run in headless mode
    #[serde(default)]
    pub seed: Option<u64>, // deterministic trail colours when set
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            headless: false,
            ticks: default_ticks(),
            seed: None,
        }
    }
}

/// Global physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64, // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position `[x, y]` in pixels
    pub v: Vec<f64>, // Initial velocity `[vx, vy]` in pixels per tick
    pub m: f64,      // Mass, must be > 0
    #[serde(default)]
    pub color_set: Option<ColorSetName>, // white when omitted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Run mode
    pub parameters: ParametersConfig, // Physical parameters
    pub bodies: Vec<BodyConfig>, // Bodies that define the initial state
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_section_is_optional() {
        let cfg = ScenarioConfig::from_yaml_str(
            "parameters:\n  g: 2.0\nbodies:\n  - x: [0.0, 0.0]\n    v: [0.0, 0.0]\n    m: 1.0\n",
        )
        .unwrap();
        assert!(!cfg.engine.headless);
        assert_eq!(cfg.engine.ticks, 600);
        assert_eq!(cfg.engine.seed, None);
        assert_eq!(cfg.bodies[0].color_set, None);
        assert_eq!(cfg.parameters.g, 2.0);
    }

    #[test]
    fn parses_color_set_names() {
        let cfg = ScenarioConfig::from_yaml_str(
            "engine:\n  headless: true\n  ticks: 10\n  seed: 7\nparameters:\n  g: 1.0\nbodies:\n  - x: [1.0, 2.0]\n    v: [0.0, 0.0]\n    m: 1.0\n    color_set: pink\n",
        )
        .unwrap();
        assert!(cfg.engine.headless);
        assert_eq!(cfg.engine.ticks, 10);
        assert_eq!(cfg.engine.seed, Some(7));
        assert_eq!(cfg.bodies[0].color_set, Some(ColorSetName::Pink));
    }
}

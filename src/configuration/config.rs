//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constant, step size, trajectory bound
//! - [`ViewConfig`]       – window and projection settings for the viewer
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:               # optional
//!   G: 6.67428e-11          # gravitational constant
//!   dt: 86400.0             # fixed step, seconds
//!   trajectory_limit: ~     # max points kept per body, ~ = unbounded
//!
//! view:                     # optional
//!   title: "Planet simulation"
//!   width: 1000.0
//!   height: 1000.0
//!   pixels_per_au: 250.0
//!   fps: 60.0
//!
//! bodies:
//!   - name: Sun
//!     x: [0.0, 0.0]         # meters
//!     v: [0.0, 0.0]         # m/s
//!     m: 1.9882e30          # kg
//!     radius: 30.0          # pixels
//!     color: [255, 255, 0]
//!     reference: true
//! ```
//!
//! Scenario building turns this into a runtime [`crate::Scenario`].

use std::fs::File;
use std::io::BufReader;
use std::num::NonZeroUsize;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::params::{Parameters, DAY, G};
use crate::simulation::states::Rgb;

/// The built-in five body scenario: Sun, Earth, Mars, Mercury, Venus
const SOLAR_SYSTEM_YAML: &str = include_str!("../../scenarios/solar_system.yaml");

/// Physical and numerical parameters
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub dt: f64, // fixed step, seconds
    pub trajectory_limit: Option<NonZeroUsize>, // None = unbounded history, 0 is rejected
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G,
            dt: DAY,
            trajectory_limit: None,
        }
    }
}

impl From<ParametersConfig> for Parameters {
    fn from(cfg: ParametersConfig) -> Self {
        Parameters {
            G: cfg.G,
            dt: cfg.dt,
            trajectory_limit: cfg.trajectory_limit,
        }
    }
}

/// Viewer settings. Never read by the physics.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub title: String,
    pub width: f64, // window width, pixels
    pub height: f64, // window height, pixels
    pub pixels_per_au: f64, // 1 AU on screen
    pub fps: f64, // physics steps per second
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "Planet simulation".to_string(),
            width: 1000.0,
            height: 1000.0,
            pixels_per_au: 250.0,
            fps: 60.0,
        }
    }
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // label, defaults to body-<index>
    pub x: [f64; 2], // position, meters
    #[serde(default)]
    pub v: [f64; 2], // velocity, m/s
    pub m: f64, // mass, kg
    pub radius: f64, // display radius
    #[serde(default)]
    pub color: Rgb,
    #[serde(default)]
    pub reference: bool, // distance reporting target
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Sun with the four inner planets
    pub fn solar_system() -> Result<Self> {
        Self::from_yaml_str(SOLAR_SYSTEM_YAML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn built_in_scenario_parses() -> Result<()> {
        let cfg = ScenarioConfig::solar_system()?;
        assert_eq!(cfg.bodies.len(), 5);
        let refs: Vec<&BodyConfig> = cfg.bodies.iter().filter(|b| b.reference).collect();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name.as_deref(), Some("Sun"));
        assert_eq!(cfg.parameters, ParametersConfig::default());
        assert_eq!(cfg.view, ViewConfig::default());
        Ok(())
    }

    #[test]
    fn missing_sections_take_defaults() -> Result<()> {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - x: [1.0, 2.0]\n    m: 5.0\n    radius: 3.0\n",
        )?;
        let b = &cfg.bodies[0];
        assert_eq!(b.v, [0.0, 0.0]);
        assert_eq!(b.color, Rgb::WHITE);
        assert!(!b.reference);
        assert_eq!(cfg.parameters.dt, DAY);
        assert_eq!(cfg.view.pixels_per_au, 250.0);
        Ok(())
    }

    #[test]
    fn bounded_history_option_parses() -> Result<()> {
        let cfg = ScenarioConfig::from_yaml_str("parameters:\n  trajectory_limit: 500\n")?;
        assert_eq!(cfg.parameters.trajectory_limit, NonZeroUsize::new(500));
        assert!(cfg.bodies.is_empty());
        Ok(())
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let err = ScenarioConfig::from_yaml_str("parameters:\n  trajectory_limit: 0\n").unwrap_err();
        assert!(matches!(err, Error::Scenario(_)));
    }

    #[test]
    fn short_position_is_rejected() {
        let err = ScenarioConfig::from_yaml_str("bodies:\n  - x: [1.0]\n    m: 5.0\n    radius: 3.0\n")
            .unwrap_err();
        assert!(matches!(err, Error::Scenario(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ScenarioConfig::from_path("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

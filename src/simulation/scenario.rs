//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`
//! containing:
//! - view settings (`ViewConfig`), only read by the renderer
//! - the `Simulator` with its bodies at t = 0
//!
//! The viewer inserts the scenario into Bevy as a `Resource`.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig, ViewConfig};
use crate::error::{Error, Result};
use crate::simulation::engine::Simulator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyDescriptor, NVec2};

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub view: ViewConfig,
    pub simulator: Simulator,
}

impl From<&BodyConfig> for BodyDescriptor {
    fn from(bc: &BodyConfig) -> Self {
        BodyDescriptor {
            name: bc.name.clone(),
            position: NVec2::new(bc.x[0], bc.x[1]),
            velocity: NVec2::new(bc.v[0], bc.v[1]),
            mass: bc.m,
            radius: bc.radius,
            color: bc.color,
            is_reference: bc.reference,
        }
    }
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        validate_view(&cfg.view)?;

        let parameters = Parameters::from(cfg.parameters);
        let bodies = cfg.bodies.iter().map(BodyDescriptor::from);
        let simulator = Simulator::new(bodies, parameters)?;

        Ok(Self {
            view: cfg.view,
            simulator,
        })
    }
}

fn validate_view(view: &ViewConfig) -> Result<()> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(view.width) || !positive(view.height) {
        return Err(Error::InvalidParam(format!(
            "view size must be positive, got {}x{}",
            view.width, view.height
        )));
    }
    if !positive(view.pixels_per_au) {
        return Err(Error::InvalidParam("pixels_per_au must be finite and > 0".into()));
    }
    if !positive(view.fps) {
        return Err(Error::InvalidParam("fps must be finite and > 0".into()));
    }
    Ok(())
}

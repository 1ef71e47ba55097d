//! Physical constants and fixed runtime parameters for the simulation
//!
//! `Parameters` holds the settings a `Simulator` is built with:
//! - gravitational constant `G`,
//! - fixed step size `dt`,
//! - optional bound on stored trajectory points per body

use std::num::NonZeroUsize;

use crate::error::{Error, Result};

/// Newtonian gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.67428e-11;

/// Astronomical unit in meters
pub const AU: f64 = 149.6e9;

/// One day in seconds, the default step
pub const DAY: f64 = 86_400.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // fixed step size, seconds
    pub trajectory_limit: Option<NonZeroUsize>, // None = keep every point
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G,
            dt: DAY,
            trajectory_limit: None,
        }
    }
}

impl Parameters {
    /// Same defaults with a different step size
    pub fn with_dt(dt: f64) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.G.is_finite() || self.G <= 0.0 {
            return Err(Error::InvalidParam("G must be finite and > 0".into()));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(Error::InvalidParam("dt must be finite and > 0".into()));
        }
        Ok(())
    }
}

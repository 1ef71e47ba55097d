//! Core state types for the simulation.
//!
//! - `BodyDescriptor`: initial state handed in by the driver
//! - `Body`: validated per-body state mutated by the integrator
//! - `Trajectory`: time-ordered history of a body's positions
//! - `System`: the owned body collection plus simulated time

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use nalgebra::Vector2;
use serde::Deserialize;

use crate::error::{Error, Result};

pub type NVec2 = Vector2<f64>;

/// Display color carried through for the renderer; `[r, g, b]` in YAML.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Ordered history of past positions, oldest first.
///
/// Unbounded unless a limit is given, in which case the oldest points are
/// dropped to make room. Every unbounded trajectory grows by one point per
/// step for the lifetime of the simulator.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: VecDeque<NVec2>,
    limit: Option<NonZeroUsize>,
}

impl Trajectory {
    pub fn new(limit: Option<NonZeroUsize>) -> Self {
        Self {
            points: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, p: NVec2) {
        if let Some(limit) = self.limit {
            while self.points.len() >= limit.get() {
                self.points.pop_front();
            }
        }
        self.points.push_back(p);
    }

    /// Restartable iteration over the stored points in time order
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + Clone + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }
}

/// Initial state of one body as supplied by the driver.
#[derive(Debug, Clone)]
pub struct BodyDescriptor {
    pub name: Option<String>,
    pub position: NVec2, // meters
    pub velocity: NVec2, // m/s
    pub mass: f64, // kg
    pub radius: f64, // display radius
    pub color: Rgb,
    pub is_reference: bool,
}

impl BodyDescriptor {
    pub fn new(position: NVec2, velocity: NVec2, mass: f64, radius: f64, color: Rgb) -> Self {
        Self {
            name: None,
            position,
            velocity,
            mass,
            radius,
            color,
            is_reference: false,
        }
    }

    /// Mark this body as a reference body for distance reporting
    pub fn reference(mut self) -> Self {
        self.is_reference = true;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Physical state of one mass.
///
/// Read access is public; the integrator writes position and velocity
/// directly, and `record_position` is the only other mutation.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) name: String,
    pub(crate) x: NVec2, // position
    pub(crate) v: NVec2, // velocity
    pub(crate) m: f64, // mass
    pub(crate) radius: f64,
    pub(crate) color: Rgb,
    pub(crate) is_reference: bool,
    pub(crate) distance_to_reference: f64,
    pub(crate) trajectory: Trajectory,
}

impl Body {
    /// Validate a descriptor and build the body with an unbounded trajectory.
    ///
    /// Errors with `Error::InvalidBody` if mass or radius is not finite and
    /// positive, or if position/velocity has a non-finite component.
    pub fn new(desc: BodyDescriptor) -> Result<Self> {
        Self::with_trajectory_limit(desc, None)
    }

    pub fn with_trajectory_limit(desc: BodyDescriptor, limit: Option<NonZeroUsize>) -> Result<Self> {
        let label = desc.name.clone().unwrap_or_else(|| "body".to_string());
        if !desc.mass.is_finite() || desc.mass <= 0.0 {
            return Err(Error::InvalidBody(format!(
                "{label}: mass must be finite and > 0, got {}",
                desc.mass
            )));
        }
        if !desc.radius.is_finite() || desc.radius <= 0.0 {
            return Err(Error::InvalidBody(format!(
                "{label}: radius must be finite and > 0, got {}",
                desc.radius
            )));
        }
        if !desc.position.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidBody(format!("{label}: position must be finite")));
        }
        if !desc.velocity.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidBody(format!("{label}: velocity must be finite")));
        }
        Ok(Self {
            name: label,
            x: desc.position,
            v: desc.velocity,
            m: desc.mass,
            radius: desc.radius,
            color: desc.color,
            is_reference: desc.is_reference,
            distance_to_reference: 0.0,
            trajectory: Trajectory::new(limit),
        })
    }

    /// Append a position to the trajectory. No other side effect.
    pub fn record_position(&mut self, p: NVec2) {
        self.trajectory.push(p);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn is_reference(&self) -> bool {
        self.is_reference
    }

    /// Last distance to a reference body, meters. Zero before the first step.
    pub fn distance_to_reference(&self) -> f64 {
        self.distance_to_reference
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // owned collection, construction order
    pub t: f64, // simulated seconds
    pub steps: u64, // completed steps
}

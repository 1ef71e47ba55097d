//! The `Simulator`: owns the bodies and advances them one fixed step at a time

use log::debug;

use crate::error::Result;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyDescriptor, System};

/// Owns the body collection for the whole run.
///
/// `step` takes `&mut self`, so a simulator can only be driven by one
/// caller at a time; there is no internal locking.
#[derive(Debug, Clone)]
pub struct Simulator {
    system: System,
    gravity: NewtonianGravity,
    parameters: Parameters,
}

impl Simulator {
    /// Build a simulator from descriptors, keeping their order.
    ///
    /// Every descriptor is validated first; one bad body rejects the whole
    /// set with `Error::InvalidBody`. An empty set is accepted.
    pub fn new<I>(bodies: I, parameters: Parameters) -> Result<Self>
    where
        I: IntoIterator<Item = BodyDescriptor>,
    {
        parameters.validate()?;

        let bodies = bodies
            .into_iter()
            .enumerate()
            .map(|(i, mut desc)| {
                desc.name.get_or_insert_with(|| format!("body-{i}"));
                Body::with_trajectory_limit(desc, parameters.trajectory_limit)
            })
            .collect::<Result<Vec<Body>>>()?;

        debug!(
            "simulator built with {} bodies, dt = {} s, trajectory limit = {:?}",
            bodies.len(),
            parameters.dt,
            parameters.trajectory_limit
        );

        Ok(Self {
            system: System {
                bodies,
                t: 0.0,
                steps: 0,
            },
            gravity: NewtonianGravity { G: parameters.G },
            parameters,
        })
    }

    /// Advance every body by exactly one `dt`.
    ///
    /// Fails with `Error::DegenerateConfiguration` if two bodies share a
    /// position; the bodies are left untouched in that case. Retrying
    /// without changing the state fails the same way.
    pub fn step(&mut self) -> Result<()> {
        semi_implicit_euler(&mut self.system, &self.gravity, &self.parameters)
    }

    /// Run `n` steps, stopping at the first failure
    pub fn run(&mut self, n: u64) -> Result<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.system.bodies.get(i)
    }

    pub fn len(&self) -> usize {
        self.system.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.system.bodies.is_empty()
    }

    /// Simulated seconds since construction
    pub fn time(&self) -> f64 {
        self.system.t
    }

    /// Number of completed steps
    pub fn steps(&self) -> u64 {
        self.system.steps
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Trajectory points currently held across all bodies.
    ///
    /// With no `trajectory_limit` this is `steps * bodies` and never shrinks.
    pub fn trajectory_points(&self) -> usize {
        self.system.bodies.iter().map(|b| b.trajectory().len()).sum()
    }
}

//! Direct pairwise Newtonian gravity
//!
//! Forces are evaluated on a read-only snapshot of the bodies taken before
//! any body moves, so every body in a step feels the same pre-step field
//! regardless of update order.

use crate::error::{Error, Result};
use crate::simulation::states::{Body, NVec2};

/// The part of a body the force law reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub x: NVec2, // position
    pub m: f64, // mass
    pub is_reference: bool,
}

impl From<&Body> for PointMass {
    fn from(b: &Body) -> Self {
        Self {
            x: b.x,
            m: b.m,
            is_reference: b.is_reference,
        }
    }
}

/// Force on one body from another, with their separation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairForce {
    pub force: NVec2, // newtons, acting on the first body
    pub distance: f64, // meters
}

/// Unsoftened Newtonian gravity, F = G m_i m_j / d^2
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Force exerted on `a` by `b`.
    ///
    /// The magnitude is split along the unit separation vector, which is
    /// `(cos θ, sin θ)` for `θ = atan2(dy, dx)`. Swapping the arguments
    /// negates `dx`/`dy` exactly, so the result is exactly antisymmetric.
    ///
    /// Errors with `DegenerateConfiguration` when the separation is zero or
    /// so small that the force is not finite. This helper has no body
    /// indices, so the error always names `a` as 0 and `b` as 1;
    /// `accumulate_forces` reports the snapshot indices instead.
    pub fn pair_force(&self, a: &PointMass, b: &PointMass) -> Result<PairForce> {
        self.pair_force_indexed(0, a, 1, b)
    }

    fn pair_force_indexed(&self, i: usize, a: &PointMass, j: usize, b: &PointMass) -> Result<PairForce> {
        let degenerate = || Error::DegenerateConfiguration {
            first: i.min(j),
            second: i.max(j),
        };

        // r points from a to b, a is pulled along +r
        let r = b.x - a.x;
        let r2 = r.dot(&r);
        // also catches separations so small that d^2 underflows
        if r2 == 0.0 {
            return Err(degenerate());
        }
        let distance = r2.sqrt();
        // symmetric in a and b, bit for bit
        let magnitude = self.G * (a.m * b.m) / r2;
        let force = r * (magnitude / distance);

        // tiny but non-zero separations overflow instead
        if !magnitude.is_finite() || !force.iter().all(|c| c.is_finite()) {
            return Err(degenerate());
        }
        Ok(PairForce { force, distance })
    }

    /// Sum the forces on every body of `snapshot` into `out`.
    ///
    /// `ref_dist[i]` is set to the distance from body `i` to the last
    /// reference body (in index order) other than itself, or left `None`
    /// if there is none. Each unordered pair is evaluated once and applied
    /// with opposite signs; per body, contributions are still summed in
    /// increasing index order.
    ///
    /// On error nothing useful is left in `out`; callers must not apply it.
    pub fn accumulate_forces(&self, snapshot: &[PointMass], out: &mut [NVec2], ref_dist: &mut [Option<f64>]) -> Result<()> {
        // Zero buffers
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for d in ref_dist.iter_mut() {
            *d = None;
        }

        let n = snapshot.len();
        for i in 0..n {
            let bi = &snapshot[i];
            for j in (i + 1)..n {
                let bj = &snapshot[j];
                let pair = self.pair_force_indexed(i, bi, j, bj)?;

                out[i] += pair.force;
                out[j] -= pair.force;

                if bj.is_reference {
                    ref_dist[i] = Some(pair.distance);
                }
                if bi.is_reference {
                    ref_dist[j] = Some(pair.distance);
                }
            }
        }
        Ok(())
    }
}

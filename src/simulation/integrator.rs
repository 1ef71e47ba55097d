//! Fixed-step time integrator for the body system
//!
//! Semi-implicit (symplectic) Euler driven by `NewtonianGravity` and
//! `Parameters`

use log::{trace, warn};

use super::forces::{NewtonianGravity, PointMass};
use super::params::Parameters;
use super::states::{NVec2, System};
use crate::error::Result;

/// Advance the system by one step using semi-implicit Euler.
///
/// Forces come from a snapshot of the pre-step positions. Velocities are
/// kicked first, v_n+1 = v_n + (F / m) dt, then positions drift with the new
/// velocity, x_n+1 = x_n + v_n+1 dt, and each new position is recorded in
/// the body's trajectory.
///
/// All forces are computed before anything is written, so an error leaves
/// the system exactly as it was.
pub fn semi_implicit_euler(sys: &mut System, gravity: &NewtonianGravity, params: &Parameters) -> Result<()> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, nothing to advance
        return Ok(());
    }

    let dt = params.dt;

    // Read-only view of every body at time t_n
    let snapshot: Vec<PointMass> = sys.bodies.iter().map(PointMass::from).collect();

    let mut forces = vec![NVec2::zeros(); n];
    let mut ref_dist = vec![None; n];

    if let Err(e) = gravity.accumulate_forces(&snapshot, &mut forces, &mut ref_dist) {
        warn!("step {} aborted at t = {:.0} s: {e}", sys.steps + 1, sys.t);
        return Err(e);
    }

    for ((b, f), d) in sys.bodies.iter_mut().zip(forces.iter()).zip(ref_dist) {
        // Kick: v_n+1 = v_n + (F / m) dt
        b.v += (*f / b.m) * dt;

        // Drift with the updated velocity: x_n+1 = x_n + v_n+1 dt
        b.x += b.v * dt;

        if let Some(d) = d {
            b.distance_to_reference = d;
        }

        let x = b.x;
        b.record_position(x);
    }

    sys.t += dt;
    sys.steps += 1;
    trace!("step {} done, t = {:.0} s", sys.steps, sys.t);

    Ok(())
}

use std::mem::size_of;
use std::num::NonZeroUsize;
use std::time::Instant;

use crate::error::Result;
use crate::simulation::engine::Simulator;
use crate::simulation::params::{Parameters, AU, G};
use crate::simulation::states::{BodyDescriptor, NVec2, Rgb};

/// Sun plus `n - 1` light bodies on deterministic, distinct positions
fn make_bodies(n: usize) -> Vec<BodyDescriptor> {
    let mut bodies = Vec::with_capacity(n);
    if n == 0 {
        return bodies;
    }
    bodies.push(BodyDescriptor::new(NVec2::zeros(), NVec2::zeros(), 1.9882e30, 30.0, Rgb(255, 255, 0)).reference());

    for i in 1..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let r = AU * (0.3 + 0.01 * i_f);
        let phi = i_f * 0.37;
        let x = NVec2::new(r * phi.cos(), r * phi.sin());
        let speed = (G * 1.9882e30 / r).sqrt();
        let v = NVec2::new(-phi.sin(), phi.cos()) * speed;
        bodies.push(BodyDescriptor::new(x, v, 1.0e23, 4.0, Rgb::WHITE));
    }
    bodies
}

/// Time `step()` for growing body counts
pub fn bench_step() -> Result<()> {
    let ns = [5, 50, 200, 800, 1600];
    let steps = 20;

    println!("N,step_ms");
    for n in ns {
        let mut sim = Simulator::new(make_bodies(n), Parameters::default())?;

        // Warm up
        sim.step()?;

        let t0 = Instant::now();
        sim.run(steps)?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}

/// Report how trajectory storage grows with simulated time.
///
/// One point per body per step is kept forever unless a limit is set; at
/// 60 steps/s the five body solar system stores 300 points every second.
pub fn bench_trajectory_growth() -> Result<()> {
    let checkpoints = [60, 600, 3600, 36_000];
    let point_bytes = size_of::<NVec2>();

    println!("steps,points_unbounded,bytes_unbounded,points_limited");
    let mut unbounded = Simulator::new(make_bodies(5), Parameters::default())?;
    let mut limited = Simulator::new(
        make_bodies(5),
        Parameters {
            trajectory_limit: NonZeroUsize::new(1000),
            ..Parameters::default()
        },
    )?;

    let mut done = 0;
    for target in checkpoints {
        unbounded.run(target - done)?;
        limited.run(target - done)?;
        done = target;

        let points = unbounded.trajectory_points();
        println!("{},{},{},{}", target, points, points * point_bytes, limited.trajectory_points());
    }
    Ok(())
}

pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Error, Result};

pub use simulation::states::{Body, BodyDescriptor, NVec2, Rgb, System, Trajectory};
pub use simulation::params::{Parameters, AU, DAY, G};
pub use simulation::forces::{NewtonianGravity, PairForce, PointMass};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::Simulator;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, ViewConfig};

pub use visualization::projection::{to_screen, ScreenTransform, PIXELS_PER_AU};
pub use visualization::orbitsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_trajectory_growth};

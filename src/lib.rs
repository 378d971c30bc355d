pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{Force, ForceSet, GravityField};
pub use simulation::integrator::{euler_step, run_ticks};
pub use simulation::scenario::Scenario;
pub use simulation::error::SimError;
pub use simulation::colors::{ColorSet, Rgba};
pub use simulation::trajectory::TrajectoryBuffer;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::render::{BodySnapshot, RenderAdapter, render_system};
pub use visualization::{twostar_vis2d::run_2d, headless::run_headless};

pub use benchmark::benchmark::{bench_gravity, bench_ticks};

//! Windowless runner: advance a scenario and log the result

use log::info;

use crate::simulation::scenario::Scenario;
use crate::visualization::render::{render_system, LogRenderer};

/// Summary of a headless run
#[derive(Debug, Clone)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub bodies: usize,
    pub momentum_drift: f64, // |p_end - p_start|
}

pub fn run_headless(scenario: &mut Scenario, ticks: u64) -> HeadlessReport {
    let p0 = scenario.system.total_momentum();

    for _ in 0..ticks {
        scenario.step();
    }

    let mut renderer = LogRenderer::default();
    render_system(&scenario.system, &mut renderer);

    let drift = (scenario.system.total_momentum() - p0).norm();
    info!(
        "headless: {} ticks, {} bodies, momentum drift {:.3e}",
        ticks, renderer.drawn, drift
    );

    HeadlessReport {
        ticks,
        bodies: renderer.drawn,
        momentum_drift: drift,
    }
}

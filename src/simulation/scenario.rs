//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - system state (`System` with bodies at tick 0)
//! - active force set (`ForceSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics and drawing systems, or driven directly in headless mode

use bevy::prelude::Resource;
use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceSet, GravityField};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system
/// state, and the set of active forces
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

/// Read a two-component config vector
fn vec2(field: &'static str, xs: &[f64]) -> Result<NVec2, SimError> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::InvalidVector { field, len: xs.len() }),
    }
}

/// Map one `BodyConfig` to a runtime `Body`
pub fn build_body<R: Rng + ?Sized>(bc: &BodyConfig, rng: &mut R) -> Result<Body, SimError> {
    Body::new(
        vec2("x", &bc.x)?,
        vec2("v", &bc.v)?,
        bc.m,
        bc.color_set.map(Into::into),
        rng,
    )
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Trail colours are the only randomness; seed it when asked to
        let mut rng = match cfg.engine.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        };

        let p_cfg = cfg.parameters;
        if !p_cfg.g.is_finite() {
            return Err(SimError::InvalidParameter { name: "g", value: p_cfg.g });
        }
        let parameters = Parameters { g: p_cfg.g };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| build_body(bc, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        let e_cfg = cfg.engine;
        let engine = Engine {
            headless: e_cfg.headless,
            ticks: e_cfg.ticks,
            seed: e_cfg.seed,
        };

        // Forces: register pairwise gravity
        let forces = ForceSet::new().with(GravityField::new(parameters.g));

        info!("scenario built: {} bodies, g = {}", bodies.len(), parameters.g);

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces,
        })
    }

    /// Advance one tick
    pub fn step(&mut self) {
        euler_step(&mut self.system, &self.forces);
    }
}

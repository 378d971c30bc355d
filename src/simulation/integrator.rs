//! Fixed-step time integration
//!
//! One tick is two passes: forces for every pair from the pre-tick state,
//! then a semi-implicit Euler update of every body with unit time step.
//! Energy drifts over long runs; orbits will not close exactly.

use log::trace;

use super::forces::ForceSet;
use super::states::{NVec2, System};

/// Advance the system by one tick
pub fn euler_step(sys: &mut System, forces: &ForceSet) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // Pass 1: net force on every body, positions untouched
    let mut net = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*sys, &mut net);

    // Pass 2: a += F/m, then integrate and record the trail
    for (b, f) in sys.bodies.iter_mut().zip(net.iter()) {
        b.apply_force(*f);
        b.update();
    }

    sys.tick += 1;
    trace!("tick {} advanced {} bodies", sys.tick, n);
}

/// Advance the system by `ticks` ticks
pub fn run_ticks(sys: &mut System, forces: &ForceSet, ticks: u64) {
    for _ in 0..ticks {
        euler_step(sys, forces);
    }
}

use std::time::Instant;

use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::simulation::forces::{Force, ForceSet, GravityField};
use crate::simulation::integrator::euler_step;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a manual System of size `n`
fn make_system(n: usize) -> System {
    let mut rng = Pcg64::seed_from_u64(42);
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, spread over a few hundred pixels
        let x = NVec2::new((i_f * 0.37).sin() * 300.0, (i_f * 0.13).cos() * 300.0);

        // mass is a positive literal, construction cannot fail
        if let Ok(b) = Body::new(x, NVec2::zeros(), 1.0, None, &mut rng) {
            bodies.push(b);
        }
    }

    System::new(bodies)
}

/// Time the pairwise force pass alone for a range of n
pub fn bench_gravity() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let gravity = GravityField::new(1.0);

    for n in ns {
        let sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.force(&sys, &mut out);

        let t0 = Instant::now();
        gravity.force(&sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity = {:8.6} s", dt);
    }
}

/// Time full ticks (forces + integration + trail) for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_ticks() {
    let steps = 20;
    let forces = ForceSet::new().with(GravityField::new(1.0));

    println!("N,tick_ms");

    for n in (50..=1600).step_by(50) {
        let mut sys = make_system(n);

        // Warm-up
        euler_step(&mut sys, &forces);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &forces);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}

//! Force contributors for the simulation
//!
//! Forces are computed from a read-only `System` into a per-body buffer, so
//! every pair sees the pre-tick positions. Applying the buffer to the bodies
//! is the integrator's job.

use crate::simulation::states::{Body, NVec2, System};

/// Separations are clamped into this range before the inverse-square law
/// is evaluated. Direction still uses the true displacement.
pub const MIN_DISTANCE: f64 = 2.0;
pub const MAX_DISTANCE: f64 = 10.0;

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute the net force on every body in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(sys, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, sys: &System, out: &mut [NVec2]);
}

/// Pairwise Newtonian attraction with clamped separation
#[derive(Debug, Clone, Copy)]
pub struct GravityField {
    pub g: f64, // tunable gravitational constant
}

impl GravityField {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Force between `a` and `b`, pointing from `b` toward `a`
    ///
    /// Apply it as-is to `b` and negated to `a`: each body is then pulled
    /// toward the other. `attract(a, b) == -attract(b, a)`.
    pub fn attract(&self, a: &Body, b: &Body) -> NVec2 {
        let r = a.position - b.position;

        // Coincident bodies have no direction; treat as no force
        let Some(dir) = r.try_normalize(0.0) else {
            return NVec2::zeros();
        };

        let d = r.norm().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let strength = self.g * a.mass() * b.mass() / (d * d);

        dir * strength
    }
}

impl Force for GravityField {
    fn force(&self, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();

        // Each unordered pair (i, j) with i < j once
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // points from j toward i
                let f = self.attract(bi, bj);

                // j is pulled toward i, i toward j
                out[j] += f;
                out[i] -= f;
            }
        }
    }
}

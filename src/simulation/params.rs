//! Physical parameters for the simulation

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant (simulation units)
}

impl Default for Parameters {
    fn default() -> Self {
        Self { g: 1.0 }
    }
}

//! Core state types for the simulation
//!
//! - `Body`: a point mass with its visual attributes and trail
//! - `System`: the collection of bodies plus the completed tick count

use nalgebra::Vector2;
use rand::Rng;

use super::colors::{random_trail_color, ColorSet, Rgba};
use super::error::SimError;
use super::trajectory::TrajectoryBuffer;
use crate::visualization::render::BodySnapshot;

pub type NVec2 = Vector2<f64>;

/// Drawn radius per unit of mass
pub const RADIUS_PER_MASS: f64 = 24.0;

#[derive(Debug, Clone)]
pub struct Body {
    pub position: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2, // zero at the start of every tick
    mass: f64,
    radius: f64,
    color_set: ColorSet,
    trail_color: Rgba,
    trajectory: TrajectoryBuffer,
}

impl Body {
    /// Build a body at rest acceleration-wise
    ///
    /// Fails with [`SimError::InvalidMass`] if `mass` is not strictly positive
    /// and finite, since forces are divided by it. The trail colour is drawn
    /// once from `rng` and never changes.
    pub fn new<R: Rng + ?Sized>(
        position: NVec2,
        velocity: NVec2,
        mass: f64,
        color_set: Option<ColorSet>,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }

        Ok(Self {
            position,
            velocity,
            acceleration: NVec2::zeros(),
            mass,
            radius: mass * RADIUS_PER_MASS,
            color_set: color_set.unwrap_or_default(),
            trail_color: random_trail_color(rng),
            trajectory: TrajectoryBuffer::new(),
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color_set(&self) -> ColorSet {
        self.color_set
    }

    pub fn trail_color(&self) -> Rgba {
        self.trail_color
    }

    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.trajectory
    }

    /// a += F / m
    pub fn apply_force(&mut self, force: NVec2) {
        self.acceleration += force / self.mass;
    }

    /// Advance one unit time step (semi-implicit Euler)
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.trajectory.push(self.position);
        self.acceleration = NVec2::zeros();
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).norm()
    }

    /// Point-in-circle test against this body's drawn disc
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (NVec2::new(x, y) - self.position).norm() < self.radius
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    /// Read-only view handed to renderers
    pub fn snapshot(&self) -> BodySnapshot<'_> {
        BodySnapshot {
            position: self.position,
            radius: self.radius,
            color_set: self.color_set,
            trail_color: self.trail_color,
            trajectory: &self.trajectory,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // 2d collection of bodies
    pub tick: u64, // completed ticks
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, tick: 0 }
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Take a body out of the simulation; indices above `index` shift down
    pub fn remove_body(&mut self, index: usize) -> Option<Body> {
        if index < self.bodies.len() {
            Some(self.bodies.remove(index))
        } else {
            None
        }
    }

    /// Index of the topmost body whose disc contains `(x, y)`
    /// Later bodies are drawn over earlier ones, so search back to front
    pub fn body_at(&self, x: f64, y: f64) -> Option<usize> {
        self.bodies.iter().rposition(|b| b.contains(x, y))
    }

    /// Sum of m * v over all bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn snapshots(&self) -> impl Iterator<Item = BodySnapshot<'_>> + '_ {
        self.bodies.iter().map(Body::snapshot)
    }
}

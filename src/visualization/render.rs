//! Read-only contract between the simulation and whatever draws it
//!
//! Renderers never touch `Body` directly. They receive a [`BodySnapshot`]
//! per body and decide how to draw the core, halo and trail.

use log::debug;

use crate::simulation::colors::{ColorSet, Rgba};
use crate::simulation::states::{NVec2, System};
use crate::simulation::trajectory::TrajectoryBuffer;

/// Diameter of a single trail dot, in pixels
pub const TRAIL_DOT_DIAMETER: f64 = 2.0;

/// Borrowed view of one body for a render pass
#[derive(Debug, Clone, Copy)]
pub struct BodySnapshot<'a> {
    pub position: NVec2,
    pub radius: f64,
    pub color_set: ColorSet,
    pub trail_color: Rgba,
    pub trajectory: &'a TrajectoryBuffer,
}

/// Something that can draw body snapshots
pub trait RenderAdapter {
    fn draw_body(&mut self, body: &BodySnapshot<'_>);
}

/// Draw every body of `sys` once, in collection order
pub fn render_system<R: RenderAdapter + ?Sized>(sys: &System, renderer: &mut R) {
    for snapshot in sys.snapshots() {
        renderer.draw_body(&snapshot);
    }
}

/// Headless renderer: writes each snapshot to the log
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub drawn: usize,
}

impl RenderAdapter for LogRenderer {
    fn draw_body(&mut self, body: &BodySnapshot<'_>) {
        debug!(
            "body {}: pos = ({:.3}, {:.3}), r = {}, trail = {} points",
            self.drawn,
            body.position.x,
            body.position.y,
            body.radius,
            body.trajectory.len()
        );
        self.drawn += 1;
    }
}

//! Bevy 2D viewer
//!
//! Cores are filled circle meshes kept in sync with the simulation; halos and
//! trails are redrawn every frame through gizmos from body snapshots.
//! Left click removes the body under the cursor.

use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use log::info;

use crate::simulation::colors::Rgba;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::glow::halo_rings;
use crate::visualization::render::{render_system, BodySnapshot, RenderAdapter, TRAIL_DOT_DIAMETER};

#[derive(Component)]
struct BodyIndex(pub usize);

fn to_color(c: Rgba) -> Color {
    Color::srgba_u8(c.r, c.g, c.b, c.a)
}

fn to_vec2(p: NVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

pub fn run_2d(scenario: Scenario) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        // logging goes through env_logger, set up in main
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (pick_body_system, physics_step_system, sync_transforms_system, draw_bodies_system).chain(),
        )
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..Default::default()
        },
        ..Default::default()
    });

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let p = to_vec2(body.position);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius() as f32))),
                material: materials.add(ColorMaterial::from(to_color(body.color_set().core))),
                transform: Transform::from_xyz(p.x, p.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = b.position.x as f32;
            transform.translation.y = b.position.y as f32;
        }
    }
}

/// Gizmo-backed renderer for halos and trails
struct GizmoRenderer<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
}

impl RenderAdapter for GizmoRenderer<'_, '_, '_> {
    fn draw_body(&mut self, body: &BodySnapshot<'_>) {
        let center = to_vec2(body.position);
        for ring in halo_rings(body.radius) {
            let halo = body.color_set.halo.faded(ring.opacity);
            self.gizmos.circle_2d(center, ring.radius as f32, to_color(halo));
        }

        let trail = to_color(body.trail_color);
        let dot = (TRAIL_DOT_DIAMETER / 2.0) as f32;
        for p in body.trajectory.iter() {
            self.gizmos.circle_2d(to_vec2(*p), dot, trail);
        }
    }
}

fn draw_bodies_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let mut renderer = GizmoRenderer { gizmos: &mut gizmos };
    render_system(&scenario.system, &mut renderer);
}

fn pick_body_system(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut scenario: ResMut<Scenario>,
    mut bodies: Query<(Entity, &mut BodyIndex)>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else { return };
    let Ok((camera, cam_transform)) = cameras.get_single() else { return };
    let Some(cursor) = window
        .cursor_position()
        .and_then(|c| camera.viewport_to_world_2d(cam_transform, c))
    else {
        return;
    };
    let Some(index) = scenario.system.body_at(cursor.x as f64, cursor.y as f64) else {
        return;
    };

    scenario.system.remove_body(index);
    info!("removed body {index}, {} left", scenario.system.bodies.len());

    // keep mesh indices aligned with the shifted body list
    for (entity, mut bi) in &mut bodies {
        if bi.0 == index {
            commands.entity(entity).despawn();
        } else if bi.0 > index {
            bi.0 -= 1;
        }
    }
}

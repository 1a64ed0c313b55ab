//! Shared setup helpers for rover-sim benchmarks.
//!
//! ## Running
//!
//! Engine (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//!
//! Controllers and policy seam:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench control
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- broadphase

use glam::DVec3;
use rover_sim::ecs::components::collision::CollisionFeature;
use rover_sim::ecs::components::physics::{Collider, ColliderShape, RigidBody};
use rover_sim::ecs::components::transform::Transform;
use rover_sim::physics::{BodyDesc, PhysicsWorld};
use rover_sim::{GroundPlane, PhysicsConfig, RoverConfig, RoverTelemetry, Simulation};

// ---------------------------------------------------------------------------
// Broadphase scenes
// ---------------------------------------------------------------------------

fn grid_position(i: usize, cols: usize, spacing: f64) -> DVec3 {
    let x = (i % cols) as f64 * spacing;
    let y = (i / cols) as f64 * spacing;
    DVec3::new(x, y, 0.0)
}

/// `n` dynamic boxes in a grid, packed so that neighbours overlap.
pub fn setup_box_grid(n: usize) -> hecs::World {
    let mut world = hecs::World::new();
    let cols = (n as f64).sqrt().ceil() as usize;
    let shape = ColliderShape::Box {
        half_extents: DVec3::splat(0.5),
    };

    for i in 0..n {
        world.spawn((
            Transform::from_position(grid_position(i, cols, 0.9)),
            RigidBody::for_shape(1.0, &shape),
            Collider::new(shape.clone()),
        ));
    }
    world
}

/// `n` dynamic wheels spread far apart (no overlaps).
pub fn setup_sparse_wheels(n: usize) -> hecs::World {
    let mut world = hecs::World::new();
    let cols = (n as f64).sqrt().ceil() as usize;
    let shape = ColliderShape::Cylinder {
        radius: 0.105,
        half_height: 0.05,
    };

    for i in 0..n {
        world.spawn((
            Transform::from_position(grid_position(i, cols, 5.0)),
            RigidBody::for_shape(0.2, &shape),
            Collider::new(shape.clone()),
        ));
    }
    world
}

// ---------------------------------------------------------------------------
// Engine scenes
// ---------------------------------------------------------------------------

/// Tagged ground plane plus `n` tagged boxes dropped just above it, each in
/// its own group so that touching boxes also collide.
pub fn setup_box_scene(n: usize) -> PhysicsWorld {
    let mut physics = PhysicsWorld::new(PhysicsConfig::default()).expect("default physics config");
    physics.add_body(
        BodyDesc::new(Transform::identity(), RigidBody::new_static())
            .with_collider(Collider::new(ColliderShape::Plane {
                normal: DVec3::Z,
                distance: 0.0,
            }))
            .with_feature(CollisionFeature::new("ground")),
    );

    let shape = ColliderShape::Box {
        half_extents: DVec3::splat(0.2),
    };
    let cols = (n as f64).sqrt().ceil() as usize;
    for i in 0..n {
        let position = grid_position(i, cols, 0.5) + DVec3::new(0.0, 0.0, 0.21 + (i % 3) as f64 * 0.5);
        physics.add_body(
            BodyDesc::new(Transform::from_position(position), RigidBody::for_shape(1.0, &shape))
                .with_collider(Collider::new(shape.clone()))
                .with_feature(CollisionFeature::new(format!("box{i}"))),
        );
    }
    physics
}

/// Rover at rest on flat ground, `settle_ticks` ticks after spawning.
pub fn setup_rover(settle_ticks: usize) -> Simulation {
    let mut sim = Simulation::new(PhysicsConfig::default(), RoverConfig::default(), DVec3::ZERO, 0)
        .expect("rover spawn");
    GroundPlane::default()
        .spawn(sim.world_mut())
        .expect("ground spawn");
    run_ticks(&mut sim, settle_ticks);
    sim
}

pub fn run_ticks(sim: &mut Simulation, ticks: usize) {
    for _ in 0..ticks {
        sim.tick().expect("tick");
    }
}

// ---------------------------------------------------------------------------
// Control inputs
// ---------------------------------------------------------------------------

/// A plausible mid-turn telemetry sample.
pub fn sample_telemetry() -> RoverTelemetry {
    RoverTelemetry {
        position: DVec3::new(1.2, -0.1, 0.11),
        direction: 12.0,
        roll: -4.5,
        pitch: 2.0,
        roll_rate: 0.3,
        pitch_rate: -0.1,
        upside_down: false,
        boggie_angle: -3.0,
        steering_angle: 8.0,
        steering_rate: 5.0,
        ft_torsors: [
            [0.4, -0.2, 31.0],
            [0.1, 1.3, -0.05],
            [-0.3, 0.1, 28.0],
            [-0.2, 1.1, 0.02],
        ],
        wheel_rates: [0.98, 0.92, 0.97, 0.93],
    }
}

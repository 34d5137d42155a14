//! Collision systems: Боб против платформ, пружин и белок

use bevy::math::bounding::{Aabb2d, IntersectsVolume};
use bevy::prelude::*;
use rand::Rng;

use crate::bob::BobHit;
use crate::components::{Bob, BobState, Bounds, Movement, Platform, Pulverizing, Spring, Squirrel};
use crate::config::GameConfig;
use crate::DeterministicRng;

/// Боб может приземлиться на объект: падает, выше объекта, хитбоксы пересекаются
pub fn lands_on(bob_box: &Aabb2d, bob_y: f32, falling: bool, target_box: &Aabb2d, target_y: f32) -> bool {
    falling && bob_y > target_y && bob_box.intersects(target_box)
}

/// Система: overlap Боба с объектами уровня → BobHit events
///
/// Сбитый Боб (Hit) ни с чем не сталкивается.
/// Платформа после приземления ломается с шансом platform_break_chance.
#[allow(clippy::too_many_arguments)]
pub fn detect_bob_collisions(
    mut commands: Commands,
    bobs: Query<(Entity, &Transform, &Bounds, &BobState, &Movement), With<Bob>>,
    platforms: Query<(Entity, &Transform, &Bounds), (With<Platform>, Without<Pulverizing>)>,
    springs: Query<(&Transform, &Bounds), With<Spring>>,
    squirrels: Query<(&Transform, &Bounds), With<Squirrel>>,
    mut hits: EventWriter<BobHit>,
    mut rng: ResMut<DeterministicRng>,
    config: Res<GameConfig>,
) {
    for (bob, bob_transform, bob_bounds, state, movement) in bobs.iter() {
        if state.is_hit() {
            continue;
        }

        let bob_box = bob_bounds.aabb(bob_transform);
        let bob_y = bob_transform.translation.y;
        let falling = movement.velocity.y < 0.0;

        let landed = platforms.iter().find(|(_, transform, bounds)| {
            lands_on(&bob_box, bob_y, falling, &bounds.aabb(transform), transform.translation.y)
        });
        if let Some((platform, _, _)) = landed {
            hits.write(BobHit::Platform { entity: bob });

            if rng.rng.gen::<f32>() < config.physics.platform_break_chance {
                commands.entity(platform).insert(Pulverizing::default());
                crate::logger::log(&format!("Platform {:?} breaks under Bob {:?}", platform, bob));
            }
        }

        let on_spring = springs.iter().any(|(transform, bounds)| {
            lands_on(&bob_box, bob_y, falling, &bounds.aabb(transform), transform.translation.y)
        });
        if on_spring {
            hits.write(BobHit::Spring { entity: bob });
        }

        let bitten = squirrels
            .iter()
            .any(|(transform, bounds)| bob_box.intersects(&bounds.aabb(transform)));
        if bitten {
            crate::logger::log_info(&format!("Bob {:?} hit by squirrel", bob));
            hits.write(BobHit::Squirrel { entity: bob });
        }
    }
}

/// Система: ломающиеся платформы исчезают через pulverize_time
pub fn despawn_pulverized_platforms(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Pulverizing)>,
    config: Res<GameConfig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut pulverizing) in query.iter_mut() {
        pulverizing.elapsed += delta;

        if pulverizing.elapsed >= config.physics.pulverize_time {
            crate::logger::log(&format!("Despawning platform {:?} (pulverized)", entity));
            commands.entity(entity).despawn();
        }
    }
}

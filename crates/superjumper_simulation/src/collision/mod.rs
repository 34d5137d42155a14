//! Collision module — AABB overlap Боба с объектами уровня
//!
//! Не резолвит пересечения: только генерирует BobHit events,
//! реакция (скорость, state) — в `bob::apply_bob_hits`.
//!
//! Правила:
//! - Платформа/пружина: только когда Боб падает и он выше объекта
//! - Белка: любое пересечение
//! - Сбитый Боб (Hit) ни с чем не сталкивается

use bevy::prelude::*;

use crate::SimulationSet;

pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod systems_tests;

pub use systems::*;

/// Collision Plugin
///
/// - detect_bob_collisions — SimulationSet::Collision
/// - despawn_pulverized_platforms — SimulationSet::Reactions
pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<crate::components::Bounds>()
            .register_type::<crate::components::Platform>()
            .register_type::<crate::components::Pulverizing>()
            .register_type::<crate::components::Spring>()
            .register_type::<crate::components::Squirrel>();

        app.add_systems(FixedUpdate, detect_bob_collisions.in_set(SimulationSet::Collision));
        app.add_systems(
            FixedUpdate,
            despawn_pulverized_platforms.in_set(SimulationSet::Reactions),
        );
    }
}

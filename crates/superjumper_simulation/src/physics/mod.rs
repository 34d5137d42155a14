//! Physics simulation module
//!
//! Гравитация и интеграция движения (SimulationSet::Physics).

use bevy::prelude::*;

use crate::SimulationSet;

pub mod movement;

// Re-export основных типов
pub use movement::{apply_gravity, gravity_step, integrate_movement, integrate_step};

/// Physics Plugin
///
/// Порядок: apply_gravity → integrate_movement
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<crate::components::Movement>()
            .register_type::<crate::components::Gravity>();

        app.add_systems(
            FixedUpdate,
            (apply_gravity, integrate_movement)
                .chain()
                .in_set(SimulationSet::Physics),
        );
    }
}

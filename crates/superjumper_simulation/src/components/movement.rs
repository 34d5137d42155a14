//! Movement компоненты: скорость, ускорение, гравитация

use bevy::prelude::*;

/// Кинематика entity (2D, единицы мира в секунду)
///
/// Интегрируется в Transform системой `physics::integrate_movement`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Movement {
    pub velocity: Vec2,
    /// Постоянное ускорение (помимо гравитации)
    pub accel: Vec2,
}

impl Movement {
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            accel: Vec2::ZERO,
        }
    }
}

/// Marker: на entity действует гравитация мира (GameConfig.physics.gravity)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Gravity;

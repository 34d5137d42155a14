//! Кинематика: гравитация + интеграция velocity → Transform
//!
//! Без физического движка: explicit Euler на fixed timestep (60Hz).
//! Коллизии — отдельно, в `collision` (AABB overlap).

use bevy::prelude::*;

use crate::components::{Gravity, Movement};
use crate::config::GameConfig;

/// velocity += gravity * dt
pub fn gravity_step(velocity: Vec2, gravity: Vec2, delta: f32) -> Vec2 {
    velocity + gravity * delta
}

/// velocity += accel * dt, затем position += velocity * dt
///
/// Возвращает (новая velocity, смещение)
pub fn integrate_step(movement: &Movement, delta: f32) -> (Vec2, Vec2) {
    let velocity = movement.velocity + movement.accel * delta;
    (velocity, velocity * delta)
}

/// Система применения gravity к velocity
///
/// Только для entity с marker Gravity (Боб; платформы статичны).
pub fn apply_gravity(
    mut query: Query<&mut Movement, With<Gravity>>,
    config: Res<GameConfig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();
    let gravity = config.physics.gravity;

    for mut movement in query.iter_mut() {
        movement.velocity = gravity_step(movement.velocity, gravity, delta);
    }
}

/// Система интеграции velocity → Transform
pub fn integrate_movement(mut query: Query<(&mut Movement, &mut Transform)>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (mut movement, mut transform) in query.iter_mut() {
        let (velocity, offset) = integrate_step(&movement, delta);
        movement.velocity = velocity;
        transform.translation += offset.extend(0.0);
    }
}

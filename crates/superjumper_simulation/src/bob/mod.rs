//! Bob domain — аватар игрока
//!
//! Содержит:
//! - update_bob (правило аватара: отскок от пола, tilt, Jump/Fall, wraparound, game over)
//! - apply_bob_hits (реакции на BobHit: белка, платформа, пружина)
//! - TiltInput (горизонтальное ускорение от хоста, живёт один кадр)
//! - BobHit (event от collision / внешних систем)

use bevy::prelude::*;

use crate::components::{Bob, Bounds};
use crate::config::GameConfig;
use crate::SimulationSet;

pub mod events;
pub mod systems;


pub use events::*;
pub use systems::*;

/// Горизонтальное ускорение (акселерометр x) на текущий кадр
///
/// Хост (input layer) пишет через `set` перед `app.update()`.
/// Действует на все fixed-тики кадра, `clear_tilt_input` сбрасывает в `Last`.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct TiltInput {
    pub accel_x: f32,
}

impl TiltInput {
    pub fn set(&mut self, accel_x: f32) {
        self.accel_x = accel_x;
    }
}

/// Spawn helper для Боба
///
/// Bob тянет за собой BobState (Jump), Movement, Gravity через Required
/// Components; Transform и Bounds (размер из `config.bob.size`) задаём здесь.
pub fn spawn_bob(commands: &mut Commands, position: Vec2, config: &GameConfig) -> Entity {
    commands
        .spawn((
            Bob::default(),
            Transform::from_translation(position.extend(0.0)),
            Bounds {
                size: config.bob.size,
            },
        ))
        .id()
}

/// Bob Plugin
///
/// Порядок выполнения (FixedUpdate):
/// 1. update_bob — SimulationSet::Bob
/// 2. apply_bob_hits → tick_state_time — SimulationSet::Reactions
///
/// Вне FixedUpdate: clear_tilt_input в Last (раз в кадр).
pub struct BobPlugin;

impl Plugin for BobPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BobHit>()
            .init_resource::<TiltInput>()
            .register_type::<TiltInput>()
            .register_type::<Bob>()
            .register_type::<crate::components::BobState>();

        app.add_systems(FixedUpdate, update_bob.in_set(SimulationSet::Bob));
        app.add_systems(
            FixedUpdate,
            (apply_bob_hits, tick_state_time)
                .chain()
                .in_set(SimulationSet::Reactions),
        );
        app.add_systems(Last, clear_tilt_input);
    }
}

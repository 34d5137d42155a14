//! Bob systems: per-tick правило аватара + обработчики столкновений
//!
//! Логика вынесена в чистые функции (`step_bob`, `apply_hit`), системы
//! только достают компоненты/ресурсы и вызывают их.

use bevy::prelude::*;

use crate::bob::{BobHit, TiltInput};
use crate::components::{Bob, BobState, BobStateKind, Movement, WorldState};
use crate::config::GameConfig;

/// Filter "семейства" Боба: Bob + BobState + Transform + Movement
///
/// BobState и Movement берутся в query напрямую, остальное — через With.
pub type BobFamily = (With<Bob>, With<Transform>);

/// Итог одного шага правила
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BobStep {
    Alive,
    /// Упал ниже рекорда высоты больше чем на game_over_margin
    GameOver,
}

/// Один шаг правила аватара (порядок проверок важен)
///
/// 1. Пол: не Hit и y <= ground_threshold → отскок как от платформы
/// 2. Tilt: не Hit → velocity.x = -accel_x / 10 * move_velocity
/// 3-4. Знак velocity.y выбирает Jump / Fall (Hit не трогаем)
/// 5. Wraparound по x в [0, world.width]
/// 6. scale.x смотрит в сторону движения
/// 7-8. Рекорд высоты + проверка game over
pub fn step_bob(
    transform: &mut Transform,
    state: &mut BobState,
    movement: &mut Movement,
    bob: &mut Bob,
    accel_x: f32,
    config: &GameConfig,
) -> BobStep {
    let pos = &mut transform.translation;

    if !state.is_hit() && pos.y <= config.bob.ground_threshold {
        apply_hit(BobHitKind::Platform, state, movement, config);
    }

    if !state.is_hit() {
        movement.velocity.x = -accel_x / 10.0 * config.bob.move_velocity;
    }

    if movement.velocity.y > 0.0 && !state.is_hit() && state.get() != BobStateKind::Jump {
        state.set(BobStateKind::Jump);
    }

    if movement.velocity.y < 0.0 && !state.is_hit() && state.get() != BobStateKind::Fall {
        state.set(BobStateKind::Fall);
    }

    if pos.x < 0.0 {
        pos.x = config.world.width;
    } else if pos.x > config.world.width {
        pos.x = 0.0;
    }

    let scale_x = transform.scale.x.abs();
    transform.scale.x = if movement.velocity.x < 0.0 { -scale_x } else { scale_x };

    bob.height_so_far = bob.height_so_far.max(transform.translation.y);

    if bob.height_so_far - config.bob.game_over_margin > transform.translation.y {
        BobStep::GameOver
    } else {
        BobStep::Alive
    }
}

/// Тип столкновения без привязки к entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BobHitKind {
    Squirrel,
    Platform,
    Spring,
}

impl From<&BobHit> for BobHitKind {
    fn from(hit: &BobHit) -> Self {
        match hit {
            BobHit::Squirrel { .. } => BobHitKind::Squirrel,
            BobHit::Platform { .. } => BobHitKind::Platform,
            BobHit::Spring { .. } => BobHitKind::Spring,
        }
    }
}

/// Реакция на столкновение: сброс скорости + принудительный переход
pub fn apply_hit(kind: BobHitKind, state: &mut BobState, movement: &mut Movement, config: &GameConfig) {
    match kind {
        BobHitKind::Squirrel => {
            movement.velocity = Vec2::ZERO;
            state.set(BobStateKind::Hit);
        }
        BobHitKind::Platform => {
            movement.velocity.y = config.bob.jump_velocity;
            state.set(BobStateKind::Jump);
        }
        BobHitKind::Spring => {
            movement.velocity.y = config.bob.spring_velocity();
            state.set(BobStateKind::Jump);
        }
    }
}

/// Система: правило аватара для всех Бобов
///
/// Tilt читается, но не сбрасывается: все fixed-тики одного кадра
/// видят один и тот же input (см. `clear_tilt_input`).
pub fn update_bob(
    mut query: Query<(Entity, &mut Transform, &mut BobState, &mut Movement, &mut Bob)>,
    tilt: Res<TiltInput>,
    mut world_state: ResMut<WorldState>,
    config: Res<GameConfig>,
) {
    let accel_x = tilt.accel_x;

    for (entity, mut transform, mut state, mut movement, mut bob) in query.iter_mut() {
        let step = step_bob(
            &mut transform,
            &mut state,
            &mut movement,
            &mut bob,
            accel_x,
            &config,
        );

        if step == BobStep::GameOver && !world_state.is_game_over() {
            *world_state = WorldState::GameOver;
            crate::logger::log_info(&format!(
                "Game over: Bob {:?} fell to y={:.2} (record {:.2})",
                entity, transform.translation.y, bob.height_so_far
            ));
        }
    }
}

/// Система (Last): сброс tilt input в конце кадра
///
/// Хост пишет input раз в кадр, а кадр может содержать 0..N fixed-тиков.
pub fn clear_tilt_input(mut tilt: ResMut<TiltInput>) {
    tilt.accel_x = 0.0;
}

/// Система: BobHit events → apply_hit
///
/// Events для entity вне семейства молча пропускаются.
pub fn apply_bob_hits(
    mut hits: EventReader<BobHit>,
    mut query: Query<(&mut BobState, &mut Movement), BobFamily>,
    config: Res<GameConfig>,
) {
    for hit in hits.read() {
        let Ok((mut state, mut movement)) = query.get_mut(hit.entity()) else {
            crate::logger::log(&format!("BobHit ignored: {:?} is not a Bob", hit.entity()));
            continue;
        };

        apply_hit(hit.into(), &mut state, &mut movement, &config);
    }
}

/// Система: время в текущем состоянии (для анимаций)
pub fn tick_state_time(mut query: Query<&mut BobState>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut state in query.iter_mut() {
        state.time += delta;
    }
}

/// Применить столкновение напрямую к World (вне schedule)
///
/// Возвращает false если entity не входит в семейство Боба.
pub fn hit_bob(world: &mut World, entity: Entity, kind: BobHitKind) -> bool {
    let config = world.get_resource::<GameConfig>().cloned().unwrap_or_default();

    let mut query = world.query_filtered::<(&mut BobState, &mut Movement), BobFamily>();
    let Ok((mut state, mut movement)) = query.get_mut(world, entity) else {
        return false;
    };

    apply_hit(kind, &mut state, &mut movement, &config);
    true
}

/// Боба сбил враг
pub fn hit_squirrel(world: &mut World, entity: Entity) -> bool {
    hit_bob(world, entity, BobHitKind::Squirrel)
}

/// Боб приземлился на платформу
pub fn hit_platform(world: &mut World, entity: Entity) -> bool {
    hit_bob(world, entity, BobHitKind::Platform)
}

/// Боб приземлился на пружину
pub fn hit_spring(world: &mut World, entity: Entity) -> bool {
    hit_bob(world, entity, BobHitKind::Spring)
}

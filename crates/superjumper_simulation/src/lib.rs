//! Super Jumper Simulation Core
//!
//! ECS-симуляция аватара (Bob) на Bevy 0.16, headless.
//!
//! Границы:
//! - ECS = gameplay state (Bob FSM, физика, коллизии, game over)
//! - Host engine = rendering, input devices, audio, генерация уровня
//!
//! Хост пишет `TiltInput`, читает `WorldState` и компоненты.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod bob;
pub mod collision;
pub mod components;
pub mod config;
pub mod logger;
pub mod physics;

// Re-export базовых типов для удобства
pub use bob::{
    hit_platform, hit_spring, hit_squirrel, spawn_bob, BobHit, BobHitKind, BobPlugin, TiltInput,
};
pub use collision::CollisionPlugin;
pub use components::*;
pub use config::{ConfigError, GameConfig};
pub use physics::PhysicsPlugin;

/// Seed по умолчанию (если хост не вставил свой DeterministicRng)
pub const DEFAULT_SEED: u64 = 42;

/// Шаг симуляции (60Hz)
pub const FIXED_TIMESTEP: Duration = Duration::from_nanos(16_666_667);

/// Порядок фаз внутри FixedUpdate
///
/// Все фазы работают только пока `WorldState::Running`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Правило аватара (update_bob)
    Bob,
    /// Гравитация + интеграция
    Physics,
    /// Overlap → BobHit events
    Collision,
    /// Реакции на events, таймеры, cleanup
    Reactions,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // init_* не перезаписывает ресурсы, вставленные хостом заранее
        app.init_resource::<GameConfig>()
            .init_resource::<WorldState>()
            .init_resource::<DeterministicRng>()
            .register_type::<GameConfig>()
            .register_type::<WorldState>();

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Bob,
                SimulationSet::Physics,
                SimulationSet::Collision,
                SimulationSet::Reactions,
            )
                .chain()
                .distributive_run_if(simulation_running),
        );

        app.add_plugins((BobPlugin, PhysicsPlugin, CollisionPlugin));
    }
}

/// Run condition: игра ещё не закончилась (нет game over)
pub fn simulation_running(state: Res<WorldState>) -> bool {
    *state == WorldState::Running
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает вручную: каждый `app.update()` = ровно FIXED_TIMESTEP
/// (первый update только инициализирует часы, FixedUpdate в нём не идёт).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_duration(FIXED_TIMESTEP))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FIXED_TIMESTEP));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Debug формат как сериализация (f32 печатаются полностью)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

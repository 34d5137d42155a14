//! World компоненты: состояние мира, хитбоксы, объекты уровня

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

/// Глобальное состояние мира (читают UI, score подсистемы)
///
/// Переход на следующий уровень (замок) — дело хоста, здесь не моделируется.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Resource)]
pub enum WorldState {
    #[default]
    Running,
    GameOver,
}

impl WorldState {
    pub fn is_game_over(&self) -> bool {
        *self == WorldState::GameOver
    }
}

/// AABB хитбокс (центр = Transform.translation)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Bounds {
    pub size: Vec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            size: Vec2::new(0.8, 0.8),
        }
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// AABB в мировых координатах
    pub fn aabb(&self, transform: &Transform) -> Aabb2d {
        Aabb2d::new(transform.translation.truncate(), self.size * 0.5)
    }
}

/// Платформа: Боб отскакивает, приземляясь сверху
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Bounds = Bounds::new(2.0, 0.5))]
pub struct Platform;

/// Платформа ломается и будет удалена через `pulverize_time`
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Pulverizing {
    pub elapsed: f32,
}

/// Пружина: высокий прыжок (jump_velocity × spring_multiplier)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Bounds = Bounds::new(0.3, 0.3))]
pub struct Spring;

/// Белка (враг): касание переводит Боба в Hit
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Bounds = Bounds::new(1.0, 0.6))]
pub struct Squirrel;

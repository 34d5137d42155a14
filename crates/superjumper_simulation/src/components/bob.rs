//! Bob компоненты: аватар игрока и его FSM состояние

use bevy::prelude::*;

/// Аватар игрока (Bob)
///
/// Автоматически добавляет BobState, Movement, Bounds через Required Components.
/// Transform задаётся при спавне (стартовая позиция).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(BobState, crate::components::Movement, crate::components::Bounds, crate::components::Gravity)]
pub struct Bob {
    /// Рекорд высоты (max translation.y за всю жизнь)
    ///
    /// Инвариант: монотонно не убывает
    pub height_so_far: f32,
}

/// Дискретное состояние Боба
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum BobStateKind {
    /// Летит вверх (velocity.y > 0 или только что отскочил)
    Jump,
    /// Падает (velocity.y < 0)
    Fall,
    /// Сбит белкой: управление и отскоки отключены
    Hit,
}

/// FSM Боба + время в текущем состоянии (для анимаций)
///
/// Инвариант: активно ровно одно состояние. `set` всегда сбрасывает `time`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BobState {
    state: BobStateKind,
    /// Секунды с последнего `set`
    pub time: f32,
}

impl Default for BobState {
    fn default() -> Self {
        Self::new(BobStateKind::Jump)
    }
}

impl BobState {
    pub fn new(state: BobStateKind) -> Self {
        Self { state, time: 0.0 }
    }

    pub fn get(&self) -> BobStateKind {
        self.state
    }

    pub fn set(&mut self, state: BobStateKind) {
        self.state = state;
        self.time = 0.0;
    }

    pub fn is_hit(&self) -> bool {
        self.state == BobStateKind::Hit
    }
}

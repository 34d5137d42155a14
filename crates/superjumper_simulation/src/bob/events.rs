//! Bob events

use bevy::prelude::*;

/// Event: Боб столкнулся с объектом уровня
///
/// Генерируется:
/// - `collision::detect_bob_collisions` (overlap хитбоксов)
/// - внешними системами/тестами (`World::send_event`)
///
/// Обрабатывается:
/// - `bob::apply_bob_hits` (SimulationSet::Reactions)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BobHit {
    /// Сбит врагом (белкой): velocity = 0, state = Hit
    Squirrel { entity: Entity },
    /// Приземлился на платформу: обычный прыжок
    Platform { entity: Entity },
    /// Приземлился на пружину: высокий прыжок
    Spring { entity: Entity },
}

impl BobHit {
    pub fn entity(&self) -> Entity {
        match *self {
            BobHit::Squirrel { entity } | BobHit::Platform { entity } | BobHit::Spring { entity } => {
                entity
            }
        }
    }
}

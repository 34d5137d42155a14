//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - bob: аватар игрока (Bob, BobState)
//! - movement: кинематика (Movement, Gravity)
//! - world: состояние мира и объекты уровня (WorldState, Bounds, Platform, Spring, Squirrel)

pub mod bob;
pub mod movement;
pub mod world;

// Re-exports для удобного импорта
pub use bob::*;
pub use movement::*;
pub use world::*;

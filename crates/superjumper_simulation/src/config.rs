//! Игровой конфиг (tuning): скорости Боба, размеры мира, гравитация
//!
//! Загружается из RON. Отсутствующие поля/секции берутся из Default,
//! так что файл может переопределять только то, что нужно.
//!
//! ```ron
//! (
//!     bob: (jump_velocity: 12.0),
//!     world: (width: 10.0),
//! )
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

/// Ошибки загрузки конфига
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{path}: read error: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: parse error: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Параметры аватара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct BobConfig {
    /// Горизонтальная скорость при полном наклоне (accel_x = ±10)
    pub move_velocity: f32,
    /// Вертикальная скорость после отскока от платформы
    pub jump_velocity: f32,
    /// Множитель jump_velocity для пружины
    pub spring_multiplier: f32,
    /// Высота "пола": на ней и ниже Боб автоматически отскакивает
    pub ground_threshold: f32,
    /// Насколько можно упасть ниже рекорда высоты до game over
    pub game_over_margin: f32,
    /// Размер AABB (ширина, высота), его вставляет `spawn_bob`
    pub size: Vec2,
}

impl Default for BobConfig {
    fn default() -> Self {
        Self {
            move_velocity: 20.0,
            jump_velocity: 11.0,
            spring_multiplier: 1.5,
            ground_threshold: 0.5,
            game_over_margin: 7.5,
            size: Vec2::new(0.8, 0.8),
        }
    }
}

impl BobConfig {
    pub fn spring_velocity(&self) -> f32 {
        self.jump_velocity * self.spring_multiplier
    }
}

/// Размеры мира
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct WorldConfig {
    /// Ширина мира: x за пределами [0, width] заворачивается
    pub width: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
        }
    }
}

/// Физика (гравитация, ломающиеся платформы)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: Vec2,
    /// Шанс что платформа сломается после приземления (0..1)
    pub platform_break_chance: f32,
    /// Сколько секунд ломается платформа до despawn
    pub pulverize_time: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -12.0),
            platform_break_chance: 0.5,
            pulverize_time: 0.8,
        }
    }
}

/// Корневой конфиг (Resource)
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct GameConfig {
    pub bob: BobConfig,
    pub world: WorldConfig,
    pub physics: PhysicsConfig,
}

impl GameConfig {
    pub fn from_ron_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&text, &path.display().to_string())
    }

    /// Загрузить или взять defaults (ошибка возвращается для логирования)
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load_from_file(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Non-fatal предупреждения о подозрительных значениях
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();

        if self.world.width <= 0.0 {
            w.push(format!("world.width {} must be > 0", self.world.width));
        }
        if self.bob.jump_velocity <= 0.0 {
            w.push(format!(
                "bob.jump_velocity {} must be > 0 (Bob cannot bounce)",
                self.bob.jump_velocity
            ));
        }
        if self.bob.spring_multiplier < 1.0 {
            w.push(format!(
                "bob.spring_multiplier {} < 1; springs weaker than platforms",
                self.bob.spring_multiplier
            ));
        }
        if self.bob.move_velocity < 0.0 {
            w.push("bob.move_velocity negative -> tilt controls inverted".into());
        }
        if self.bob.game_over_margin <= 0.0 {
            w.push(format!(
                "bob.game_over_margin {} must be > 0; any descent ends the game",
                self.bob.game_over_margin
            ));
        }
        if self.bob.size.x <= 0.0 || self.bob.size.y <= 0.0 {
            w.push("bob.size must be > 0 on both axes".into());
        }
        if self.physics.gravity.y >= 0.0 {
            w.push(format!(
                "physics.gravity.y is {}; Bob never falls back",
                self.physics.gravity.y
            ));
        }
        if !(0.0..=1.0).contains(&self.physics.platform_break_chance) {
            w.push(format!(
                "physics.platform_break_chance {} outside 0..1",
                self.physics.platform_break_chance
            ));
        }
        if self.physics.pulverize_time < 0.0 {
            w.push("physics.pulverize_time negative".into());
        }

        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.bob.move_velocity, 20.0);
        assert_eq!(cfg.bob.jump_velocity, 11.0);
        assert_eq!(cfg.bob.spring_velocity(), 16.5);
        assert_eq!(cfg.bob.ground_threshold, 0.5);
        assert_eq!(cfg.bob.game_over_margin, 7.5);
        assert_eq!(cfg.world.width, 10.0);
        assert_eq!(cfg.physics.gravity, Vec2::new(0.0, -12.0));
        assert!(cfg.validate().is_empty(), "defaults produce warnings: {:?}", cfg.validate());
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let cfg = GameConfig::from_ron_str("(bob: (jump_velocity: 14.0))", "inline").unwrap();
        assert_eq!(cfg.bob.jump_velocity, 14.0);
        assert_eq!(cfg.bob.move_velocity, 20.0);
        assert_eq!(cfg.world, WorldConfig::default());
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = GameConfig::from_ron_str("(bob: (jump_velocity: \"high\"))", "tuning.ron")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("tuning.ron: parse error"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(world: (width: 12.0), physics: (platform_break_chance: 0.0))").unwrap();

        let cfg = GameConfig::load_from_file(file.path()).unwrap();
        assert_eq!(cfg.world.width, 12.0);
        assert_eq!(cfg.physics.platform_break_chance, 0.0);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (cfg, err) = GameConfig::load_or_default(dir.path().join("missing.ron"));
        assert_eq!(cfg, GameConfig::default());
        assert!(matches!(err, Some(ConfigError::Io { .. })));
    }

    #[test]
    fn test_validate_detects_warnings() {
        let mut cfg = GameConfig::default();
        cfg.world.width = 0.0;
        cfg.bob.jump_velocity = -1.0;
        cfg.physics.gravity = Vec2::new(0.0, 3.0);
        cfg.physics.platform_break_chance = 1.5;

        let warnings = cfg.validate();
        let joined = warnings.join(" | ");
        assert_eq!(warnings.len(), 4, "got: {joined}");
        assert!(joined.contains("world.width"));
        assert!(joined.contains("gravity"));
    }
}

//! Headless симуляция Super Jumper
//!
//! Запускает Bevy App без рендера: Боб прыгает по лесенке платформ,
//! tilt input генерируется seeded RNG вместо акселерометра.

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;
use rand::Rng;

use superjumper_simulation::logger::{log_info, log_warning};
use superjumper_simulation::{
    create_headless_app, spawn_bob, Bob, BobState, DeterministicRng, GameConfig, Platform,
    SimulationPlugin, Spring, TiltInput, WorldState,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Super Jumper headless simulation runner")]
struct Cli {
    /// RNG seed (tilt input + ломающиеся платформы)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Количество update тиков
    #[arg(long, default_value_t = 1000)]
    ticks: u32,

    /// RON файл с GameConfig (defaults если не указан)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut app = create_headless_app(cli.seed);

    let config = match &cli.config {
        Some(path) => {
            let (config, error) = GameConfig::load_or_default(path);
            if let Some(e) = error {
                log_warning(&format!("Config not loaded, using defaults: {}", e));
            }
            config
        }
        None => GameConfig::default(),
    };
    for warning in config.validate() {
        log_warning(&format!("Config: {}", warning));
    }

    let world_width = config.world.width;
    app.insert_resource(config).add_plugins(SimulationPlugin);

    let bob = {
        let world = app.world_mut();
        let config = world.resource::<GameConfig>().clone();
        let mut commands = world.commands();
        let bob = spawn_bob(&mut commands, Vec2::new(world_width / 2.0, 1.0), &config);

        // Лесенка платформ с пружиной наверху каждой пятой
        for i in 1..40 {
            let y = i as f32 * 2.5;
            let x = (i as f32 * 3.7) % (world_width - 2.0) + 1.0;
            commands.spawn((Platform, Transform::from_xyz(x, y, 0.0)));
            if i % 5 == 0 {
                commands.spawn((Spring, Transform::from_xyz(x, y + 0.4, 0.0)));
            }
        }
        drop(commands);
        world.flush();
        bob
    };

    log_info(&format!(
        "Starting Super Jumper headless simulation (seed: {}, ticks: {})",
        cli.seed, cli.ticks
    ));

    for tick in 0..cli.ticks {
        let accel_x = {
            let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
            rng.rng.gen_range(-10.0_f32..10.0)
        };
        app.world_mut().resource_mut::<TiltInput>().set(accel_x);

        app.update();

        let world = app.world();
        if tick % 100 == 0 {
            if let (Some(transform), Some(state), Some(record)) = (
                world.get::<Transform>(bob),
                world.get::<BobState>(bob),
                world.get::<Bob>(bob),
            ) {
                log_info(&format!(
                    "Tick {}: Bob at ({:.2}, {:.2}) {:?}, record {:.2}",
                    tick,
                    transform.translation.x,
                    transform.translation.y,
                    state.get(),
                    record.height_so_far
                ));
            }
        }

        if world.resource::<WorldState>().is_game_over() {
            log_info(&format!("Game over at tick {}", tick));
            break;
        }
    }

    log_info("Simulation complete!");
}

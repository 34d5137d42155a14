//! Tests for collision systems.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::ecs::system::RunSystemOnce;
    use bevy::prelude::*;

    use crate::bob::BobHit;
    use crate::collision::*;
    use crate::components::*;
    use crate::config::GameConfig;
    use crate::DeterministicRng;

    fn collision_world(break_chance: f32) -> World {
        let mut world = World::new();
        let mut config = GameConfig::default();
        config.physics.platform_break_chance = break_chance;
        world.insert_resource(config);
        world.insert_resource(DeterministicRng::new(7));
        world.init_resource::<Events<BobHit>>();
        world
    }

    fn spawn_bob(world: &mut World, x: f32, y: f32, state: BobStateKind, velocity_y: f32) -> Entity {
        world
            .spawn((
                Bob::default(),
                Transform::from_xyz(x, y, 0.0),
                BobState::new(state),
                Movement::with_velocity(Vec2::new(0.0, velocity_y)),
            ))
            .id()
    }

    fn hits(world: &World) -> Vec<BobHit> {
        world
            .resource::<Events<BobHit>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    #[test]
    fn test_lands_on_rules() {
        let bob = Bounds::new(0.8, 0.8).aabb(&Transform::from_xyz(5.0, 2.5, 0.0));
        let platform = Bounds::new(2.0, 0.5).aabb(&Transform::from_xyz(5.0, 2.0, 0.0));

        assert!(lands_on(&bob, 2.5, true, &platform, 2.0));
        assert!(!lands_on(&bob, 2.5, false, &platform, 2.0)); // летит вверх
        assert!(!lands_on(&bob, 1.9, true, &platform, 2.0)); // ниже платформы
    }

    #[test]
    fn test_falling_bob_lands_on_platform() {
        let mut world = collision_world(1.0);
        let bob = spawn_bob(&mut world, 5.0, 2.5, BobStateKind::Fall, -3.0);
        let platform = world.spawn((Platform, Transform::from_xyz(5.0, 2.0, 0.0))).id();

        world.run_system_once(detect_bob_collisions).unwrap();

        assert_eq!(hits(&world), vec![BobHit::Platform { entity: bob }]);
        // break_chance = 1 → платформа всегда ломается
        assert!(world.get::<Pulverizing>(platform).is_some());
    }

    #[test]
    fn test_platform_survives_with_zero_break_chance() {
        let mut world = collision_world(0.0);
        spawn_bob(&mut world, 5.0, 2.5, BobStateKind::Fall, -3.0);
        let platform = world.spawn((Platform, Transform::from_xyz(5.0, 2.0, 0.0))).id();

        world.run_system_once(detect_bob_collisions).unwrap();

        assert_eq!(hits(&world).len(), 1);
        assert!(world.get::<Pulverizing>(platform).is_none());
    }

    #[test]
    fn test_rising_bob_passes_through_platform() {
        let mut world = collision_world(1.0);
        spawn_bob(&mut world, 5.0, 2.5, BobStateKind::Jump, 4.0);
        world.spawn((Platform, Transform::from_xyz(5.0, 2.0, 0.0)));

        world.run_system_once(detect_bob_collisions).unwrap();

        assert!(hits(&world).is_empty());
    }

    #[test]
    fn test_only_one_platform_hit_per_tick() {
        let mut world = collision_world(0.0);
        let bob = spawn_bob(&mut world, 5.0, 2.5, BobStateKind::Fall, -3.0);
        world.spawn((Platform, Transform::from_xyz(4.8, 2.1, 0.0)));
        world.spawn((Platform, Transform::from_xyz(5.2, 2.1, 0.0)));

        world.run_system_once(detect_bob_collisions).unwrap();

        assert_eq!(hits(&world), vec![BobHit::Platform { entity: bob }]);
    }

    #[test]
    fn test_pulverizing_platform_is_not_solid() {
        let mut world = collision_world(1.0);
        spawn_bob(&mut world, 5.0, 2.5, BobStateKind::Fall, -3.0);
        world.spawn((Platform, Pulverizing::default(), Transform::from_xyz(5.0, 2.0, 0.0)));

        world.run_system_once(detect_bob_collisions).unwrap();

        assert!(hits(&world).is_empty());
    }

    #[test]
    fn test_spring_launch() {
        let mut world = collision_world(0.0);
        let bob = spawn_bob(&mut world, 5.0, 2.5, BobStateKind::Fall, -3.0);
        world.spawn((Spring, Transform::from_xyz(5.0, 2.2, 0.0)));

        world.run_system_once(detect_bob_collisions).unwrap();

        assert_eq!(hits(&world), vec![BobHit::Spring { entity: bob }]);
    }

    #[test]
    fn test_squirrel_hits_rising_bob() {
        let mut world = collision_world(0.0);
        let bob = spawn_bob(&mut world, 5.0, 6.0, BobStateKind::Jump, 5.0);
        world.spawn((Squirrel, Transform::from_xyz(5.5, 6.2, 0.0)));

        world.run_system_once(detect_bob_collisions).unwrap();

        assert_eq!(hits(&world), vec![BobHit::Squirrel { entity: bob }]);
    }

    #[test]
    fn test_hit_bob_collides_with_nothing() {
        let mut world = collision_world(1.0);
        spawn_bob(&mut world, 5.0, 2.5, BobStateKind::Hit, -3.0);
        world.spawn((Platform, Transform::from_xyz(5.0, 2.0, 0.0)));
        world.spawn((Squirrel, Transform::from_xyz(5.0, 2.5, 0.0)));

        world.run_system_once(detect_bob_collisions).unwrap();

        assert!(hits(&world).is_empty());
    }

    #[test]
    fn test_pulverized_platform_despawns_after_timeout() {
        let mut world = World::new();
        world.insert_resource(GameConfig::default());
        let mut time = Time::<Fixed>::default();
        time.advance_by(Duration::from_secs_f32(0.4));
        world.insert_resource(time);

        let almost = world
            .spawn((Platform, Transform::default(), Pulverizing { elapsed: 0.5 }))
            .id();
        let fresh = world
            .spawn((Platform, Transform::default(), Pulverizing::default()))
            .id();

        world.run_system_once(despawn_pulverized_platforms).unwrap();

        // 0.5 + 0.4 >= 0.8 → despawn; 0.0 + 0.4 < 0.8 → ещё ломается
        assert!(world.get_entity(almost).is_err());
        let elapsed = world.get::<Pulverizing>(fresh).unwrap().elapsed;
        assert!((elapsed - 0.4).abs() < 1e-6);
    }
}

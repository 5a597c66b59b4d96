use std::time::Duration;

use glam::Vec2;
use heartbounce_core::{EngineConfig, Mode, MotionController, SpeedLevel, Viewport};
use heartbounce_platform::{ElementId, Scene};

const FRAME: Duration = Duration::from_millis(16);

fn seeded_config(seed: u64) -> EngineConfig {
    EngineConfig {
        seed: Some(seed),
        ..EngineConfig::default()
    }
}

fn controller(width: f32, height: f32) -> MotionController<Scene> {
    MotionController::new(seeded_config(9), Viewport::new(width, height), Scene::new()).unwrap()
}

/// Runs `frames` ticks starting at `*now`, advancing it by one frame each tick.
fn run(controller: &mut MotionController<Scene>, now: &mut Duration, frames: usize) {
    for _ in 0..frames {
        *now += FRAME;
        controller.tick(*now);
    }
}

#[test]
fn position_stays_in_bounds_for_many_start_states() {
    let viewports = [(1000.0, 800.0), (300.0, 300.0), (640.0, 120.0), (90.0, 90.0)];
    let directions = [
        Vec2::new(1.0, 0.7),
        Vec2::new(-1.0, 0.7),
        Vec2::new(0.3, -1.0),
        Vec2::new(-0.9, -0.9),
    ];
    for (width, height) in viewports {
        for direction in directions {
            for level in SpeedLevel::all() {
                let config = EngineConfig {
                    initial_direction: direction,
                    initial_speed: level.get(),
                    ..seeded_config(u64::from(level.get()))
                };
                let mut controller =
                    MotionController::new(config, Viewport::new(width, height), Scene::new())
                        .unwrap();
                let mut now = Duration::ZERO;
                for _ in 0..600 {
                    now += FRAME;
                    controller.tick(now);
                    let bounds = controller.bounds();
                    assert!(
                        bounds.contains(controller.position()),
                        "{:?} escaped {:?} in {}x{} at {:?}",
                        controller.position(),
                        bounds,
                        width,
                        height,
                        level
                    );
                }
            }
        }
    }
}

#[test]
fn position_stays_in_bounds_from_edges_and_corners() {
    let viewports = [(1000.0, 800.0), (300.0, 300.0), (90.0, 90.0)];
    let targets = [
        Vec2::new(-1e4, -1e4),
        Vec2::new(1e4, -1e4),
        Vec2::new(-1e4, 1e4),
        Vec2::new(1e4, 1e4),
        Vec2::new(-1e4, 0.0),
        Vec2::new(0.0, 1e4),
    ];
    let directions = [
        Vec2::new(1.0, 0.7),
        Vec2::new(-1.0, -0.7),
        Vec2::new(1.0, -0.7),
        Vec2::new(-1.0, 0.7),
    ];
    for (width, height) in viewports {
        for target in targets {
            for direction in directions {
                let config = EngineConfig {
                    initial_direction: direction,
                    initial_speed: 10,
                    ..seeded_config(1)
                };
                let mut controller =
                    MotionController::new(config, Viewport::new(width, height), Scene::new())
                        .unwrap();
                controller.begin_drag(controller.position(), Duration::ZERO);
                controller.update_drag(target);
                controller.end_drag();
                assert!(controller.bounds().contains(controller.position()));

                let mut now = Duration::ZERO;
                for _ in 0..400 {
                    now += FRAME;
                    controller.tick(now);
                    assert!(
                        controller.bounds().contains(controller.position()),
                        "{:?} escaped after starting at {:?} heading {:?}",
                        controller.position(),
                        target,
                        direction
                    );
                }
            }
        }
    }
}

#[test]
fn position_stays_in_bounds_after_shrinking_viewport() {
    let mut controller = controller(1000.0, 800.0);
    let mut now = Duration::ZERO;
    for (width, height) in [(400.0, 300.0), (120.0, 900.0), (60.0, 60.0), (1000.0, 800.0)] {
        controller.on_resize(width, height);
        assert!(controller.bounds().contains(controller.position()));
        for _ in 0..200 {
            now += FRAME;
            controller.tick(now);
            assert!(controller.bounds().contains(controller.position()));
        }
    }
}

#[test]
fn toggling_trail_clears_and_resumes() {
    let mut controller = controller(1000.0, 800.0);
    let mut now = Duration::ZERO;
    run(&mut controller, &mut now, 20);
    assert!(!controller.trail().is_empty());

    assert!(!controller.toggle_trail());
    assert_eq!(controller.trail().len(), 0);
    assert_eq!(controller.surface().particle_count(), 0);
    run(&mut controller, &mut now, 10);
    assert!(controller.trail().is_empty());

    assert!(controller.toggle_trail());
    run(&mut controller, &mut now, 4);
    assert!(controller.trail().len() > 0);
}

#[test]
fn trail_never_exceeds_cap_and_evicts_oldest() {
    let mut controller = controller(1000.0, 800.0);
    controller.set_speed(SpeedLevel::new(10).unwrap());
    let mut now = Duration::ZERO;
    let mut previous_front = None;
    for _ in 0..400 {
        // Ticks 60 ms apart so every frame spawns.
        now += Duration::from_millis(60);
        controller.tick(now);
        let trail = controller.trail();
        assert!(trail.len() <= 30);
        assert_eq!(controller.surface().particle_count(), trail.len());

        let ids: Vec<u64> = trail.particles().map(|p| p.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        if let (Some(before), Some(&front)) = (previous_front, ids.first()) {
            assert!(front >= before, "front went backwards");
        }
        previous_front = ids.first().copied();
    }
    assert_eq!(controller.trail().len(), 30);
}

#[test]
fn reset_is_idempotent() {
    let mut controller = controller(1000.0, 800.0);
    let mut now = Duration::ZERO;
    run(&mut controller, &mut now, 500);
    controller.begin_drag(controller.position(), now);
    controller.update_drag(Vec2::new(100.0, 100.0));
    controller.end_drag();

    for _ in 0..2 {
        controller.reset();
        assert_eq!(controller.position(), Vec2::new(500.0, 400.0));
        assert_eq!(controller.direction(), Vec2::new(1.0, 0.7));
        let heart = controller.surface().element(ElementId::Heart).unwrap();
        assert_eq!(heart.position, Vec2::new(500.0, 400.0));
        assert_eq!(heart.rotation_degrees, -45.0);
    }
}

#[test]
fn drag_clamps_to_minimum_corner() {
    let mut controller = controller(300.0, 300.0);
    assert_eq!(controller.heart_size(), 80.0);
    let start = controller.position();

    controller.begin_drag(start + Vec2::new(20.0, 20.0), Duration::ZERO);
    assert_eq!(controller.mode(), Mode::Dragging);
    assert!(controller.is_pulsing(Duration::from_millis(10)));

    controller.update_drag(Vec2::new(50.0, 50.0));
    assert_eq!(controller.position(), Vec2::new(40.0, 40.0));
}

#[test]
fn dragging_suspends_motion_but_not_particles() {
    let mut controller = controller(1000.0, 800.0);
    let mut now = Duration::ZERO;
    run(&mut controller, &mut now, 5);
    let live = controller.trail().len();
    assert!(live > 0);

    let grab = controller.position();
    controller.begin_drag(grab, now);
    controller.update_drag(Vec2::new(200.0, 200.0));
    let lives: Vec<u32> = controller.trail().particles().map(|p| p.life).collect();
    run(&mut controller, &mut now, 10);
    assert_eq!(controller.position(), Vec2::new(200.0, 200.0));
    let aged: Vec<u32> = controller.trail().particles().map(|p| p.life).collect();
    assert_eq!(aged.len(), lives.len());
    assert!(aged.iter().zip(&lives).all(|(after, before)| after + 10 == *before));

    controller.end_drag();
    assert_eq!(controller.mode(), Mode::Autonomous);
    run(&mut controller, &mut now, 1);
    assert_ne!(controller.position(), Vec2::new(200.0, 200.0));
}

#[test]
fn speed_five_is_medium() {
    let mut controller = controller(1000.0, 800.0);
    controller.set_speed(SpeedLevel::new(5).unwrap());
    assert_eq!(controller.speed().label(), "Medium");
    assert!((controller.speed().magnitude() - 1.5).abs() < f32::EPSILON);
}

#[test]
fn heart_size_scenarios() {
    assert_eq!(controller(1000.0, 800.0).heart_size(), 130.0);
    assert_eq!(controller(300.0, 300.0).heart_size(), 80.0);
}
